use log::{debug, error, info};
use prop_logic::{collect_variables, evaluate, generate_table, operator, Assignment};
use rustyline::{error::ReadlineError, DefaultEditor};

type DynResult = Result<(), Box<dyn std::error::Error>>;

const PROMPT: &str = "Prop Exp? ";

#[derive(Debug, PartialEq)]
enum Command {
    Quit,
    Help,
    Expression(String),
}

impl Command {
    fn from_line(line: &str) -> Self {
        let line = line.trim().to_uppercase();
        match line.as_str() {
            "Q" | "X" | "QUIT" | "EXIT" => Command::Quit,
            "H" | "HELP" => Command::Help,
            _ => Command::Expression(line),
        }
    }
}

fn main() -> DynResult {
    if let Err(e) = dotenvy::dotenv() {
        println!("dotenvy load with error {}", e);
    }
    env_logger::init();

    let args = std::env::args().collect::<Vec<String>>();
    debug!("{:?}", args);

    match args.get(1).map(String::as_str) {
        None | Some("-i") => repl(),
        Some("-e") => match args.get(2) {
            Some(expr) => {
                run_expr(&expr.to_uppercase());
                Ok(())
            }
            None => Err("-e needs an expression".into()),
        },
        Some("-f") => match args.get(2) {
            Some(path) => read_from_file(path),
            None => Err("-f needs a file name".into()),
        },
        Some(mode) => Err(format!(
            "unknown mode `{}`, expected -i, -e <EXPR> or -f <FILE>",
            mode
        )
        .into()),
    }
}

fn repl() -> DynResult {
    info!("Running in REPL mode");

    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                match Command::from_line(&line) {
                    Command::Quit => break,
                    Command::Help => print_help(),
                    Command::Expression(expr) => run_expr(&expr),
                }
            }
            Err(ReadlineError::Eof) => break,
            Err(ReadlineError::Interrupted) => break,
            Err(err) => {
                return Err(Box::new(err));
            }
        }
    }

    Ok(())
}

fn read_from_file(file_path: &str) -> DynResult {
    info!("Read from file {}", file_path);
    let contents = std::fs::read_to_string(file_path)?;
    for line in contents.lines().filter(|l| !l.trim().is_empty()) {
        let expr = line.trim().to_uppercase();
        println!("{}{}", PROMPT, expr);
        run_expr(&expr);
    }
    Ok(())
}

fn print_help() {
    let names: String = operator::names()
        .into_iter()
        .map(|name| format!("{};", name))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", names);
}

fn run_expr(input: &str) {
    if let Err(err) = eval_and_print(input) {
        error!("{}", err);
        if let Some(span) = err.span() {
            println!("   {}", input);
            println!("   {}", span.marker());
        }
        println!("Err: {}", err);
    }
}

fn eval_and_print(input: &str) -> Result<(), prop_logic::Error> {
    let node = prop_logic::parse_str(input)?;

    if collect_variables(&node).is_empty() {
        let result = evaluate(&node, &Assignment::new())?;
        println!("Result: {}", if result { 1 } else { 0 });
    } else {
        print!("{}", generate_table(&node)?);
    }

    Ok(())
}

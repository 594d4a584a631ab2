//! Propositional logic: tokenize, parse and evaluate boolean expressions over
//! single-letter variables, and enumerate their truth tables.
//!
//! ```
//! let table = prop_logic::truth_table("P IMP Q").unwrap();
//! assert_eq!(table.results(), [true, true, false, true]);
//! ```

pub mod ast;
pub mod eval;
pub mod operator;
pub mod parse;
pub mod span;
pub mod token;

use thiserror::Error;

pub use ast::Node;
pub use eval::{
    collect_variables, evaluate, generate_table, Assignment, EvalError, Row, TruthTable,
    MAX_VARIABLES,
};
pub use parse::{parse, tokenize, LexError, LexItem, ParseError, MAX_DEPTH};
pub use token::Token;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("{}: {}", parse_error_kind(.0), .0)]
    Parse(#[from] ParseError),

    #[error("Evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn span(&self) -> Option<span::Span> {
        match self {
            Error::Lex(e) => Some(e.span()),
            Error::Parse(e) => e.span(),
            Error::Eval(_) => None,
        }
    }
}

fn parse_error_kind(e: &ParseError) -> &'static str {
    if e.is_syntax_error() {
        "Syntax error"
    } else {
        "Parse error"
    }
}

/// Parse an uppercase expression into its tree.
pub fn parse_str(input: &str) -> Result<Node, Error> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}

/// Parse an uppercase expression and evaluate it for every assignment.
pub fn truth_table(input: &str) -> Result<TruthTable, Error> {
    let node = parse_str(input)?;
    Ok(generate_table(&node)?)
}

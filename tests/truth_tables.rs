//! End-to-end scenarios through the public API: text in, table out.

use prop_logic::{
    evaluate, generate_table, parse, parse_str, tokenize, truth_table, Assignment, Error,
    EvalError, LexError, ParseError, MAX_VARIABLES,
};

fn results(input: &str) -> Vec<bool> {
    truth_table(input)
        .unwrap_or_else(|e| panic!("`{input}` failed: {e}"))
        .results()
}

#[test]
fn implication_table() {
    assert_eq!(results("P IMP Q"), [true, true, false, true]);
}

#[test]
fn equivalence_table() {
    assert_eq!(results("P IFF Q"), [true, false, false, true]);
}

#[test]
fn mixed_expression_rows() {
    let table = truth_table("P AND (Q OR NOT P)").unwrap();
    assert_eq!(table.variables, ['P', 'Q']);

    let rows: Vec<(bool, bool, bool)> = table
        .rows
        .iter()
        .map(|row| (row.assignment[&'P'], row.assignment[&'Q'], row.result))
        .collect();
    assert_eq!(
        rows,
        [
            (false, false, false),
            (false, true, false),
            (true, false, false),
            (true, true, true),
        ]
    );
}

#[test]
fn not_binds_before_and() {
    let node = parse(&tokenize("NOT P AND Q").unwrap()).unwrap();
    let values: Assignment = [('P', true), ('Q', true)].into_iter().collect();
    assert_eq!(evaluate(&node, &values), Ok(false));
}

#[test]
fn or_groups_left() {
    let node = parse_str("P OR Q OR R").unwrap();
    assert_eq!(node.to_string(), "((P OR Q) OR R)");
    let table = generate_table(&node).unwrap();
    // only the all-false row is false
    assert_eq!(
        table.results(),
        [false, true, true, true, true, true, true, true]
    );
}

#[test]
fn constants_give_a_single_row() {
    let table = truth_table("TRUE XOR FALSE").unwrap();
    assert_eq!(table.rows.len(), 1);
    assert!(table.rows[0].assignment.is_empty());
    assert!(table.rows[0].result);
}

#[test]
fn row_count_matches_variables() {
    for (input, vars) in [("P", 1), ("P IMP Q", 2), ("(A XOR B) IFF (C OR NOT D) AND E", 5)] {
        let table = truth_table(input).unwrap();
        assert_eq!(table.variables.len(), vars, "{input}");
        assert_eq!(table.rows.len(), 1 << vars, "{input}");
    }
}

#[test]
fn printed_form_is_equivalent() {
    for input in [
        "P AND (Q OR NOT P)",
        "P IMP Q IMP R",
        "NOT (P XOR Q) IFF R OR FALSE",
    ] {
        let node = parse_str(input).unwrap();
        let reparsed = parse_str(&node.to_string()).unwrap();
        assert_eq!(
            generate_table(&node).unwrap(),
            generate_table(&reparsed).unwrap(),
            "{input}"
        );
    }
}

#[test]
fn malformed_input_fails() {
    assert!(matches!(
        truth_table("P AND"),
        Err(Error::Parse(ParseError::MissingOperand(..)))
    ));
    assert!(matches!(
        truth_table("(P AND Q"),
        Err(Error::Parse(ParseError::UnmatchedParen(_)))
    ));
    assert!(matches!(
        truth_table("P ANDX Q"),
        Err(Error::Lex(LexError::UnknownKeyword(..)))
    ));

    let err = truth_table("P AND").unwrap_err();
    assert!(matches!(&err, Error::Parse(e) if e.is_syntax_error()));
    assert_eq!(err.to_string(), "Syntax error: Missing operand, found `<end>` at position [5:5]");
}

#[test]
fn rendered_table() {
    let table = truth_table("P IMP Q").unwrap();
    assert_eq!(
        table.to_string(),
        "P | Q | RESULT\n-----------------\n0 | 0 | 1\n0 | 1 | 1\n1 | 0 | 0\n1 | 1 | 1\n"
    );
}

#[test]
fn limits_fail_instead_of_crashing() {
    let nested = format!("{}P{}", "(".repeat(20_000), ")".repeat(20_000));
    assert!(matches!(
        truth_table(&nested),
        Err(Error::Parse(ParseError::TooDeep(_)))
    ));

    let nots = format!("{}P", "NOT ".repeat(200_000));
    assert!(matches!(
        truth_table(&nots),
        Err(Error::Parse(ParseError::TooDeep(_)))
    ));

    let letters: Vec<String> = ('A'..='Z').map(String::from).collect();
    assert!(matches!(
        truth_table(&letters.join(" XOR ")),
        Err(Error::Eval(EvalError::TooManyVariables(26, MAX_VARIABLES)))
    ));
}

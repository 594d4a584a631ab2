use std::collections::BTreeSet;
use std::fmt;

use log::{debug, trace};

use super::error::EvalError;
use super::evaluator::{Assignment, Evaluator};
use crate::ast::Node;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub assignment: Assignment,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    // ascending, the column order
    pub variables: Vec<char>,
    pub rows: Vec<Row>,
}

impl TruthTable {
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|row| row.result).collect()
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.result)
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header: Vec<String> = self.variables.iter().map(char::to_string).collect();
        header.push("RESULT".to_string());
        writeln!(f, "{}", header.join(" | "))?;
        writeln!(f, "{}", "-".repeat(4 * self.variables.len() + 9))?;

        for row in &self.rows {
            let mut cells: Vec<&str> = self
                .variables
                .iter()
                .map(|name| cell(row.assignment.get(name).copied()))
                .collect();
            cells.push(digit(row.result));
            writeln!(f, "{}", cells.join(" | "))?;
        }

        Ok(())
    }
}

// a hand-built row may lack a column; never print a guess for it
fn cell(value: Option<bool>) -> &'static str {
    value.map_or("?", digit)
}

fn digit(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

pub fn collect_variables(node: &Node) -> BTreeSet<char> {
    let mut variables = BTreeSet::new();
    collect_into(node, &mut variables);
    variables
}

fn collect_into(node: &Node, variables: &mut BTreeSet<char>) {
    match node {
        Node::Literal(_) => {}
        Node::Variable(name) => {
            variables.insert(*name);
        }
        Node::UnaryOp(_, operand) => collect_into(operand, variables),
        Node::BinaryOp(_, lhs, rhs) => {
            collect_into(lhs, variables);
            collect_into(rhs, variables);
        }
    }
}

/// Most variables a table is generated for (65536 rows).
pub const MAX_VARIABLES: usize = 16;

/// Evaluate `node` for every assignment of its variables.
///
/// Rows count up in binary from all-false to all-true, with the first
/// variable in alphabetical order as the most significant bit. Expressions
/// over more than [`MAX_VARIABLES`] variables fail with
/// [`EvalError::TooManyVariables`] before any row is built.
pub fn generate_table(node: &Node) -> Result<TruthTable, EvalError> {
    let variables: Vec<char> = collect_variables(node).into_iter().collect();
    let n = variables.len();
    if n > MAX_VARIABLES {
        return Err(EvalError::TooManyVariables(n, MAX_VARIABLES));
    }
    debug!("variables {:?}, {} rows", variables, 1usize << n);

    let mut rows = Vec::with_capacity(1 << n);
    for combination in 0..(1usize << n) {
        let assignment: Assignment = variables
            .iter()
            .enumerate()
            .map(|(i, name)| (*name, (combination >> (n - 1 - i)) & 1 == 1))
            .collect();
        let result = Evaluator::new(&assignment).evaluate(node)?;
        trace!("{:?} => {}", assignment, result);
        rows.push(Row { assignment, result });
    }

    Ok(TruthTable { variables, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse, tokenize};

    fn node(input: &str) -> Node {
        parse(&tokenize(input).unwrap()).unwrap()
    }

    #[test]
    fn collects_each_variable_once() {
        let vars = collect_variables(&node("R AND (P OR NOT R) IMP Q XOR P"));
        assert_eq!(vars.into_iter().collect::<Vec<_>>(), ['P', 'Q', 'R']);
        assert!(collect_variables(&node("TRUE AND NOT FALSE")).is_empty());
    }

    #[test]
    fn row_count_is_power_of_two() {
        for (input, rows) in [
            ("TRUE", 1),
            ("P", 2),
            ("P AND P", 2),
            ("P OR Q", 4),
            ("A AND B AND C AND D", 16),
        ] {
            assert_eq!(generate_table(&node(input)).unwrap().rows.len(), rows, "{input}");
        }
    }

    #[test]
    fn canonical_row_order() {
        let table = generate_table(&node("Q OR P")).unwrap();
        assert_eq!(table.variables, ['P', 'Q']);
        let order: Vec<(bool, bool)> = table
            .rows
            .iter()
            .map(|row| (row.assignment[&'P'], row.assignment[&'Q']))
            .collect();
        assert_eq!(
            order,
            [(false, false), (false, true), (true, false), (true, true)]
        );
    }

    #[test]
    fn constant_expression_has_one_empty_row() {
        let table = generate_table(&node("TRUE IMP FALSE")).unwrap();
        assert!(table.variables.is_empty());
        assert_eq!(
            table.rows,
            [Row {
                assignment: Assignment::new(),
                result: false
            }]
        );
    }

    #[test]
    fn classification() {
        let tautology = generate_table(&node("P OR NOT P")).unwrap();
        assert!(tautology.is_tautology() && tautology.is_satisfiable());
        let contradiction = generate_table(&node("P AND NOT P")).unwrap();
        assert!(contradiction.is_contradiction() && !contradiction.is_tautology());
        let contingent = generate_table(&node("P XOR Q")).unwrap();
        assert!(!contingent.is_tautology() && contingent.is_satisfiable());
    }

    #[test]
    fn too_many_variables() {
        let letters = |last: char| -> Vec<String> { ('A'..=last).map(String::from).collect() };

        let wide = node(&letters('Q').join(" AND "));
        assert_eq!(
            generate_table(&wide),
            Err(EvalError::TooManyVariables(17, MAX_VARIABLES))
        );

        let widest = node(&letters('P').join(" OR "));
        let table = generate_table(&widest).unwrap();
        assert_eq!(table.rows.len(), 1 << MAX_VARIABLES);
        assert_eq!(table.results().iter().filter(|r| !**r).count(), 1);
    }

    #[test]
    fn missing_cell_is_not_printed_as_false() {
        let table = TruthTable {
            variables: vec!['P', 'Q'],
            rows: vec![Row {
                assignment: [('P', true)].into_iter().collect(),
                result: true,
            }],
        };
        assert_eq!(table.to_string(), "P | Q | RESULT\n-----------------\n1 | ? | 1\n");
    }

    #[test]
    fn renders_as_text() {
        let table = generate_table(&node("P AND (Q OR NOT P)")).unwrap();
        let expected = "\
P | Q | RESULT
-----------------
0 | 0 | 0
0 | 1 | 0
1 | 0 | 0
1 | 1 | 1
";
        assert_eq!(table.to_string(), expected);

        let constant = generate_table(&node("TRUE")).unwrap();
        assert_eq!(constant.to_string(), "RESULT\n---------\n1\n");
    }
}

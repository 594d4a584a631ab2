use std::fmt;

use crate::token::literal_keyword;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(bool),
    Variable(char),
    UnaryOp(&'static str, Box<Node>),
    BinaryOp(&'static str, Box<Node>, Box<Node>),
}

impl Node {
    pub fn unary(op: &'static str, operand: Node) -> Self {
        Node::UnaryOp(op, Box::new(operand))
    }

    pub fn binary(op: &'static str, lhs: Node, rhs: Node) -> Self {
        Node::BinaryOp(op, Box::new(lhs), Box::new(rhs))
    }
}

// Fully parenthesized infix; parses back to an equivalent tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(value) => f.write_str(literal_keyword(*value)),
            Node::Variable(name) => write!(f, "{}", name),
            Node::UnaryOp(op, operand) => write!(f, "({} {})", op, operand),
            Node::BinaryOp(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op, rhs),
        }
    }
}

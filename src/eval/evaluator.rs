use std::collections::BTreeMap;

use super::error::EvalError;
use crate::ast::Node;
use crate::operator::{self, OperatorSpec};

pub type Assignment = BTreeMap<char, bool>;

/// Tree-walking evaluator over a fixed assignment.
///
/// Both operands of a binary operator are always evaluated, so an unbound
/// variable is reported even where the other side would decide the result.
pub struct Evaluator<'a> {
    assignment: &'a Assignment,
}

impl<'a> Evaluator<'a> {
    pub fn new(assignment: &'a Assignment) -> Self {
        Self { assignment }
    }

    pub fn evaluate(&self, node: &Node) -> Result<bool, EvalError> {
        match node {
            Node::Literal(value) => Ok(*value),
            Node::Variable(name) => self.evaluate_variable(*name),
            Node::UnaryOp(op, operand) => {
                let value = self.evaluate(operand)?;
                lookup(op)?
                    .apply_unary(value)
                    .ok_or_else(|| EvalError::ArityMismatch(op.to_string(), 1))
            }
            Node::BinaryOp(op, lhs, rhs) => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                lookup(op)?
                    .apply_binary(lhs, rhs)
                    .ok_or_else(|| EvalError::ArityMismatch(op.to_string(), 2))
            }
        }
    }

    fn evaluate_variable(&self, name: char) -> Result<bool, EvalError> {
        match self.assignment.get(&name) {
            Some(value) => Ok(*value),
            None => Err(EvalError::UnboundVariable(name)),
        }
    }
}

pub fn evaluate(node: &Node, assignment: &Assignment) -> Result<bool, EvalError> {
    Evaluator::new(assignment).evaluate(node)
}

fn lookup(name: &str) -> Result<&'static OperatorSpec, EvalError> {
    operator::lookup(name).ok_or_else(|| EvalError::UndefinedOperator(name.to_string()))
}

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Variable `{0}` has no value in the assignment")]
    UnboundVariable(char),

    #[error("Operator `{0}` is not defined")]
    UndefinedOperator(String),

    #[error("Operator `{0}` does not take {1} operand(s)")]
    ArityMismatch(String, usize),

    #[error("Expression has {0} variables, truth tables are limited to {1}")]
    TooManyVariables(usize, usize),
}

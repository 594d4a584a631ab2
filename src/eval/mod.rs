mod error;
mod evaluator;
mod table;

pub use error::EvalError;
pub use evaluator::{evaluate, Assignment, Evaluator};
pub use table::{collect_variables, generate_table, Row, TruthTable, MAX_VARIABLES};

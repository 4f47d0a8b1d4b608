mod environment;
mod eval_error;
mod evaluator;
mod parser;
mod scanner;
mod value;

pub use crate::evaluator::*;
pub use environment::*;
pub use eval_error::*;
pub use parser::*;
pub use scanner::*;
pub use value::*;

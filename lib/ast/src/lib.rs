mod binop;
mod block;
mod directive;
mod expression;
mod grouping;
mod identifier;
mod literal;
mod logic;
mod unaryop;
mod var_ref;

pub use binop::*;
pub use block::*;
pub use directive::*;
pub use expression::*;
pub use grouping::*;
pub use identifier::*;
pub use literal::*;
pub use logic::*;
pub use unaryop::*;
pub use var_ref::*;

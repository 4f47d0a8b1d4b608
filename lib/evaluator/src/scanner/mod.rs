mod scanner;
mod token;
mod token_type;

pub use scanner::*;
pub use token::*;
pub use token_type::*;

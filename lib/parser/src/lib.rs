mod parser;
mod parser_error;
mod scanner;

pub use crate::parser::*;
pub use parser_error::*;
pub use scanner::*;

use ast::{BlockTree, DirectiveLine};

/**
 * Scans the source for conditional directive lines and builds the block tree.
 * Lines that are not directives never reach the parser; they stay untouched
 * in the source and are only addressed by byte spans.
 */
pub fn parse(source: &str) -> Result<BlockTree, ParseError> {
    build(scan(source))
}

/**
 * Builds the block tree from already scanned directive lines.
 */
pub fn build(lines: Vec<DirectiveLine>) -> Result<BlockTree, ParseError> {
    Parser::new().parse(lines)
}

mod merge;
mod span;

pub use merge::*;
pub use span::*;

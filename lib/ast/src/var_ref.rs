use crate::Identifier;

/// Reference to a caller supplied variable.
#[derive(Debug, PartialEq, Clone)]
pub struct VarRef {
    pub name: Identifier,
}

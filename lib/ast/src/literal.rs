/// Literal values of the condition language. Numbers are one double
/// precision type, NaN and infinities included.
#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Number(f64),
    String(String),
    Bool(bool),
    Null,
    Undefined,
}

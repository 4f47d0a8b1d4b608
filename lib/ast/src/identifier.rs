#[derive(Debug, PartialEq, Clone)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: String) -> Identifier {
        Identifier(name)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

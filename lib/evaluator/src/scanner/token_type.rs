#[derive(Debug, PartialEq, Clone)]
pub enum TokenType {
    Identifier,
    NumberConst,
    StringConst,

    // keywords
    True,
    False,
    Null,
    Undefined,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    And,
    Or,
    Bang,

    EqualEqual,
    EqualEqualEqual,
    NotEqual,
    NotEqualEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,

    LeftParen,
    RightParen,

    Illegal,
    EOF,
    BadToken,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Identifier => write!(f, "IDENTIFIER"),
            TokenType::NumberConst => write!(f, "NUMBERCONST"),
            TokenType::StringConst => write!(f, "STRINGCONST"),
            TokenType::True => write!(f, "TRUE"),
            TokenType::False => write!(f, "FALSE"),
            TokenType::Null => write!(f, "NULL"),
            TokenType::Undefined => write!(f, "UNDEFINED"),
            TokenType::Plus => write!(f, "+"),
            TokenType::Minus => write!(f, "-"),
            TokenType::Star => write!(f, "*"),
            TokenType::Slash => write!(f, "/"),
            TokenType::Percent => write!(f, "%"),
            TokenType::And => write!(f, "&&"),
            TokenType::Or => write!(f, "||"),
            TokenType::Bang => write!(f, "!"),
            TokenType::EqualEqual => write!(f, "=="),
            TokenType::EqualEqualEqual => write!(f, "==="),
            TokenType::NotEqual => write!(f, "!="),
            TokenType::NotEqualEqual => write!(f, "!=="),
            TokenType::LessThan => write!(f, "<"),
            TokenType::LessThanEqual => write!(f, "<="),
            TokenType::GreaterThan => write!(f, ">"),
            TokenType::GreaterThanEqual => write!(f, ">="),
            TokenType::LeftParen => write!(f, "("),
            TokenType::RightParen => write!(f, ")"),
            TokenType::Illegal => write!(f, "ILLEGAL"),
            TokenType::EOF => write!(f, "EOF"),
            TokenType::BadToken => write!(f, "BADTOKEN"),
        }
    }
}

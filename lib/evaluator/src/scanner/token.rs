use super::TokenType;
use span_util::Span;
use std::ops::Range;

macro_rules! impl_token {
    ($_meth:ident, $tok:ident) => {
        pub fn $_meth(label: Range<usize>) -> Token {
            Token {
                token_type: TokenType::$tok,
                value: TokenType::$tok.to_string(),
                span: label.clone().into(),
            }
        }
    };
}

macro_rules! impl_value_token {
    ($_meth:ident, $tok:ident) => {
        pub fn $_meth(value: String, label: Range<usize>) -> Token {
            Token {
                token_type: TokenType::$tok,
                value,
                span: label.clone().into(),
            }
        }
    };
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub value: String,
    pub span: Span,
}

impl Token {
    impl_value_token!(identifier, Identifier);
    impl_value_token!(number_const, NumberConst);
    impl_value_token!(string_const, StringConst);

    impl_value_token!(illegal, Illegal);
    impl_value_token!(bad_token, BadToken);

    impl_token!(true_token, True);
    impl_token!(false_token, False);
    impl_token!(null, Null);
    impl_token!(undefined, Undefined);

    impl_token!(and, And);
    impl_token!(or, Or);
    impl_token!(less_than, LessThan);
    impl_token!(less_than_equal, LessThanEqual);
    impl_token!(greater_than, GreaterThan);
    impl_token!(greater_than_equal, GreaterThanEqual);
    impl_token!(equal_equal, EqualEqual);
    impl_token!(equal_equal_equal, EqualEqualEqual);
    impl_token!(not_equal, NotEqual);
    impl_token!(not_equal_equal, NotEqualEqual);

    impl_token!(plus, Plus);
    impl_token!(minus, Minus);
    impl_token!(star, Star);
    impl_token!(slash, Slash);
    impl_token!(percent, Percent);

    impl_token!(left_paren, LeftParen);
    impl_token!(right_paren, RightParen);
    impl_token!(bang, Bang);
    impl_token!(eof, EOF);

    pub fn is_eof(&self) -> bool {
        self.token_type == TokenType::EOF
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

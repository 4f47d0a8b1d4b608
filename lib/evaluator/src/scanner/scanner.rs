use super::{Token, TokenType};

#[derive(Debug)]
pub struct Scanner {
    source: Vec<char>,
    pos: usize,
    ch: char,
}

impl Scanner {
    pub fn new(source: String) -> Scanner {
        let mut scanner = Scanner {
            source: source.chars().collect(),
            pos: 0,
            ch: '\0',
        };

        scanner.ch = scanner.source.get(0).unwrap_or(&scanner.ch).to_owned();
        scanner
    }

    fn advance(&mut self) {
        self.pos += 1;
        if self.is_end() {
            self.ch = '\0';
            return;
        }

        self.ch = self.source[self.pos];
    }

    fn is_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn is_digit(&self, ch: char) -> bool {
        "0123456789".contains(ch)
    }

    fn is_alpha(&self, ch: char) -> bool {
        ch == '_' || ch == '$' || ('a'..='z').contains(&ch) || ('A'..='Z').contains(&ch)
    }

    fn is_alphanumeric(&self, ch: char) -> bool {
        self.is_digit(ch) || self.is_alpha(ch)
    }

    fn is_whitespace(&self, ch: char) -> bool {
        ch == ' ' || ch == '\t' || ch == '\r' || ch == '\n'
    }

    fn peek(&self) -> char {
        let pos = self.pos + 1;
        if pos >= self.source.len() {
            return '\0';
        }
        self.source[pos]
    }

    fn skip_whitespace(&mut self) {
        while !self.is_end() && self.is_whitespace(self.ch) {
            self.advance();
        }
    }

    fn read_digit(&mut self) -> Token {
        let mut res = vec![];
        let pos = self.pos;
        while !self.is_end() && self.is_digit(self.ch) {
            res.push(self.ch);
            self.advance();
        }

        if self.ch == '.' {
            res.push(self.ch);
            self.advance();

            while !self.is_end() && self.is_digit(self.ch) {
                res.push(self.ch);
                self.advance();
            }
            if let Some(last) = res.last() {
                if *last == '.' {
                    res.push('0')
                }
            }
        }

        Token::number_const(res.into_iter().collect(), pos..self.pos)
    }

    fn read_identifier(&mut self) -> Token {
        let mut res = vec![];
        let pos = self.pos;
        while !self.is_end() && self.is_alphanumeric(self.ch) {
            res.push(self.ch);
            self.advance();
        }

        let value: String = res.into_iter().collect();
        let label = pos..self.pos;

        match value.as_str() {
            "true" => Token::true_token(label),
            "false" => Token::false_token(label),
            "null" => Token::null(label),
            "undefined" => Token::undefined(label),
            _ => Token::identifier(value, label),
        }
    }

    fn read_string(&mut self, quote: char) -> Token {
        let pos = self.pos;
        self.advance();

        let mut res = vec![];
        while !self.is_end() && self.ch != quote {
            if self.ch == '\\' {
                self.advance();
                if self.is_end() {
                    break;
                }
                res.push(self.normalize_escape(self.ch));
            } else {
                res.push(self.ch);
            }
            self.advance();
        }

        let value: String = res.into_iter().collect();
        if self.is_end() {
            return Token::bad_token(value, pos..self.pos);
        }

        self.advance();
        Token::string_const(value, pos..self.pos)
    }

    fn normalize_escape(&self, ch: char) -> char {
        match ch {
            '\\' => '\\',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            _ => self.ch,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let curr_ch = self.ch;
        let pos = self.pos;

        let token = match curr_ch {
            '+' => Token::plus(pos..self.pos),
            '-' => Token::minus(pos..self.pos),
            '*' => Token::star(pos..self.pos),
            '/' => Token::slash(pos..self.pos),
            '%' => Token::percent(pos..self.pos),
            '&' => {
                if self.peek() == '&' {
                    self.advance();
                    self.advance();
                    return Token::and(pos..self.pos);
                }
                Token::illegal(curr_ch.to_string(), pos..self.pos)
            }
            '|' => {
                if self.peek() == '|' {
                    self.advance();
                    self.advance();
                    return Token::or(pos..self.pos);
                }
                Token::illegal(curr_ch.to_string(), pos..self.pos)
            }
            '>' => {
                if self.peek() == '=' {
                    self.advance();
                    self.advance();
                    return Token::greater_than_equal(pos..self.pos);
                }
                Token::greater_than(pos..self.pos)
            }
            '<' => {
                if self.peek() == '=' {
                    self.advance();
                    self.advance();
                    return Token::less_than_equal(pos..self.pos);
                }
                Token::less_than(pos..self.pos)
            }
            '=' => {
                if self.peek() == '=' {
                    self.advance();
                    self.advance();
                    if self.ch == '=' {
                        self.advance();
                        return Token::equal_equal_equal(pos..self.pos);
                    }
                    return Token::equal_equal(pos..self.pos);
                }
                // plain assignment is not part of the condition language
                Token::illegal(curr_ch.to_string(), pos..self.pos)
            }
            '!' => {
                if self.peek() == '=' {
                    self.advance();
                    self.advance();
                    if self.ch == '=' {
                        self.advance();
                        return Token::not_equal_equal(pos..self.pos);
                    }
                    return Token::not_equal(pos..self.pos);
                }
                Token::bang(pos..self.pos)
            }
            '(' => Token::left_paren(pos..self.pos),
            ')' => Token::right_paren(pos..self.pos),
            '\'' | '"' => return self.read_string(curr_ch),
            '\0' => Token::eof(pos..self.pos),
            _ => {
                let token = if self.is_digit(curr_ch) {
                    self.read_digit()
                } else if self.is_alpha(curr_ch) {
                    self.read_identifier()
                } else {
                    Token::illegal(curr_ch.to_string(), pos..self.pos)
                };

                match token.token_type {
                    TokenType::Illegal => token,
                    _ => {
                        return token;
                    }
                }
            }
        };

        self.advance();
        token
    }
}

#[cfg(test)]
mod test {
    use crate::scanner::TokenType;

    use super::Scanner;

    fn test_scan(src: &str, expected: Vec<(TokenType, Option<&str>)>) {
        let mut scanner = Scanner::new(src.to_string());

        expected.into_iter().for_each(|e| {
            let token_type = e.0;
            let value = e.1;
            let token = scanner.next_token();

            assert_eq!(token.token_type, token_type);
            if let Some(val) = value {
                assert_eq!(token.value, val.to_string());
            }
        });
    }

    #[test]
    fn scan_empty() {
        test_scan("", vec![(TokenType::EOF, None)]);
        test_scan("   \t ", vec![(TokenType::EOF, None)]);
    }

    #[test]
    fn scan_numbers() {
        test_scan(
            "123 23 34.2 2. 0.5 1234567890",
            vec![
                (TokenType::NumberConst, Some("123")),
                (TokenType::NumberConst, Some("23")),
                (TokenType::NumberConst, Some("34.2")),
                (TokenType::NumberConst, Some("2.0")),
                (TokenType::NumberConst, Some("0.5")),
                (TokenType::NumberConst, Some("1234567890")),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_strings() {
        test_scan(
            r#"'hello' "world" '' "it's""#,
            vec![
                (TokenType::StringConst, Some("hello")),
                (TokenType::StringConst, Some("world")),
                (TokenType::StringConst, Some("")),
                (TokenType::StringConst, Some("it's")),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_string_escapes() {
        test_scan(
            r#"'a\nb' 'a\tb' 'a\\b' 'don\'t'"#,
            vec![
                (TokenType::StringConst, Some("a\nb")),
                (TokenType::StringConst, Some("a\tb")),
                (TokenType::StringConst, Some("a\\b")),
                (TokenType::StringConst, Some("don't")),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_unterminated_string() {
        test_scan(
            "'open",
            vec![(TokenType::BadToken, Some("open")), (TokenType::EOF, None)],
        );
    }

    #[test]
    fn scan_keywords() {
        test_scan(
            "true false null undefined",
            vec![
                (TokenType::True, None),
                (TokenType::False, None),
                (TokenType::Null, None),
                (TokenType::Undefined, None),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_identifiers() {
        test_scan(
            "VERSION test2 _test $flag trueish",
            vec![
                (TokenType::Identifier, Some("VERSION")),
                (TokenType::Identifier, Some("test2")),
                (TokenType::Identifier, Some("_test")),
                (TokenType::Identifier, Some("$flag")),
                (TokenType::Identifier, Some("trueish")),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_arithmetic_tokens() {
        test_scan(
            "+-*/%",
            vec![
                (TokenType::Plus, None),
                (TokenType::Minus, None),
                (TokenType::Star, None),
                (TokenType::Slash, None),
                (TokenType::Percent, None),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_logic_tokens() {
        test_scan(
            "&& || < <= > >= == != === !== !",
            vec![
                (TokenType::And, None),
                (TokenType::Or, None),
                (TokenType::LessThan, None),
                (TokenType::LessThanEqual, None),
                (TokenType::GreaterThan, None),
                (TokenType::GreaterThanEqual, None),
                (TokenType::EqualEqual, None),
                (TokenType::NotEqual, None),
                (TokenType::EqualEqualEqual, None),
                (TokenType::NotEqualEqual, None),
                (TokenType::Bang, None),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_parens() {
        test_scan(
            "(1)",
            vec![
                (TokenType::LeftParen, None),
                (TokenType::NumberConst, Some("1")),
                (TokenType::RightParen, None),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_illegal_tokens() {
        test_scan(
            "= @ & |",
            vec![
                (TokenType::Illegal, Some("=")),
                (TokenType::Illegal, Some("@")),
                (TokenType::Illegal, Some("&")),
                (TokenType::Illegal, Some("|")),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_triple_equals_needs_all_three() {
        test_scan(
            "a == b === c",
            vec![
                (TokenType::Identifier, Some("a")),
                (TokenType::EqualEqual, None),
                (TokenType::Identifier, Some("b")),
                (TokenType::EqualEqualEqual, None),
                (TokenType::Identifier, Some("c")),
                (TokenType::EOF, None),
            ],
        );
    }

    #[test]
    fn scan_label() {
        let src = "VERSION >= 12.5";
        let mut scanner = Scanner::new(src.to_string());
        let ident = scanner.next_token();
        let op = scanner.next_token();
        let num = scanner.next_token();

        assert_eq!(ident.span.to_range(), 0..7);
        assert_eq!(op.span.to_range(), 8..10);
        assert_eq!(num.span.to_range(), 11..15);
    }
}

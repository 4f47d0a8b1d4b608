use crate::{
    scanner::{Scanner, Token, TokenType},
    EvalError,
};
use ast::{BinaryOperation, Expression, Identifier, Literal, LogicOperation, UnaryOperation};

/// Recursive descent parser for condition expressions.
///
/// The grammar is a single expression; anything left over after it is a
/// syntax error, there are no statements in the condition language.
#[derive(Debug)]
pub struct Parser {
    scanner: Scanner,
    prev_token: Token,
    curr_token: Token,
}

impl Parser {
    pub fn new(mut scanner: Scanner) -> Parser {
        let curr_token = scanner.next_token();
        Parser {
            scanner,
            prev_token: Token::eof(0..0),
            curr_token,
        }
    }

    pub fn parse(&mut self) -> Result<Expression, EvalError> {
        let expr = self.expression()?;
        self.eat(TokenType::EOF, "Expected end of condition")?;
        Ok(expr)
    }

    fn matches(&mut self, types: Vec<TokenType>) -> bool {
        for token_type in types.iter() {
            if *token_type == self.curr_token.token_type {
                self.advance();
                return true;
            }
        }
        false
    }

    fn advance(&mut self) -> Token {
        self.prev_token = self.curr_token.clone();
        self.curr_token = self.scanner.next_token();

        self.prev_token.clone()
    }

    fn eat(&mut self, token_type: TokenType, msg: &str) -> Result<Token, EvalError> {
        if self.curr_token.token_type == token_type {
            return Ok(self.advance());
        }

        let tok = match self.curr_token.is_eof() {
            true => self.prev_token.clone(),
            false => self.curr_token.clone(),
        };

        Err(EvalError::ExpectedToken(msg.to_string(), tok))
    }

    fn expression(&mut self) -> Result<Expression, EvalError> {
        self.or()
    }

    fn or(&mut self) -> Result<Expression, EvalError> {
        let mut expr = self.and()?;
        while self.matches(vec![TokenType::Or]) {
            let rhs = self.and()?;
            expr = Expression::create_logic(expr, LogicOperation::Or, rhs);
        }

        Ok(expr)
    }

    fn and(&mut self) -> Result<Expression, EvalError> {
        let mut expr = self.equality()?;
        while self.matches(vec![TokenType::And]) {
            let rhs = self.equality()?;
            expr = Expression::create_logic(expr, LogicOperation::And, rhs);
        }

        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expression, EvalError> {
        let mut expr = self.comparison()?;
        while self.matches(vec![
            TokenType::EqualEqual,
            TokenType::NotEqual,
            TokenType::EqualEqualEqual,
            TokenType::NotEqualEqual,
        ]) {
            let tok = self.prev_token.clone();
            let rhs = self.comparison()?;
            let op = match tok.token_type {
                TokenType::EqualEqual => LogicOperation::Equal,
                TokenType::NotEqual => LogicOperation::NotEqual,
                TokenType::EqualEqualEqual => LogicOperation::StrictEqual,
                _ => LogicOperation::StrictNotEqual,
            };
            expr = Expression::create_logic(expr, op, rhs);
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expression, EvalError> {
        let mut expr = self.term()?;
        while self.matches(vec![
            TokenType::LessThan,
            TokenType::LessThanEqual,
            TokenType::GreaterThan,
            TokenType::GreaterThanEqual,
        ]) {
            let tok = self.prev_token.clone();
            let rhs = self.term()?;
            let op = match tok.token_type {
                TokenType::LessThan => LogicOperation::LessThan,
                TokenType::LessThanEqual => LogicOperation::LessThanEqual,
                TokenType::GreaterThan => LogicOperation::GreaterThan,
                _ => LogicOperation::GreaterThanEqual,
            };
            expr = Expression::create_logic(expr, op, rhs);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expression, EvalError> {
        let mut res = self.factor()?;

        while self.matches(vec![TokenType::Plus, TokenType::Minus]) {
            let tok = self.prev_token.clone();
            let rhs = self.factor()?;
            let op = match tok.token_type {
                TokenType::Plus => BinaryOperation::Add,
                _ => BinaryOperation::Subtract,
            };
            res = Expression::create_binop(res, op, rhs)
        }

        Ok(res)
    }

    fn factor(&mut self) -> Result<Expression, EvalError> {
        let mut res = self.unary()?;
        while self.matches(vec![TokenType::Star, TokenType::Slash, TokenType::Percent]) {
            let tok = self.prev_token.clone();
            let rhs = self.unary()?;
            let op = match tok.token_type {
                TokenType::Star => BinaryOperation::Multiply,
                TokenType::Slash => BinaryOperation::Divide,
                _ => BinaryOperation::Modulo,
            };
            res = Expression::create_binop(res, op, rhs)
        }
        Ok(res)
    }

    fn unary(&mut self) -> Result<Expression, EvalError> {
        if self.matches(vec![TokenType::Plus, TokenType::Minus, TokenType::Bang]) {
            let tok = self.prev_token.clone();
            let rhs = self.unary()?;
            let op = match tok.token_type {
                TokenType::Plus => UnaryOperation::Plus,
                TokenType::Minus => UnaryOperation::Minus,
                _ => UnaryOperation::Not,
            };
            return Ok(Expression::create_unaryop(op, rhs));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expression, EvalError> {
        let token = self.curr_token.clone();
        match token.token_type {
            TokenType::NumberConst => {
                self.advance();
                let num = match token.value.parse::<f64>() {
                    Ok(num) => num,
                    Err(_) => return Err(EvalError::UnexpectedToken(token)),
                };
                Ok(Expression::create_literal(Literal::Number(num)))
            }
            TokenType::StringConst => {
                self.advance();
                Ok(Expression::create_literal(Literal::String(token.value)))
            }
            TokenType::True => {
                self.advance();
                Ok(Expression::create_literal(Literal::Bool(true)))
            }
            TokenType::False => {
                self.advance();
                Ok(Expression::create_literal(Literal::Bool(false)))
            }
            TokenType::Null => {
                self.advance();
                Ok(Expression::create_literal(Literal::Null))
            }
            TokenType::Undefined => {
                self.advance();
                Ok(Expression::create_literal(Literal::Undefined))
            }
            TokenType::Identifier => {
                self.advance();
                Ok(Expression::create_var_ref(Identifier::new(token.value)))
            }
            TokenType::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.eat(TokenType::RightParen, "Expected ')' after expression")?;
                Ok(Expression::create_grouping(expr))
            }
            TokenType::BadToken => Err(EvalError::UnterminatedString(token)),
            TokenType::EOF => Err(EvalError::ExpectedExpression(token)),
            _ => Err(EvalError::UnexpectedToken(token)),
        }
    }
}

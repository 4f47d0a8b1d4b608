use std::{collections::HashMap, rc::Rc};

use crate::{environment::Environment, parser::Parser, scanner::Scanner, EvalError, Value};
use ast::{
    BinOp, BinaryOperation, Expression, Literal, Logic, LogicOperation, UnaryOp, UnaryOperation,
    VarRef,
};

pub type EvalResult = Result<Value, EvalError>;

/// Compiles and evaluates condition expressions against an environment.
///
/// Compiled expressions are cached per evaluator instance, keyed by the
/// exact condition text. Repeated conditions across a file parse once.
#[derive(Debug)]
pub struct Evaluator {
    cache: HashMap<String, Rc<Expression>>,
    use_cache: bool,
}

impl Evaluator {
    pub fn new() -> Evaluator {
        Evaluator::with_cache(true)
    }

    pub fn with_cache(use_cache: bool) -> Evaluator {
        Evaluator {
            cache: HashMap::new(),
            use_cache,
        }
    }

    pub fn evaluate(&mut self, condition: &str, env: &Environment) -> Result<bool, EvalError> {
        let expr = self.compile(condition)?;
        Ok(self.expression(&expr, env)?.is_truthy())
    }

    fn compile(&mut self, condition: &str) -> Result<Rc<Expression>, EvalError> {
        if self.use_cache {
            if let Some(expr) = self.cache.get(condition) {
                return Ok(Rc::clone(expr));
            }
        }

        let scanner = Scanner::new(condition.to_string());
        let mut parser = Parser::new(scanner);
        let expr = Rc::new(parser.parse()?);

        if self.use_cache {
            self.cache.insert(condition.to_string(), Rc::clone(&expr));
        }
        Ok(expr)
    }

    fn expression(&self, expression: &Expression, env: &Environment) -> EvalResult {
        match expression {
            Expression::BinOp(expr) => self.eval_binop(expr, env),
            Expression::Logic(expr) => self.eval_logic(expr, env),
            Expression::UnaryOp(expr) => self.eval_unaryop(expr, env),
            Expression::Grouping(expr) => self.expression(&expr.expr, env),
            Expression::Literal(expr) => Ok(self.eval_literal(expr)),
            Expression::VarRef(expr) => self.eval_var_ref(expr, env),
        }
    }

    fn eval_literal(&self, literal: &Literal) -> Value {
        match literal {
            Literal::Number(n) => Value::Number(*n),
            Literal::String(s) => Value::String(s.clone()),
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Null => Value::Null,
            Literal::Undefined => Value::Undefined,
        }
    }

    fn eval_var_ref(&self, var_ref: &VarRef, env: &Environment) -> EvalResult {
        match env.get(var_ref.name.value()) {
            Some(value) => Ok(value),
            None => Err(EvalError::UndefinedVariable(
                var_ref.name.value().to_string(),
            )),
        }
    }

    fn eval_binop(&self, binop: &BinOp, env: &Environment) -> EvalResult {
        let left = self.expression(&binop.left, env)?;
        let right = self.expression(&binop.right, env)?;

        let res = match binop.op {
            // a string on either side turns + into concatenation
            BinaryOperation::Add => match (&left, &right) {
                (Value::String(_), _) | (_, Value::String(_)) => {
                    Value::String(format!("{}{}", left, right))
                }
                _ => Value::Number(left.to_number() + right.to_number()),
            },
            BinaryOperation::Subtract => Value::Number(left.to_number() - right.to_number()),
            BinaryOperation::Multiply => Value::Number(left.to_number() * right.to_number()),
            BinaryOperation::Divide => Value::Number(left.to_number() / right.to_number()),
            BinaryOperation::Modulo => Value::Number(left.to_number() % right.to_number()),
        };

        Ok(res)
    }

    fn eval_logic(&self, logic: &Logic, env: &Environment) -> EvalResult {
        // && and || return the deciding operand, not a bool
        match logic.op {
            LogicOperation::And => {
                let lhs = self.expression(&logic.lhs, env)?;
                return if lhs.is_truthy() {
                    self.expression(&logic.rhs, env)
                } else {
                    Ok(lhs)
                };
            }
            LogicOperation::Or => {
                let lhs = self.expression(&logic.lhs, env)?;
                return if lhs.is_truthy() {
                    Ok(lhs)
                } else {
                    self.expression(&logic.rhs, env)
                };
            }
            _ => {}
        }

        let lhs = self.expression(&logic.lhs, env)?;
        let rhs = self.expression(&logic.rhs, env)?;

        let res = match (&lhs, &logic.op, &rhs) {
            (_, LogicOperation::Equal, _) => loose_equals(&lhs, &rhs),
            (_, LogicOperation::NotEqual, _) => !loose_equals(&lhs, &rhs),
            (_, LogicOperation::StrictEqual, _) => strict_equals(&lhs, &rhs),
            (_, LogicOperation::StrictNotEqual, _) => !strict_equals(&lhs, &rhs),

            // two strings compare lexicographically, anything else numerically
            (Value::String(s1), LogicOperation::LessThan, Value::String(s2)) => s1 < s2,
            (Value::String(s1), LogicOperation::LessThanEqual, Value::String(s2)) => s1 <= s2,
            (Value::String(s1), LogicOperation::GreaterThan, Value::String(s2)) => s1 > s2,
            (Value::String(s1), LogicOperation::GreaterThanEqual, Value::String(s2)) => s1 >= s2,

            (_, LogicOperation::LessThan, _) => lhs.to_number() < rhs.to_number(),
            (_, LogicOperation::LessThanEqual, _) => lhs.to_number() <= rhs.to_number(),
            (_, LogicOperation::GreaterThan, _) => lhs.to_number() > rhs.to_number(),
            (_, LogicOperation::GreaterThanEqual, _) => lhs.to_number() >= rhs.to_number(),

            (_, LogicOperation::And, _) | (_, LogicOperation::Or, _) => unreachable!(),
        };

        Ok(Value::Bool(res))
    }

    fn eval_unaryop(&self, unaryop: &UnaryOp, env: &Environment) -> EvalResult {
        let rhs = self.expression(&unaryop.rhs, env)?;

        let res = match unaryop.op {
            UnaryOperation::Plus => Value::Number(rhs.to_number()),
            UnaryOperation::Minus => Value::Number(-rhs.to_number()),
            UnaryOperation::Not => Value::Bool(!rhs.is_truthy()),
        };

        Ok(res)
    }
}

fn loose_equals(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Null, Value::Null)
        | (Value::Undefined, Value::Undefined)
        | (Value::Null, Value::Undefined)
        | (Value::Undefined, Value::Null) => true,
        (Value::Number(n1), Value::Number(n2)) => n1 == n2,
        (Value::String(s1), Value::String(s2)) => s1 == s2,
        (Value::Bool(b1), Value::Bool(b2)) => b1 == b2,
        (Value::Number(_), Value::String(_))
        | (Value::String(_), Value::Number(_))
        | (Value::Bool(_), Value::Number(_))
        | (Value::Bool(_), Value::String(_))
        | (Value::Number(_), Value::Bool(_))
        | (Value::String(_), Value::Bool(_)) => lhs.to_number() == rhs.to_number(),
        // null and undefined are loosely equal to nothing else
        _ => false,
    }
}

fn strict_equals(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Number(n1), Value::Number(n2)) => n1 == n2,
        (Value::String(s1), Value::String(s2)) => s1 == s2,
        (Value::Bool(b1), Value::Bool(b2)) => b1 == b2,
        (Value::Null, Value::Null) => true,
        (Value::Undefined, Value::Undefined) => true,
        _ => false,
    }
}

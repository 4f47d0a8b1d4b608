use crate::{
    BinOp, BinaryOperation, Grouping, Identifier, Literal, Logic, LogicOperation, UnaryOp,
    UnaryOperation, VarRef,
};

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    BinOp(BinOp),
    Logic(Logic),
    UnaryOp(UnaryOp),
    Grouping(Grouping),
    Literal(Literal),
    VarRef(VarRef),
}

impl Expression {
    pub fn create_binop(left: Expression, op: BinaryOperation, right: Expression) -> Expression {
        Expression::BinOp(BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn create_logic(lhs: Expression, op: LogicOperation, rhs: Expression) -> Expression {
        Expression::Logic(Logic {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        })
    }

    pub fn create_unaryop(op: UnaryOperation, rhs: Expression) -> Expression {
        Expression::UnaryOp(UnaryOp {
            op,
            rhs: Box::new(rhs),
        })
    }

    pub fn create_grouping(expr: Expression) -> Expression {
        Expression::Grouping(Grouping {
            expr: Box::new(expr),
        })
    }

    pub fn create_literal(lit: Literal) -> Expression {
        Expression::Literal(lit)
    }

    pub fn create_var_ref(ident: Identifier) -> Expression {
        Expression::VarRef(VarRef { name: ident })
    }
}

use std::fmt::{self, Display};

use super::{
    BooleanLiteral, Call, FunctionLiteral, Identifier, If, Infix, IntegerLiteral, Prefix,
    StringLiteral,
};
use crate::token::Token;

/// The expression sum type. Every variant carries its originating token.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    BooleanLiteral(BooleanLiteral),
    StringLiteral(StringLiteral),
    Prefix(Prefix),
    Infix(Infix),
    If(If),
    FunctionLiteral(FunctionLiteral),
    Call(Call),
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(node) => &node.token,
            Expression::IntegerLiteral(node) => &node.token,
            Expression::BooleanLiteral(node) => &node.token,
            Expression::StringLiteral(node) => &node.token,
            Expression::Prefix(node) => &node.token,
            Expression::Infix(node) => &node.token,
            Expression::If(node) => &node.token,
            Expression::FunctionLiteral(node) => &node.token,
            Expression::Call(node) => &node.token,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(node) => write!(f, "{node}"),
            Expression::IntegerLiteral(node) => write!(f, "{node}"),
            Expression::BooleanLiteral(node) => write!(f, "{node}"),
            Expression::StringLiteral(node) => write!(f, "{node}"),
            Expression::Prefix(node) => write!(f, "{node}"),
            Expression::Infix(node) => write!(f, "{node}"),
            Expression::If(node) => write!(f, "{node}"),
            Expression::FunctionLiteral(node) => write!(f, "{node}"),
            Expression::Call(node) => write!(f, "{node}"),
        }
    }
}

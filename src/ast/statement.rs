use std::fmt::{self, Display};

use super::{ExpressionStatement, LetStatement, ReturnStatement};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(node) => write!(f, "{node}"),
            Statement::Return(node) => write!(f, "{node}"),
            Statement::Expression(node) => write!(f, "{node}"),
        }
    }
}

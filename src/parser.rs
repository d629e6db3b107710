//! A Pratt (precedence-climbing) parser: tokens in, `ast::Program` + a list
//! of diagnostic strings out. Never aborts outright; it records as many
//! diagnostics as it can while still making forward progress.

use std::collections::HashMap;

use log::error;

use crate::ast::{
    Block, BooleanLiteral, Call, Expression, ExpressionStatement, FunctionLiteral, Identifier, If,
    Infix, IntegerLiteral, LetStatement, Prefix, Program, ReturnStatement, Statement,
    StringLiteral,
};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Precedence levels, ascending. Only the relative ordering matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

fn precedence_of(kind: TokenKind) -> Precedence {
    match kind {
        TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
        TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
        TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
        TokenKind::Division | TokenKind::Multiplication => Precedence::Product,
        TokenKind::Lparen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

type PrefixParseFn = fn(&mut Parser) -> Option<Expression>;
type InfixParseFn = fn(&mut Parser, Expression) -> Option<Expression>;

pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    pub errors: Vec<String>,

    prefix_parse_fns: HashMap<TokenKind, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenKind, InfixParseFn>,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut prefix_parse_fns: HashMap<TokenKind, PrefixParseFn> = HashMap::new();
        prefix_parse_fns.insert(TokenKind::Ident, Self::parse_identifier);
        prefix_parse_fns.insert(TokenKind::Int, Self::parse_integer_literal);
        prefix_parse_fns.insert(TokenKind::Negation, Self::parse_prefix_expression);
        prefix_parse_fns.insert(TokenKind::Minus, Self::parse_prefix_expression);
        prefix_parse_fns.insert(TokenKind::True, Self::parse_boolean_literal);
        prefix_parse_fns.insert(TokenKind::False, Self::parse_boolean_literal);
        prefix_parse_fns.insert(TokenKind::Lparen, Self::parse_grouped_expression);
        prefix_parse_fns.insert(TokenKind::If, Self::parse_if_expression);
        prefix_parse_fns.insert(TokenKind::Function, Self::parse_function_literal);
        prefix_parse_fns.insert(TokenKind::Str, Self::parse_string_literal);

        let mut infix_parse_fns: HashMap<TokenKind, InfixParseFn> = HashMap::new();
        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Multiplication,
            TokenKind::Division,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            infix_parse_fns.insert(kind, Self::parse_infix_expression);
        }
        infix_parse_fns.insert(TokenKind::Lparen, Self::parse_call_expression);

        Self {
            lexer,
            cur_token,
            peek_token,
            errors: Vec::new(),
            prefix_parse_fns,
            infix_parse_fns,
        }
    }

    fn next_token(&mut self) {
        std::mem::swap(&mut self.cur_token, &mut self.peek_token);
        self.peek_token = self.lexer.next_token();
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let message = format!(
            "Se esperaba que el siguiente token fuera {} pero se obtuvo {}",
            expected, self.peek_token.kind
        );
        error!("{message}");
        self.errors.push(message);
    }

    fn no_prefix_parse_fn_error(&mut self) {
        let message = format!(
            "No se encontro ninguna función para parsear {}",
            self.cur_token.literal
        );
        error!("{message}");
        self.errors.push(message);
    }

    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token.kind == kind {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while self.cur_token.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Program { statements }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }

        let name = Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        };

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.kind == TokenKind::Semicolon {
            self.next_token();
        }

        Some(Statement::Let(LetStatement { token, name, value }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        self.next_token();

        let return_value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.kind == TokenKind::Semicolon {
            self.next_token();
        }

        Some(Statement::Return(ReturnStatement {
            token,
            return_value,
        }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.kind == TokenKind::Semicolon {
            self.next_token();
        }

        Some(Statement::Expression(ExpressionStatement {
            token,
            expression,
        }))
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.cur_token.kind).copied() else {
            self.no_prefix_parse_fn_error();
            return None;
        };

        let mut left = prefix(self)?;

        while self.peek_token.kind != TokenKind::Semicolon
            && precedence < precedence_of(self.peek_token.kind)
        {
            let Some(infix) = self.infix_parse_fns.get(&self.peek_token.kind).copied() else {
                return Some(left);
            };

            self.next_token();

            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(_) => {
                let message = format!("No se ha podido parsear {} como entero.", token.literal);
                error!("{message}");
                self.errors.push(message);
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        Some(Expression::BooleanLiteral(BooleanLiteral {
            token: self.cur_token.clone(),
            value: self.cur_token.kind == TokenKind::True,
        }))
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::StringLiteral(StringLiteral {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        }))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();

        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(Prefix {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let operator = token.literal.clone();
        let precedence = precedence_of(self.cur_token.kind);

        self.next_token();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(Infix {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }

        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token.kind == TokenKind::Else {
            self.next_token();

            if !self.expect_peek(TokenKind::Lbrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(If {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_block_statement(&mut self) -> Block {
        let token = self.cur_token.clone();
        let mut statements = Vec::new();

        self.next_token();

        while self.cur_token.kind != TokenKind::Rbrace && self.cur_token.kind != TokenKind::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        Block { token, statements }
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Lparen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::Lbrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::FunctionLiteral(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut identifiers = Vec::new();

        if self.peek_token.kind == TokenKind::Rparen {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();

        identifiers.push(Identifier {
            token: self.cur_token.clone(),
            value: self.cur_token.literal.clone(),
        });

        while self.peek_token.kind == TokenKind::Comma {
            self.next_token();
            self.next_token();

            identifiers.push(Identifier {
                token: self.cur_token.clone(),
                value: self.cur_token.literal.clone(),
            });
        }

        if !self.expect_peek(TokenKind::Rparen) {
            return None;
        }

        Some(identifiers)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenKind::Rparen)?;

        Some(Expression::Call(Call {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_token.kind == end {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.kind == TokenKind::Comma {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }
}

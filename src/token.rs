//! Token kinds and the keyword lookup table shared by the lexer and parser.

use std::collections::HashMap;
use std::fmt::{self, Display};

use once_cell::sync::Lazy;

/// The closed set of token kinds the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals.
    Ident,
    Int,
    Str,

    // Operators.
    Assign,
    Plus,
    Minus,
    Multiplication,
    Division,
    Negation,
    Lt,
    Gt,
    Eq,
    NotEq,

    // Delimiters.
    Comma,
    Semicolon,
    Lparen,
    Rparen,
    Lbrace,
    Rbrace,

    // Keywords.
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Str => "STRING",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiplication => "MULTIPLICATION",
            TokenKind::Division => "DIVISION",
            TokenKind::Negation => "NEGATION",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Lparen => "LPAREN",
            TokenKind::Rparen => "RPAREN",
            TokenKind::Lbrace => "LBRACE",
            TokenKind::Rbrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        };
        f.write_str(name)
    }
}

/// A lexed token: a `(kind, literal)` pair, compared by both fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type: {}, Literal: {}", self.kind, self.literal)
    }
}

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("variable", TokenKind::Let);
    m.insert("procedimiento", TokenKind::Function);
    m.insert("regresa", TokenKind::Return);
    m.insert("si", TokenKind::If);
    m.insert("si_no", TokenKind::Else);
    m.insert("verdadero", TokenKind::True);
    m.insert("falso", TokenKind::False);
    m
});

/// Looks up `literal` in the keyword table, falling back to `IDENT`.
pub fn lookup_ident(literal: &str) -> TokenKind {
    KEYWORDS.get(literal).copied().unwrap_or(TokenKind::Ident)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_resolve() {
        assert_eq!(lookup_ident("variable"), TokenKind::Let);
        assert_eq!(lookup_ident("procedimiento"), TokenKind::Function);
        assert_eq!(lookup_ident("regresa"), TokenKind::Return);
        assert_eq!(lookup_ident("si"), TokenKind::If);
        assert_eq!(lookup_ident("si_no"), TokenKind::Else);
        assert_eq!(lookup_ident("verdadero"), TokenKind::True);
        assert_eq!(lookup_ident("falso"), TokenKind::False);
    }

    #[test]
    fn unknown_literal_is_ident() {
        assert_eq!(lookup_ident("suma"), TokenKind::Ident);
    }
}

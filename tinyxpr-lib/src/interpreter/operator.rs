use crate::interpreter::token::{Token, TokenKind};
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Multiply,
}

/// An unary mathematical function.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Ceil,
}

impl BinaryOperator {
    pub fn from_token(token: &Token) -> Option<BinaryOperator> {
        match token.kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Asterisk => Some(BinaryOperator::Multiply),
            _ => None,
        }
    }

    pub fn token(&self) -> Token {
        match self {
            BinaryOperator::Add => Token::plus(),
            BinaryOperator::Multiply => Token::asterisk(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Multiply => "*",
        }
    }

    /// Only consulted when the parser enforces conventional precedence.
    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add => 0,
            BinaryOperator::Multiply => 1,
        }
    }

    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Multiply => a * b,
        }
    }
}

impl UnaryOperator {
    pub fn token(&self) -> Token {
        match self {
            UnaryOperator::Ceil => Token::ceil(),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOperator::Ceil => "CEIL",
        }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Ceil => x.ceil(),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

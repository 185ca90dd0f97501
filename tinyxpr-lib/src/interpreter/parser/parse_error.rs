use crate::interpreter::token::{Token, TokenKind};
use thiserror::Error;

/// Why a token sequence could not be turned into an expression tree.
///
/// Every variant aborts the whole parse; no partial tree is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Parsing error at position {position}: Unexpected token: {token}")]
    UnexpectedToken { token: Token, position: usize },

    #[error("Parsing error at position {position}: Expected {expected} after expression, found {found}")]
    ExpectedToken {
        expected: TokenKind,
        found: Token,
        position: usize,
    },

    #[error("Parsing error at position {position}: Expression nests deeper than {limit} levels")]
    NestingTooDeep { limit: usize, position: usize },

    #[error("Parsing error at position {position}: Expression tree grows deeper than {limit} levels")]
    ExpressionTooDeep { limit: usize, position: usize },
}

impl ParseError {
    /// Index of the offending token in the parsed sequence.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { position, .. }
            | ParseError::ExpectedToken { position, .. }
            | ParseError::NestingTooDeep { position, .. }
            | ParseError::ExpressionTooDeep { position, .. } => *position,
        }
    }
}

use thiserror::Error;

use crate::{
    classify::CharClass,
    token::{Position, TokenKind},
};

/// A failed parse, with the position of the token or character at fault.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub kind: SyntaxError,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub(crate) fn new(kind: SyntaxError, position: Position) -> Self {
        Self {
            kind,
            line: position.line,
            column: position.column,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.kind
    }
}

/// Everything that can make a document unacceptable.
///
/// All of these are fatal: parsing stops at the first one and nothing of the
/// partially built tree is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("source contains no JSON document")]
    EmptySource,
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),
    #[error("invalid literal '{0}', expected true, false or null")]
    InvalidLiteral(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected {found} after {after}")]
    MisplacedCharacter { found: CharClass, after: TokenKind },
    #[error("unexpected {found} after {after}")]
    UnexpectedTokenSequence { found: TokenKind, after: TokenKind },
    #[error("document root must be an array or object, found {0}")]
    ScalarRoot(TokenKind),
    #[error("input ended before every array and object was closed")]
    UnterminatedContainer,
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),
    #[error("nesting deeper than {0} levels")]
    DepthLimitExceeded(usize),
}

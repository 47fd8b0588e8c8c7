//! Error types for JSON parsing.

use std::fmt;

use thiserror::Error;

/// Classification of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input ended where a token was required (e.g. an unclosed container).
    ExpectedToken,
    /// A token appeared in a position its kind is not valid for, or the
    /// lexer produced an unrecognized token.
    InvalidToken,
    /// A structural rule was violated (e.g. a misplaced comma).
    SyntaxError,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::ExpectedToken => "expected token",
            ErrorKind::InvalidToken => "invalid token",
            ErrorKind::SyntaxError => "syntax error",
        })
    }
}

/// A parse failure: the kind plus contextual detail (the offending token
/// text or a description of what was missing).
///
/// The first error aborts the whole parse; no partial document is returned
/// alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ParseError {
    kind: ErrorKind,
    message: String,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Convenience alias used throughout jot-core.
pub type Result<T> = std::result::Result<T, ParseError>;

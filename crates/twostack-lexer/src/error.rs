//! Lexer error types.

use crate::token::Span;
use thiserror::Error;

/// Errors that can occur while tokenizing an expression string.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A whitespace-delimited run is neither a parenthesis, an operator,
    /// nor parseable as a floating-point number.
    #[error("malformed token '{token}'")]
    MalformedToken {
        /// The offending run, exactly as it appeared in the input.
        token: String,
        /// Where the run sits in the input string.
        span: Span,
    },
}

/// Lexer result type alias.
pub type LexResult<T> = Result<T, LexError>;

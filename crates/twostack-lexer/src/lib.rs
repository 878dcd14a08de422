//! twostack lexer: converts an expression string into a token stream.

pub mod error;
pub mod lexer;
pub mod token;

pub use error::{LexError, LexResult};
pub use lexer::{tokenize, Lexer};
pub use token::{BinOp, Span, Token, TokenKind};

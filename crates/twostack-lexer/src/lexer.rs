//! Core twostack lexer — converts an expression string to a token stream.
//!
//! The delimiter contract is whitespace separation: tokens are maximal
//! runs of non-whitespace bytes. `"( 3 + 2 )"` lexes to five tokens;
//! `"(3+2)"` is one run, fails numeric parse, and is rejected whole.

use crate::error::{LexError, LexResult};
use crate::token::{BinOp, Span, Token, TokenKind};

/// The twostack lexer.
///
/// A byte cursor over the input string. Tokenizing is a pure function of
/// the input: lexing the same string twice yields identical streams.
pub struct Lexer<'src> {
    /// The full input as bytes.
    source: &'src [u8],
    /// The input as text, for lexeme extraction and numeric parsing.
    text: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given expression string.
    pub fn new(input: &'src str) -> Self {
        Self {
            source: input.as_bytes(),
            text: input,
            pos: 0,
        }
    }

    /// Lex the entire input into a token stream.
    ///
    /// Stops at the first malformed run; no partial stream is returned.
    pub fn lex(mut self) -> LexResult<Vec<Token>> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.at_end() {
                break;
            }
            tokens.push(self.scan_word()?);
        }

        Ok(tokens)
    }

    // ─────────────────────────────────────────────────────────────
    // Cursor helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Word scanning
    // ─────────────────────────────────────────────────────────────

    /// Scan one whitespace-delimited run and classify it.
    fn scan_word(&mut self) -> LexResult<Token> {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
        let span = Span::new(start, self.pos);
        let word = &self.text[start..self.pos];

        let kind = match word {
            "(" => TokenKind::LParen,
            ")" => TokenKind::RParen,
            _ => {
                if let Some(op) = BinOp::from_symbol(word) {
                    TokenKind::Op(op)
                } else if let Ok(value) = word.parse::<f64>() {
                    TokenKind::Number(value)
                } else {
                    return Err(LexError::MalformedToken {
                        token: word.to_string(),
                        span,
                    });
                }
            }
        };

        Ok(Token::new(kind, span))
    }
}

/// Tokenize an expression string.
///
/// Splits `input` on whitespace and classifies each run: `(` and `)`
/// mark grouping, `+ - * /` are operators, and anything that parses as
/// an `f64` is a number. Any other run fails with
/// [`LexError::MalformedToken`].
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    Lexer::new(input).lex()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexeme_text_matches_span() {
        let input = "( 3.5 + 12 )";
        let tokens = tokenize(input).unwrap();
        let lexemes: Vec<&str> = tokens
            .iter()
            .map(|t| &input[t.span.start..t.span.end])
            .collect();
        assert_eq!(lexemes, vec!["(", "3.5", "+", "12", ")"]);
    }

    #[test]
    fn test_tabs_and_runs_of_spaces() {
        let tokens = tokenize("(\t3   +\t\t2 )").unwrap();
        assert_eq!(tokens.len(), 5);
    }
}

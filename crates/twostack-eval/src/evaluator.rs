//! Core two-stack evaluator.
//!
//! Walks the token stream once, pushing operators and values onto two
//! locally-scoped stacks and reducing on each closing parenthesis. The
//! stacks live inside [`evaluate`] and are dropped when it returns, so
//! the evaluator is stateless and re-entrant: nothing carries over
//! between calls.

use crate::error::{EvalError, EvalResult, ExprError};
use twostack_lexer::{tokenize, BinOp, Token, TokenKind};

/// Evaluate a token stream to a single value.
///
/// Per-token transitions:
/// - `(` — no-op; opening parentheses only mark grouping.
/// - operator — push onto the operator stack.
/// - number — push onto the value stack.
/// - `)` — reduce: pop one operator and two values, push `left op right`.
///
/// Reductions are strict. A closing parenthesis with no operator or with
/// fewer than two values fails immediately instead of being skipped;
/// skipping would leave the stacks inconsistent with no report.
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    let mut ops: Vec<BinOp> = Vec::new();
    let mut vals: Vec<f64> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LParen => {}
            TokenKind::Op(op) => ops.push(op),
            TokenKind::Number(n) => vals.push(n),
            TokenKind::RParen => reduce(&mut ops, &mut vals)?,
        }
    }

    // A well-formed expression drains the operator stack and leaves
    // exactly one value.
    if ops.is_empty() && vals.len() == 1 {
        Ok(vals[0])
    } else {
        Err(EvalError::Unbalanced {
            values_left: vals.len(),
        })
    }
}

/// Pop one operator and two values, apply, and push the result.
///
/// The right operand comes off the stack first; order matters for `-`
/// and `/`.
fn reduce(ops: &mut Vec<BinOp>, vals: &mut Vec<f64>) -> EvalResult<()> {
    let op = ops.pop().ok_or(EvalError::MissingOperator)?;
    if vals.len() < 2 {
        return Err(EvalError::MissingOperand);
    }
    let right = vals.pop().ok_or(EvalError::MissingOperand)?;
    let left = vals.pop().ok_or(EvalError::MissingOperand)?;

    let result = match op {
        BinOp::Add => left + right,
        BinOp::Sub => left - right,
        BinOp::Mul => left * right,
        BinOp::Div => {
            // Exact zero check, no epsilon.
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            left / right
        }
    };

    vals.push(result);
    Ok(())
}

/// Tokenize and evaluate an expression string in one call.
pub fn evaluate_expression(input: &str) -> Result<f64, ExprError> {
    let tokens = tokenize(input)?;
    Ok(evaluate(&tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use twostack_lexer::Span;

    fn num(n: f64) -> Token {
        Token::new(TokenKind::Number(n), Span::new(0, 1))
    }

    fn op(op: BinOp) -> Token {
        Token::new(TokenKind::Op(op), Span::new(0, 1))
    }

    fn paren(open: bool) -> Token {
        let kind = if open {
            TokenKind::LParen
        } else {
            TokenKind::RParen
        };
        Token::new(kind, Span::new(0, 1))
    }

    #[test]
    fn test_single_reduction() {
        let tokens = [paren(true), num(4.0), op(BinOp::Mul), num(2.5), paren(false)];
        assert_eq!(evaluate(&tokens), Ok(10.0));
    }

    #[test]
    fn test_bare_number_is_a_result() {
        assert_eq!(evaluate(&[num(7.0)]), Ok(7.0));
    }

    #[test]
    fn test_empty_stream_is_unbalanced() {
        assert_eq!(evaluate(&[]), Err(EvalError::Unbalanced { values_left: 0 }));
    }

    #[test]
    fn test_close_without_operator() {
        let tokens = [paren(true), num(1.0), num(2.0), paren(false)];
        assert_eq!(evaluate(&tokens), Err(EvalError::MissingOperator));
    }

    #[test]
    fn test_leftover_operator_is_unbalanced() {
        let tokens = [num(3.0), op(BinOp::Add)];
        assert_eq!(
            evaluate(&tokens),
            Err(EvalError::Unbalanced { values_left: 1 })
        );
    }

    #[test]
    fn test_division_by_negative_zero_traps() {
        // -0.0 == 0.0 in IEEE comparison, so this traps too.
        let tokens = [paren(true), num(1.0), op(BinOp::Div), num(-0.0), paren(false)];
        assert_eq!(evaluate(&tokens), Err(EvalError::DivisionByZero));
    }
}

//! Evaluator error types.

use thiserror::Error;
use twostack_lexer::LexError;

/// Errors that can occur while reducing a token stream.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A reduction needed two operands but fewer were on the value stack.
    #[error("operand stack empty: reduction needs two values")]
    MissingOperand,

    /// A reduction needed an operator but the operator stack was empty.
    #[error("operator stack empty: reduction needs an operator")]
    MissingOperator,

    /// The right-hand operand of a division was exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// After all tokens were consumed, the value stack did not hold
    /// exactly one result (unmatched parentheses or missing grouping).
    #[error("unbalanced expression: {values_left} values left on the stack")]
    Unbalanced {
        /// Final value-stack size.
        values_left: usize,
    },
}

/// Evaluator result type alias.
pub type EvalResult<T> = Result<T, EvalError>;

/// Combined error for the tokenize-then-evaluate pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// Tokenizing failed.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Reduction failed.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

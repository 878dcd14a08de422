//! twostack evaluator: two-stack reduction of fully-parenthesized
//! arithmetic expressions.
//!
//! Every binary operation in the input must be explicitly parenthesized,
//! so no precedence climbing is needed: each closing parenthesis triggers
//! exactly one reduction (pop one operator, pop two values, push the
//! result).

pub mod error;
pub mod evaluator;

pub use error::{EvalError, EvalResult, ExprError};
pub use evaluator::{evaluate, evaluate_expression};

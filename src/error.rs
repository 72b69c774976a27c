//! Evaluation errors.

use thiserror::Error;

/// Why a postfix program could not be reduced to a single value.
///
/// All variants describe the shape of the expression, never the values that
/// flowed through it, so the same program fails the same way every time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("operator at postfix position {position} has too few operands")]
    Underflow { position: usize },

    #[error("expression leaves {remaining} values instead of one")]
    TooManyOperands { remaining: usize },

    #[error("expression produces no value")]
    EmptyExpression,
}

pub type EvalResult<T> = Result<T, EvalError>;

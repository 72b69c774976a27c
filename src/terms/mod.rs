//! Term-level expressions.
//!
//! Operands are fixed-length numeric arrays and the only operators are
//! elementwise addition, subtraction and multiplication. Zero operands are
//! tagged so that `0 + x` and `0 * x` skip the elementwise pass.

mod combiner;
mod term;
mod zero_cache;

pub use combiner::{TermCombiner, TermExpression};
pub use term::{Term, TermOp};
pub use zero_cache::ZeroCache;

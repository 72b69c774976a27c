//! Sigcalc - An expression combination engine for signal calculators
//!
//! This library turns a left-to-right strip of operand and operator tokens
//! into a correctly precedenced postfix program, and evaluates that program
//! against numeric arrays or caller-defined signals.

pub mod compiler;
pub mod error;
pub mod evaluator;
pub mod infix;
pub mod program;
pub mod tokens;

#[cfg(feature = "operations")]
pub mod combinators;
#[cfg(feature = "operations")]
pub mod operations;
#[cfg(feature = "operations")]
pub mod sources;
#[cfg(feature = "terms")]
pub mod terms;
#[cfg(feature = "operations")]
pub mod waveform;

// Re-export commonly used types at the crate root
pub use compiler::compile;
pub use error::{EvalError, EvalResult};
pub use evaluator::evaluate;
pub use infix::InfixSequence;
pub use program::PostfixProgram;
pub use tokens::{Priority, PostfixToken, Tier, TokenKind, priority_of};

#[cfg(feature = "operations")]
pub use operations::{
    BinaryOperator, Operation, OperationBuilder, Producer, SignalOperator, SignalProducer,
    UnaryOperator, evaluate_operations,
};
#[cfg(feature = "noise")]
pub use sources::WhiteNoise;
#[cfg(feature = "operations")]
pub use sources::{ConstantSource, WaveformSource};
#[cfg(feature = "terms")]
pub use terms::{Term, TermCombiner, TermExpression, TermOp, ZeroCache};
#[cfg(feature = "operations")]
pub use waveform::Waveform;

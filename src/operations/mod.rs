//! Operation-level expressions.
//!
//! Operands are opaque signals pulled from producers at evaluation time, and
//! operators are caller-supplied objects registered at one of three unary or
//! three binary tiers.

mod operation;
mod traits;

pub use operation::{Operation, OperationBuilder, Producer, evaluate_operations};
pub use traits::{BinaryOperator, SignalOperator, SignalProducer, UnaryOperator};

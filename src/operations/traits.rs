//! Capabilities an operation expression is built from.

use std::fmt;

/// Something that can hand out its current signal value.
///
/// Producers are asked once per operand token, every time the expression
/// is evaluated. Whether the value is cached or recomputed is up to the
/// producer.
///
/// Plain closures returning a signal are producers too.
///
/// # Examples
///
/// ```
/// use sigcalc::SignalProducer;
///
/// let producer = || 42.0_f64;
/// assert_eq!(producer.current_value(), 42.0);
/// ```
pub trait SignalProducer<S>: Send + Sync {
    /// Returns the signal as of now.
    fn current_value(&self) -> S;
}

impl<S, F> SignalProducer<S> for F
where
    F: Fn() -> S + Send + Sync,
{
    fn current_value(&self) -> S {
        self()
    }
}

/// An operator applied to the single signal that follows it.
pub trait UnaryOperator<S>: Send + Sync {
    fn apply(&self, input: S) -> S;
}

impl<S, F> UnaryOperator<S> for F
where
    F: Fn(S) -> S + Send + Sync,
{
    fn apply(&self, input: S) -> S {
        self(input)
    }
}

/// An operator combining the signals on its left and right.
pub trait BinaryOperator<S>: Send + Sync {
    fn apply(&self, left: S, right: S) -> S;
}

impl<S, F> BinaryOperator<S> for F
where
    F: Fn(S, S) -> S + Send + Sync,
{
    fn apply(&self, left: S, right: S) -> S {
        self(left, right)
    }
}

/// Operator payload carried through compilation.
pub enum SignalOperator<S> {
    Unary(Box<dyn UnaryOperator<S>>),
    Binary(Box<dyn BinaryOperator<S>>),
}

impl<S> SignalOperator<S> {
    pub fn unary(op: impl UnaryOperator<S> + 'static) -> Self {
        SignalOperator::Unary(Box::new(op))
    }

    pub fn binary(op: impl BinaryOperator<S> + 'static) -> Self {
        SignalOperator::Binary(Box::new(op))
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, SignalOperator::Unary(_))
    }
}

impl<S> fmt::Debug for SignalOperator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalOperator::Unary(_) => f.write_str("Unary(..)"),
            SignalOperator::Binary(_) => f.write_str("Binary(..)"),
        }
    }
}

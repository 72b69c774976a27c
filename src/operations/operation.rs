//! Assembling and evaluating operation expressions.

use std::sync::Arc;

use crate::error::EvalResult;
use crate::evaluator::evaluate;
use crate::infix::InfixSequence;
use crate::operations::{BinaryOperator, SignalOperator, SignalProducer, UnaryOperator};
use crate::program::PostfixProgram;
use crate::tokens::{PostfixToken, Tier};

/// Shared handle to an operand producer.
pub type Producer<S> = Arc<dyn SignalProducer<S>>;

/// Runs a compiled operation program against its producers.
///
/// Each producer is asked for its current value when its operand token is
/// reached, left to right. An empty program has no sensible default and
/// fails with [`EvalError::EmptyExpression`](crate::EvalError::EmptyExpression).
///
/// # Panics
///
/// Panics if `producers` does not hold exactly one producer per operand
/// token, or if an operator payload does not match the arity of its token.
pub fn evaluate_operations<S>(
    program: &PostfixProgram<SignalOperator<S>>,
    producers: &[Producer<S>],
) -> EvalResult<S> {
    assert_eq!(
        program.operand_count(),
        producers.len(),
        "program expects {} producers",
        program.operand_count()
    );
    evaluate(
        program,
        producers.iter().map(|p| p.current_value()),
        |op, value| match op {
            SignalOperator::Unary(op) => op.apply(value),
            SignalOperator::Binary(_) => panic!("binary operator placed on a unary token"),
        },
        |op, left, right| match op {
            SignalOperator::Binary(op) => op.apply(left, right),
            SignalOperator::Unary(_) => panic!("unary operator placed on a binary token"),
        },
    )
}

/// Builder for operation expressions.
///
/// Operators may be registered at any tier; the tier is chosen per
/// registration, not per operator type.
///
/// # Examples
///
/// ```
/// use sigcalc::{OperationBuilder, Tier};
///
/// // -a + b * c, with plain numbers standing in for signals
/// let op = OperationBuilder::new()
///     .unary(Tier::First, |x: f64| -x)
///     .operand(|| 1.0)
///     .binary(Tier::First, |l: f64, r: f64| l + r)
///     .operand(|| 3.0)
///     .binary(Tier::Second, |l: f64, r: f64| l * r)
///     .operand(|| 4.0)
///     .build();
/// assert_eq!(op.current_value(), Ok(11.0));
/// ```
pub struct OperationBuilder<S> {
    infix: InfixSequence<SignalOperator<S>>,
    producers: Vec<Producer<S>>,
}

impl<S> OperationBuilder<S> {
    pub fn new() -> Self {
        Self {
            infix: InfixSequence::new(),
            producers: Vec::new(),
        }
    }

    /// Appends an operand backed by `producer`.
    pub fn operand(self, producer: impl SignalProducer<S> + 'static) -> Self {
        self.shared_operand(Arc::new(producer))
    }

    /// Appends an operand backed by a producer that may appear elsewhere too.
    pub fn shared_operand(mut self, producer: Producer<S>) -> Self {
        self.infix.operand();
        self.producers.push(producer);
        self
    }

    pub fn unary(mut self, tier: Tier, op: impl UnaryOperator<S> + 'static) -> Self {
        self.infix.unary(tier, SignalOperator::unary(op));
        self
    }

    pub fn binary(mut self, tier: Tier, op: impl BinaryOperator<S> + 'static) -> Self {
        self.infix.binary(tier, SignalOperator::binary(op));
        self
    }

    pub fn open(mut self) -> Self {
        self.infix.open();
        self
    }

    pub fn close(mut self) -> Self {
        self.infix.close();
        self
    }

    /// Compiles the arrangement.
    pub fn build(self) -> Operation<S> {
        Operation::new(self.infix.compile(), self.producers)
    }
}

impl<S> Default for OperationBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A compiled operation expression together with its producers.
///
/// The program is compiled once; every call to
/// [`current_value`](Operation::current_value) re-reads the producers.
pub struct Operation<S> {
    program: PostfixProgram<SignalOperator<S>>,
    producers: Vec<Producer<S>>,
}

impl<S> Operation<S> {
    /// Pairs an already compiled program with its producers.
    ///
    /// # Panics
    ///
    /// Panics if the producer count does not match the program, or if an
    /// operator payload does not match the arity of its token.
    pub fn new(program: PostfixProgram<SignalOperator<S>>, producers: Vec<Producer<S>>) -> Self {
        assert_eq!(
            program.operand_count(),
            producers.len(),
            "program expects {} producers",
            program.operand_count()
        );
        for (position, (token, op)) in program.steps().enumerate() {
            if let Some(op) = op {
                let unary_token = matches!(token, PostfixToken::Unary(_));
                assert!(
                    op.is_unary() == unary_token,
                    "operator at postfix position {position} does not match the arity of {token}"
                );
            }
        }
        Self { program, producers }
    }

    pub fn program(&self) -> &PostfixProgram<SignalOperator<S>> {
        &self.program
    }

    pub fn producers(&self) -> &[Producer<S>] {
        &self.producers
    }

    /// Evaluates the expression against fresh producer values.
    pub fn current_value(&self) -> EvalResult<S> {
        evaluate_operations(&self.program, &self.producers)
    }
}

//! Evaluation of term expressions.

use std::sync::Arc;

use crate::error::EvalResult;
use crate::evaluator::evaluate;
use crate::infix::InfixSequence;
use crate::program::PostfixProgram;
use crate::terms::{Term, TermOp, ZeroCache};
use crate::tokens::TokenKind;

/// Combines fixed-length numeric arrays with `+`, `-` and `*`.
///
/// Every operand must have the combiner's dimension. An empty program
/// evaluates to the zero array of that dimension.
///
/// # Examples
///
/// ```
/// use sigcalc::{Term, TermCombiner, TermExpression};
///
/// let combiner = TermCombiner::new(2);
/// // a + b * c
/// let program = TermExpression::new().term().add().term().multiply().term().compile();
/// let operands = [
///     Term::from(vec![1.0, 2.0]),
///     Term::from(vec![3.0, 4.0]),
///     Term::from(vec![2.0, 2.0]),
/// ];
/// let result = combiner.evaluate(&program, &operands).unwrap();
/// assert_eq!(&*result, &[7.0, 10.0]);
/// ```
#[derive(Debug, Clone)]
pub struct TermCombiner {
    dimension: usize,
    zeros: Arc<ZeroCache>,
}

impl TermCombiner {
    /// Creates a combiner with its own zero cache.
    pub fn new(dimension: usize) -> Self {
        Self::with_cache(dimension, Arc::new(ZeroCache::new()))
    }

    /// Creates a combiner drawing zero arrays from a shared cache.
    pub fn with_cache(dimension: usize, zeros: Arc<ZeroCache>) -> Self {
        Self { dimension, zeros }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cache(&self) -> &Arc<ZeroCache> {
        &self.zeros
    }

    /// Compiles an infix term sequence for this combiner.
    ///
    /// # Panics
    ///
    /// Panics if `infix` contains a unary token; term operators are all binary.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigcalc::{InfixSequence, TermCombiner, TermOp};
    ///
    /// let mut infix = InfixSequence::new();
    /// infix.operand().binary(TermOp::Subtract.tier(), TermOp::Subtract).operand();
    /// let program = TermCombiner::new(2).compile(infix);
    /// assert_eq!(program.to_string(), "x x b1");
    /// ```
    pub fn compile(&self, infix: InfixSequence<TermOp>) -> PostfixProgram<TermOp> {
        assert!(
            !infix
                .tokens()
                .iter()
                .any(|t| matches!(t, TokenKind::Unary(_))),
            "term expressions have no unary operators"
        );
        infix.compile()
    }

    /// The zero term of this combiner's dimension.
    pub fn zero(&self) -> Term {
        Term::Zero(self.dimension)
    }

    /// Evaluates `program` and keeps the result tagged.
    ///
    /// # Panics
    ///
    /// Panics if `operands` does not hold exactly one term per operand token,
    /// if any operand has the wrong length, or if the program contains a
    /// unary token (term operators are all binary).
    pub fn evaluate_term(
        &self,
        program: &PostfixProgram<TermOp>,
        operands: &[Term],
    ) -> EvalResult<Term> {
        assert_eq!(
            program.operand_count(),
            operands.len(),
            "program expects {} operands",
            program.operand_count()
        );
        if let Some(bad) = operands.iter().find(|t| t.len() != self.dimension) {
            panic!(
                "operand of length {} given to a combiner of dimension {}",
                bad.len(),
                self.dimension
            );
        }
        if program.is_empty() {
            return Ok(self.zero());
        }

        evaluate(
            program,
            operands.iter().cloned(),
            |op, _| panic!("term operator {op:?} used as a unary operator"),
            |op, left, right| op.apply(left, right),
        )
    }

    /// Evaluates `program` and returns the resulting array.
    ///
    /// A zero result is served from the zero cache.
    ///
    /// # Panics
    ///
    /// Same conditions as [`TermCombiner::evaluate_term`].
    pub fn evaluate(
        &self,
        program: &PostfixProgram<TermOp>,
        operands: &[Term],
    ) -> EvalResult<Arc<[f64]>> {
        self.evaluate_term(program, operands)
            .map(|term| self.materialize(term))
    }

    /// Turns a term into plain data.
    pub fn materialize(&self, term: Term) -> Arc<[f64]> {
        match term {
            Term::Zero(len) => self.zeros.zeros(len),
            Term::Data(values) => values,
        }
    }
}

/// Builder for term expressions, placing each operator at its usual tier.
#[derive(Debug, Clone, Default)]
pub struct TermExpression {
    infix: InfixSequence<TermOp>,
}

impl TermExpression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an operand slot.
    pub fn term(mut self) -> Self {
        self.infix.operand();
        self
    }

    pub fn add(self) -> Self {
        self.op(TermOp::Add)
    }

    pub fn subtract(self) -> Self {
        self.op(TermOp::Subtract)
    }

    pub fn multiply(self) -> Self {
        self.op(TermOp::Multiply)
    }

    /// Appends `op` at [`TermOp::tier`].
    pub fn op(mut self, op: TermOp) -> Self {
        self.infix.binary(op.tier(), op);
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

    pub fn infix(&self) -> &InfixSequence<TermOp> {
        &self.infix
    }

    pub fn compile(self) -> PostfixProgram<TermOp> {
        self.infix.compile()
    }

    /// Consumes the builder, returning its infix sequence.
    pub fn into_infix(self) -> InfixSequence<TermOp> {
        self.infix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EvalError, Tier};
    use pretty_assertions::assert_eq;

    fn terms(values: &[&[f64]]) -> Vec<Term> {
        values.iter().map(|&v| Term::from(v)).collect()
    }

    #[test]
    fn test_precedence() {
        let combiner = TermCombiner::new(2);
        let program = TermExpression::new()
            .term()
            .add()
            .term()
            .multiply()
            .term()
            .compile();
        let result = combiner
            .evaluate(&program, &terms(&[&[1.0, 2.0], &[3.0, 4.0], &[2.0, 2.0]]))
            .unwrap();
        assert_eq!(result.to_vec(), vec![7.0, 10.0]);
    }

    #[test]
    fn test_parens() {
        let combiner = TermCombiner::new(2);
        let program = TermExpression::new()
            .open()
            .term()
            .add()
            .term()
            .close()
            .multiply()
            .term()
            .compile();
        let result = combiner
            .evaluate(&program, &terms(&[&[1.0, 2.0], &[3.0, 4.0], &[2.0, 2.0]]))
            .unwrap();
        assert_eq!(result.to_vec(), vec![8.0, 12.0]);
    }

    #[test]
    fn test_subtract_order() {
        let combiner = TermCombiner::new(2);
        let program = TermExpression::new().term().subtract().term().compile();
        let result = combiner
            .evaluate(&program, &terms(&[&[1.0, 2.0], &[10.0, 20.0]]))
            .unwrap();
        assert_eq!(result.to_vec(), vec![-9.0, -18.0]);
    }

    #[test]
    fn test_left_associative_subtract() {
        let combiner = TermCombiner::new(1);
        let program = TermExpression::new()
            .term()
            .subtract()
            .term()
            .subtract()
            .term()
            .compile();
        let result = combiner
            .evaluate(&program, &terms(&[&[10.0], &[3.0], &[2.0]]))
            .unwrap();
        assert_eq!(result.to_vec(), vec![5.0]);
    }

    #[test]
    fn test_empty_program_is_zero() {
        let cache = Arc::new(ZeroCache::new());
        let combiner = TermCombiner::with_cache(3, Arc::clone(&cache));
        let program = TermExpression::new().compile();

        assert_eq!(combiner.evaluate_term(&program, &[]), Ok(Term::Zero(3)));
        let result = combiner.evaluate(&program, &[]).unwrap();
        assert_eq!(result.to_vec(), vec![0.0, 0.0, 0.0]);
        assert!(Arc::ptr_eq(&result, &cache.zeros(3)));
    }

    #[test]
    fn test_zero_operand_short_circuits() {
        let combiner = TermCombiner::new(2);
        // a * z + b
        let program = TermExpression::new()
            .term()
            .multiply()
            .term()
            .add()
            .term()
            .compile();
        let b: Arc<[f64]> = vec![5.0, 6.0].into();
        let operands = [
            Term::from(vec![1.0, 2.0]),
            combiner.zero(),
            Term::Data(b.clone()),
        ];
        let result = combiner.evaluate(&program, &operands).unwrap();
        assert!(Arc::ptr_eq(&result, &b));
    }

    #[test]
    fn test_zero_does_not_mask_underflow() {
        let combiner = TermCombiner::new(2);
        let program = crate::compile(
            vec![
                crate::TokenKind::Binary(Tier::Second),
                crate::TokenKind::Operand,
            ],
            vec![TermOp::Multiply],
        );
        assert_eq!(
            combiner.evaluate(&program, &[combiner.zero()]),
            Err(EvalError::Underflow { position: 1 })
        );
    }

    #[test]
    fn test_too_many_operands() {
        let combiner = TermCombiner::new(1);
        let program = TermExpression::new().term().term().compile();
        assert_eq!(
            combiner.evaluate(&program, &[combiner.zero(), Term::from(vec![1.0])]),
            Err(EvalError::TooManyOperands { remaining: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "dimension")]
    fn test_wrong_length_operand_panics() {
        let combiner = TermCombiner::new(3);
        let program = TermExpression::new().term().compile();
        let _ = combiner.evaluate(&program, &terms(&[&[1.0]]));
    }

    #[test]
    #[should_panic(expected = "expects 2 operands")]
    fn test_operand_count_mismatch_panics() {
        let combiner = TermCombiner::new(1);
        let program = TermExpression::new().term().add().term().compile();
        let _ = combiner.evaluate(&program, &terms(&[&[1.0]]));
    }

    #[test]
    fn test_combiner_compile() {
        let combiner = TermCombiner::new(2);
        // a - (b + c)
        let infix = TermExpression::new()
            .term()
            .subtract()
            .open()
            .term()
            .add()
            .term()
            .close()
            .into_infix();
        let program = combiner.compile(infix);
        assert_eq!(program.to_string(), "x x x b1 b1");
        let result = combiner
            .evaluate(&program, &terms(&[&[10.0, 10.0], &[1.0, 2.0], &[3.0, 4.0]]))
            .unwrap();
        assert_eq!(result.to_vec(), vec![6.0, 4.0]);
    }

    #[test]
    #[should_panic(expected = "no unary operators")]
    fn test_combiner_compile_rejects_unary() {
        let mut infix = InfixSequence::new();
        infix.unary(Tier::First, TermOp::Subtract).operand();
        TermCombiner::new(1).compile(infix);
    }
}

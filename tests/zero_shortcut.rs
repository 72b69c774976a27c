#![cfg(feature = "terms")]

//! Property-based tests for the zero shortcut of the term operators.

use proptest::prelude::*;
use sigcalc::{Term, TermCombiner, TermExpression, TermOp};

fn naive(op: TermOp, left: &[f64], right: &[f64]) -> Vec<f64> {
    left.iter()
        .zip(right)
        .map(|(&l, &r)| match op {
            TermOp::Add => l + r,
            TermOp::Subtract => l - r,
            TermOp::Multiply => l * r,
        })
        .collect()
}

fn finite_array() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6, 0..32)
}

proptest! {
    #[test]
    fn test_multiply_by_zero_matches_naive(x in finite_array()) {
        let zeros = vec![0.0; x.len()];
        let expected = naive(TermOp::Multiply, &zeros, &x);

        let left = TermOp::Multiply.apply(Term::Zero(x.len()), Term::from(x.clone()));
        let right = TermOp::Multiply.apply(Term::from(x.clone()), Term::Zero(x.len()));

        prop_assert!(left.is_zero());
        prop_assert!(right.is_zero());
        prop_assert_eq!(left.to_vec(), expected.clone());
        prop_assert_eq!(right.to_vec(), expected);
    }

    #[test]
    fn test_add_zero_matches_naive(x in finite_array()) {
        let zeros = vec![0.0; x.len()];

        let left = TermOp::Add.apply(Term::Zero(x.len()), Term::from(x.clone()));
        let right = TermOp::Add.apply(Term::from(x.clone()), Term::Zero(x.len()));

        prop_assert_eq!(left.to_vec(), naive(TermOp::Add, &zeros, &x));
        prop_assert_eq!(right.to_vec(), naive(TermOp::Add, &x, &zeros));
        prop_assert_eq!(left.to_vec(), x);
    }

    #[test]
    fn test_zero_operand_in_expression(x in prop::collection::vec(-1.0e6..1.0e6, 4), y in prop::collection::vec(-1.0e6..1.0e6, 4)) {
        // x * 0 + y
        let program = TermExpression::new().term().multiply().term().add().term().compile();
        let combiner = TermCombiner::new(4);
        let operands = [Term::from(x.clone()), combiner.zero(), Term::from(y.clone())];
        let result = combiner.evaluate(&program, &operands).unwrap();

        let expected = naive(TermOp::Add, &naive(TermOp::Multiply, &x, &[0.0; 4]), &y);
        prop_assert_eq!(result.to_vec(), expected);
    }
}

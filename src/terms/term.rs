//! Term values and the fixed term operators.

use std::sync::Arc;

use log::trace;

use crate::tokens::Tier;

/// A fixed-length numeric array flowing through a term expression.
///
/// The all-zero array gets its own variant, so the zero shortcut is decided
/// by the tag alone. A `Data` array that happens to hold only zeros is
/// treated like any other data.
///
/// Terms are immutable. Operators always build a new array or hand back one
/// of their inputs untouched, so no value is ever changed under a holder.
///
/// # Examples
///
/// ```
/// use sigcalc::Term;
///
/// let t = Term::from(vec![1.0, 2.0]);
/// assert_eq!(t.len(), 2);
/// assert!(!t.is_zero());
/// assert!(Term::Zero(2).is_zero());
/// assert_eq!(Term::Zero(2).to_vec(), vec![0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// The canonical zero array of the given length.
    Zero(usize),
    /// Any other array.
    Data(Arc<[f64]>),
}

impl Term {
    pub fn len(&self) -> usize {
        match self {
            Term::Zero(len) => *len,
            Term::Data(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true only for the tagged [`Term::Zero`] variant.
    pub fn is_zero(&self) -> bool {
        matches!(self, Term::Zero(_))
    }

    /// Value at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn get(&self, i: usize) -> f64 {
        match self {
            Term::Zero(len) => {
                assert!(i < *len, "index {i} out of bounds for zero term of length {len}");
                0.0
            }
            Term::Data(values) => values[i],
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Term::Zero(len) => vec![0.0; *len],
            Term::Data(values) => values.to_vec(),
        }
    }

    fn zip_with(&self, other: &Term, f: impl Fn(f64, f64) -> f64) -> Term {
        assert_eq!(
            self.len(),
            other.len(),
            "term operands must have the same length"
        );
        let values: Arc<[f64]> = (0..self.len())
            .map(|i| f(self.get(i), other.get(i)))
            .collect();
        Term::Data(values)
    }
}

impl From<Vec<f64>> for Term {
    fn from(values: Vec<f64>) -> Self {
        Term::Data(values.into())
    }
}

impl From<&[f64]> for Term {
    fn from(values: &[f64]) -> Self {
        Term::Data(values.into())
    }
}

impl From<Arc<[f64]>> for Term {
    fn from(values: Arc<[f64]>) -> Self {
        Term::Data(values)
    }
}

/// The arithmetic operators available between terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermOp {
    Add,
    Subtract,
    Multiply,
}

impl TermOp {
    /// Precedence tier the operator is registered at.
    pub fn tier(self) -> Tier {
        match self {
            TermOp::Add | TermOp::Subtract => Tier::First,
            TermOp::Multiply => Tier::Second,
        }
    }

    /// Combines two terms elementwise, `left` first.
    ///
    /// Adding the zero term returns the other operand as is, and multiplying
    /// by the zero term returns the zero term without touching the other
    /// operand's values.
    ///
    /// # Panics
    ///
    /// Panics if the operands differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigcalc::{Term, TermOp};
    ///
    /// let a = Term::from(vec![1.0, 2.0]);
    /// let b = Term::from(vec![10.0, 20.0]);
    /// assert_eq!(TermOp::Subtract.apply(a.clone(), b).to_vec(), vec![-9.0, -18.0]);
    /// assert_eq!(TermOp::Multiply.apply(a, Term::Zero(2)), Term::Zero(2));
    /// ```
    pub fn apply(self, left: Term, right: Term) -> Term {
        assert_eq!(
            left.len(),
            right.len(),
            "term operands must have the same length"
        );
        match self {
            TermOp::Add if left.is_zero() => {
                trace!("add: left operand is zero");
                right
            }
            TermOp::Add if right.is_zero() => {
                trace!("add: right operand is zero");
                left
            }
            TermOp::Multiply if left.is_zero() => {
                trace!("multiply: left operand is zero");
                left
            }
            TermOp::Multiply if right.is_zero() => {
                trace!("multiply: right operand is zero");
                right
            }
            TermOp::Add => left.zip_with(&right, |l, r| l + r),
            TermOp::Subtract => left.zip_with(&right, |l, r| l - r),
            TermOp::Multiply => left.zip_with(&right, |l, r| l * r),
        }
    }

    /// Symbol shown on the calculator strip.
    pub fn symbol(self) -> char {
        match self {
            TermOp::Add => '+',
            TermOp::Subtract => '-',
            TermOp::Multiply => '*',
        }
    }
}

//! Compiled postfix programs.

use std::fmt;

use crate::tokens::PostfixToken;

/// An expression in evaluation order, with parentheses removed.
///
/// A program is produced once by [`compile`](crate::compile) and never
/// changes afterwards. It can be evaluated any number of times, from any
/// number of threads when `O` allows it.
#[derive(Debug, Clone, PartialEq)]
pub struct PostfixProgram<O> {
    pub(crate) tokens: Vec<PostfixToken>,
    pub(crate) operators: Vec<O>,
}

impl<O> PostfixProgram<O> {
    /// A program with no tokens.
    pub fn empty() -> Self {
        Self {
            tokens: Vec::new(),
            operators: Vec::new(),
        }
    }

    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    /// Operator payloads, one per non-operand token, in evaluation order.
    pub fn operators(&self) -> &[O] {
        &self.operators
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of operand values one evaluation consumes.
    pub fn operand_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|&&t| t == PostfixToken::Operand)
            .count()
    }

    /// Walks the program, pairing each operator token with its payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigcalc::{InfixSequence, PostfixToken, Tier};
    ///
    /// let mut infix = InfixSequence::new();
    /// infix.operand().binary(Tier::First, '-').operand();
    /// let program = infix.compile();
    ///
    /// let steps: Vec<_> = program.steps().collect();
    /// assert_eq!(steps[0], (PostfixToken::Operand, None));
    /// assert_eq!(steps[2], (PostfixToken::Binary(Tier::First), Some(&'-')));
    /// ```
    pub fn steps(&self) -> Steps<'_, O> {
        Steps {
            tokens: self.tokens.iter(),
            operators: self.operators.iter(),
        }
    }
}

/// Iterator returned by [`PostfixProgram::steps`].
pub struct Steps<'a, O> {
    tokens: std::slice::Iter<'a, PostfixToken>,
    operators: std::slice::Iter<'a, O>,
}

impl<'a, O> Iterator for Steps<'a, O> {
    type Item = (PostfixToken, Option<&'a O>);

    fn next(&mut self) -> Option<Self::Item> {
        let token = *self.tokens.next()?;
        let op = match token {
            PostfixToken::Operand => None,
            PostfixToken::Unary(_) | PostfixToken::Binary(_) => self.operators.next(),
        };
        Some((token, op))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

impl<O> Default for PostfixProgram<O> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<O> fmt::Display for PostfixProgram<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

//! Infix token sequences as arranged by the user.

use crate::tokens::{Tier, TokenKind};
use crate::{PostfixProgram, compile};

/// An infix token sequence and its operator payloads.
///
/// Tokens are kept in the order the user placed them. Every `Binary` or
/// `Unary` token owns exactly one payload in `operators`, in the same
/// left-to-right order.
///
/// # Examples
///
/// ```
/// use sigcalc::{InfixSequence, Tier};
///
/// // a + b
/// let mut infix = InfixSequence::new();
/// infix.operand().binary(Tier::First, '+').operand();
/// assert_eq!(infix.len(), 3);
/// assert_eq!(infix.operand_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InfixSequence<O> {
    tokens: Vec<TokenKind>,
    operators: Vec<O>,
}

impl<O> InfixSequence<O> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Builds a sequence from separately assembled parts.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` contains `EndOfList`, or if the number of operator
    /// tokens differs from `operators.len()`. Both indicate a bug in whatever
    /// assembled the token strip.
    pub fn from_parts(tokens: Vec<TokenKind>, operators: Vec<O>) -> Self {
        assert!(
            !tokens.contains(&TokenKind::EndOfList),
            "EndOfList is reserved for the compiler"
        );
        let expected = tokens.iter().filter(|t| t.is_operator()).count();
        assert_eq!(
            expected,
            operators.len(),
            "infix sequence has {expected} operator tokens but {} operator payloads",
            operators.len()
        );
        Self { tokens, operators }
    }

    /// Appends an operand token.
    pub fn operand(&mut self) -> &mut Self {
        self.tokens.push(TokenKind::Operand);
        self
    }

    /// Appends a binary operator at the given tier.
    pub fn binary(&mut self, tier: Tier, op: O) -> &mut Self {
        self.tokens.push(TokenKind::Binary(tier));
        self.operators.push(op);
        self
    }

    /// Appends a unary operator at the given tier.
    pub fn unary(&mut self, tier: Tier, op: O) -> &mut Self {
        self.tokens.push(TokenKind::Unary(tier));
        self.operators.push(op);
        self
    }

    /// Appends a left parenthesis.
    pub fn open(&mut self) -> &mut Self {
        self.tokens.push(TokenKind::LeftParen);
        self
    }

    /// Appends a right parenthesis.
    pub fn close(&mut self) -> &mut Self {
        self.tokens.push(TokenKind::RightParen);
        self
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[TokenKind] {
        &self.tokens
    }

    pub fn operators(&self) -> &[O] {
        &self.operators
    }

    /// Number of operand tokens, i.e. how many values an evaluation pulls.
    pub fn operand_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|&&t| t == TokenKind::Operand)
            .count()
    }

    /// Splits the sequence back into tokens and payloads.
    pub fn into_parts(self) -> (Vec<TokenKind>, Vec<O>) {
        (self.tokens, self.operators)
    }

    /// Compiles this sequence into a postfix program, consuming it.
    pub fn compile(self) -> PostfixProgram<O> {
        compile(self.tokens, self.operators)
    }
}

impl<O> Default for InfixSequence<O> {
    fn default() -> Self {
        Self::new()
    }
}

//! Token model and priority table.
//!
//! Every token a calculator strip can hold has a kind, and every kind has a
//! pair of priorities: one used while the token is being read from the input,
//! one used while it sits on the compiler's stack. The gap between the two is
//! what gives parentheses their barrier behavior.

use std::fmt;

/// Precedence class of an operator.
///
/// Operators of a higher tier bind more tightly than operators of the same
/// arity in a lower tier. Every unary tier binds more tightly than every
/// binary tier.
///
/// # Examples
///
/// ```
/// use sigcalc::Tier;
///
/// assert!(Tier::Third.precedence() > Tier::First.precedence());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    First,
    Second,
    Third,
}

impl Tier {
    /// Precedence level of this tier (1, 2 or 3).
    pub fn precedence(self) -> u8 {
        match self {
            Tier::First => 1,
            Tier::Second => 2,
            Tier::Third => 3,
        }
    }
}

/// Kind of a token in an infix sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Sentinel seeding the compiler stack. Never part of user input.
    EndOfList,
    /// A leaf value.
    Operand,
    /// An operator taking a left and a right value.
    Binary(Tier),
    /// A prefix operator taking the value that follows it.
    Unary(Tier),
    LeftParen,
    RightParen,
}

/// Input and stack priority of a token kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Priority {
    /// Priority of the token while it is being scanned.
    pub input: i8,
    /// Priority of the token while it waits on the stack.
    pub stack: i8,
}

const END_OF_LIST: i8 = -1;
const BARRIER: i8 = 0;
const BINARY_BASE: i8 = 0;
const UNARY_BASE: i8 = 3;
const OPERAND: i8 = 7;

/// Looks up the priority pair of a token kind.
///
/// # Examples
///
/// ```
/// use sigcalc::{priority_of, Tier, TokenKind};
///
/// let add = priority_of(TokenKind::Binary(Tier::First));
/// let mul = priority_of(TokenKind::Binary(Tier::Second));
/// assert!(mul.stack > add.stack);
/// assert_eq!(priority_of(TokenKind::LeftParen).stack, 0);
/// ```
pub fn priority_of(kind: TokenKind) -> Priority {
    let (input, stack) = match kind {
        TokenKind::EndOfList => (END_OF_LIST, END_OF_LIST),
        TokenKind::Operand => (OPERAND, OPERAND),
        TokenKind::Binary(tier) => {
            let p = BINARY_BASE + tier.precedence() as i8;
            (p, p)
        }
        TokenKind::Unary(tier) => {
            let p = UNARY_BASE + tier.precedence() as i8;
            (p, p)
        }
        TokenKind::LeftParen => (OPERAND, BARRIER),
        TokenKind::RightParen => (BARRIER, OPERAND),
    };
    Priority { input, stack }
}

impl TokenKind {
    /// Shorthand for [`priority_of`].
    pub fn priority(self) -> Priority {
        priority_of(self)
    }

    /// Returns true for `LeftParen` and `RightParen`.
    pub fn is_paren(self) -> bool {
        matches!(self, TokenKind::LeftParen | TokenKind::RightParen)
    }

    /// Returns true for tokens that carry an operator payload.
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::Binary(_) | TokenKind::Unary(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::EndOfList => f.write_str("$"),
            TokenKind::Operand => f.write_str("x"),
            TokenKind::Binary(tier) => write!(f, "b{}", tier.precedence()),
            TokenKind::Unary(tier) => write!(f, "u{}", tier.precedence()),
            TokenKind::LeftParen => f.write_str("("),
            TokenKind::RightParen => f.write_str(")"),
        }
    }
}

/// A token that may appear in a compiled postfix program.
///
/// Parentheses and the end-of-list sentinel never survive compilation, so
/// they have no representation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostfixToken {
    Operand,
    Unary(Tier),
    Binary(Tier),
}

impl From<PostfixToken> for TokenKind {
    fn from(token: PostfixToken) -> Self {
        match token {
            PostfixToken::Operand => TokenKind::Operand,
            PostfixToken::Unary(tier) => TokenKind::Unary(tier),
            PostfixToken::Binary(tier) => TokenKind::Binary(tier),
        }
    }
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TokenKind::from(*self).fmt(f)
    }
}

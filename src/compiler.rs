//! Infix to postfix compilation.
//!
//! The compiler is a two-stack precedence climber. Tokens go onto a token
//! stack, their operator payloads onto a parallel operator stack, and every
//! incoming token first evicts whatever on the token stack binds at least as
//! tightly as it does. Evicted tokens form the postfix program.

use log::debug;

use crate::program::PostfixProgram;
use crate::tokens::{PostfixToken, TokenKind};

/// Compiles an infix token sequence into a postfix program.
///
/// `operators` holds one payload per `Binary`/`Unary` token of `tokens`, in
/// the same order. Compilation never fails: unbalanced parentheses are
/// dropped, and any shape problem they leave behind is reported when the
/// program is evaluated.
///
/// # Panics
///
/// Panics if the number of payloads in `operators` differs from the number
/// of operator tokens in `tokens`, or if `tokens` contains
/// [`TokenKind::EndOfList`].
///
/// # Examples
///
/// ```
/// use sigcalc::{compile, Tier, TokenKind};
///
/// // a + b * c
/// let tokens = vec![
///     TokenKind::Operand,
///     TokenKind::Binary(Tier::First),
///     TokenKind::Operand,
///     TokenKind::Binary(Tier::Second),
///     TokenKind::Operand,
/// ];
/// let program = compile(tokens, vec!['+', '*']);
/// assert_eq!(program.to_string(), "x x x b2 b1");
/// assert_eq!(program.operators(), &['*', '+']);
/// ```
pub fn compile<O>(
    tokens: impl IntoIterator<Item = TokenKind>,
    operators: impl IntoIterator<Item = O>,
) -> PostfixProgram<O> {
    let mut infix_ops = operators.into_iter();
    let mut compiler = Compiler::new();
    let mut read = 0usize;

    for token in tokens {
        read += 1;
        assert!(
            token != TokenKind::EndOfList,
            "end-of-list token at infix position {read} is reserved for the compiler"
        );
        compiler.evict_for(token);
        let op = if token.is_operator() {
            Some(
                infix_ops
                    .next()
                    .unwrap_or_else(|| panic!("no operator payload for token {read} ({token})")),
            )
        } else {
            None
        };
        compiler.push(token, op);
    }

    let unused = infix_ops.count();
    assert!(unused == 0, "{unused} unused operator payloads after {read} infix tokens");

    let program = compiler.finish();
    debug!(
        "compiled {} infix tokens into {} postfix tokens: {}",
        read,
        program.len(),
        program
    );
    program
}

struct Compiler<O> {
    tokens: Vec<TokenKind>,
    operators: Vec<O>,
    output: PostfixProgram<O>,
}

impl<O> Compiler<O> {
    fn new() -> Self {
        Self {
            tokens: vec![TokenKind::EndOfList],
            operators: Vec::new(),
            output: PostfixProgram::empty(),
        }
    }

    /// Pops every stacked token that binds at least as tightly as `incoming`.
    fn evict_for(&mut self, incoming: TokenKind) {
        let input = incoming.priority().input;
        while let Some(&top) = self.tokens.last() {
            if input > top.priority().stack {
                break;
            }
            self.pop();
            // A right paren closes only the group it matches.
            if incoming == TokenKind::RightParen && top == TokenKind::LeftParen {
                break;
            }
        }
    }

    fn push(&mut self, token: TokenKind, op: Option<O>) {
        self.tokens.push(token);
        if let Some(op) = op {
            self.operators.push(op);
        }
    }

    /// Moves the top of the token stack to the output, dropping parens.
    fn pop(&mut self) -> Option<TokenKind> {
        let token = self.tokens.pop()?;
        let emitted = match token {
            TokenKind::EndOfList | TokenKind::LeftParen | TokenKind::RightParen => None,
            TokenKind::Operand => Some(PostfixToken::Operand),
            TokenKind::Unary(tier) => Some(PostfixToken::Unary(tier)),
            TokenKind::Binary(tier) => Some(PostfixToken::Binary(tier)),
        };
        if let Some(emitted) = emitted {
            if emitted != PostfixToken::Operand {
                // Pushed together with its token, so the stacks never disagree.
                if let Some(op) = self.operators.pop() {
                    self.output.operators.push(op);
                }
            }
            self.output.tokens.push(emitted);
        }
        Some(token)
    }

    fn finish(mut self) -> PostfixProgram<O> {
        while let Some(token) = self.pop() {
            if token == TokenKind::EndOfList {
                break;
            }
        }
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InfixSequence;
    use crate::tokens::Tier;

    fn rendered(infix: InfixSequence<char>) -> (String, String) {
        let program = infix.compile();
        let ops: String = program.operators().iter().collect();
        (program.to_string(), ops)
    }

    #[test]
    fn test_single_operand() {
        let mut infix = InfixSequence::new();
        infix.operand();
        assert_eq!(rendered(infix), ("x".to_string(), String::new()));
    }

    #[test]
    fn test_empty_input() {
        let program = compile::<char>(Vec::new(), Vec::new());
        assert!(program.is_empty());
        assert!(program.operators().is_empty());
    }

    #[test]
    fn test_precedence() {
        let mut infix = InfixSequence::new();
        infix
            .operand()
            .binary(Tier::First, '+')
            .operand()
            .binary(Tier::Second, '*')
            .operand();
        assert_eq!(rendered(infix), ("x x x b2 b1".to_string(), "*+".to_string()));
    }

    #[test]
    fn test_left_associative() {
        let mut infix = InfixSequence::new();
        infix
            .operand()
            .binary(Tier::First, '-')
            .operand()
            .binary(Tier::First, '+')
            .operand();
        assert_eq!(rendered(infix), ("x x b1 x b1".to_string(), "-+".to_string()));
    }

    #[test]
    fn test_parens_override_precedence() {
        let mut infix = InfixSequence::new();
        infix
            .open()
            .operand()
            .binary(Tier::First, '+')
            .operand()
            .close()
            .binary(Tier::Second, '*')
            .operand();
        assert_eq!(rendered(infix), ("x x b1 x b2".to_string(), "+*".to_string()));
    }

    #[test]
    fn test_right_paren_stops_at_its_group() {
        // x - (a + b) * c
        let mut infix = InfixSequence::new();
        infix
            .operand()
            .binary(Tier::First, '-')
            .open()
            .operand()
            .binary(Tier::First, '+')
            .operand()
            .close()
            .binary(Tier::Second, '*')
            .operand();
        assert_eq!(
            rendered(infix),
            ("x x x b1 x b2 b1".to_string(), "+*-".to_string())
        );
    }

    #[test]
    fn test_nested_parens() {
        // ((a + b)) * c
        let mut infix = InfixSequence::new();
        infix
            .open()
            .open()
            .operand()
            .binary(Tier::First, '+')
            .operand()
            .close()
            .close()
            .binary(Tier::Second, '*')
            .operand();
        assert_eq!(rendered(infix), ("x x b1 x b2".to_string(), "+*".to_string()));
    }

    #[test]
    fn test_unary_binds_tighter_than_binary() {
        let mut infix = InfixSequence::new();
        infix
            .unary(Tier::First, '~')
            .operand()
            .binary(Tier::Third, '^')
            .operand();
        assert_eq!(rendered(infix), ("x u1 x b3".to_string(), "~^".to_string()));
    }

    #[test]
    fn test_unary_after_binary() {
        // a * ~b
        let mut infix = InfixSequence::new();
        infix
            .operand()
            .binary(Tier::Second, '*')
            .unary(Tier::First, '~')
            .operand();
        assert_eq!(rendered(infix), ("x x u1 b2".to_string(), "~*".to_string()));
    }

    #[test]
    fn test_increasing_unary_tiers_nest() {
        // ~1 !2 a  ->  ~(!a)
        let mut infix = InfixSequence::new();
        infix
            .unary(Tier::First, '~')
            .unary(Tier::Second, '!')
            .operand();
        assert_eq!(rendered(infix), ("x u2 u1".to_string(), "!~".to_string()));
    }

    #[test]
    fn test_unbalanced_parens_are_dropped() {
        let mut open_only = InfixSequence::new();
        open_only.open().operand().binary(Tier::First, '+').operand();
        assert_eq!(rendered(open_only), ("x x b1".to_string(), "+".to_string()));

        let mut close_only = InfixSequence::new();
        close_only.operand().binary(Tier::First, '+').operand().close();
        assert_eq!(rendered(close_only), ("x x b1".to_string(), "+".to_string()));
    }

    #[test]
    fn test_operator_before_operand_compiles() {
        let mut infix = InfixSequence::new();
        infix.binary(Tier::First, '+').operand();
        assert_eq!(rendered(infix), ("x b1".to_string(), "+".to_string()));
    }

    #[test]
    #[should_panic(expected = "no operator payload")]
    fn test_missing_payload_panics() {
        compile::<char>(vec![TokenKind::Unary(Tier::First)], Vec::new());
    }

    #[test]
    #[should_panic(expected = "1 unused operator payloads")]
    fn test_extra_payload_panics() {
        compile(vec![TokenKind::Operand], vec!['+']);
    }

    #[test]
    #[should_panic(expected = "1 unused operator payloads")]
    fn test_surplus_payload_is_not_shifted_onto_operators() {
        // a + b with two payloads: '-' would bind to the only binary token
        compile(
            vec![
                TokenKind::Operand,
                TokenKind::Binary(Tier::First),
                TokenKind::Operand,
            ],
            vec!['-', '+'],
        );
    }

    #[test]
    #[should_panic(expected = "reserved for the compiler")]
    fn test_end_of_list_input_panics() {
        compile::<char>(vec![TokenKind::Operand, TokenKind::EndOfList], Vec::new());
    }
}

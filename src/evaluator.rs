//! Postfix stack machine.

use log::trace;

use crate::error::{EvalError, EvalResult};
use crate::program::PostfixProgram;
use crate::tokens::PostfixToken;

/// Runs a postfix program against a supply of operand values.
///
/// Operand values are pulled from `operands` lazily, one per operand token,
/// in left-to-right order. `apply_unary` and `apply_binary` receive the
/// operator payload of the token being executed; `apply_binary` gets its
/// operands as `(left, right)` in the order they were written.
///
/// An empty program fails with [`EvalError::EmptyExpression`]; callers with
/// a meaningful default check [`PostfixProgram::is_empty`] first.
///
/// # Panics
///
/// Panics if `operands` runs dry before every operand token is served.
///
/// # Examples
///
/// ```
/// use sigcalc::{evaluate, InfixSequence, Tier};
///
/// // 10 - 4
/// let mut infix = InfixSequence::new();
/// infix.operand().binary(Tier::First, '-').operand();
/// let program = infix.compile();
///
/// let result = evaluate(
///     &program,
///     [10, 4],
///     |_, v: i32| -v,
///     |op, l, r| if *op == '-' { l - r } else { l + r },
/// );
/// assert_eq!(result, Ok(6));
/// ```
pub fn evaluate<O, V, I, U, B>(
    program: &PostfixProgram<O>,
    operands: I,
    mut apply_unary: U,
    mut apply_binary: B,
) -> EvalResult<V>
where
    I: IntoIterator<Item = V>,
    U: FnMut(&O, V) -> V,
    B: FnMut(&O, V, V) -> V,
{
    let mut operands = operands.into_iter();
    let mut stack: Vec<V> = Vec::with_capacity(program.operand_count());

    for (position, (token, op)) in program.steps().enumerate() {
        trace!("step {position}: {token} (depth {})", stack.len());
        match (token, op) {
            (PostfixToken::Operand, _) => {
                let value = operands.next().unwrap_or_else(|| {
                    panic!("operand supply exhausted at postfix position {position}")
                });
                stack.push(value);
            }
            (PostfixToken::Unary(_), Some(op)) => {
                let value = stack.pop().ok_or(EvalError::Underflow { position })?;
                stack.push(apply_unary(op, value));
            }
            (PostfixToken::Binary(_), Some(op)) => {
                // Pushed left then right, so right comes off first.
                let right = stack.pop().ok_or(EvalError::Underflow { position })?;
                let left = stack.pop().ok_or(EvalError::Underflow { position })?;
                stack.push(apply_binary(op, left, right));
            }
            (PostfixToken::Unary(_) | PostfixToken::Binary(_), None) => {
                unreachable!("compiled programs pair every operator token with a payload")
            }
        }
    }

    let result = stack.pop().ok_or(EvalError::EmptyExpression)?;
    if !stack.is_empty() {
        return Err(EvalError::TooManyOperands {
            remaining: stack.len() + 1,
        });
    }
    Ok(result)
}

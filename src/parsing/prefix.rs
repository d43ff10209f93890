
use super::operator::is_operator;
use crate::stack::{Stack, StackError};

/// Translates a prefix (Polish) expression to postfix. Tokens are
/// processed in reverse order: operands are pushed as-is, and each
/// operator combines the two most recently pushed subexpressions into
/// one. The first popped subexpression becomes the operator's left
/// operand, which keeps the operands in their original left-to-right
/// order. Note that this is the mirror of the pop order in
/// [`evaluate_postfix`](super::postfix::evaluate_postfix).
///
/// An operator short of operands fails with [`StackError::Underflow`];
/// any surplus elements left behind by malformed input are ignored,
/// and the top of the stack is the result.
pub fn prefix_to_postfix(expression: &str) -> Result<String, StackError> {
  let mut stack: Stack<String> = Stack::new();
  for token in expression.split(' ').rev() {
    if is_operator(token) {
      stack.check_stack_size(2)?;
      let lhs = stack.pop().unwrap(); // unwrap: stack size checked above
      let rhs = stack.pop().unwrap(); // unwrap: stack size checked above
      stack.push(format!("{} {} {}", lhs, rhs, token));
    } else {
      stack.push(token.to_owned());
    }
  }
  stack.pop().ok_or(StackError::Underflow { expected: 1, actual: 0 })
}

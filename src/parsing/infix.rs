
use super::operator::{is_operator, OperatorTable};
use crate::stack::Stack;

use once_cell::sync::Lazy;

/// Converts an infix expression with explicit `(` and `)` tokens to
/// postfix, ranking operators with
/// [`OperatorTable::common_operators`].
pub fn infix_to_postfix(expression: &str) -> String {
  static OPERATORS: Lazy<OperatorTable> = Lazy::new(OperatorTable::common_operators);
  infix_to_postfix_with(&OPERATORS, expression)
}

/// As [`infix_to_postfix`], but with a caller-supplied operator table.
///
/// Standard shunting yard over space-separated tokens, single pass.
/// `(` is pushed unconditionally; `)` pops and emits until its `(` is
/// found, which is discarded. An operator pops and emits every
/// stacked token whose rank is greater than or equal to its own
/// before being pushed, so equal-precedence operators resolve
/// left-to-right. The comparison consults table ranks only, with no
/// special case for `(` on the stack; an incoming unranked operator
/// (`^` under the common table) therefore flushes the whole stack.
/// Operands are emitted in place, and whatever remains on the stack
/// is emitted at end of input.
pub fn infix_to_postfix_with(table: &OperatorTable, expression: &str) -> String {
  let mut output: Vec<&str> = Vec::new();
  let mut stack: Stack<&str> = Stack::new();
  for token in expression.split(' ') {
    if token == "(" {
      stack.push(token);
    } else if token == ")" {
      while let Some(top) = stack.pop() {
        if top == "(" {
          break;
        }
        output.push(top);
      }
    } else if is_operator(token) {
      while stack.peek().is_some_and(|&top| table.precedence(top) >= table.precedence(token)) {
        output.push(stack.pop().unwrap()); // unwrap: peek returned Some
      }
      stack.push(token);
    } else {
      output.push(token);
    }
  }
  while let Some(top) = stack.pop() {
    output.push(top);
  }
  output.join(" ")
}

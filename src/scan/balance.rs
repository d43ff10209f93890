
use crate::stack::Stack;

use once_cell::sync::Lazy;

use std::collections::HashMap;

/// Mapping from each closing bracket to its matching opening bracket.
static BRACKET_PAIRS: Lazy<HashMap<char, char>> = Lazy::new(|| {
  HashMap::from([
    (')', '('),
    ('}', '{'),
    (']', '['),
  ])
});

fn is_opening_bracket(ch: char) -> bool {
  BRACKET_PAIRS.values().any(|&opener| opener == ch)
}

/// True if every bracket in the expression is closed by its matching
/// bracket in the correct nesting order. Characters other than the
/// three bracket pairs are ignored, so ordinary text can appear
/// around and between brackets.
pub fn is_balanced(expression: &str) -> bool {
  let mut stack: Stack<char> = Stack::new();
  for ch in expression.chars() {
    if is_opening_bracket(ch) {
      stack.push(ch);
    } else if let Some(&opener) = BRACKET_PAIRS.get(&ch) {
      // A closer with no opener on the stack, or with the wrong one,
      // fails immediately.
      if stack.pop() != Some(opener) {
        return false;
      }
    }
  }
  stack.is_empty()
}

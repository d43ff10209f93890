
use crate::stack::Stack;

/// Computes the length of the longest contiguous well-formed
/// parenthesis substring. The stack holds the indices of unmatched
/// `(` characters, seeded with a sentinel one position before the
/// string so that a match starting at index 0 measures correctly.
/// Any character other than `(` is treated as a closer. O(n), single
/// pass.
pub fn longest_valid_parentheses(input: &str) -> usize {
  let mut stack: Stack<i64> = Stack::new();
  stack.push(-1);
  let mut max_length: i64 = 0;
  for (position, ch) in input.chars().enumerate() {
    let position = position as i64;
    if ch == '(' {
      stack.push(position);
    } else {
      let _ = stack.pop();
      match stack.peek() {
        // Every opener before this point is spent; this closer is the
        // new base for future matches.
        None => stack.push(position),
        Some(&base) => max_length = max_length.max(position - base),
      }
    }
  }
  max_length as usize
}


use super::structure::Stack;

/// Sorts the given stack using a second stack as scratch space, an
/// insertion sort by stack transfer. After sorting, the smallest
/// element is on top, so repeated pops observe the elements in
/// ascending order. O(n²) worst case.
///
/// The stack is consumed and returned, so the caller's binding is
/// replaced wholesale rather than observed mid-sort.
pub fn sort_stack<T: Ord>(mut stack: Stack<T>) -> Stack<T> {
  let mut holding: Stack<T> = Stack::new();
  while let Some(element) = stack.pop() {
    // Displace anything larger than the current element back onto the
    // input stack; it will be re-drained on a later iteration.
    while holding.peek().is_some_and(|top| *top > element) {
      stack.push(holding.pop().unwrap()); // unwrap: peek returned Some
    }
    holding.push(element);
  }
  // The holding stack now has its largest element on top.
  while let Some(element) = holding.pop() {
    stack.push(element);
  }
  stack
}

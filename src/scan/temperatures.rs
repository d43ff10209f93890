
use crate::stack::Stack;

/// For each day, computes the number of days until a strictly warmer
/// temperature, or zero if no warmer day follows. Classic monotonic
/// stack: the stack holds indices of days still waiting for a warmer
/// one, coldest on top. Each index is pushed and popped at most once,
/// so the scan is O(n) amortized.
pub fn daily_temperatures(temperatures: &[i32]) -> Vec<usize> {
  let mut result = vec![0; temperatures.len()];
  let mut pending: Stack<usize> = Stack::new();
  for (day, &temperature) in temperatures.iter().enumerate() {
    while pending.peek().is_some_and(|&earlier| temperatures[earlier] < temperature) {
      let earlier = pending.pop().unwrap(); // unwrap: peek returned Some
      result[earlier] = day - earlier;
    }
    pending.push(day);
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_daily_temperatures() {
    assert_eq!(
      daily_temperatures(&[73, 74, 75, 71, 69, 72, 76, 73]),
      vec![1, 1, 4, 2, 1, 1, 0, 0],
    );
  }

  #[test]
  fn test_daily_temperatures_increasing() {
    assert_eq!(daily_temperatures(&[60, 61, 62, 63]), vec![1, 1, 1, 0]);
  }

  #[test]
  fn test_daily_temperatures_decreasing() {
    assert_eq!(daily_temperatures(&[63, 62, 61, 60]), vec![0, 0, 0, 0]);
  }

  #[test]
  fn test_daily_temperatures_equal_days_do_not_count() {
    // A warmer day must be strictly warmer.
    assert_eq!(daily_temperatures(&[70, 70, 70]), vec![0, 0, 0]);
    assert_eq!(daily_temperatures(&[70, 70, 71]), vec![2, 1, 0]);
  }

  #[test]
  fn test_daily_temperatures_empty() {
    assert_eq!(daily_temperatures(&[]), Vec::<usize>::new());
  }

  #[test]
  fn test_daily_temperatures_single_day() {
    assert_eq!(daily_temperatures(&[68]), vec![0]);
  }
}

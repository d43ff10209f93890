
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StackError {
  #[error("Expected at least {expected} stack elements, found {actual}.")]
  Underflow {
    expected: usize,
    actual: usize,
  },
}


use super::operator::is_operator;
use crate::stack::{Stack, StackError};

use num::Zero;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum PostfixEvalError {
  #[error("{0}")]
  StackError(#[from] StackError),
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Invalid operand {token:?}")]
  InvalidOperand { token: String },
}

/// Evaluates a postfix (reverse Polish) expression whose tokens are
/// separated by single spaces. Operand tokens are parsed as integers,
/// but arithmetic is carried out in `f64`, so division can produce
/// fractional results.
///
/// An operator pops its right operand first and its left operand
/// second. An expression which leaves an operator short of operands
/// fails with [`StackError::Underflow`]; any surplus elements left
/// behind by malformed input are ignored, and the top of the stack is
/// the result.
pub fn evaluate_postfix(expression: &str) -> Result<f64, PostfixEvalError> {
  let mut stack: Stack<f64> = Stack::new();
  for token in expression.split(' ') {
    if is_operator(token) {
      stack.check_stack_size(2)?;
      let rhs = stack.pop().unwrap(); // unwrap: stack size checked above
      let lhs = stack.pop().unwrap(); // unwrap: stack size checked above
      stack.push(apply_operator(token, lhs, rhs)?);
    } else {
      let operand = token.parse::<i64>().map_err(|_| {
        PostfixEvalError::InvalidOperand { token: token.to_owned() }
      })?;
      stack.push(operand as f64);
    }
  }
  stack.pop().ok_or_else(|| StackError::Underflow { expected: 1, actual: 0 }.into())
}

fn apply_operator(operator: &str, lhs: f64, rhs: f64) -> Result<f64, PostfixEvalError> {
  match operator {
    "*" => Ok(lhs * rhs),
    "-" => Ok(lhs - rhs),
    "+" => Ok(lhs + rhs),
    "/" => {
      if rhs.is_zero() {
        Err(PostfixEvalError::DivisionByZero)
      } else {
        Ok(lhs / rhs)
      }
    }
    "^" => Ok(lhs.powf(rhs)),
    _ => panic!("apply_operator requires an operator token, got {:?}", operator),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_evaluate_postfix_addition() {
    assert_abs_diff_eq!(evaluate_postfix("2 3 +").unwrap(), 5.0);
  }

  #[test]
  fn test_evaluate_postfix_division() {
    assert_abs_diff_eq!(evaluate_postfix("4 2 /").unwrap(), 2.0);
    assert_abs_diff_eq!(evaluate_postfix("5 2 /").unwrap(), 2.5);
  }

  #[test]
  fn test_evaluate_postfix_operand_order() {
    // The right operand is popped first.
    assert_abs_diff_eq!(evaluate_postfix("5 3 -").unwrap(), 2.0);
    assert_abs_diff_eq!(evaluate_postfix("3 5 -").unwrap(), -2.0);
  }

  #[test]
  fn test_evaluate_postfix_exponentiation() {
    assert_abs_diff_eq!(evaluate_postfix("2 3 ^").unwrap(), 8.0);
    assert_abs_diff_eq!(evaluate_postfix("3 2 ^").unwrap(), 9.0);
  }

  #[test]
  fn test_evaluate_postfix_compound() {
    assert_abs_diff_eq!(evaluate_postfix("2 3 4 * +").unwrap(), 14.0);
    assert_abs_diff_eq!(evaluate_postfix("2 3 + 4 *").unwrap(), 20.0);
  }

  #[test]
  fn test_evaluate_postfix_single_operand() {
    assert_abs_diff_eq!(evaluate_postfix("7").unwrap(), 7.0);
  }

  #[test]
  fn test_evaluate_postfix_negative_operand() {
    assert_abs_diff_eq!(evaluate_postfix("-3 4 +").unwrap(), 1.0);
  }

  #[test]
  fn test_evaluate_postfix_division_by_zero() {
    assert_eq!(
      evaluate_postfix("5 0 /"),
      Err(PostfixEvalError::DivisionByZero),
    );
  }

  #[test]
  fn test_evaluate_postfix_division_by_computed_zero() {
    assert_eq!(
      evaluate_postfix("5 3 3 - /"),
      Err(PostfixEvalError::DivisionByZero),
    );
  }

  #[test]
  fn test_evaluate_postfix_underflow() {
    assert_eq!(
      evaluate_postfix("2 +"),
      Err(PostfixEvalError::StackError(StackError::Underflow { expected: 2, actual: 1 })),
    );
    assert_eq!(
      evaluate_postfix("+"),
      Err(PostfixEvalError::StackError(StackError::Underflow { expected: 2, actual: 0 })),
    );
  }

  #[test]
  fn test_evaluate_postfix_invalid_operand() {
    assert_eq!(
      evaluate_postfix("2 x +"),
      Err(PostfixEvalError::InvalidOperand { token: String::from("x") }),
    );
    assert_eq!(
      evaluate_postfix(""),
      Err(PostfixEvalError::InvalidOperand { token: String::new() }),
    );
  }
}


//! Conversion from infix to postfix (Reverse Polish) token order.

use super::operator::Operator;
use super::source::SourceOffset;
use super::token::{render_tokens, Token, TokenData};
use crate::error::EvaluationError;

use tracing::debug;

/// Scans the raw expression text and reports the first parenthesis
/// that has no partner: either a `)` with nothing open, or the
/// innermost `(` still open at the end of the input.
pub fn check_balanced(expr: &str) -> Result<(), EvaluationError> {
  let mut open_parens: Vec<usize> = Vec::new();
  for (i, ch) in expr.char_indices() {
    match ch {
      '(' => open_parens.push(i),
      ')' => {
        if open_parens.pop().is_none() {
          return Err(EvaluationError::MismatchedParentheses(SourceOffset(i)));
        }
      }
      _ => {}
    }
  }
  match open_parens.pop() {
    None => Ok(()),
    Some(i) => Err(EvaluationError::MismatchedParentheses(SourceOffset(i))),
  }
}

/// Reorders an infix token sequence into postfix order. The output
/// contains only number and operator tokens.
///
/// Operators already on the stack are moved to the output when they
/// bind at least as tightly as the incoming operator, except that a
/// right-associative operator never displaces one of equal precedence.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvaluationError> {
  let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
  let mut operator_stack: Vec<Token> = Vec::new();

  for token in tokens {
    match &token.data {
      TokenData::Number(_) => output.push(token.clone()),
      TokenData::LeftParen => operator_stack.push(token.clone()),
      TokenData::RightParen => {
        loop {
          match operator_stack.pop() {
            Some(Token { data: TokenData::LeftParen, .. }) => break,
            Some(stack_token) => output.push(stack_token),
            None => return Err(EvaluationError::MismatchedParentheses(token.span.start)),
          }
        }
      }
      TokenData::Operator(op) => {
        // Pop operators until we hit one with lower precedence.
        while let Some(stack_token) = operator_stack.pop() {
          let applies_first = matches!(
            stack_token.data,
            TokenData::Operator(stack_op) if compare_precedence(stack_op, *op)
          );
          if applies_first {
            output.push(stack_token);
          } else {
            operator_stack.push(stack_token);
            break;
          }
        }
        operator_stack.push(token.clone());
      }
    }
  }

  // Pop remaining operators.
  while let Some(stack_token) = operator_stack.pop() {
    if stack_token.is_paren() {
      return Err(EvaluationError::MismatchedParentheses(stack_token.span.start));
    }
    output.push(stack_token);
  }

  debug!(postfix = %render_tokens(&output), "converted to postfix");
  Ok(output)
}

/// Whether `stack_op`, sitting on the operator stack, must be applied
/// before `current_op` is pushed.
fn compare_precedence(stack_op: Operator, current_op: Operator) -> bool {
  stack_op.precedence() > current_op.precedence() ||
    (stack_op.precedence() == current_op.precedence() && current_op.associativity().is_left_assoc())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::expr_tokenizer::tokenize;

  fn postfix(input: &str) -> String {
    let tokens = tokenize(input).unwrap();
    render_tokens(&to_postfix(&tokens).unwrap())
  }

  #[test]
  fn test_check_balanced_ok() {
    assert!(check_balanced("").is_ok());
    assert!(check_balanced("1 + 2").is_ok());
    assert!(check_balanced("((1) + (2 * (3)))").is_ok());
  }

  #[test]
  fn test_check_balanced_unclosed() {
    assert_eq!(check_balanced("(2+3"), Err(EvaluationError::MismatchedParentheses(SourceOffset(0))));
    assert_eq!(check_balanced("((2)+(3"), Err(EvaluationError::MismatchedParentheses(SourceOffset(5))));
  }

  #[test]
  fn test_check_balanced_unopened() {
    assert_eq!(check_balanced("2+3)"), Err(EvaluationError::MismatchedParentheses(SourceOffset(3))));
    assert_eq!(check_balanced(")("), Err(EvaluationError::MismatchedParentheses(SourceOffset(0))));
  }

  #[test]
  fn test_precedence() {
    assert_eq!(postfix("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix("2*3+4"), "2 3 * 4 +");
    assert_eq!(postfix("2+3^2*4"), "2 3 2 ^ 4 * +");
  }

  #[test]
  fn test_left_assoc() {
    assert_eq!(postfix("1-2-3"), "1 2 - 3 -");
    assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
    assert_eq!(postfix("7%4*2"), "7 4 % 2 *");
  }

  #[test]
  fn test_right_assoc() {
    assert_eq!(postfix("2^3^2"), "2 3 2 ^ ^");
  }

  #[test]
  fn test_parentheses_override_precedence() {
    assert_eq!(postfix("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix("3 + 4 * (2 - 1)"), "3 4 2 1 - * +");
    assert_eq!(postfix("((1))"), "1");
  }

  #[test]
  fn test_unary_minus_survives() {
    assert_eq!(postfix("-(2+3)"), "2 3 + -");
  }

  #[test]
  fn test_unopened_paren_in_tokens() {
    let tokens = tokenize("1)").unwrap();
    assert_eq!(to_postfix(&tokens), Err(EvaluationError::MismatchedParentheses(SourceOffset(1))));
  }

  #[test]
  fn test_unclosed_paren_in_tokens() {
    let tokens = tokenize("(1").unwrap();
    assert_eq!(to_postfix(&tokens), Err(EvaluationError::MismatchedParentheses(SourceOffset(0))));
  }

  #[test]
  fn test_empty() {
    assert_eq!(to_postfix(&[]), Ok(vec![]));
  }
}


use crate::parsing::operator::Operator;
use crate::parsing::source::SourceOffset;

use thiserror::Error;

/// Everything that can go wrong while evaluating a single expression.
/// None of these are fatal to the caller; each one aborts only the
/// evaluation that produced it.
#[derive(Debug, Clone, Error, PartialEq)]
#[non_exhaustive]
pub enum EvaluationError {
  #[error("Invalid character '{0}' at position {1}")]
  InvalidCharacter(char, SourceOffset),
  #[error("Invalid number '{0}' at position {1}")]
  InvalidNumber(String, SourceOffset),
  #[error("Mismatched parentheses at position {0}")]
  MismatchedParentheses(SourceOffset),
  #[error("Invalid expression: missing operands for '{operator}' at position {offset}")]
  MissingOperands {
    operator: Operator,
    offset: SourceOffset,
  },
  #[error("Invalid expression: leftover operands ({0} values remain)")]
  LeftoverOperands(usize),
  #[error("Empty expression")]
  EmptyExpression,
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Modulo by zero")]
  ModuloByZero,
  #[error("Invalid operator '{0}'")]
  InvalidOperator(char),
}


//! Evaluation of postfix token sequences.

use crate::error::EvaluationError;
use crate::parsing::operator::Operator;
use crate::parsing::token::{Token, TokenData};

use tracing::trace;

/// Evaluates a postfix token sequence with a single operand stack.
///
/// A `-` that finds exactly one value on the stack negates it. This is
/// how a unary minus that could not be folded into a literal, as in
/// `-(2+3)`, is resolved. Every other operator needs two values, the
/// top of the stack being its right-hand operand.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, EvaluationError> {
  let mut operands: Vec<f64> = Vec::new();
  for token in postfix {
    match token.data {
      TokenData::Number(n) => operands.push(n),
      TokenData::Operator(Operator::Sub) if operands.len() == 1 => {
        if let Some(value) = operands.last_mut() {
          *value = -*value;
        }
      }
      TokenData::Operator(op) => {
        let (a, b) = operands.pop()
          .and_then(|b| operands.pop().map(|a| (a, b)))
          .ok_or(EvaluationError::MissingOperands { operator: op, offset: token.span.start })?;
        operands.push(apply(a, b, op)?);
      }
      TokenData::LeftParen | TokenData::RightParen => {
        return Err(EvaluationError::MismatchedParentheses(token.span.start));
      }
    }
    trace!(token = %token, stack = ?operands, "evaluated token");
  }

  match operands.len() {
    0 => Err(EvaluationError::EmptyExpression),
    1 => Ok(operands[0]),
    n => Err(EvaluationError::LeftoverOperands(n)),
  }
}

/// Applies a binary operator to two operands.
///
/// `%` is the floating-point remainder, whose result takes the sign of
/// `a`. `^` follows [`f64::powf`], so a negative base with a fractional
/// exponent produces NaN.
pub fn apply(a: f64, b: f64, op: Operator) -> Result<f64, EvaluationError> {
  match op {
    Operator::Add => Ok(a + b),
    Operator::Sub => Ok(a - b),
    Operator::Mul => Ok(a * b),
    Operator::Div => {
      if b == 0.0 {
        Err(EvaluationError::DivisionByZero)
      } else {
        Ok(a / b)
      }
    }
    Operator::Rem => {
      if b == 0.0 {
        Err(EvaluationError::ModuloByZero)
      } else {
        Ok(a % b)
      }
    }
    Operator::Pow => Ok(a.powf(b)),
  }
}


//! Evaluation of infix arithmetic expressions such as
//! `3 + 4 * (2 - 1)`.
//!
//! Evaluation runs in three stages, each a pure function of its input:
//! [`tokenize`] turns text into tokens, [`to_postfix`] reorders them
//! with the shunting yard algorithm, and [`evaluate_postfix`] computes
//! the result with an operand stack. [`evaluate`] runs all three.

pub mod error;
pub mod eval;
pub mod parsing;

pub use error::EvaluationError;
pub use eval::{apply, evaluate_postfix};
pub use parsing::expr_tokenizer::tokenize;
pub use parsing::shunting_yard::{check_balanced, to_postfix};
pub use parsing::token::{render_tokens, Token, TokenData};

use tracing::debug;

/// Evaluates an arithmetic expression, returning the first error
/// encountered by any stage.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
  check_balanced(expression)?;
  let tokens = tokenize(expression)?;
  let postfix = to_postfix(&tokens)?;
  let result = evaluate_postfix(&postfix)?;
  debug!(expression, result, "evaluated expression");
  Ok(result)
}

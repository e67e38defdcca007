
//! Splits expression text into [`Token`]s.
//!
//! A `+` or `-` in operand position (at the start of the input, after
//! `(`, or after another operator) is a sign rather than a binary
//! operator. When a number literal follows the sign, possibly after
//! whitespace, the sign is folded into that literal, so both `3*-2`
//! and `3 * - 2` yield the tokens `3`, `*`, `-2`. Otherwise a unary `+`
//! is dropped and a unary `-` is kept as an ordinary `-` token, which
//! the evaluator resolves as negation.

use super::classify::{is_number, is_operator};
use super::operator::Operator;
use super::source::SourceOffset;
use super::token::{render_tokens, Token, TokenData};
use super::tokenizer::TokenizerState;
use crate::error::EvaluationError;

use regex::Regex;
use once_cell::sync::Lazy;
use tracing::debug;

/// Tokenizes the whole of `input`. Whitespace between tokens is
/// ignored. Fails on the first character that cannot start a token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvaluationError> {
  let mut state = TokenizerState::new(input);
  let mut tokens = Vec::new();
  loop {
    state.consume_spaces();
    if state.is_eof() {
      break;
    }
    if let Some(token) = read_one_token(&mut state, expects_operand(tokens.last()))? {
      tokens.push(token);
    }
  }
  debug!(tokens = %render_tokens(&tokens), "tokenized expression");
  Ok(tokens)
}

/// Reads a single token. Returns `Ok(None)` if the text consumed
/// produces no token, which happens only for a dropped unary `+`.
fn read_one_token(
  state: &mut TokenizerState<'_>,
  operand_position: bool,
) -> Result<Option<Token>, EvaluationError> {
  if let Some(token) = read_number_literal(state, operand_position)? {
    return Ok(Some(token));
  }
  let pos = state.current_pos();
  let Some(ch) = state.peek() else {
    return Ok(None);
  };
  let m = state.advance(ch.len_utf8());
  match ch {
    '(' => Ok(Some(Token::new(TokenData::LeftParen, m.span()))),
    ')' => Ok(Some(Token::new(TokenData::RightParen, m.span()))),
    '+' if operand_position => Ok(None),
    c if is_operator(c) => {
      let op = Operator::from_symbol(c)?;
      Ok(Some(Token::operator(op, m.span())))
    }
    c => Err(EvaluationError::InvalidCharacter(c, pos)),
  }
}

fn read_number_literal(
  state: &mut TokenizerState<'_>,
  operand_position: bool,
) -> Result<Option<Token>, EvaluationError> {
  static SIGNED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[+-]\s*)?[0-9.]+").unwrap());
  static UNSIGNED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+").unwrap());

  let re = if operand_position { &SIGNED_RE } else { &UNSIGNED_RE };
  let Some(m) = state.read_regex(re) else {
    return Ok(None);
  };
  let value = parse_number(m.as_str(), m.start())?;
  Ok(Some(Token::number(value, m.span())))
}

/// Parses a literal matched by the number regexes. Whitespace between
/// a sign and its digits is ignored, and a leading `+` is discarded.
fn parse_number(text: &str, start: SourceOffset) -> Result<f64, EvaluationError> {
  let invalid = || EvaluationError::InvalidNumber(text.to_owned(), start);
  let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
  let literal = compact.strip_prefix('+').unwrap_or(&compact);
  if !is_number(literal) {
    return Err(invalid());
  }
  let value: f64 = literal.parse().map_err(|_| invalid())?;
  if value.is_finite() {
    Ok(value)
  } else {
    Err(invalid())
  }
}

/// Whether the next token should be an operand, given the token that
/// precedes it.
fn expects_operand(previous: Option<&Token>) -> bool {
  match previous {
    None => true,
    Some(token) => token.is_operator() || token.data == TokenData::LeftParen,
  }
}

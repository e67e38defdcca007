
use super::operator::Operator;
use super::source::Span;

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// A single lexical unit of an expression, together with the span of
/// source text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenData {
  /// A finite number literal, including any folded sign.
  Number(f64),
  Operator(Operator),
  LeftParen,
  RightParen,
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }

  pub fn number(value: f64, span: Span) -> Self {
    Self::new(TokenData::Number(value), span)
  }

  pub fn operator(op: Operator, span: Span) -> Self {
    Self::new(TokenData::Operator(op), span)
  }

  pub fn is_operator(&self) -> bool {
    matches!(self.data, TokenData::Operator(_))
  }

  pub fn is_paren(&self) -> bool {
    matches!(self.data, TokenData::LeftParen | TokenData::RightParen)
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Number(n) => write!(f, "{n}"),
      TokenData::Operator(op) => write!(f, "{op}"),
      TokenData::LeftParen => write!(f, "("),
      TokenData::RightParen => write!(f, ")"),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.data)
  }
}

/// Renders a token sequence as text, one space between tokens.
pub fn render_tokens(tokens: &[Token]) -> String {
  tokens.iter().join(" ")
}

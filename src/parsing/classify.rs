
//! Character and literal predicates used by the tokenizer.

/// Whether `c` is one of the binary operator symbols `+ - * / % ^`.
pub fn is_operator(c: char) -> bool {
  matches!(c, '+' | '-' | '*' | '/' | '%' | '^')
}

/// Whether `text` is a well-formed number literal: an optional leading
/// `-`, at least one ASCII digit, at most one decimal point, and
/// nothing else.
pub fn is_number(text: &str) -> bool {
  let digits = text.strip_prefix('-').unwrap_or(text);
  let mut has_digit = false;
  let mut has_decimal = false;
  for c in digits.chars() {
    match c {
      '0'..='9' => has_digit = true,
      '.' if !has_decimal => has_decimal = true,
      _ => return false,
    }
  }
  has_digit
}

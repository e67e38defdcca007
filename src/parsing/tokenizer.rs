
use super::source::{SourceOffset, Span};

use regex::Regex;
use once_cell::sync::Lazy;

/// A cursor over the expression text. Tracks how much of the input
/// has been consumed so that every match knows its source span.
#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self {
      input,
      position: SourceOffset(0)
    }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes. Returns a
  /// [`TokenizerMatch`] indicating the substring matched by the
  /// skipped portion. This method will never advance beyond
  /// one-past-the-end of the input.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position.0 += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }

  pub fn consume_spaces(&mut self) {
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").unwrap());
    self.read_regex(&RE).expect("regex should not fail");
  }
}

impl<'a> TokenizerMatch<'a> {
  pub fn as_str(&self) -> &'a str {
    self.matched_str
  }
  pub fn start(&self) -> SourceOffset {
    self.start
  }
  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_advance() {
    let mut state = TokenizerState::new("12+3");
    let m = state.advance(2);
    assert_eq!(m.as_str(), "12");
    assert_eq!(m.span(), Span::new(SourceOffset(0), SourceOffset(2)));
    assert_eq!(state.current_pos(), SourceOffset(2));
    assert_eq!(state.peek(), Some('+'));

    let m = state.advance(99);
    assert_eq!(m.as_str(), "+3");
    assert_eq!(m.span(), Span::new(SourceOffset(2), SourceOffset(4)));
    assert!(state.is_eof());
    assert_eq!(state.peek(), None);
  }

  #[test]
  fn test_peek_multibyte() {
    let mut state = TokenizerState::new("é+");
    assert_eq!(state.peek(), Some('é'));
    let m = state.advance('é'.len_utf8());
    assert_eq!(m.as_str(), "é");
    assert_eq!(state.current_pos(), SourceOffset(2));
    assert_eq!(state.peek(), Some('+'));
  }

  #[test]
  fn test_read_regex_success() {
    let mut state = TokenizerState::new("3.25 * 2");
    let re = Regex::new(r"^[0-9.]+").unwrap();

    let m = state.read_regex(&re).unwrap();
    assert_eq!(m.as_str(), "3.25");
    assert_eq!(m.start(), SourceOffset(0));
    assert_eq!(m.span(), Span::new(SourceOffset(0), SourceOffset(4)));
    assert_eq!(state.current_pos(), SourceOffset(4));
  }

  #[test]
  fn test_read_regex_fail() {
    let mut state = TokenizerState::new("* 2");
    let re = Regex::new(r"^[0-9.]+").unwrap();
    assert!(state.read_regex(&re).is_none());
    assert_eq!(state.current_pos(), SourceOffset(0));
  }

  #[test]
  fn test_consume_spaces() {
    let mut state = TokenizerState::new(" \t 1  + 2");
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(3));

    // Second one has no effect, since there are no spaces to consume.
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(3));
  }
}


use super::source::{SourceOffset, Span};

use regex::Regex;

/// Cursor over the expression string being tokenized. Tracks the
/// byte offset of the cursor so tokens can remember where they came
/// from.
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
      position: SourceOffset(0),
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

  /// Advances the position of `self` by `amount` bytes and returns
  /// the skipped portion. Never advances past the end of the input.
  ///
  /// `amount` must land on a character boundary.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position += amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  /// Consumes exactly one character, whatever it is. Returns `None`
  /// at end of input.
  pub fn read_char(&mut self) -> Option<(char, TokenizerMatch<'a>)> {
    let ch = self.peek()?;
    Some((ch, self.advance(ch.len_utf8())))
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<TokenizerMatch<'a>> {
    if self.input.starts_with(literal) {
      Some(self.advance(literal.len()))
    } else {
      None
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
}

impl<'h> TokenizerMatch<'h> {
  pub fn as_str(&self) -> &'h str {
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
  fn test_is_eof() {
    let state = TokenizerState::new("");
    assert!(state.is_eof());

    let mut state = TokenizerState::new("abcdefg");
    assert!(!state.is_eof());
    state.advance(3);
    assert!(!state.is_eof());
    assert_eq!(state.current_pos(), SourceOffset(3));
    state.advance(99);
    assert!(state.is_eof());
  }

  #[test]
  fn test_advance_positions() {
    let mut state = TokenizerState::new("abcdefg");

    let m = state.advance(3);
    assert_eq!(m.as_str(), "abc");
    assert_eq!(m.span(), Span::new(SourceOffset(0), SourceOffset(3)));

    let m = state.advance(99);
    assert_eq!(m.as_str(), "defg");
    assert_eq!(m.span(), Span::new(SourceOffset(3), SourceOffset(7)));

    let m = state.advance(1);
    assert_eq!(m.as_str(), "");
    assert_eq!(state.current_pos(), SourceOffset(7));
  }

  #[test]
  fn test_read_char_multibyte() {
    let mut state = TokenizerState::new("é+");
    let (ch, m) = state.read_char().unwrap();
    assert_eq!(ch, 'é');
    assert_eq!(m.span(), Span::new(SourceOffset(0), SourceOffset(2)));
    assert_eq!(state.peek(), Some('+'));
    state.read_char().unwrap();
    assert!(state.read_char().is_none());
  }

  #[test]
  fn test_read_literal() {
    let mut state = TokenizerState::new("(a)");
    assert!(state.read_literal(")").is_none());
    assert_eq!(state.current_pos(), SourceOffset(0));
    let m = state.read_literal("(").unwrap();
    assert_eq!(m.span(), Span::new(SourceOffset(0), SourceOffset(1)));
    assert_eq!(state.current_pos(), SourceOffset(1));
  }

  #[test]
  fn test_read_regex() {
    let re = Regex::new(r"^\w+").unwrap();
    let mut state = TokenizerState::new("abcd+efgh");
    let m = state.read_regex(&re).unwrap();
    assert_eq!(m.as_str(), "abcd");
    assert_eq!(state.current_pos(), SourceOffset(4));
    assert!(state.read_regex(&re).is_none());
    assert_eq!(state.current_pos(), SourceOffset(4));
  }
}

use super::diagnostics::MalformedExpressionError;
use super::operator::{Operator, OperatorTable};
use super::source::Span;
use super::tokenizer::TokenizerState;
use crate::errorlist::ErrorList;

use regex::Regex;
use once_cell::sync::Lazy;
use tracing::trace;

use std::fmt::{self, Display, Formatter};

/// Splits a space-stripped infix expression into [`Token`]s.
#[derive(Clone, Debug, Default)]
pub struct ExprTokenizer {
  operator_table: OperatorTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenData {
  /// A maximal run of alphanumeric characters.
  Operand(String),
  Operator(Operator),
  LeftParen,
  RightParen,
}

impl ExprTokenizer {
  pub fn new(operator_table: OperatorTable) -> Self {
    Self { operator_table }
  }

  /// Reads tokens until the input is exhausted. Characters which
  /// cannot start any token are skipped and recorded in `errors`;
  /// tokenization itself never fails.
  pub fn read_tokens(
    &self,
    state: &mut TokenizerState<'_>,
    errors: &mut ErrorList<MalformedExpressionError>,
  ) -> Vec<Token> {
    let mut tokens = Vec::new();
    while !state.is_eof() {
      if let Some(token) = self.read_one_token(state) {
        tokens.push(token);
      } else if let Some((ch, m)) = state.read_char() {
        trace!(character = %ch, position = %m.start(), "skipping unrecognized character");
        errors.push(MalformedExpressionError::UnrecognizedCharacter(ch, m.start()));
      }
    }
    tokens
  }

  pub fn read_one_token(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    if let Some(tok) = self.read_paren(state) {
      Some(tok)
    } else if let Some(tok) = self.read_operand(state) {
      Some(tok)
    } else {
      self.read_operator(state)
    }
  }

  fn read_paren(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    #[allow(clippy::manual_map)] // Cleaner in an if-else chain
    if let Some(m) = state.read_literal("(") {
      Some(Token::new(TokenData::LeftParen, m.span()))
    } else if let Some(m) = state.read_literal(")") {
      Some(Token::new(TokenData::RightParen, m.span()))
    } else {
      None
    }
  }

  fn read_operand(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    // Letters and numbers by general category (L*, N*). Combining
    // marks are not operand characters even when they are Alphabetic.
    static RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]+").unwrap());
    state.read_regex(&RE).map(|m| {
      Token::new(TokenData::Operand(m.as_str().to_owned()), m.span())
    })
  }

  fn read_operator(&self, state: &mut TokenizerState<'_>) -> Option<Token> {
    let operator = self.operator_table.get(state.peek()?)?;
    let (_, m) = state.read_char()?;
    Some(Token::new(TokenData::Operator(*operator), m.span()))
  }
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Operand(s) => write!(f, "{}", s),
      TokenData::Operator(op) => write!(f, "{}", op),
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

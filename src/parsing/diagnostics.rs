//! Recoverable problems found while converting an expression.
//!
//! The converter never rejects input: these diagnostics describe the
//! places where it tolerated something malformed.

use super::source::{SourceOffset, Span};

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedExpressionError {
  #[error("Unmatched ')' at position {}", .0.start)]
  UnmatchedCloseParen(Span),
  #[error("Unmatched '(' at position {}", .0.start)]
  UnmatchedOpenParen(Span),
  #[error("Unrecognized character '{0}' at position {1}")]
  UnrecognizedCharacter(char, SourceOffset),
}

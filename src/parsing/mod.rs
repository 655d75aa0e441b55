//! Infix to postfix conversion.
//!
//! [`infix_to_postfix`] is the lenient converter: it accepts any
//! string and never fails. [`convert_with_diagnostics`] produces the
//! same output and also reports everything it had to tolerate, and
//! [`convert_strict`] turns the first such report into an error.

pub mod diagnostics;
pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;

use diagnostics::MalformedExpressionError;
use operator::OperatorTable;
use token::ExprTokenizer;
use tokenizer::TokenizerState;
use crate::errorlist::ErrorList;

use itertools::Itertools;
use tracing::debug;

/// Converts an infix expression to space-separated postfix notation.
///
/// Space characters are removed before tokenizing. Unrecognized
/// characters are skipped and unmatched parentheses are tolerated
/// (see [`shunting_yard::convert`]). The empty string converts to the
/// empty string.
pub fn infix_to_postfix(infix_expression: &str) -> String {
  convert_with_diagnostics(infix_expression).0
}

/// As [`infix_to_postfix`], also returning every malformed construct
/// that was tolerated along the way. Positions are byte offsets into
/// the input after spaces have been removed.
pub fn convert_with_diagnostics(infix_expression: &str) -> (String, ErrorList<MalformedExpressionError>) {
  let stripped = infix_expression.replace(' ', "");
  let mut errors = ErrorList::new();

  let tokenizer = ExprTokenizer::new(OperatorTable::arithmetic());
  let mut state = TokenizerState::new(&stripped);
  let tokens = tokenizer.read_tokens(&mut state, &mut errors);

  let output: Vec<String> = shunting_yard::convert(Vec::new(), tokens, &mut errors);
  let postfix = output.into_iter().join(" ");
  debug!(input = infix_expression, output = %postfix, diagnostics = errors.len(), "converted infix expression");
  (postfix, errors)
}

/// As [`infix_to_postfix`], but fails on the first malformed
/// construct instead of tolerating it.
pub fn convert_strict(infix_expression: &str) -> Result<String, MalformedExpressionError> {
  let (postfix, errors) = convert_with_diagnostics(infix_expression);
  errors.into_first_error(postfix)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::source::{SourceOffset, Span};

  #[test]
  fn test_precedence() {
    assert_eq!(infix_to_postfix("A+B*C"), "A B C * +");
    assert_eq!(infix_to_postfix("(A+B)*C"), "A B + C *");
  }

  #[test]
  fn test_associativity() {
    assert_eq!(infix_to_postfix("2^3^2"), "2 3 2 ^ ^");
    assert_eq!(infix_to_postfix("A-B-C"), "A B - C -");
    assert_eq!(infix_to_postfix("A/B*C"), "A B / C *");
  }

  #[test]
  fn test_spaces_are_ignored() {
    assert_eq!(infix_to_postfix("A + B"), infix_to_postfix("A+B"));
    assert_eq!(infix_to_postfix("  A  *  ( B - C )  "), "A B C - *");
    // Removing spaces joins adjacent operand runs.
    assert_eq!(infix_to_postfix("A B+C"), "AB C +");
  }

  #[test]
  fn test_other_whitespace_splits_operands() {
    assert_eq!(infix_to_postfix("A\tB+C"), "A B C +");
    assert_eq!(infix_to_postfix("A\nB"), "A B");
  }

  #[test]
  fn test_combining_marks_are_not_operand_characters() {
    assert_eq!(infix_to_postfix("\u{915}\u{93F}+\u{916}"), "\u{915} \u{916} +");
  }

  #[test]
  fn test_multi_character_operands() {
    assert_eq!(infix_to_postfix("AB+CD"), "AB CD +");
    assert_eq!(infix_to_postfix("x1 * 42 - y"), "x1 42 * y -");
  }

  #[test]
  fn test_empty_input() {
    assert_eq!(infix_to_postfix(""), "");
    assert_eq!(infix_to_postfix("   "), "");
  }

  #[test]
  fn test_longer_expression() {
    assert_eq!(
      infix_to_postfix("A + B * C ^ D ^ E - F / G"),
      "A B C D E ^ ^ * + F G / -",
    );
    assert_eq!(
      infix_to_postfix("((A + B) * (C - D)) / E"),
      "A B + C D - * E /",
    );
  }

  #[test]
  fn test_operand_and_operator_counts() {
    let postfix = infix_to_postfix("a*b+c/d-e^f*g");
    let tokens: Vec<&str> = postfix.split(' ').collect();
    let operators = tokens.iter().filter(|t| ["+", "-", "*", "/", "^"].contains(t)).count();
    let operands = tokens.len() - operators;
    assert_eq!(operands, 7);
    assert_eq!(operators, operands - 1);
  }

  #[test]
  fn test_fully_parenthesized_matches_nesting_order() {
    assert_eq!(infix_to_postfix("((a-b)-(c-(d-e)))"), "a b - c d e - - -");
    assert_eq!(infix_to_postfix("(a^(b^c))"), "a b c ^ ^");
    assert_eq!(infix_to_postfix("((a^b)^c)"), "a b ^ c ^");
  }

  #[test]
  fn test_malformed_input_is_tolerated() {
    assert_eq!(infix_to_postfix("A+B)"), "A B +");
    assert_eq!(infix_to_postfix("(A+B"), "A B + (");
    assert_eq!(infix_to_postfix("A&B"), "A B");
    assert_eq!(infix_to_postfix("A + . B"), "A B +");
  }

  #[test]
  fn test_diagnostics_do_not_change_output() {
    let (postfix, errors) = convert_with_diagnostics("(A # B");
    assert_eq!(postfix, infix_to_postfix("(A # B"));
    assert_eq!(postfix, "A B (");
    assert_eq!(errors.into_vec(), vec![
      MalformedExpressionError::UnrecognizedCharacter('#', SourceOffset(2)),
      MalformedExpressionError::UnmatchedOpenParen(Span::new(SourceOffset(0), SourceOffset(1))),
    ]);
  }

  #[test]
  fn test_strict_conversion() {
    assert_eq!(convert_strict("A * (B + C)"), Ok(String::from("A B C + *")));
    assert_eq!(convert_strict(""), Ok(String::new()));
    assert_eq!(
      convert_strict("A+B)").unwrap_err(),
      MalformedExpressionError::UnmatchedCloseParen(Span::new(SourceOffset(3), SourceOffset(4))),
    );
  }
}

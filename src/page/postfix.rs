use super::base::Page;
use super::form::FormData;
use crate::config::Settings;
use crate::error::Error;
use crate::parsing::{convert_strict, convert_with_diagnostics};

use tracing::debug;

/// Converts the submitted `infixExpression` to postfix notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfixToPostfixPage;

impl Page for InfixToPostfixPage {
  fn template(&self) -> &'static str {
    "infix_to_postfix.html"
  }

  fn submit(&self, form: &FormData, settings: &Settings) -> Result<Option<String>, Error> {
    let infix_expression = form.get_or("infixExpression", "").trim();
    if infix_expression.is_empty() {
      return Ok(None);
    }
    if settings.strict_expressions {
      return Ok(Some(convert_strict(infix_expression)?));
    }
    let (postfix, diagnostics) = convert_with_diagnostics(infix_expression);
    for diagnostic in &diagnostics {
      debug!(%diagnostic, "tolerated malformed expression");
    }
    Ok(Some(postfix))
  }
}

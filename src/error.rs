use crate::page::NoSuchPageError;
use crate::parsing::diagnostics::MalformedExpressionError;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  MalformedExpression(#[from] MalformedExpressionError),
  #[error("Invalid number {value:?} in field {field}")]
  InvalidNumber {
    field: String,
    value: String,
  },
  #[error("{0}")]
  NoSuchPage(#[from] NoSuchPageError),
  #[error("Method not allowed on {route}")]
  MethodNotAllowed {
    route: String,
  },
}

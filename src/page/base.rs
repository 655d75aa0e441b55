use super::form::FormData;
use crate::config::Settings;
use crate::error::Error;

use serde::Serialize;

/// A page of the calculator site. GET requests only render the
/// template; POST requests go through [`Page::submit`].
pub trait Page {
  /// The template this page renders into.
  fn template(&self) -> &'static str;

  /// Whether this page has a form at all.
  fn accepts_post(&self) -> bool {
    true
  }

  /// Computes the page's result from the submitted form. `Ok(None)`
  /// means there is nothing to display.
  fn submit(&self, form: &FormData, settings: &Settings) -> Result<Option<String>, Error>;
}

/// A page with no form, only a template.
#[derive(Debug, Clone, Copy)]
pub struct StaticPage {
  template: &'static str,
}

/// What the caller should render: a template together with the
/// result to display in it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResponse {
  pub template: &'static str,
  pub result: Option<String>,
}

impl StaticPage {
  pub const fn new(template: &'static str) -> Self {
    Self { template }
  }
}

impl Page for StaticPage {
  fn template(&self) -> &'static str {
    self.template
  }

  fn accepts_post(&self) -> bool {
    false
  }

  fn submit(&self, _form: &FormData, _settings: &Settings) -> Result<Option<String>, Error> {
    Ok(None)
  }
}

impl PageResponse {
  pub fn new(template: &'static str, result: Option<String>) -> Self {
    Self { template, result }
  }

  /// A response carrying an error message in place of a result.
  pub fn error(template: &'static str, err: &Error) -> Self {
    Self { template, result: Some(format!("Error: {err}")) }
  }
}

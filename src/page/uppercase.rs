use super::base::Page;
use super::form::FormData;
use crate::config::Settings;
use crate::error::Error;

/// Uppercases the submitted `inputString`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UppercasePage;

impl Page for UppercasePage {
  fn template(&self) -> &'static str {
    "touppercase.html"
  }

  fn submit(&self, form: &FormData, _settings: &Settings) -> Result<Option<String>, Error> {
    Ok(Some(form.get_or("inputString", "").to_uppercase()))
  }
}

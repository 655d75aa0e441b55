use crate::error::Error;

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
  Get,
  Post,
}

/// Submitted form fields, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
  fields: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
  pub method: Method,
  pub form: FormData,
}

impl FormData {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, field: &str) -> Option<&str> {
    self.fields.get(field).map(String::as_str)
  }

  pub fn get_or<'a>(&'a self, field: &str, default: &'a str) -> &'a str {
    self.get(field).unwrap_or(default)
  }

  /// Parses a field as a float, falling back to `default` when the
  /// field is absent. Surrounding whitespace is ignored.
  pub fn parse_float(&self, field: &str, default: &str) -> Result<f64, Error> {
    let value = self.get_or(field, default);
    value.trim().parse::<f64>().map_err(|_| Error::InvalidNumber {
      field: field.to_owned(),
      value: value.to_owned(),
    })
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let fields = iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
    Self { fields }
  }
}

impl Request {
  pub fn get() -> Self {
    Self { method: Method::Get, form: FormData::new() }
  }

  pub fn post(form: FormData) -> Self {
    Self { method: Method::Post, form }
  }
}

/// Formats a float result for display: the shortest round-tripping
/// digits, a trailing `.0` on integral values, and exponent notation
/// (`1e+20`, `1.5e-09`) below `1e-4` or from `1e16` up.
pub fn format_float(value: f64) -> String {
  if value.is_nan() {
    return String::from("nan");
  }
  if value.is_infinite() {
    return format!("{value}");
  }
  // `{:e}` gives the shortest digits as `<mantissa>e<exponent>`.
  let scientific = format!("{value:e}");
  let (mantissa, exponent) = match scientific.split_once('e') {
    Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
    None => (scientific.as_str(), 0),
  };
  if value != 0.0 && !(-4..16).contains(&exponent) {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exponent.abs())
  } else if value.fract() == 0.0 {
    format!("{value:.1}")
  } else {
    format!("{value}")
  }
}

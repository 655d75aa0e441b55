//! Runtime settings and command-line parsing.

use crate::page::{FormData, Request};

use thiserror::Error;

/// How much the binary logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
  #[default]
  Quiet,
  Verbose,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
  /// Reject malformed infix expressions instead of tolerating them.
  pub strict_expressions: bool,
  pub verbosity: Verbosity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Help,
  Version,
  Serve {
    route: String,
    request: Request,
    json: bool,
  },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub settings: Settings,
  pub action: Action,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgsError {
  #[error("Unknown option {0}")]
  UnknownOption(String),
  #[error("Expected a route to request")]
  MissingRoute,
  #[error("Expected a field=value pair, got {0:?}")]
  ExpectedField(String),
}

const HELP: &str = "--help";
const VERSION: &str = "--version";
const STRICT: &str = "--strict";
const VERBOSE: &str = "--verbose";
const JSON: &str = "--json";

pub const USAGE: &str = "usage:
  formcalc [options] <route> [field=value ...]

Requests <route> (for example /infixToPostfix). Any field=value pair
submits the page's form; without one the page is only rendered.

options:
  --strict   reject malformed infix expressions
  --verbose  log debug output to stderr
  --json     print the response as JSON
  --help     print this message
  --version  print the version";

/// Parses command-line arguments, not including the program name.
pub fn parse_args<I>(args: I) -> Result<Invocation, ArgsError>
where I: IntoIterator<Item = String> {
  let mut settings = Settings::default();
  let mut json = false;
  let mut positional = Vec::new();
  for arg in args {
    match arg.as_str() {
      HELP => return Ok(Invocation { settings, action: Action::Help }),
      VERSION => return Ok(Invocation { settings, action: Action::Version }),
      STRICT => settings.strict_expressions = true,
      VERBOSE => settings.verbosity = Verbosity::Verbose,
      JSON => json = true,
      x if x.starts_with("--") => return Err(ArgsError::UnknownOption(arg)),
      _ => positional.push(arg),
    }
  }

  let mut positional = positional.into_iter();
  let route = positional.next().ok_or(ArgsError::MissingRoute)?;
  let form = positional
    .map(|pair| match pair.split_once('=') {
      Some((field, value)) => Ok((field.to_owned(), value.to_owned())),
      None => Err(ArgsError::ExpectedField(pair)),
    })
    .collect::<Result<FormData, _>>()?;
  let request = if form.is_empty() { Request::get() } else { Request::post(form) };
  Ok(Invocation { settings, action: Action::Serve { route, request, json } })
}

//! Routing from a page path to the [`Page`] that serves it.

use super::area::{CircleAreaPage, TriangleAreaPage};
use super::base::{Page, PageResponse, StaticPage};
use super::form::{Method, Request};
use super::postfix::InfixToPostfixPage;
use super::uppercase::UppercasePage;
use crate::config::Settings;
use crate::error::Error;

use tracing::{debug, warn};

use std::collections::HashMap;

#[derive(Default)]
pub struct PageDispatchTable {
  map: HashMap<String, Box<dyn Page + Send + Sync>>,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("No such page {route}")]
pub struct NoSuchPageError {
  route: String,
}

impl PageDispatchTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Every page of the calculator site.
  pub fn default_pages() -> Self {
    let mut table = Self::new();
    table.insert("/", StaticPage::new("index.html"));
    table.insert("/profile", StaticPage::new("profile.html"));
    table.insert("/contact", StaticPage::new("contact.html"));
    table.insert("/works", UppercasePage);
    table.insert("/areaOfCircle", CircleAreaPage);
    table.insert("/areaOfTriangle", TriangleAreaPage);
    table.insert("/infixToPostfix", InfixToPostfixPage);
    table
  }

  pub fn insert(&mut self, route: impl Into<String>, page: impl Page + Send + Sync + 'static) {
    self.map.insert(route.into(), Box::new(page));
  }

  pub fn get(&self, route: &str) -> Result<&(dyn Page + Send + Sync), NoSuchPageError> {
    match self.map.get(route) {
      Some(page) => Ok(page.as_ref()),
      None => Err(NoSuchPageError { route: route.to_owned() }),
    }
  }

  /// Serves one request. Failures inside a page's form handling are
  /// rendered into the response as `Error: <message>`; only an
  /// unknown route or a POST to a page without a form fails the call.
  pub fn handle(&self, route: &str, request: &Request, settings: &Settings) -> Result<PageResponse, Error> {
    let page = self.get(route)?;
    let template = page.template();
    match request.method {
      Method::Get => {
        debug!(route, "rendering page");
        Ok(PageResponse::new(template, None))
      }
      Method::Post if !page.accepts_post() => {
        Err(Error::MethodNotAllowed { route: route.to_owned() })
      }
      Method::Post => {
        debug!(route, fields = ?request.form, "submitting form");
        match page.submit(&request.form, settings) {
          Ok(result) => Ok(PageResponse::new(template, result)),
          Err(err) => {
            warn!(route, error = %err, "form submission failed");
            Ok(PageResponse::error(template, &err))
          }
        }
      }
    }
  }
}

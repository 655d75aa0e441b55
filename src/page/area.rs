//! Area calculators. Invalid or negative input produces no result
//! rather than an error.

use super::base::Page;
use super::form::{FormData, format_float};
use crate::config::Settings;
use crate::error::Error;

use tracing::debug;

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, Default)]
pub struct CircleAreaPage;

#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleAreaPage;

pub fn circle_area(radius: f64) -> Option<f64> {
  (radius >= 0.0).then(|| PI * radius * radius)
}

pub fn triangle_area(base: f64, height: f64) -> Option<f64> {
  (base >= 0.0 && height >= 0.0).then(|| 0.5 * base * height)
}

/// Unparseable fields count as "no result".
fn ignore_invalid(result: Result<f64, Error>) -> Option<f64> {
  match result {
    Ok(x) => Some(x),
    Err(err) => {
      debug!(error = %err, "ignoring invalid area input");
      None
    }
  }
}

impl Page for CircleAreaPage {
  fn template(&self) -> &'static str {
    "area_circle.html"
  }

  fn submit(&self, form: &FormData, _settings: &Settings) -> Result<Option<String>, Error> {
    let area = ignore_invalid(form.parse_float("radius", "0"))
      .and_then(circle_area);
    Ok(area.map(format_float))
  }
}

impl Page for TriangleAreaPage {
  fn template(&self) -> &'static str {
    "area_triangle.html"
  }

  fn submit(&self, form: &FormData, _settings: &Settings) -> Result<Option<String>, Error> {
    let base = ignore_invalid(form.parse_float("base", "0"));
    let height = ignore_invalid(form.parse_float("height", "0"));
    let area = base.zip(height).and_then(|(b, h)| triangle_area(b, h));
    Ok(area.map(format_float))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  fn submit(page: &dyn Page, fields: Vec<(&str, &str)>) -> Option<String> {
    let form: FormData = fields.into_iter().collect();
    page.submit(&form, &Settings::default()).unwrap()
  }

  #[test]
  fn test_circle_area() {
    assert_abs_diff_eq!(circle_area(2.0).unwrap(), 4.0 * PI, epsilon = 1e-12);
    assert_abs_diff_eq!(circle_area(0.0).unwrap(), 0.0);
    assert_eq!(circle_area(-1.0), None);
    assert_eq!(circle_area(f64::NAN), None);
  }

  #[test]
  fn test_triangle_area() {
    assert_abs_diff_eq!(triangle_area(3.0, 4.0).unwrap(), 6.0);
    assert_abs_diff_eq!(triangle_area(0.5, 0.5).unwrap(), 0.125);
    assert_eq!(triangle_area(-3.0, 4.0), None);
    assert_eq!(triangle_area(3.0, -4.0), None);
  }

  #[test]
  fn test_circle_page() {
    assert_eq!(submit(&CircleAreaPage, vec![("radius", "1")]), Some(String::from("3.141592653589793")));
    assert_eq!(submit(&CircleAreaPage, vec![]), Some(String::from("0.0")));
    assert_eq!(submit(&CircleAreaPage, vec![("radius", "-2")]), None);
    assert_eq!(submit(&CircleAreaPage, vec![("radius", "abc")]), None);
    assert_eq!(submit(&CircleAreaPage, vec![("radius", "")]), None);
  }

  #[test]
  fn test_triangle_page() {
    assert_eq!(submit(&TriangleAreaPage, vec![("base", "3"), ("height", "4")]), Some(String::from("6.0")));
    assert_eq!(submit(&TriangleAreaPage, vec![("base", "3")]), Some(String::from("0.0")));
    assert_eq!(submit(&TriangleAreaPage, vec![("base", "3"), ("height", "x")]), None);
    assert_eq!(submit(&TriangleAreaPage, vec![("base", "-1"), ("height", "4")]), None);
    assert_eq!(submit(&TriangleAreaPage, vec![("base", "1e20"), ("height", "2")]), Some(String::from("1e+20")));
  }
}

//! The form-submission boundary: one [`Page`] per route, each taking
//! submitted form fields and producing the result string shown on
//! that page.

pub mod area;
pub mod base;
pub mod dispatch;
pub mod form;
pub mod postfix;
pub mod uppercase;

pub use base::{Page, StaticPage, PageResponse};
pub use dispatch::{PageDispatchTable, NoSuchPageError};
pub use form::{FormData, Method, Request};

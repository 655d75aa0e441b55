
pub mod config;
pub mod error;
pub mod errorlist;
pub mod page;
pub mod parsing;

pub use parsing::infix_to_postfix;

//! Fixed capacity strings and whitespace insensitive comparison.

mod bounded_string;
mod tests;
mod word;

pub use bounded_string::*;
pub use word::*;

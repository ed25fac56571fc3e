//! Propositional logic: parsing and evaluating formulas, truth tables and proof by resolution.

mod error;
mod formula;
pub mod resolution;
mod tests;
mod truth_table;

pub use error::*;
pub use formula::*;
#[doc(inline)]
pub use resolution::{Clause, Literal};
pub use truth_table::*;

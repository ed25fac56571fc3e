//! Binary relations over small finite sets, stored as boolean matrices: set algebra, property
//! checks, transitive closures, equivalence classes and orders.

mod closure;
mod equivalence;
mod matrix;
mod order;
pub mod points;
mod properties;
mod tests;

pub use closure::*;
pub use equivalence::*;
pub use matrix::*;
pub use order::*;
#[doc(inline)]
pub use points::{Point, PointSet};
pub use properties::*;

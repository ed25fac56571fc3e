//! A directed graph stored as adjacency lists.

mod error;
mod graph;

pub use error::*;
pub use graph::*;

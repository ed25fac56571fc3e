mod binary_search_tree;
mod node;
mod tests;

pub use binary_search_tree::*;
pub(crate) use node::*;

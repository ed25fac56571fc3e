//! Huffman coding over the characters of a text.

mod heap;
mod huffman_tree;
mod tests;

pub use heap::*;
pub use huffman_tree::*;

//! Binary search trees: a plain unbalanced tree and two self balancing variants.

pub mod avl;
pub mod bst;
pub mod red_black;

#[doc(inline)]
pub use avl::AvlTree;
#[doc(inline)]
pub use bst::BinarySearchTree;
#[doc(inline)]
pub use red_black::{Color, RedBlackTree};

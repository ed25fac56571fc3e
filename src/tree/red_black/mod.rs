mod red_black_tree;

pub use red_black_tree::*;

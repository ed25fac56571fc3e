use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use super::Branch;
use crate::queue::Queue;

/// The value passed to [`BinarySearchTree::insert`] was already in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duplicate;

impl Display for Duplicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Value is already present in the tree!")
    }
}

impl Error for Duplicate {}

/// The number of values on either side of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubtreeSizes<'a, T> {
    pub value: &'a T,
    pub left: usize,
    pub right: usize,
}

/// An unbalanced binary search tree of unique values. Every value in a node's left subtree is
/// smaller than it and every value in its right subtree is larger.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of values in the tree.
/// - `h`: The height of the tree, between `log2(n)` and `n`.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `min` / `max` | `O(h)` |
/// | `len` / `height` | `O(n)` |
/// | traversals | `O(n)` |
pub struct BinarySearchTree<T: Ord> {
    pub(crate) root: Branch<T>,
}

impl<T: Ord> BinarySearchTree<T> {
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
        }
    }

    /// Inserts `value`, failing if an equal value is already present.
    pub fn insert(&mut self, value: T) -> Result<(), Duplicate> {
        self.root.insert(value).map_err(|_| Duplicate)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.root.find(value).is_some()
    }

    /// Returns the stored value equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.root.find(value).map(|node| &node.value)
    }

    /// Removes and returns the value equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.root.remove(value)
    }

    pub fn min(&self) -> Option<&T> {
        self.root.first()
    }

    pub fn max(&self) -> Option<&T> {
        self.root.last()
    }

    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Returns the number of nodes on the longest path from the root, 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    pub fn clear(&mut self) {
        self.root = Branch(None);
    }

    /// Returns whether the node holding `value` has a left child, or None if it isn't present.
    pub fn has_left_child(&self, value: &T) -> Option<bool> {
        self.root.find(value).map(|node| node.left.0.is_some())
    }

    /// Returns whether the node holding `value` has a right child, or None if it isn't present.
    pub fn has_right_child(&self, value: &T) -> Option<bool> {
        self.root.find(value).map(|node| node.right.0.is_some())
    }

    /// Values in ascending order.
    pub fn inorder(&self) -> Vec<&T> {
        self.first_n(usize::MAX)
    }

    /// The `n` smallest values in ascending order. The walk stops as soon as `n` are found.
    pub fn first_n(&self, n: usize) -> Vec<&T> {
        let mut values = Vec::new();
        if n == 0 {
            return values;
        }
        self.root.walk_inorder(&mut |node| {
            values.push(&node.value);
            values.len() < n
        });
        values
    }

    /// Values in depth first order, each node before its subtrees.
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.root.walk_preorder(&mut |node| values.push(&node.value));
        values
    }

    /// Values in depth first order, each node after its subtrees.
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::new();
        self.root.walk_postorder(&mut |node| values.push(&node.value));
        values
    }

    /// Values level by level, from the root down and left to right within a level.
    pub fn breadth_first(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let mut pending = Queue::new();
        if let Some(root) = &self.root.0 {
            pending.enqueue(root);
        }

        while let Some(node) = pending.dequeue() {
            values.push(&node.value);
            for child in [&node.left.0, &node.right.0].into_iter().flatten() {
                pending.enqueue(child);
            }
        }
        values
    }

    /// The size of the left and right subtree of every node, in ascending order of value.
    pub fn subtree_sizes(&self) -> Vec<SubtreeSizes<'_, T>> {
        let mut sizes = Vec::new();
        self.root.walk_inorder(&mut |node| {
            sizes.push(SubtreeSizes {
                value: &node.value,
                left: node.left.len(),
                right: node.right.len(),
            });
            true
        });
        sizes
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> {
    /// Builds a tree by inserting `values` in order, skipping duplicates.
    pub fn from_slice(values: &[T]) -> BinarySearchTree<T> {
        values.iter().cloned().collect()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        for value in iter {
            // Duplicates are dropped.
            let _ = tree.insert(value);
        }
        tree
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Debug> Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("inorder", &self.inorder())
            .field("height", &self.height())
            .finish()
    }
}

impl<T: Ord + Debug> Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

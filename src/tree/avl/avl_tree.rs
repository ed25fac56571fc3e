use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

type Link<T> = Option<Box<AvlNode<T>>>;

struct AvlNode<T> {
    value: T,
    /// Number of nodes on the longest path down from this node, 1 for a leaf.
    height: usize,
    left: Link<T>,
    right: Link<T>,
}

fn height<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.height)
}

impl<T: Ord> AvlNode<T> {
    fn leaf(value: T) -> Box<AvlNode<T>> {
        Box::new(AvlNode {
            value,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height.
    fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.left.take() else {
            return self;
        };
        self.left = pivot.right.take();
        self.update_height();
        pivot.right = Some(self);
        pivot.update_height();
        pivot
    }

    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut pivot) = self.right.take() else {
            return self;
        };
        self.right = pivot.left.take();
        self.update_height();
        pivot.left = Some(self);
        pivot.update_height();
        pivot
    }

    /// Restores the balance of this node after one of its subtrees changed height by one, using
    /// a single rotation for the LL and RR cases and a double rotation for LR and RL.
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.update_height();
        let balance = self.balance_factor();

        if balance > 1 {
            if let Some(left) = self.left.take() {
                // LR: the left child leans right, so straighten it first.
                let straightened = if left.balance_factor() < 0 { left.rotate_left() } else { left };
                self.left = Some(straightened);
            }
            self.rotate_right()
        } else if balance < -1 {
            if let Some(right) = self.right.take() {
                // RL: the right child leans left.
                let straightened = if right.balance_factor() > 0 { right.rotate_right() } else { right };
                self.right = Some(straightened);
            }
            self.rotate_left()
        } else {
            self
        }
    }

    fn insert(link: Link<T>, value: T, inserted: &mut bool) -> Box<Self> {
        let Some(mut node) = link else {
            *inserted = true;
            return AvlNode::leaf(value);
        };

        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Some(AvlNode::insert(node.left.take(), value, inserted));
            },
            Ordering::Greater => {
                node.right = Some(AvlNode::insert(node.right.take(), value, inserted));
            },
            Ordering::Equal => return node,
        }
        node.rebalance()
    }

    fn remove(link: Link<T>, value: &T, removed: &mut Option<T>) -> Link<T> {
        let mut node = link?;

        match value.cmp(&node.value) {
            Ordering::Less => node.left = AvlNode::remove(node.left.take(), value, removed),
            Ordering::Greater => node.right = AvlNode::remove(node.right.take(), value, removed),
            Ordering::Equal => {
                let AvlNode { value, left, right, .. } = *node;
                *removed = Some(value);

                let Some(left) = left else {
                    return right;
                };
                let mut right = right;
                let Some(successor) = AvlNode::take_min(&mut right) else {
                    return Some(left);
                };
                let mut replacement = AvlNode::leaf(successor);
                replacement.left = Some(left);
                replacement.right = right;
                return Some(replacement.rebalance());
            },
        }
        Some(node.rebalance())
    }

    /// Removes the smallest value below `link`, rebalancing on the way back up.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let mut node = link.take()?;
        if node.left.is_some() {
            let min = AvlNode::take_min(&mut node.left);
            *link = Some(node.rebalance());
            min
        } else {
            *link = node.right.take();
            Some(node.value)
        }
    }
}

/// A self balancing binary search tree. After every insertion or removal the heights of the two
/// subtrees of any node differ by at most one, so the height stays within `O(log n)`.
///
/// Equal values are stored once: inserting a value that is already present does nothing.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(log n)` |
/// | `remove` | `O(log n)` |
/// | `contains` | `O(log n)` |
/// | `height` | `O(1)` |
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Ord> AvlTree<T> {
    pub const fn new() -> AvlTree<T> {
        AvlTree {
            root: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Inserts `value`, returning false if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = Some(AvlNode::insert(self.root.take(), value, &mut inserted));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut removed = None;
        self.root = AvlNode::remove(self.root.take(), value, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.value)
    }

    pub fn inorder(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, values: &mut Vec<&'a T>) {
            if let Some(node) = link {
                walk(&node.left, values);
                values.push(&node.value);
                walk(&node.right, values);
            }
        }

        let mut values = Vec::with_capacity(self.len);
        walk(&self.root, &mut values);
        values
    }

    pub fn preorder(&self) -> Vec<&T> {
        fn walk<'a, T>(link: &'a Link<T>, values: &mut Vec<&'a T>) {
            if let Some(node) = link {
                values.push(&node.value);
                walk(&node.left, values);
                walk(&node.right, values);
            }
        }

        let mut values = Vec::with_capacity(self.len);
        walk(&self.root, &mut values);
        values
    }

    /// Checks that every stored height is correct and every node is balanced.
    pub fn is_balanced(&self) -> bool {
        // Returns the real height of a subtree, or None if anything below is wrong.
        fn check<T>(link: &Link<T>) -> Option<usize> {
            let Some(node) = link else {
                return Some(0);
            };
            let left = check(&node.left)?;
            let right = check(&node.right)?;
            let real = 1 + left.max(right);
            (left.abs_diff(right) <= 1 && node.height == real).then_some(real)
        }

        check(&self.root).is_some()
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: Ord + Debug> Debug for AvlTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("inorder", &self.inorder())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: Vec<&i32>) -> Vec<i32> {
        values.into_iter().copied().collect()
    }

    #[test]
    fn test_single_rotations() {
        // LL: 30, 20, 10 leans left and rotates right around 20.
        let tree: AvlTree<_> = [30, 20, 10].into_iter().collect();
        assert_eq!(owned(tree.preorder()), vec![20, 10, 30]);

        // RR
        let tree: AvlTree<_> = [10, 20, 30].into_iter().collect();
        assert_eq!(owned(tree.preorder()), vec![20, 10, 30]);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_double_rotations() {
        let tree: AvlTree<_> = [30, 10, 20].into_iter().collect();
        assert_eq!(owned(tree.preorder()), vec![20, 10, 30], "LR should rotate twice.");

        let tree: AvlTree<_> = [10, 30, 20].into_iter().collect();
        assert_eq!(owned(tree.preorder()), vec![20, 10, 30], "RL should rotate twice.");
    }

    #[test]
    fn test_sequential_inserts_stay_balanced() {
        let mut tree = AvlTree::new();
        for value in 0..1000 {
            assert!(tree.insert(value));
        }
        assert!(!tree.insert(500), "Duplicates should be ignored.");
        assert_eq!(tree.len(), 1000);
        assert!(tree.is_balanced());
        assert!(tree.height() <= 14, "Height {} is too large for 1000 nodes.", tree.height());
        assert_eq!(owned(tree.inorder()), (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_classic_sequence() {
        let tree: AvlTree<_> = [10, 20, 30, 40, 50, 25].into_iter().collect();
        assert_eq!(owned(tree.preorder()), vec![30, 20, 10, 25, 40, 50]);
        assert_eq!(tree.root(), Some(&30));
    }

    #[test]
    fn test_remove_rebalances() {
        let mut tree: AvlTree<_> = (1..=15).collect();
        for value in [8, 1, 2, 3, 4, 15] {
            assert_eq!(tree.remove(&value), Some(value));
            assert!(tree.is_balanced(), "Tree should be balanced after removing {value}.");
        }
        assert_eq!(tree.remove(&8), None);
        assert!(!tree.contains(&3));
        assert!(tree.contains(&9));
        assert_eq!(owned(tree.inorder()), vec![5, 6, 7, 9, 10, 11, 12, 13, 14]);
        assert_eq!(tree.len(), 9);
    }
}

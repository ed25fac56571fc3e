use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use derive_more::{Display, Error, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum Color {
    #[display("red")]
    Red,
    #[display("black")]
    Black,
}

/// A broken red-black tree invariant, as reported by [`RedBlackTree::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RbViolation {
    #[display("the root is red")]
    RedRoot,
    #[display("a red node has a red child")]
    RedChildOfRed,
    #[display("two paths from the same node pass through different numbers of black nodes")]
    UnequalBlackHeight,
    #[display("values are not in ascending order")]
    OutOfOrder,
    #[display("a child doesn't link back to its parent")]
    BrokenParentLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    const fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

struct RbNode<T> {
    value: T,
    color: Color,
    parent: Option<usize>,
    left: Option<usize>,
    right: Option<usize>,
}

/// A red-black tree of unique values. Nodes are stored in an arena and refer to their parent and
/// children by index.
///
/// Every node is red or black, the root is black, a red node never has a red child and every path
/// from a node down to a missing child passes through the same number of black nodes. Together
/// these keep the longest path at most twice as long as the shortest.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(log n)` |
/// | `contains` | `O(log n)` |
/// | `validate` | `O(n)` |
pub struct RedBlackTree<T> {
    nodes: Vec<RbNode<T>>,
    root: Option<usize>,
}

impl<T: Ord> RedBlackTree<T> {
    pub const fn new() -> RedBlackTree<T> {
        RedBlackTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Inserts `value` as a red leaf and repairs the tree, returning false if the value was
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cursor = self.root;

        while let Some(index) = cursor {
            parent = Some(index);
            side = match value.cmp(&self.nodes[index].value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            cursor = self.child(index, side);
        }

        let inserted = self.nodes.len();
        self.nodes.push(RbNode {
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        });
        match parent {
            Some(parent) => self.set_child(parent, side, Some(inserted)),
            None => self.root = Some(inserted),
        }

        self.fix_insert(inserted);
        true
    }

    /// Walks up from a newly inserted red node, recolouring while its uncle is red and rotating
    /// once the uncle is black.
    fn fix_insert(&mut self, mut node: usize) {
        while let Some(parent) = self.nodes[node].parent
            && self.nodes[parent].color.is_red()
        {
            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };
            let parent_side = self.side_of(grandparent, parent);
            let uncle = self.child(grandparent, parent_side.opposite());

            if let Some(uncle) = uncle
                && self.nodes[uncle].color.is_red()
            {
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.side_of(parent, node) != parent_side {
                // The node is an inner grandchild; rotate it to the outside first.
                self.rotate(parent, parent_side);
                node = parent;
                parent = self.nodes[node].parent.unwrap_or(grandparent);
            }
            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            self.rotate(grandparent, parent_side.opposite());
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }

    /// Rotates `node` down towards `side`, lifting its child on the other side into its place.
    fn rotate(&mut self, node: usize, side: Side) {
        let Some(pivot) = self.child(node, side.opposite()) else {
            return;
        };

        let inner = self.child(pivot, side);
        self.set_child(node, side.opposite(), inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }

        let parent = self.nodes[node].parent;
        self.nodes[pivot].parent = parent;
        match parent {
            Some(parent) => {
                let node_side = self.side_of(parent, node);
                self.set_child(parent, node_side, Some(pivot));
            },
            None => self.root = Some(pivot),
        }

        self.set_child(pivot, side, Some(node));
        self.nodes[node].parent = Some(pivot);
    }

    /// Values in ascending order with the colour of their node.
    pub fn inorder_colored(&self) -> Vec<(&T, Color)> {
        let mut values = Vec::with_capacity(self.len());
        self.walk_inorder(self.root, &mut values);
        values
    }

    pub fn inorder(&self) -> Vec<&T> {
        self.inorder_colored().into_iter().map(|(value, _)| value).collect()
    }

    fn walk_inorder<'a>(&'a self, cursor: Option<usize>, values: &mut Vec<(&'a T, Color)>) {
        if let Some(index) = cursor {
            let node = &self.nodes[index];
            self.walk_inorder(node.left, values);
            values.push((&node.value, node.color));
            self.walk_inorder(node.right, values);
        }
    }

    pub fn root(&self) -> Option<(&T, Color)> {
        self.root.map(|index| (&self.nodes[index].value, self.nodes[index].color))
    }

    /// The number of black nodes on every path from the root down to a missing child.
    pub fn black_height(&self) -> Result<usize, RbViolation> {
        self.validate()
    }

    /// Checks every red-black invariant along with the search tree ordering and the parent links,
    /// returning the black height of the tree.
    pub fn validate(&self) -> Result<usize, RbViolation> {
        if self.root.is_some_and(|root| self.nodes[root].color.is_red()) {
            return Err(RbViolation::RedRoot);
        }
        if self.inorder().windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(RbViolation::OutOfOrder);
        }
        self.check_subtree(self.root)
    }

    fn check_subtree(&self, cursor: Option<usize>) -> Result<usize, RbViolation> {
        let Some(index) = cursor else {
            return Ok(0);
        };
        let node = &self.nodes[index];

        for child in [node.left, node.right].into_iter().flatten() {
            if self.nodes[child].parent != Some(index) {
                return Err(RbViolation::BrokenParentLink);
            }
            if node.color.is_red() && self.nodes[child].color.is_red() {
                return Err(RbViolation::RedChildOfRed);
            }
        }

        let left = self.check_subtree(node.left)?;
        let right = self.check_subtree(node.right)?;
        if left != right {
            return Err(RbViolation::UnequalBlackHeight);
        }
        Ok(left + usize::from(node.color.is_black()))
    }
}

impl<T> RedBlackTree<T> {
    fn child(&self, index: usize, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.nodes[index].left,
            Side::Right => self.nodes[index].right,
        }
    }

    fn set_child(&mut self, index: usize, side: Side, child: Option<usize>) {
        match side {
            Side::Left => self.nodes[index].left = child,
            Side::Right => self.nodes[index].right = child,
        }
    }

    /// Which side of `parent` the node at `child` hangs on.
    fn side_of(&self, parent: usize, child: usize) -> Side {
        if self.nodes[parent].left == Some(child) { Side::Left } else { Side::Right }
    }
}

impl<T: Ord> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RedBlackTree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl<T: Ord + Debug> Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.inorder_colored().iter().map(|(value, color)| format!("{value:?} ({color})")))
            .finish()
    }
}

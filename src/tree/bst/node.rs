use std::cmp::Ordering;

pub(crate) struct Branch<T: Ord>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T: Ord> Node<T> {
    pub fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            left: Branch(None),
            right: Branch(None),
            value,
        })
    }
}

impl<T: Ord> Branch<T> {
    /// Inserts `value` into this subtree, returning it back if an equal value is already present.
    pub fn insert(&mut self, value: T) -> Result<(), T> {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                Ordering::Equal => Err(value),
            },
            None => {
                self.0 = Some(Node::leaf(value));
                Ok(())
            },
        }
    }

    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        match &self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.find(value),
                Ordering::Greater => node.right.find(value),
                Ordering::Equal => Some(node),
            },
            None => None,
        }
    }

    pub fn remove(&mut self, value: &T) -> Option<T> {
        match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.remove(value),
                Ordering::Greater => node.right.remove(value),
                Ordering::Equal => self.take_root(),
            },
            None => None,
        }
    }

    /// Removes the root of this subtree and relinks its children in its place. A root with two
    /// children is replaced by its in-order successor, the smallest value of its right subtree.
    fn take_root(&mut self) -> Option<T> {
        let mut node = self.0.take()?;

        self.0 = match (node.left.0.take(), node.right.0.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Branch(Some(right));
                match right.take_first() {
                    Some(successor) => Some(Box::new(Node {
                        left: Branch(Some(left)),
                        right,
                        value: successor,
                    })),
                    // A non-empty branch always has a first value.
                    None => Some(left),
                }
            },
        };

        Some(node.value)
    }

    pub fn take_first(&mut self) -> Option<T> {
        let node = self.0.as_mut()?;
        if node.left.0.is_some() {
            return node.left.take_first();
        }

        let node = *self.0.take()?;
        *self = node.right;
        Some(node.value)
    }

    pub fn first(&self) -> Option<&T> {
        let node = self.0.as_ref()?;
        node.left.first().or(Some(&node.value))
    }

    pub fn last(&self) -> Option<&T> {
        let node = self.0.as_ref()?;
        node.right.last().or(Some(&node.value))
    }

    pub fn len(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + node.left.len() + node.right.len(),
            None => 0,
        }
    }

    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => 1 + node.left.height().max(node.right.height()),
            None => 0,
        }
    }

    /// Visits every value in ascending order, stopping early if `visit` returns false. Returns
    /// false if the walk was stopped.
    pub fn walk_inorder<'a>(&'a self, visit: &mut impl FnMut(&'a Node<T>) -> bool) -> bool {
        match &self.0 {
            Some(node) => {
                node.left.walk_inorder(visit)
                    && visit(node)
                    && node.right.walk_inorder(visit)
            },
            None => true,
        }
    }

    pub fn walk_preorder<'a>(&'a self, visit: &mut impl FnMut(&'a Node<T>)) {
        if let Some(node) = &self.0 {
            visit(node);
            node.left.walk_preorder(visit);
            node.right.walk_preorder(visit);
        }
    }

    pub fn walk_postorder<'a>(&'a self, visit: &mut impl FnMut(&'a Node<T>)) {
        if let Some(node) = &self.0 {
            node.left.walk_postorder(visit);
            node.right.walk_postorder(visit);
            visit(node);
        }
    }
}

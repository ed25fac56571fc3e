use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use ListState::*;

use super::{Iter, IterMut, Length, Node, NodeRef, ONE};
pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A doubly linked list. Each element is stored in its own heap allocated node, linked to the
/// nodes before and after it, so both ends can be modified in constant time.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty LinkedList. No allocation happens until an element is added.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.len.get(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self.state, Empty)
    }

    /// Removes and drops every element of the list.
    pub fn clear(&mut self) {
        *self = LinkedList::new();
    }

    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.head.value()),
        }
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => Some(contents.head.value_mut()),
        }
    }

    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.tail.value()),
        }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => Some(contents.tail.value_mut()),
        }
    }

    /// Adds `value` to the front of the list.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Adds `value` to the back of the list.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element of the list and returns it, or None if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => {
                // SAFETY: The head is unlinked below, so nothing refers to it afterwards.
                let node = unsafe { contents.head.take_node() };
                match (contents.len.decrement(), node.next) {
                    (Some(len), Some(next)) => {
                        *next.prev_mut() = None;
                        contents.head = next;
                        contents.len = len;
                    },
                    _ => self.state = Empty,
                }
                Some(node.value)
            },
        }
    }

    /// Removes the last element of the list and returns it, or None if the list is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(contents) => {
                // SAFETY: The tail is unlinked below, so nothing refers to it afterwards.
                let node = unsafe { contents.tail.take_node() };
                match (contents.len.decrement(), node.prev) {
                    (Some(len), Some(prev)) => {
                        *prev.next_mut() = None;
                        contents.tail = prev;
                        contents.len = len;
                    },
                    _ => self.state = Empty,
                }
                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` so that it ends up at `index`, shifting every later element back by one.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the list.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrCapOverflow> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len }.into());
        } else if index == 0 {
            self.push_front(value);
            return Ok(());
        } else if index == len {
            self.push_back(value);
            return Ok(());
        }

        if let Full(contents) = &mut self.state {
            let prev_node = contents.seek(index - 1);
            contents.len = contents.len.increment()?;

            let node = NodeRef::from_node(Node {
                value,
                prev: Some(prev_node),
                next: *prev_node.next(),
            });

            // Insertions at either end were handled above, so prev_node always has a next node.
            if let Some(next) = prev_node.next() {
                *next.prev_mut() = Some(node);
            }
            *prev_node.next_mut() = Some(node);
        }
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index(index)?;
        let last_index = contents.last_index();
        let target = contents.seek(index);

        match (*target.prev(), *target.next()) {
            (Some(prev), Some(next)) => {
                // SAFETY: The node is unlinked from both neighbours straight away.
                let node = unsafe { target.take_node() };
                *prev.next_mut() = Some(next);
                *next.prev_mut() = Some(prev);

                if let Full(contents) = &mut self.state
                    && let Some(len) = contents.len.decrement()
                {
                    contents.len = len;
                }
                Ok(node.value)
            },
            // Either end of the list, which pop already knows how to unlink.
            _ => {
                let popped = if index == 0 { self.pop_front() } else { self.pop_back() };
                popped.ok_or(IndexOutOfBounds { index, len: last_index + 1 })
            },
        }
    }

    /// Replaces the element at `index`, returning the previous value.
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.checked_seek(index)?.value_mut(), new_value))
    }

    /// Moves every element of `other` onto the end of this list.
    ///
    /// # Panics
    /// Panics if the combined length would overflow a `usize`.
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let Full(other_contents) = mem::take(&mut other.state) else {
            return;
        };

        match &mut self.state {
            Empty => self.state = Full(other_contents),
            Full(self_contents) => {
                self_contents.len = self_contents.len
                    .checked_add(other_contents.len.get())
                    .ok_or(CapacityOverflow)
                    .throw();

                *self_contents.tail.next_mut() = Some(other_contents.head);
                *other_contents.head.prev_mut() = Some(self_contents.tail);
                self_contents.tail = other_contents.tail;
            },
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodeRef<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Walks the list in both directions, asserting that every node's links agree.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        if let Full(ListContents { head, tail, len }) = &self.state {
            let mut curr = *head;
            let mut count = 1;
            while let Some(next) = curr.next() {
                assert!(*next.prev() == Some(curr), "Next node should point back to its prev.");
                curr = *next;
                count += 1;
            }
            assert!(*tail == curr, "Last node reached should be the tail.");
            assert_eq!(count, len.get(), "Stored length should match the node count.");
        }
    }
}

impl<T> ListContents<T> {
    /// Finds the node at `index`, starting from whichever end is closer. The index must be in
    /// bounds.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index < self.len.get() / 2 {
            Self::seek_by(index, self.head, |node| *node.next())
        } else {
            Self::seek_by(self.last_index() - index, self.tail, |node| *node.prev())
        }
    }

    fn seek_by(
        count: usize,
        mut node: NodeRef<T>,
        step: impl Fn(NodeRef<T>) -> Option<NodeRef<T>>,
    ) -> NodeRef<T> {
        for _ in 0..count {
            match step(node) {
                Some(next) => node = next,
                None => break,
            }
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.increment().throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.increment().throw();

        let node = NodeRef::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        if let Full(ListContents { head, .. }) = self.state {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                // SAFETY: Each node is visited once and the list is never used again.
                let node = unsafe { ptr.take_node() };
                curr = node.next;
            }
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "({item})")?;
        }
        Ok(())
    }
}

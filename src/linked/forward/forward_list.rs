use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{Cursor, Iter, IterMut};
pub use crate::util::error::{EmptyCollection, IndexOutOfBounds, LookupError, NotFound};
use crate::util::result::ResultExtension;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// A singly linked list. Every node owns the node after it, so the list can only be walked from
/// front to back. Adding or removing at the front is constant time, everything else requires a
/// walk from the head.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the ForwardList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push_front` / `pop_front` | `O(1)` |
/// | `push_back` / `back` | `O(n)` |
/// | `get` / `insert_at` / `remove_at` | `O(i)` |
/// | `find` / `contains` / `remove` | `O(n)` |
/// | `insert_after` / `insert_before` | `O(n)` |
pub struct ForwardList<T> {
    pub(crate) head: Link<T>,
    pub(crate) len: usize,
}

impl<T> ForwardList<T> {
    pub const fn new() -> ForwardList<T> {
        ForwardList {
            head: None,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drops every element in the list.
    pub fn clear(&mut self) {
        *self = ForwardList::new();
    }

    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.value)
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Appends `value` after the current last element. This walks the whole list.
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        // The link after the last node always exists.
        let _ = self.try_insert_at(len, value);
    }

    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.iter().nth(index).ok_or(IndexOutOfBounds { index, len: self.len })
    }

    /// Inserts `value` so that it ends up at `index`. An index equal to the length appends.
    pub fn try_insert_at(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len;
        let link = self.link_at(index).ok_or(IndexOutOfBounds { index, len })?;

        let next = link.take();
        *link = Some(Box::new(Node { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len;
        let link = self.link_at(index).ok_or(IndexOutOfBounds { index, len })?;
        let node = link.take().ok_or(IndexOutOfBounds { index, len })?;

        *link = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Inserts `value` before the first element for which `goes_before` returns true, or at the
    /// end of the list if there is no such element. Returns the index it was inserted at.
    pub fn insert_where(&mut self, value: T, goes_before: impl Fn(&T, &T) -> bool) -> usize {
        let index = self.iter()
            .position(|existing| goes_before(&value, existing))
            .unwrap_or(self.len);
        // The index is at most len, so there is always a link for it.
        let _ = self.try_insert_at(index, value);
        index
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let mut remaining = mem::take(&mut self.head);
        let mut kept = ForwardList::new();
        while let Some(node) = remaining {
            remaining = node.next;
            if keep(&node.value) {
                kept.push_front(node.value);
            }
        }
        kept.reverse();
        *self = kept;
    }

    /// Reverses the order of the list in place by relinking its nodes.
    pub fn reverse(&mut self) {
        let mut remaining = self.head.take();
        while let Some(mut node) = remaining {
            remaining = node.next.take();
            node.next = self.head.take();
            self.head = Some(node);
        }
    }

    /// Returns a read-only cursor positioned on the first element.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns the link that leads to the node at `index`, or the trailing link when `index` is
    /// equal to the length. Returns None past that.
    pub(crate) fn link_at(&mut self, index: usize) -> Option<&mut Link<T>> {
        let mut link = &mut self.head;
        for _ in 0..index {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }
}

impl<T: PartialEq> ForwardList<T> {
    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|value| value == item)
    }

    /// Returns a reference to the first element equal to `item`.
    pub fn find(&self, item: &T) -> Option<&T> {
        self.iter().find(|value| *value == item)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|value| value == item)
    }

    /// Returns true if the first element equal to `item` is the last element of the list.
    pub fn is_last(&self, item: &T) -> bool {
        self.index_of(item).is_some_and(|index| index + 1 == self.len)
    }

    /// Inserts `value` directly after the first element equal to `target`.
    pub fn insert_after(&mut self, target: &T, value: T) -> Result<(), LookupError> {
        let index = self.checked_index_of(target)?;
        self.try_insert_at(index + 1, value).map_err(|_| NotFound.into())
    }

    /// Inserts `value` directly before the first element equal to `target`.
    pub fn insert_before(&mut self, target: &T, value: T) -> Result<(), LookupError> {
        let index = self.checked_index_of(target)?;
        self.try_insert_at(index, value).map_err(|_| NotFound.into())
    }

    /// Removes the first element equal to `item`, returning it.
    pub fn remove(&mut self, item: &T) -> Result<T, LookupError> {
        let index = self.checked_index_of(item)?;
        self.try_remove_at(index).map_err(|_| NotFound.into())
    }

    fn checked_index_of(&self, item: &T) -> Result<usize, LookupError> {
        if self.is_empty() {
            return Err(EmptyCollection.into());
        }
        Ok(self.index_of(item).ok_or(NotFound)?)
    }
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        // Unlink one node at a time, so that dropping a long list doesn't recurse.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ForwardList::new();
        for value in iter {
            list.push_front(value);
        }
        list.reverse();
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail: ForwardList<T> = iter.into_iter().collect();
        let added = tail.len;
        let len = self.len;
        if let Some(link) = self.link_at(len) {
            *link = tail.head.take();
            self.len += added;
        }
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: Debug> Debug for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardList")
            .field("contents", &self.iter().collect::<Vec<_>>())
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Display> Display for ForwardList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value})")?;
        }
        Ok(())
    }
}

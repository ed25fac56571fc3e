use super::{ForwardList, Node};
use crate::util::error::IndexOutOfBounds;

/// A read-only position within a [`ForwardList`], tracking a "current" element that can be moved
/// forwards one step at a time or repositioned by index.
///
/// Once the cursor moves past the last element it is at the end: [`current`](Cursor::current)
/// returns None until it is repositioned.
pub struct Cursor<'a, T> {
    list: &'a ForwardList<T>,
    current: Option<&'a Node<T>>,
    index: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(list: &'a ForwardList<T>) -> Cursor<'a, T> {
        Cursor {
            list,
            current: list.head.as_deref(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&'a T> {
        self.current.map(|node| &node.value)
    }

    /// The index of the current element, or None if the cursor is at the end.
    pub fn index(&self) -> Option<usize> {
        self.current.map(|_| self.index)
    }

    pub const fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns true if the current element is the last one in the list.
    pub fn is_last(&self) -> bool {
        self.current.is_some_and(|node| node.next.is_none())
    }

    /// Moves to the next element, returning false if the cursor has reached the end.
    pub fn move_next(&mut self) -> bool {
        if let Some(node) = self.current {
            self.current = node.next.as_deref();
            self.index += 1;
        }
        self.current.is_some()
    }

    /// Moves back to the first element.
    pub fn reset(&mut self) {
        *self = Cursor::new(self.list);
    }

    /// Moves to the last element of the list.
    pub fn move_to_last(&mut self) {
        if let Some(last) = self.list.len().checked_sub(1) {
            // The last index is always in bounds of a non-empty list.
            let _ = self.move_to(last);
        }
    }

    /// Moves to the element at `index`, leaving the cursor untouched if `index` is out of bounds.
    pub fn move_to(&mut self, index: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.list.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }

        self.reset();
        while self.index < index {
            self.move_next();
        }
        Ok(())
    }
}

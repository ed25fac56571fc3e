use std::fmt::{self, Debug, Display, Formatter};

use crate::linked::ForwardList;
use crate::linked::forward::Iter;
pub use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A last-in-first-out stack of linked nodes. The top of the stack is the head of an underlying
/// [`ForwardList`], so every operation is `O(1)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: ForwardList<T>,
}

impl<T> Stack<T> {
    pub const fn new() -> Stack<T> {
        Stack {
            items: ForwardList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.items.push_front(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Removes the top element, returning an [`Err`] if the stack is empty.
    pub fn try_pop(&mut self) -> Result<T, EmptyCollection> {
        self.pop().ok_or(EmptyCollection)
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.front_mut()
    }

    /// Returns the top element.
    ///
    /// # Panics
    /// Panics if the stack is empty.
    pub fn top(&self) -> &T {
        self.try_peek().throw()
    }

    pub fn try_peek(&self) -> Result<&T, EmptyCollection> {
        self.peek().ok_or(EmptyCollection)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("top_to_bottom", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<T: Display> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

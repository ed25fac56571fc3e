use std::fmt::{self, Debug, Formatter};

use crate::linked::LinkedList;
use crate::linked::list::Iter;
pub use crate::util::error::EmptyCollection;

/// A first-in-first-out queue. Elements join at the back and leave from the front, both in
/// constant time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: LinkedList<T>,
}

impl<T> Queue<T> {
    pub const fn new() -> Queue<T> {
        Queue {
            items: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn try_dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.dequeue().ok_or(EmptyCollection)
    }

    /// Returns the element that will be dequeued next.
    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the most recently enqueued element.
    pub fn peek_back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("front_to_back", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

use std::fmt::{self, Debug, Formatter};

use crate::linked::LinkedList;
use crate::linked::list::Iter;
pub use crate::util::error::EmptyCollection;

/// A double ended queue, where elements can be added and removed at either end in constant time.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Deque<T> {
    items: LinkedList<T>,
}

impl<T> Deque<T> {
    pub const fn new() -> Deque<T> {
        Deque {
            items: LinkedList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push_front(&mut self, value: T) {
        self.items.push_front(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.items.pop_front().ok_or(EmptyCollection)
    }

    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.items.pop_back().ok_or(EmptyCollection)
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deque {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

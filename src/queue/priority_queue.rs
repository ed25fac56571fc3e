use std::fmt::{self, Debug, Formatter};

use crate::linked::ForwardList;
pub use crate::util::error::EmptyCollection;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Prioritised<T> {
    value: T,
    priority: i32,
}

/// A queue that releases its elements by priority, highest first. Elements of equal priority
/// leave in the order they arrived.
///
/// The elements are kept in a sorted linked list, so `enqueue` is `O(n)` while `dequeue` and `peek`
/// are `O(1)`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PriorityQueue<T> {
    items: ForwardList<Prioritised<T>>,
}

impl<T> PriorityQueue<T> {
    pub const fn new() -> PriorityQueue<T> {
        PriorityQueue {
            items: ForwardList::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` behind every queued element with the same or a higher priority.
    pub fn enqueue(&mut self, value: T, priority: i32) {
        self.items.insert_where(
            Prioritised { value, priority },
            |new, existing| new.priority > existing.priority,
        );
    }

    pub fn dequeue(&mut self) -> Result<T, EmptyCollection> {
        self.items.pop_front()
            .map(|item| item.value)
            .ok_or(EmptyCollection)
    }

    /// Returns the element that will be dequeued next.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.items.front()
            .map(|item| &item.value)
            .ok_or(EmptyCollection)
    }

    pub fn peek_priority(&self) -> Result<i32, EmptyCollection> {
        self.items.front()
            .map(|item| item.priority)
            .ok_or(EmptyCollection)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over `(value, priority)` pairs in the order they will be dequeued.
    pub fn iter(&self) -> impl Iterator<Item = (&T, i32)> {
        self.items.iter().map(|item| (&item.value, item.priority))
    }
}

impl<T: Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(value, priority)| (priority, value))).finish()
    }
}

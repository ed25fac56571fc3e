use std::fmt::{self, Debug, Formatter};

pub use crate::util::error::{Overflow, Underflow};

pub const DEFAULT_QUEUE_CAP: usize = 100;

/// A bounded queue stored in a circular buffer. The front and back indices wrap around the
/// buffer, so no element is ever moved once enqueued.
///
/// # Time Complexity
/// Every operation is `O(1)`.
pub struct RingQueue<T> {
    slots: Box<[Option<T>]>,
    front: usize,
    len: usize,
}

impl<T> RingQueue<T> {
    /// Creates a queue holding at most [`DEFAULT_QUEUE_CAP`] elements.
    pub fn new() -> RingQueue<T> {
        RingQueue::with_cap(DEFAULT_QUEUE_CAP)
    }

    pub fn with_cap(cap: usize) -> RingQueue<T> {
        RingQueue {
            slots: (0..cap).map(|_| None).collect(),
            front: 0,
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub fn cap(&self) -> usize {
        self.slots.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    pub fn enqueue(&mut self, value: T) -> Result<(), Overflow> {
        if self.is_full() {
            return Err(Overflow { cap: self.cap() });
        }
        let back = self.physical_index(self.len);
        self.slots[back] = Some(value);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        let value = self.slots[self.front].take().ok_or(Underflow)?;
        self.front = self.physical_index(1);
        self.len -= 1;
        Ok(value)
    }

    pub fn peek_front(&self) -> Result<&T, Underflow> {
        if self.is_empty() {
            return Err(Underflow);
        }
        self.slots[self.front].as_ref().ok_or(Underflow)
    }

    pub fn peek_back(&self) -> Result<&T, Underflow> {
        let last = self.len.checked_sub(1).ok_or(Underflow)?;
        self.slots[self.physical_index(last)].as_ref().ok_or(Underflow)
    }

    pub fn clear(&mut self) {
        while self.dequeue().is_ok() {}
        self.front = 0;
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len).filter_map(|offset| self.slots[self.physical_index(offset)].as_ref())
    }

    /// Maps an offset from the front of the queue to an index in the buffer.
    fn physical_index(&self, offset: usize) -> usize {
        (self.front + offset) % self.cap()
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for RingQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("front_to_back", &self.iter().collect::<Vec<_>>())
            .field("front", &self.front)
            .field("cap", &self.cap())
            .finish()
    }
}

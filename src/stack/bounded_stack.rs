pub use crate::util::error::{Overflow, Underflow};

pub const DEFAULT_STACK_CAP: usize = 100;

/// A stack backed by a fixed size array. Pushing onto a full stack fails with [`Overflow`] rather
/// than growing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    cap: usize,
}

impl<T> BoundedStack<T> {
    /// Creates a stack holding at most [`DEFAULT_STACK_CAP`] elements.
    pub fn new() -> BoundedStack<T> {
        BoundedStack::with_cap(DEFAULT_STACK_CAP)
    }

    pub fn with_cap(cap: usize) -> BoundedStack<T> {
        BoundedStack {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.cap
    }

    pub fn push(&mut self, value: T) -> Result<(), Overflow> {
        if self.is_full() {
            return Err(Overflow { cap: self.cap });
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, Underflow> {
        self.items.pop().ok_or(Underflow)
    }

    pub fn peek(&self) -> Result<&T, Underflow> {
        self.items.last().ok_or(Underflow)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

use crate::stack::Stack;
pub use crate::util::error::EmptyCollection;

/// A double ended list made of two stacks placed back to back. The front stack holds the front
/// of the list with its first element on top, the back stack holds the back of the list with its
/// last element on top.
///
/// Popping from a side whose stack is empty first moves the whole opposite stack across, which
/// reverses it so the required element ends up on top. This makes pops amortised `O(1)` as long
/// as the list isn't popped from alternating ends.
#[derive(Debug, Clone, Default)]
pub struct TwoStackList<T> {
    front: Stack<T>,
    back: Stack<T>,
}

impl<T> TwoStackList<T> {
    pub const fn new() -> TwoStackList<T> {
        TwoStackList {
            front: Stack::new(),
            back: Stack::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    pub fn push_front(&mut self, value: T) {
        self.front.push(value);
    }

    pub fn push_back(&mut self, value: T) {
        self.back.push(value);
    }

    pub fn pop_front(&mut self) -> Result<T, EmptyCollection> {
        if self.front.is_empty() {
            Self::transfer(&mut self.back, &mut self.front);
        }
        self.front.try_pop()
    }

    pub fn pop_back(&mut self) -> Result<T, EmptyCollection> {
        if self.back.is_empty() {
            Self::transfer(&mut self.front, &mut self.back);
        }
        self.back.try_pop()
    }

    pub fn peek_front(&mut self) -> Option<&T> {
        if self.front.is_empty() {
            Self::transfer(&mut self.back, &mut self.front);
        }
        self.front.peek()
    }

    pub fn peek_back(&mut self) -> Option<&T> {
        if self.back.is_empty() {
            Self::transfer(&mut self.front, &mut self.back);
        }
        self.back.peek()
    }

    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    fn transfer(from: &mut Stack<T>, to: &mut Stack<T>) {
        while let Some(value) = from.pop() {
            to.push(value);
        }
    }
}

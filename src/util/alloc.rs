//! Allocation related test helpers.

use std::cell::Cell;
use std::rc::Rc;

/// A value that increments a shared counter when dropped, used to check that collections drop
/// each of their elements exactly once.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a new value sharing the provided `counter`.
    pub fn new(counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }

    /// Creates a counter starting at zero.
    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

//! Last-in-first-out stacks, both linked and array backed.

mod bounded_stack;
mod stack;

pub use bounded_stack::*;
pub use stack::*;

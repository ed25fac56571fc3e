//! First-in-first-out queues and their double ended and prioritised relatives.

mod deque;
mod priority_queue;
mod queue;
mod ring_queue;
mod tests;
mod two_stack_list;

pub use deque::*;
pub use priority_queue::*;
pub use queue::*;
pub use ring_queue::*;
pub use two_stack_list::*;

//! Linked collection types: the singly linked [`ForwardList`], the doubly linked [`LinkedList`]
//! and the [`Polynomial`] built on top of a sorted [`ForwardList`].

pub mod forward;
pub mod list;
pub mod polynomial;

#[doc(inline)]
pub use forward::{Cursor, ForwardList};
#[doc(inline)]
pub use list::LinkedList;
#[doc(inline)]
pub use polynomial::{Polynomial, Term};

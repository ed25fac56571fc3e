//! Error types shared by several collections. Collection specific errors live beside the
//! collection that raises them.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was used that lies outside of the collection it was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The offending index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A collection would need to grow past the space available to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// An operation that requires at least one element was applied to an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty collection!")
    }
}

impl Error for EmptyCollection {}

/// The requested element isn't present in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Element not found in collection!")
    }
}

impl Error for NotFound {}

/// A bounded collection was already full when an element was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow {
    /// The fixed capacity of the collection.
    pub cap: usize,
}

impl Display for Overflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Overflow: collection is already holding its maximum of {} elements!", self.cap)
    }
}

impl Error for Overflow {}

/// An element was requested from an empty bounded collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underflow;

impl Display for Underflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Underflow: collection is empty!")
    }
}

impl Error for Underflow {}

/// Error for operations that take an index and may also need to grow the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum IndexOrCapOverflow {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
}

/// Error for operations that search a collection for an element by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum LookupError {
    /// See [`EmptyCollection`].
    EmptyCollection(EmptyCollection),
    /// See [`NotFound`].
    NotFound(NotFound),
}

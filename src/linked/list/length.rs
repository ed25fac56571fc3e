use std::num::NonZero;

use crate::util::error::CapacityOverflow;

/// The length of a non-empty list. An empty list has no contents at all, so its length is never
/// stored as zero.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub fn increment(self) -> Result<Length, CapacityOverflow> {
        self.0.checked_add(1).map(Length).ok_or(CapacityOverflow)
    }

    /// Returns the length one lower, or None if the list would become empty.
    pub fn decrement(self) -> Option<Length> {
        NonZero::new(self.0.get() - 1).map(Length)
    }

    pub fn checked_add(self, other: usize) -> Option<Length> {
        self.0.checked_add(other).map(Length)
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

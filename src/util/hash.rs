//! Hashing helpers for exercising collision handling in hash based collections.

use std::hash::{BuildHasher, Hash, Hasher};

/// A value whose hash is chosen manually, while equality still depends on `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualHash<T: Eq> {
    /// Hash reported for this value.
    pub hash: u64,
    /// The value compared for equality.
    pub value: T,
}

impl<T: Eq> ManualHash<T> {
    /// Creates a value reporting `hash` regardless of its contents.
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash { hash, value }
    }
}

impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// A hasher that only remembers the last `u64` written, so [`ManualHash`] values land exactly
/// where they ask to. Any other input hashes to zero, putting every key in the same bucket.
#[derive(Debug, Default)]
pub struct PassThroughHasher {
    state: u64,
}

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, _bytes: &[u8]) {}

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }
}

/// Builds [`PassThroughHasher`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughBuilder;

impl BuildHasher for PassThroughBuilder {
    type Hasher = PassThroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassThroughHasher::default()
    }
}

use std::hash::{BuildHasher, Hasher};

const DJB2_SEED: u64 = 5381;

/// The byte `str`'s `Hash` impl writes after the string's contents. It never occurs in UTF-8, so
/// both hashers skip it and string keys hash to exactly their bytes.
const STR_TERMINATOR: u8 = 0xff;

/// Dan Bernstein's string hash: starting from 5381, every byte updates the state to
/// `state * 33 + byte`.
#[derive(Debug, Clone, Copy)]
pub struct Djb2Hasher {
    state: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Djb2Hasher { state: DJB2_SEED }
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_mul(33).wrapping_add(*byte as u64);
        }
    }

    fn write_u8(&mut self, byte: u8) {
        if byte != STR_TERMINATOR {
            self.write(&[byte]);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Djb2Builder;

impl BuildHasher for Djb2Builder {
    type Hasher = Djb2Hasher;

    fn build_hasher(&self) -> Self::Hasher {
        Djb2Hasher::default()
    }
}

/// A shift-and-add hash: every byte updates the state to `(state << 5) + byte`. The state is 32
/// bits wide and wraps.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShiftAddHasher {
    state: u32,
}

impl Hasher for ShiftAddHasher {
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 5).wrapping_add(u32::from(*byte));
        }
    }

    fn write_u8(&mut self, byte: u8) {
        if byte != STR_TERMINATOR {
            self.write(&[byte]);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShiftAddBuilder;

impl BuildHasher for ShiftAddBuilder {
    type Hasher = ShiftAddHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ShiftAddHasher::default()
    }
}

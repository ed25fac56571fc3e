use std::borrow::Cow;
use std::fmt::{self, Debug, Display, Formatter};

pub use crate::util::error::{CapacityOverflow, IndexOrCapOverflow, IndexOutOfBounds};

/// A byte string with a fixed capacity. The capacity includes one slot reserved for a
/// terminator, so a string with capacity `cap` holds at most `cap - 1` bytes.
///
/// Positions and counts are in bytes. Text that isn't valid UTF-8 after an edit is displayed
/// lossily.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BoundedString {
    bytes: Vec<u8>,
    cap: usize,
}

impl BoundedString {
    /// Creates an empty string with the provided `cap`acity.
    pub fn with_cap(cap: usize) -> BoundedString {
        BoundedString {
            bytes: Vec::with_capacity(cap.saturating_sub(1)),
            cap,
        }
    }

    /// Creates a string with the provided `cap`acity, writing as much of `text` as fits.
    pub fn from_str_truncated(text: &str, cap: usize) -> BoundedString {
        let mut string = BoundedString::with_cap(cap);
        string.write(text.as_bytes());
        string
    }

    /// Replaces the contents with `bytes`, stopping once the string is full. Returns the number of
    /// bytes written.
    pub fn write(&mut self, bytes: &[u8]) -> usize {
        let written = bytes.len().min(self.max_len());
        self.bytes.clear();
        self.bytes.extend_from_slice(&bytes[..written]);
        written
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// The longest the string can become.
    pub const fn max_len(&self) -> usize {
        self.cap.saturating_sub(1)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_str_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Removes up to `count` bytes starting at `start`. A count running past the end of the string
    /// removes everything from `start` onwards.
    pub fn delete(&mut self, start: usize, count: usize) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if start >= len {
            return Err(IndexOutOfBounds { index: start, len });
        }
        let end = start.saturating_add(count).min(len);
        self.bytes.drain(start..end);
        Ok(())
    }

    /// Inserts `sub` so that it starts at byte `at`.
    pub fn insert(&mut self, sub: &[u8], at: usize) -> Result<(), IndexOrCapOverflow> {
        let len = self.len();
        if at > len {
            return Err(IndexOutOfBounds { index: at, len }.into());
        }
        if len + sub.len() > self.max_len() {
            return Err(CapacityOverflow.into());
        }
        self.bytes.splice(at..at, sub.iter().copied());
        Ok(())
    }

    /// Joins `a` and `b` into a new string with the provided `cap`acity.
    pub fn concat(
        a: &BoundedString,
        b: &BoundedString,
        cap: usize,
    ) -> Result<BoundedString, CapacityOverflow> {
        let mut result = BoundedString::with_cap(cap);
        if a.len() + b.len() > result.max_len() {
            return Err(CapacityOverflow);
        }
        result.bytes.extend_from_slice(&a.bytes);
        result.bytes.extend_from_slice(&b.bytes);
        Ok(result)
    }

    /// Copies up to `count` bytes starting at `start` into a new string with the same capacity.
    /// Both `start` and `count` are clamped to the string.
    pub fn substring(&self, start: usize, count: usize) -> BoundedString {
        let start = start.min(self.len());
        let end = start.saturating_add(count).min(self.len());
        let mut result = BoundedString::with_cap(self.cap);
        result.write(&self.bytes[start..end]);
        result
    }
}

impl Display for BoundedString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str_lossy())
    }
}

impl Debug for BoundedString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedString")
            .field("contents", &self.to_str_lossy())
            .field("len", &self.len())
            .field("cap", &self.cap)
            .finish()
    }
}

use std::fmt::{self, Debug, Display, Formatter};

use super::{InsertError, KeyExists, KeyNotFound, TableFull};

pub const DEFAULT_TABLE_SIZE: usize = 100;

/// The step of the secondary hash is `STEP_MODULUS - key % STEP_MODULUS`, so it is never zero.
const STEP_MODULUS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot<V> {
    Empty,
    /// A slot whose entry was removed. Lookups have to probe past it, but insertions may reuse it.
    Deleted,
    Occupied(u64, V),
}

/// A fixed size table of integer keys, resolving collisions with open addressing and double
/// hashing. The probe sequence of a key starts at `key % size` and moves in steps of
/// `7 - key % 7`, wrapping around the table, for at most `size` probes.
///
/// When the step shares a factor with the table size, a probe sequence only visits some of the
/// slots, so an insert can fail with [`TableFull`] while other slots are still free. A prime
/// table size avoids this.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `s`: The size of the table.
///
/// | Method | Complexity |
/// |-|-|
/// | `insert` | `O(1)`*, `O(s)` |
/// | `get` | `O(1)`*, `O(s)` |
/// | `remove` | `O(1)`*, `O(s)` |
///
/// \* While the table is lightly loaded and few keys collide.
#[derive(Clone, PartialEq, Eq)]
pub struct OpenHashMap<V> {
    slots: Box<[Slot<V>]>,
    len: usize,
}

impl<V> OpenHashMap<V> {
    /// Creates a table with [`DEFAULT_TABLE_SIZE`] slots.
    pub fn new() -> OpenHashMap<V> {
        OpenHashMap::with_size(DEFAULT_TABLE_SIZE)
    }

    /// Creates a table with `size` slots. At least one slot is always created.
    pub fn with_size(size: usize) -> OpenHashMap<V> {
        OpenHashMap {
            slots: (0..size.max(1)).map(|_| Slot::Empty).collect(),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the slot indices visited, in order, when looking for `key`.
    pub fn probe_sequence(&self, key: u64) -> impl Iterator<Item = usize> + use<V> {
        let size = self.size() as u64;
        let start = key % size;
        let step = STEP_MODULUS - key % STEP_MODULUS;
        (0..size).map(move |i| ((start + i * step) % size) as usize)
    }

    /// Inserts `value` for `key`, reusing the first deleted slot on the probe sequence if there is
    /// one.
    pub fn insert(&mut self, key: u64, value: V) -> Result<usize, InsertError> {
        let mut reusable = None;
        let mut target = None;

        for index in self.probe_sequence(key) {
            match &self.slots[index] {
                Slot::Occupied(existing, _) if *existing == key => {
                    return Err(KeyExists { key }.into());
                },
                Slot::Occupied(..) => {},
                Slot::Deleted => {
                    reusable.get_or_insert(index);
                },
                Slot::Empty => {
                    target = Some(index);
                    break;
                },
            }
        }

        let index = reusable.or(target).ok_or(TableFull)?;
        self.slots[index] = Slot::Occupied(key, value);
        self.len += 1;
        Ok(index)
    }

    pub fn get(&self, key: u64) -> Option<&V> {
        let index = self.find_index(key)?;
        match &self.slots[index] {
            Slot::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: u64) -> Option<&mut V> {
        let index = self.find_index(key)?;
        match &mut self.slots[index] {
            Slot::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: u64) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes the entry for `key`, leaving a deleted marker so later keys on the same probe
    /// sequence stay reachable.
    pub fn remove(&mut self, key: u64) -> Result<V, KeyNotFound> {
        let index = self.find_index(key).ok_or(KeyNotFound { key })?;
        match std::mem::replace(&mut self.slots[index], Slot::Deleted) {
            Slot::Occupied(_, value) => {
                self.len -= 1;
                Ok(value)
            },
            other => {
                self.slots[index] = other;
                Err(KeyNotFound { key })
            },
        }
    }

    /// Returns the slot index holding `key`.
    pub fn find_index(&self, key: u64) -> Option<usize> {
        for index in self.probe_sequence(key) {
            match &self.slots[index] {
                Slot::Occupied(existing, _) if *existing == key => return Some(index),
                Slot::Empty => return None,
                _ => {},
            }
        }
        None
    }

    /// Iterates over `(slot index, key, value)` for every occupied slot.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64, &V)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| match slot {
            Slot::Occupied(key, value) => Some((index, *key, value)),
            _ => None,
        })
    }
}

impl<V> Default for OpenHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug> Debug for OpenHashMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenHashMap")
            .field("entries", &self.iter().map(|(_, key, value)| (key, value)).collect::<Vec<_>>())
            .field("len", &self.len)
            .field("size", &self.size())
            .finish()
    }
}

/// Lists every occupied slot on its own line as `[index] key -> value`.
impl<V: Display> Display for OpenHashMap<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, key, value) in self.iter() {
            writeln!(f, "[{index}] {key} -> {value}")?;
        }
        Ok(())
    }
}

use std::borrow::Borrow;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::mem;

use super::Djb2Builder;
use crate::linked::ForwardList;
use crate::util::fmt::DebugRaw;

pub const DEFAULT_BUCKET_COUNT: usize = 16;

/// The key passed to [`ChainedHashMap::try_insert_unique`] was already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlreadyExists;

impl Display for AlreadyExists {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key already exists in hash map!")
    }
}

impl Error for AlreadyExists {}

type Bucket<K, V> = ForwardList<(K, V)>;

/// A map of keys to values which resolves hash collisions by chaining: each bucket is a linked
/// list of every entry whose key hashes to it. New entries are added to the front of their
/// bucket.
///
/// The number of buckets is fixed when the map is created, so the chains grow with the number of
/// entries. By default keys are hashed with [`Djb2Builder`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the map.
/// - `b`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(n/b)` |
/// | `get` | `O(n/b)` |
/// | `remove` | `O(n/b)` |
/// | `keys` / `iter` | `O(n + b)` |
pub struct ChainedHashMap<K: Hash + Eq, V, B: BuildHasher = Djb2Builder> {
    buckets: Box<[Bucket<K, V>]>,
    len: usize,
    hasher: B,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> ChainedHashMap<K, V, B> {
    /// Creates a map with [`DEFAULT_BUCKET_COUNT`] buckets.
    pub fn new() -> ChainedHashMap<K, V, B> {
        ChainedHashMap::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Creates a map with the provided number of buckets. At least one bucket is always created.
    pub fn with_buckets(count: usize) -> ChainedHashMap<K, V, B> {
        ChainedHashMap::with_buckets_and_hasher(count, B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainedHashMap<K, V, B> {
    pub fn with_buckets_and_hasher(count: usize, hasher: B) -> ChainedHashMap<K, V, B> {
        ChainedHashMap {
            buckets: (0..count.max(1)).map(|_| ForwardList::new()).collect(),
            len: 0,
            hasher,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries chained in each bucket.
    pub fn bucket_lens(&self) -> impl Iterator<Item = usize> {
        self.buckets.iter().map(|bucket| bucket.len())
    }

    /// Returns the index of the bucket that `key` belongs in.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Inserts the provided `key`-`value` pair. If the key was already associated with a value,
    /// that value is replaced and returned.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(existing) = self.get_mut(&key) {
            return Some(mem::replace(existing, value));
        }

        let index = self.bucket_index(&key);
        self.buckets[index].push_front((key, value));
        self.len += 1;
        None
    }

    /// Inserts the provided `key`-`value` pair, leaving the map untouched if `key` is already
    /// present.
    pub fn try_insert_unique(&mut self, key: K, value: V) -> Result<(), AlreadyExists> {
        if self.contains_key(&key) {
            return Err(AlreadyExists);
        }
        self.insert(key, value);
        Ok(())
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|(existing, _)| existing.borrow() == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, returning its value if there was one.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(existing, _)| existing.borrow() == key)?;
        let (_, value) = bucket.try_remove_at(position).ok()?;
        self.len -= 1;
        Some(value)
    }

    /// Removes every entry, keeping the buckets.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterates over every entry, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter().flat_map(|bucket| bucket.iter().map(|(key, value)| (key, value)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for ChainedHashMap<K, V, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for ChainedHashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedHashMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for ChainedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<_> = self.buckets.iter()
            .map(|bucket| DebugRaw(
                bucket.iter()
                    .map(|(key, value)| format!("{key:?}: {value:?}"))
                    .collect::<Vec<_>>()
                    .join(" -> ")
            ))
            .collect();

        f.debug_struct("ChainedHashMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for ChainedHashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

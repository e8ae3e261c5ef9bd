use std::fmt::{self, Debug, Display, Formatter};
use std::hash::BuildHasher;
use std::{iter, mem};

use super::{Djb2Builder, IntoKeys, IntoValues, Iter, Keys, Values, digest_with};
use crate::util::fmt::DebugRaw;

/// The number of buckets used by [`BucketMap::new`].
pub const DEFAULT_BUCKETS: usize = 64;

/// A map of string keys to values, spread over a fixed number of buckets.
///
/// The bucket count is chosen at construction and never changes: there is no load factor and no
/// rehashing. Keys whose digests land in the same bucket are chained within it, so distinct keys
/// never overwrite each other no matter how badly they collide.
///
/// # Ownership
/// The map owns its values. Overwriting a key hands the previous value back to the caller and
/// dropping the map drops every value still stored in it. To keep values owned elsewhere, store
/// references or shared pointers (`&'a T`, `Rc<T>`) instead.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the BucketMap.
/// - `b`: The number of buckets.
/// - `c`: The length of the chain in the key's bucket, around `n / b` for a well mixed digest.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `set` | `O(c)` |
/// | `get` | `O(c)` |
/// | `remove` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `iter` | `O(n + b)` |
pub struct BucketMap<V, B: BuildHasher = Djb2Builder> {
    pub(crate) buckets: Box<[Chain<V>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Chain<V> = Vec<(String, V)>;

impl<V> BucketMap<V> {
    /// Creates a new, empty BucketMap with [`DEFAULT_BUCKETS`] buckets, placing keys by
    /// [`digest`](super::digest).
    pub fn new() -> BucketMap<V> {
        BucketMap::with_buckets(DEFAULT_BUCKETS)
    }

    /// Creates a new, empty BucketMap with the provided number of `buckets` (at least one),
    /// placing keys by [`digest`](super::digest).
    pub fn with_buckets(buckets: usize) -> BucketMap<V> {
        BucketMap::with_buckets_and_hasher(buckets, Djb2Builder)
    }
}

impl<V, B: BuildHasher> BucketMap<V, B> {
    /// Creates a new, empty BucketMap with [`DEFAULT_BUCKETS`] buckets and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> BucketMap<V, B> {
        BucketMap::with_buckets_and_hasher(DEFAULT_BUCKETS, hasher)
    }

    /// Creates a new, empty BucketMap with the provided number of `buckets` (at least one) and
    /// `hasher`.
    pub fn with_buckets_and_hasher(buckets: usize, hasher: B) -> BucketMap<V, B> {
        BucketMap {
            buckets: iter::repeat_with(Vec::new).take(buckets.max(1)).collect(),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the BucketMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the BucketMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets, which is fixed for the lifetime of the map.
    pub const fn buckets(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the hasher used to place keys.
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Returns the index of the bucket that `key` is (or would be) stored in.
    pub fn bucket_index(&self, key: &str) -> usize {
        // The bucket array is never empty, so the remainder is always defined.
        (digest_with(&self.hasher, key) % self.buckets() as u64) as usize
    }

    /// Associates `value` with `key`. If the key was already associated with a value, that value
    /// is replaced and handed back to the caller.
    ///
    /// As with the standard library, the stored key isn't changed if it already exists.
    pub fn set<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: AsRef<str> + Into<String>,
    {
        let index = self.bucket_index(key.as_ref());
        let chain = &mut self.buckets[index];

        match chain.iter().position(|(existing, _)| existing.as_str() == key.as_ref()) {
            Some(pos) => Some(mem::replace(&mut chain[pos].1, value)),
            None => {
                if !chain.is_empty() {
                    log::debug!(
                        "key {:?} collides in bucket {index}, chaining after {} entries",
                        key.as_ref(),
                        chain.len(),
                    );
                }
                chain.push((key.into(), value));
                self.len += 1;
                None
            },
        }
    }

    /// Returns a reference to the value associated with `key`, or None if the map contains no
    /// value for it.
    pub fn get(&self, key: &str) -> Option<&V> {
        let chain = &self.buckets[self.bucket_index(key)];
        chain.iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value associated with `key`, or None if the map
    /// contains no value for it.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.bucket_index(key);
        self.buckets[index].iter_mut()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Looks `key` up in `map`, treating an absent map or an absent key as a miss.
    ///
    /// This is the total form of [`get`](BucketMap::get) for callers that hold optional handles.
    pub fn lookup<'a>(map: Option<&'a Self>, key: Option<&str>) -> Option<&'a V> {
        map?.get(key?)
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry associated with `key`, returning ownership of its value if it exists.
    /// The relative order of the remaining entries in the bucket is preserved.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        let pos = chain.iter().position(|(existing, _)| existing == key)?;

        self.len -= 1;
        Some(chain.remove(pos).1)
    }

    /// Drops every entry, keeping the bucket array.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            chain.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all key-value pairs in the BucketMap, as references.
    ///
    /// Entries are visited bucket by bucket and in insertion order within a bucket. Nothing beyond
    /// that is guaranteed, in particular not the overall insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the BucketMap, as references.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over all values in the BucketMap, as references.
    pub fn values(&self) -> Values<'_, V> {
        Values(self.iter())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<V> {
        IntoValues(self.into_iter())
    }
}

impl<V, B: BuildHasher + Default> Default for BucketMap<V, B> {
    fn default() -> Self {
        BucketMap::with_hasher(B::default())
    }
}

impl<K, V, B> Extend<(K, V)> for BucketMap<V, B>
where
    K: AsRef<str> + Into<String>,
    B: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V, B> FromIterator<(K, V)> for BucketMap<V, B>
where
    K: AsRef<str> + Into<String>,
    B: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = BucketMap::with_hasher(B::default());
        map.extend(iter);
        map
    }
}

impl<V: Debug, B: BuildHasher + Debug> Debug for BucketMap<V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter()
            .map(|chain| DebugRaw(match chain.is_empty() {
                true => "-".into(),
                false => chain.iter()
                    .map(|(k, v)| format!("({k:?}: {v:?})"))
                    .collect::<Vec<_>>()
                    .join(" -> "),
            }))
            .collect::<Vec<_>>();

        f.debug_struct("BucketMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<V: Debug, B: BuildHasher> Display for BucketMap<V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}

//! Bucket-sharded concurrent map
//!
//! # Design
//!
//! - Fixed number of buckets chosen at construction
//! - Each bucket is a `parking_lot::Mutex<BTreeMap<K, V>>`
//! - A key lives in bucket `key as u64 % bucket_count`
//!
//! Writers to keys in different buckets never contend. All writers to the
//! same key land in the same bucket and serialize through its lock.
//!
//! # Locking
//!
//! Every operation holds at most one bucket lock at a time, and every hold is
//! scoped to a guard, so the map cannot deadlock against itself. Callers must
//! not call back into the map while holding an [`Access`] guard.

use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use std::collections::BTreeMap;

/// Locked access to a single value slot
///
/// Holds the bucket lock until dropped.
pub type Access<'a, V> = MappedMutexGuard<'a, V>;

/// Integer key that can be assigned to a bucket
pub trait BucketKey: Copy + Ord + Send {
    /// Bucket index for this key, in `0..bucket_count`
    fn bucket_index(self, bucket_count: usize) -> usize;
}

macro_rules! impl_bucket_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl BucketKey for $t {
                #[inline]
                fn bucket_index(self, bucket_count: usize) -> usize {
                    (self as u64 % bucket_count as u64) as usize
                }
            }
        )*
    };
}

impl_bucket_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Fixed-bucket, mutex-sharded map from integer keys to values
///
/// # Example
///
/// ```
/// use lexis_concurrency::ConcurrentMap;
///
/// let scores: ConcurrentMap<i32, f64> = ConcurrentMap::new(4);
/// *scores.access(7) += 0.5;
/// *scores.access(7) += 0.25;
/// assert_eq!(scores.build_ordinary_map()[&7], 0.75);
/// ```
pub struct ConcurrentMap<K, V> {
    buckets: Box<[Mutex<BTreeMap<K, V>>]>,
}

impl<K: BucketKey, V> ConcurrentMap<K, V> {
    /// Create a map with `bucket_count` buckets
    ///
    /// A zero bucket count is treated as one.
    pub fn new(bucket_count: usize) -> Self {
        let buckets = (0..bucket_count.max(1))
            .map(|_| Mutex::new(BTreeMap::new()))
            .collect();
        Self { buckets }
    }

    /// Number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn bucket(&self, key: K) -> &Mutex<BTreeMap<K, V>> {
        &self.buckets[key.bucket_index(self.buckets.len())]
    }

    /// Locked mutable access to the slot for `key`
    ///
    /// Creates a `V::default()` slot on first access. The returned guard
    /// holds only the key's bucket lock.
    pub fn access(&self, key: K) -> Access<'_, V>
    where
        V: Default,
    {
        let bucket = self.bucket(key).lock();
        MutexGuard::map(bucket, |data| data.entry(key).or_default())
    }

    /// Remove `key`, returning its value if present
    pub fn erase(&self, key: K) -> Option<V> {
        self.bucket(key).lock().remove(&key)
    }

    /// Check whether `key` has a slot
    pub fn contains_key(&self, key: K) -> bool {
        self.bucket(key).lock().contains_key(&key)
    }

    /// Total number of slots across all buckets
    ///
    /// Buckets are counted one at a time, so the result is only exact when
    /// no other thread is inserting or erasing.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.lock().len()).sum()
    }

    /// Check if the map has no slots
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.lock().is_empty())
    }

    /// Copy every slot into an ordered map
    ///
    /// Locks each bucket in turn, in bucket order, never more than one at a
    /// time.
    pub fn build_ordinary_map(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut result = BTreeMap::new();
        for bucket in self.buckets.iter() {
            let data = bucket.lock();
            result.extend(data.iter().map(|(key, value)| (*key, value.clone())));
        }
        result
    }

    /// Consume the map into an ordered map without copying values
    pub fn into_ordinary_map(self) -> BTreeMap<K, V> {
        let mut result = BTreeMap::new();
        for bucket in self.buckets.into_vec() {
            result.extend(bucket.into_inner());
        }
        result
    }
}

impl<K: BucketKey, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self::new(1)
    }
}

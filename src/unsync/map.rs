use super::{
    bucket::{BucketArray, Entry},
    LongMapBuilder,
};
use crate::common::{
    builder_utils, error::ConfigError, hash, threshold_for, DEFAULT_INITIAL_CAPACITY,
    DEFAULT_LOAD_FACTOR, MAXIMUM_CAPACITY,
};

use std::fmt;

/// A hash map from `i64` keys to values of type `V`. It is _not_ thread-safe.
///
/// `LongMap` stores its keys inline as plain integers. It keeps a power-of-two
/// sized array of buckets, and entries whose keys land in the same bucket are
/// chained together. Every entry also stores the mixed hash of its key, so
/// resizing the bucket array only re-links entries.
///
/// # Growing and shrinking
///
/// The bucket array is allocated on the first insert, using the initial
/// capacity (16 by default). The map then keeps the number of entries per bucket
/// bounded in both directions:
///
/// - When an insert makes the number of entries exceed the _threshold_
///   (`capacity * load_factor`), the bucket array is doubled, up to `2^30`
///   buckets.
/// - When a removal makes the number of entries drop to half of the threshold or
///   below, the bucket array is halved, but never below the initial capacity.
///
/// Each insert or removal resizes at most once. With a very small load factor
/// several halvings can be due at once, so a map emptied by removals may keep a
/// bucket array larger than its initial capacity. A map holding exactly
/// `threshold / 2` entries can also alternate between two sizes when one key is
/// inserted and removed repeatedly.
///
/// [`clear`](#method.clear) removes every entry but keeps the bucket array.
///
/// # Examples
///
/// ```rust
/// use longmap::LongMap;
///
/// let mut map = LongMap::new();
///
/// // Insert 13 entries. This is one more than the threshold of the default
/// // capacity (16 * 0.75 = 12), so the map doubles its bucket array.
/// for key in 0..13 {
///     map.insert(key, format!("value {}", key));
/// }
/// assert_eq!(map.capacity(), 32);
///
/// // Remove every other entry.
/// for key in (0..13).step_by(2) {
///     map.remove(key);
/// }
///
/// // Verify the result.
/// for key in 0..13 {
///     if key % 2 == 0 {
///         assert_eq!(map.get(key), None);
///     } else {
///         assert_eq!(map.get(key), Some(&format!("value {}", key)));
///     }
/// }
/// assert_eq!(map.len(), 6);
/// // The map has shrunk back to its initial capacity.
/// assert_eq!(map.capacity(), 16);
/// ```
///
/// # Absent values
///
/// Lookups return `Option<&V>`, so a missing key is always `None`. To store
/// "no value" for a key, use an `Option` as the value type. `get` then tells the
/// two cases apart:
///
/// ```rust
/// use longmap::LongMap;
///
/// let mut map: LongMap<Option<&str>> = LongMap::new();
/// map.insert(7, None);
///
/// assert_eq!(map.get(7), Some(&None));
/// assert_eq!(map.get(8), None);
/// assert!(map.contains_key(7));
/// assert!(map.contains_value(&None));
/// ```
///
/// # Thread safety
///
/// `LongMap` has no internal synchronization; all mutations take `&mut self`.
/// To share a map between threads, put it behind a lock.
pub struct LongMap<V> {
    table: Option<BucketArray<V>>,
    len: usize,
    initial_capacity: usize,
    load_factor: f32,
    threshold: usize,
}

impl<V> LongMap<V> {
    /// Constructs an empty `LongMap<V>` with the default initial capacity (16)
    /// and the default load factor (0.75).
    ///
    /// No memory is allocated until the first insert.
    pub fn new() -> Self {
        Self::with_everything(DEFAULT_INITIAL_CAPACITY, DEFAULT_LOAD_FACTOR)
    }

    /// Constructs an empty `LongMap<V>` with the given initial capacity and the
    /// default load factor (0.75).
    ///
    /// The capacity is rounded up to the next power of two and clamped to `2^30`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_everything(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Constructs an empty `LongMap<V>` with the given initial capacity and load
    /// factor.
    ///
    /// The capacity is rounded up to the next power of two and clamped to `2^30`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLoadFactor`][invalid-lf] if `load_factor` is
    /// zero, negative, infinite or NaN.
    ///
    /// [invalid-lf]: ../enum.ConfigError.html#variant.InvalidLoadFactor
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f32,
    ) -> Result<Self, ConfigError> {
        let load_factor = builder_utils::ensure_load_factor(load_factor)?;
        Ok(Self::with_everything(capacity, load_factor))
    }

    /// Returns a [`LongMapBuilder`][builder-struct], which can build a `LongMap`
    /// with various configuration knobs.
    ///
    /// [builder-struct]: ./struct.LongMapBuilder.html
    pub fn builder() -> LongMapBuilder<LongMap<V>> {
        LongMapBuilder::default()
    }

    pub(crate) fn with_everything(initial_capacity: usize, load_factor: f32) -> Self {
        let initial_capacity = builder_utils::table_size_for(initial_capacity);
        Self {
            table: None,
            len: 0,
            initial_capacity,
            load_factor,
            threshold: threshold_for(initial_capacity, load_factor),
        }
    }
}

//
// public
//
impl<V> LongMap<V> {
    /// Returns the number of entries in the map.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets, or `0` if the bucket array has not been
    /// allocated yet.
    pub fn capacity(&self) -> usize {
        self.table.as_ref().map_or(0, BucketArray::capacity)
    }

    /// Returns the load factor of the map.
    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }

    /// Returns the number of entries above which the map grows.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Returns a reference to the value for the key, or `None` if the map has no
    /// entry for it.
    pub fn get(&self, key: i64) -> Option<&V> {
        self.table
            .as_ref()?
            .get(hash::hash(key), key)
            .map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value for the key, or `None` if the map
    /// has no entry for it.
    pub fn get_mut(&mut self, key: i64) -> Option<&mut V> {
        self.table
            .as_mut()?
            .get_mut(hash::hash(key), key)
            .map(|entry| &mut entry.value)
    }

    /// Returns `true` if the map has an entry for the key.
    pub fn contains_key(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if one or more keys are mapped to a value equal to `value`.
    ///
    /// This scans every entry.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.entries().any(|entry| entry.value == *value)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already has an entry for the key, its value is replaced and the
    /// old value is returned. Otherwise a new entry is added and `None` is
    /// returned; this may grow the bucket array.
    pub fn insert(&mut self, key: i64, value: V) -> Option<V> {
        let hash = hash::hash(key);
        if let Some(old_value) = self.table_mut().insert(hash, key, value) {
            return Some(old_value);
        }

        self.len += 1;
        if self.len > self.threshold {
            self.grow();
        }
        None
    }

    /// Removes the entry for the key and returns its value, or `None` if the map
    /// has no entry for it.
    ///
    /// This may shrink the bucket array.
    pub fn remove(&mut self, key: i64) -> Option<V> {
        let entry = self.table.as_mut()?.remove(hash::hash(key), key)?;

        self.len -= 1;
        if self.len <= self.threshold / 2 {
            self.shrink();
        }
        Some(entry.value)
    }

    /// Removes all entries.
    ///
    /// The bucket array is kept, so the capacity does not change.
    pub fn clear(&mut self) {
        if let Some(table) = &mut self.table {
            table.clear();
        }
        self.len = 0;
    }

    /// Returns the keys of all entries.
    ///
    /// The order is the internal bucket order. It is not sorted, and it changes
    /// when the map resizes.
    pub fn keys(&self) -> Vec<i64> {
        let mut keys = Vec::with_capacity(self.len);
        keys.extend(self.entries().map(|entry| entry.key));
        debug_assert_eq!(keys.len(), self.len);
        keys
    }

    /// Returns clones of the values of all entries, in the same order as
    /// [`keys`](#method.keys).
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        let mut values = Vec::with_capacity(self.len);
        values.extend(self.entries().map(|entry| entry.value.clone()));
        debug_assert_eq!(values.len(), self.len);
        values
    }
}

//
// private
//
impl<V> LongMap<V> {
    #[inline]
    fn entries(&self) -> impl Iterator<Item = &Entry<V>> + '_ {
        self.table.iter().flat_map(BucketArray::entries)
    }

    /// Returns the bucket array, allocating it with the initial capacity if this
    /// is the first insert.
    fn table_mut(&mut self) -> &mut BucketArray<V> {
        let capacity = self.initial_capacity;
        if self.table.is_none() {
            self.threshold = threshold_for(capacity, self.load_factor);

            #[cfg(feature = "logging")]
            log::trace!(
                "Allocated a bucket array of {} buckets (threshold: {})",
                capacity,
                self.threshold
            );
        }
        self.table.get_or_insert_with(|| BucketArray::new(capacity))
    }

    fn grow(&mut self) {
        let capacity = self.capacity();
        if capacity < MAXIMUM_CAPACITY {
            self.resize((capacity * 2).min(MAXIMUM_CAPACITY));
        }
    }

    fn shrink(&mut self) {
        let capacity = self.capacity();
        if capacity > self.initial_capacity {
            self.resize((capacity / 2).max(self.initial_capacity));
        }
    }

    fn resize(&mut self, capacity: usize) {
        let Some(table) = self.table.take() else {
            return;
        };

        #[cfg(feature = "logging")]
        let old_capacity = table.capacity();

        self.table = Some(table.resized(capacity));
        self.threshold = threshold_for(capacity, self.load_factor);

        #[cfg(feature = "logging")]
        log::debug!(
            "Resized the bucket array from {} to {} buckets (entries: {}, threshold: {})",
            old_capacity,
            capacity,
            self.len,
            self.threshold
        );
    }
}

impl<V> Default for LongMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for LongMap<V> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            len: self.len,
            initial_capacity: self.initial_capacity,
            load_factor: self.load_factor,
            threshold: self.threshold,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for LongMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}

impl<V> Extend<(i64, V)> for LongMap<V> {
    fn extend<I: IntoIterator<Item = (i64, V)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(key, value)| {
            self.insert(key, value);
        });
    }
}

impl<V> FromIterator<(i64, V)> for LongMap<V> {
    fn from_iter<I: IntoIterator<Item = (i64, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

use std::mem;

use crate::common::hash;

type Link<V> = Option<Box<Entry<V>>>;

/// A key-value entry. Entries in the same bucket form a singly linked chain.
pub(crate) struct Entry<V> {
    /// The mixed hash of `key`, kept so that a resize does not need to re-mix.
    pub(crate) hash: u32,
    pub(crate) key: i64,
    pub(crate) value: V,
    next: Link<V>,
}

impl<V> Entry<V> {
    fn new(hash: u32, key: i64, value: V) -> Box<Self> {
        Box::new(Self {
            hash,
            key,
            value,
            next: None,
        })
    }

    #[inline]
    fn matches(&self, hash: u32, key: i64) -> bool {
        self.hash == hash && self.key == key
    }
}

/// A power-of-two sized array of bucket heads.
///
/// Every entry reachable from bucket `i` has `hash & (capacity - 1) == i`.
pub(crate) struct BucketArray<V> {
    buckets: Box<[Link<V>]>,
}

impl<V> BucketArray<V> {
    pub(crate) fn new(capacity: usize) -> Self {
        assert!(
            capacity.is_power_of_two(),
            "capacity must be a power of two: {capacity}"
        );
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Self {
            buckets: buckets.into_boxed_slice(),
        }
    }

    /// Returns the number of buckets.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    fn index(&self, hash: u32) -> usize {
        hash::bucket_index(hash, self.capacity())
    }

    pub(crate) fn get(&self, hash: u32, key: i64) -> Option<&Entry<V>> {
        let mut link = self.buckets[self.index(hash)].as_deref();
        while let Some(entry) = link {
            if entry.matches(hash, key) {
                return Some(entry);
            }
            link = entry.next.as_deref();
        }
        None
    }

    pub(crate) fn get_mut(&mut self, hash: u32, key: i64) -> Option<&mut Entry<V>> {
        let index = self.index(hash);
        let mut link = self.buckets[index].as_deref_mut();
        while let Some(entry) = link {
            if entry.matches(hash, key) {
                return Some(entry);
            }
            link = entry.next.as_deref_mut();
        }
        None
    }

    /// Inserts a key-value pair, or replaces the value of the existing entry for
    /// `key`. Returns the replaced value.
    ///
    /// The whole chain is searched before a new entry is linked, so a key is never
    /// stored twice.
    pub(crate) fn insert(&mut self, hash: u32, key: i64, value: V) -> Option<V> {
        if let Some(entry) = self.get_mut(hash, key) {
            return Some(mem::replace(&mut entry.value, value));
        }
        self.push_front(Entry::new(hash, key, value));
        None
    }

    /// Unlinks the entry for `key` from wherever it sits in its chain and returns
    /// it. The rest of the chain stays linked.
    pub(crate) fn remove(&mut self, hash: u32, key: i64) -> Option<Box<Entry<V>>> {
        let index = self.index(hash);
        let mut link = &mut self.buckets[index];
        loop {
            let found = link.as_deref()?.matches(hash, key);
            if found {
                let mut removed = link.take()?;
                *link = removed.next.take();
                return Some(removed);
            }
            link = &mut link.as_mut()?.next;
        }
    }

    /// Drops every entry but keeps the buckets.
    pub(crate) fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            drop_chain(bucket.take());
        }
    }

    /// Moves every entry into a new array of `capacity` buckets. Entries are
    /// re-linked, not re-allocated.
    pub(crate) fn resized(mut self, capacity: usize) -> Self {
        let mut new_array = Self::new(capacity);
        for bucket in self.buckets.iter_mut() {
            let mut link = bucket.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
                new_array.push_front(entry);
            }
        }
        new_array
    }

    /// Returns an iterator over the entries, buckets in ascending index order and
    /// each chain from head to tail.
    pub(crate) fn entries(&self) -> Entries<'_, V> {
        Entries {
            buckets: self.buckets.iter(),
            chain: None,
        }
    }

    fn push_front(&mut self, mut entry: Box<Entry<V>>) {
        debug_assert!(entry.next.is_none());
        let index = self.index(entry.hash);
        entry.next = self.buckets[index].take();
        self.buckets[index] = Some(entry);
    }

    #[cfg(test)]
    fn chain_len(&self, index: usize) -> usize {
        let mut len = 0;
        let mut link = self.buckets[index].as_deref();
        while let Some(entry) = link {
            len += 1;
            link = entry.next.as_deref();
        }
        len
    }
}

impl<V: Clone> Clone for BucketArray<V> {
    fn clone(&self) -> Self {
        let mut new_array = Self::new(self.capacity());
        let mut chain = Vec::new();
        for (index, bucket) in self.buckets.iter().enumerate() {
            let mut link = bucket.as_deref();
            while let Some(entry) = link {
                chain.push(entry);
                link = entry.next.as_deref();
            }
            // Link from the tail so that the clone keeps the chain order.
            let mut head = None;
            for entry in chain.drain(..).rev() {
                let mut cloned = Entry::new(entry.hash, entry.key, entry.value.clone());
                cloned.next = head;
                head = Some(cloned);
            }
            new_array.buckets[index] = head;
        }
        new_array
    }
}

impl<V> Drop for BucketArray<V> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Dropping a `Box<Entry>` would drop its `next` recursively, which can overflow
// the stack on a long chain.
fn drop_chain<V>(mut link: Link<V>) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}

pub(crate) struct Entries<'a, V> {
    buckets: std::slice::Iter<'a, Link<V>>,
    chain: Option<&'a Entry<V>>,
}

impl<'a, V> Iterator for Entries<'a, V> {
    type Item = &'a Entry<V>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                return Some(entry);
            }
            self.chain = self.buckets.next()?.as_deref();
        }
    }
}

//! String-keyed open-addressing hash map with Robin Hood displacement.
//!
//! `Map` backs the JSON object variant. The bucket table is a single
//! [`Array`] of optional entries; each occupied bucket caches the key's hash
//! and its probe distance (how far linear probing has pushed it from its
//! ideal slot). Insertion displaces residents with a smaller probe distance
//! (the Robin Hood rule), which keeps the maximum probe length short, and
//! deletion backward-shifts the following cluster instead of leaving
//! tombstones.
//!
//! The table starts at capacity 8 and doubles whenever the load factor
//! would reach 0.75 before an insertion. Rehashing resets every surviving
//! entry's probe distance and reinserts it. Iteration is in bucket order,
//! which is hash-dependent — not insertion order.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::Index;
use std::slice;

use crate::array::{self, Array};
use crate::opt_ref::{OptMut, OptRef};

const INITIAL_CAPACITY: usize = 8;
const LOAD_FACTOR: f64 = 0.75;

#[derive(Clone)]
struct Bucket<V> {
    key: String,
    hash: u64,
    distance: u32,
    value: V,
}

pub struct Map<V> {
    buckets: Array<Option<Bucket<V>>>,
    len: usize,
}

/// Keys hash identically whether queried as `&str` or stored as `String`,
/// so borrowed lookups never allocate.
fn hash_key(key: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

fn empty_table<V>(capacity: usize) -> Array<Option<Bucket<V>>> {
    let mut table = Array::with_capacity(capacity);
    for _ in 0..capacity {
        table.push(None);
    }
    table
}

impl<V> Map<V> {
    pub fn new() -> Self {
        Self {
            buckets: empty_table(INITIAL_CAPACITY),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Insert only if the key is absent. Returns the stored value and
    /// whether this call inserted it; an existing key is left untouched.
    pub fn insert(&mut self, key: &str, value: V) -> (&mut V, bool) {
        let hash = hash_key(key);
        if let Some(index) = self.find_index(key, hash) {
            return (self.value_at_mut(index), false);
        }

        let index = self.insert_bucket(Bucket {
            key: key.to_owned(),
            hash,
            distance: 0,
            value,
        });
        (self.value_at_mut(index), true)
    }

    /// Insert or overwrite. The flag is `true` only when the key was newly
    /// inserted.
    pub fn insert_or_assign(&mut self, key: &str, value: V) -> (&mut V, bool) {
        let hash = hash_key(key);
        if let Some(index) = self.find_index(key, hash) {
            let slot = self.value_at_mut(index);
            *slot = value;
            return (self.value_at_mut(index), false);
        }

        let index = self.insert_bucket(Bucket {
            key: key.to_owned(),
            hash,
            distance: 0,
            value,
        });
        (self.value_at_mut(index), true)
    }

    /// Checked lookup; never inserts.
    pub fn at(&self, key: &str) -> OptRef<'_, V> {
        match self.find_index(key, hash_key(key)) {
            Some(index) => OptRef::some(self.value_at(index)),
            None => OptRef::none(),
        }
    }

    pub fn at_mut(&mut self, key: &str) -> OptMut<'_, V> {
        match self.find_index(key, hash_key(key)) {
            Some(index) => OptMut::some(self.value_at_mut(index)),
            None => OptMut::none(),
        }
    }

    /// Read-only entry lookup: the stored key and its value, or `None` when
    /// the key is absent. Never inserts.
    pub fn find(&self, key: &str) -> Option<(&str, &V)> {
        let index = self.find_index(key, hash_key(key))?;
        match self.buckets[index].as_ref() {
            Some(bucket) => Some((bucket.key.as_str(), &bucket.value)),
            None => unreachable!("index points at an occupied bucket"),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find_index(key, hash_key(key)).is_some()
    }

    /// Delete a key if present, backward-shifting the probe cluster behind
    /// it so no tombstones are needed. Returns whether the key existed.
    pub fn remove(&mut self, key: &str) -> bool {
        let hash = hash_key(key);
        let Some(mut index) = self.find_index(key, hash) else {
            return false;
        };

        self.buckets[index] = None;
        let capacity = self.capacity();
        loop {
            let next = (index + 1) % capacity;
            match self.buckets[next].as_mut() {
                // Entries still displaced from their ideal slot move one
                // step closer to it.
                Some(bucket) if bucket.distance > 0 => bucket.distance -= 1,
                _ => break,
            }
            self.buckets.as_mut_slice().swap(index, next);
            index = next;
        }

        self.len -= 1;
        true
    }

    pub fn clear(&mut self) {
        for slot in self.buckets.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Iterate `(key, value)` pairs in bucket order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.buckets.iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            inner: self.buckets.iter_mut(),
        }
    }

    fn value_at(&self, index: usize) -> &V {
        match self.buckets[index].as_ref() {
            Some(bucket) => &bucket.value,
            None => unreachable!("index points at an occupied bucket"),
        }
    }

    fn value_at_mut(&mut self, index: usize) -> &mut V {
        match self.buckets[index].as_mut() {
            Some(bucket) => &mut bucket.value,
            None => unreachable!("index points at an occupied bucket"),
        }
    }

    /// Linear probe from the ideal slot until the key or an empty bucket is
    /// found. The table never fills completely, so probing terminates.
    fn find_index(&self, key: &str, hash: u64) -> Option<usize> {
        let capacity = self.capacity();
        let mut index = (hash as usize) % capacity;

        while let Some(bucket) = self.buckets[index].as_ref() {
            if bucket.key == key {
                return Some(index);
            }
            index = (index + 1) % capacity;
        }

        None
    }

    /// Robin Hood insertion of a key known to be absent. Returns the bucket
    /// index where the entry's key ended up.
    fn insert_bucket(&mut self, entry: Bucket<V>) -> usize {
        self.grow_if_loaded();
        let index = self.place(entry);
        self.len += 1;
        index
    }

    fn place(&mut self, mut entry: Bucket<V>) -> usize {
        let capacity = self.capacity();
        let mut index = (entry.hash as usize) % capacity;
        let mut resting = None;

        loop {
            match self.buckets[index].as_mut() {
                None => break,
                Some(resident) => {
                    // The entry that has probed further deserves the slot;
                    // the displaced resident continues probing.
                    if entry.distance > resident.distance {
                        mem::swap(resident, &mut entry);
                        if resting.is_none() {
                            resting = Some(index);
                        }
                    }
                    entry.distance += 1;
                    index = (index + 1) % capacity;
                }
            }
        }

        self.buckets[index] = Some(entry);
        resting.unwrap_or(index)
    }

    /// Grow before an insertion would push the load factor to 0.75.
    fn grow_if_loaded(&mut self) {
        if (self.len as f64) / (self.capacity() as f64) >= LOAD_FACTOR {
            self.grow_and_rehash();
        }
    }

    fn grow_and_rehash(&mut self) {
        let doubled = self.capacity() * 2;
        let old = mem::replace(&mut self.buckets, empty_table(doubled));

        for slot in old {
            if let Some(mut bucket) = slot {
                bucket.distance = 0;
                self.place(bucket);
            }
        }
    }
}

impl<V: Default> Map<V> {
    /// Mutable access to the value for `key`, inserting a default value
    /// first when the key is absent.
    pub fn get_or_default(&mut self, key: &str) -> &mut V {
        let hash = hash_key(key);
        let index = match self.find_index(key, hash) {
            Some(index) => index,
            None => self.insert_bucket(Bucket {
                key: key.to_owned(),
                hash,
                distance: 0,
                value: V::default(),
            }),
        };
        self.value_at_mut(index)
    }
}

impl<V> Default for Map<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for Map<V> {
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            len: self.len,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Map<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Content equality: same key set with equal values, regardless of bucket
/// layout.
impl<V: PartialEq> PartialEq for Map<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self
                .iter()
                .all(|(key, value)| other.at(key).value() == Some(value))
    }
}

/// Read access by key; panics when the key is absent (use [`Map::at`] for
/// checked lookups).
impl<V> Index<&str> for Map<V> {
    type Output = V;

    fn index(&self, key: &str) -> &V {
        match self.at(key).value() {
            Some(value) => value,
            None => panic!("no entry found for key {key:?}"),
        }
    }
}

pub struct Iter<'a, V> {
    inner: slice::Iter<'a, Option<Bucket<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|slot| slot.as_ref().map(|b| (b.key.as_str(), &b.value)))
    }
}

pub struct IterMut<'a, V> {
    inner: slice::IterMut<'a, Option<Bucket<V>>>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = (&'a str, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|slot| slot.as_mut().map(|b| (b.key.as_str(), &mut b.value)))
    }
}

impl<'a, V> IntoIterator for &'a Map<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V> IntoIterator for &'a mut Map<V> {
    type Item = (&'a str, &'a mut V);
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Consuming iteration yields owned `(key, value)` pairs in bucket order.
impl<V> IntoIterator for Map<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.buckets.into_iter(),
        }
    }
}

pub struct IntoIter<V> {
    inner: array::IntoIter<Option<Bucket<V>>>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = (String, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|slot| slot.map(|b| (b.key, b.value)))
    }
}

//! # Open Addressing Hash Table
//!
//! This module provides the byte-keyed counting **Table** behind the word frequency
//! counter. All entries live directly in one contiguous slot array; collisions are
//! resolved by *linear probing* and the array doubles whenever the load factor reaches
//! its configured maximum.
//!
//! ## Key Features
//! - **Open Addressing**: each slot is either `Empty` or holds exactly one [`Entry`].
//! - **Linear Probing**: the probe sequence for a key starts at `hash(key) % capacity` and
//!   advances by one slot, wrapping around, for at most `capacity` probes.
//! - **Automatic Growth**: before every insertion, if `len / capacity >= alpha` the table
//!   is rebuilt at twice its capacity.
//! - **No Deletion**: entries are only ever added or updated, so no tombstones are needed.
//! - **Pluggable Hasher**: FNV-1a by default, any `BuildHasher` through [`TableBuilder`].
//!
//! Keys are raw byte strings compared byte for byte, so input that is not valid UTF-8
//! still gets one entry per distinct key. Every key-taking method accepts anything that
//! is `AsRef<[u8]>` (`&str`, `String`, byte slices).
//!
//! Iteration order is bucket order. It reflects hash placement and probe history, not
//! insertion order.
//!
//! ## Example
//! ```rust
//! use freq::cs::hashing::open_addressing::Table;
//!
//! let mut table = Table::create(0, 0.5);
//! table.insert_or_update("word", 1);
//! table.insert_or_update("word", 2);
//! assert_eq!(table.lookup("word"), Some(2));
//! assert_eq!(table.lookup("missing"), None);
//! assert_eq!(table.len(), 1);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::hash::{BuildHasher, Hasher};
use std::io::{self, Write};

use log::{debug, warn};

use super::fnv::FnvBuildHasher;

/// Capacity substituted when a table is requested with zero slots.
pub const DEFAULT_CAPACITY: usize = 16;
/// Default maximum load factor.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.5;

/// A stored key and its count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: Box<[u8]>,
    value: u64,
}

impl Entry {
    fn new(key: Vec<u8>, value: u64) -> Self {
        Self {
            key: key.into_boxed_slice(),
            value,
        }
    }

    /// The key bytes. Never change once the entry exists.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// The key as text, with invalid UTF-8 shown as U+FFFD.
    pub fn key_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.key)
    }

    /// The current count.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key_lossy(), self.value)
    }
}

#[derive(Debug, Clone, Default)]
enum Slot {
    #[default]
    Empty,
    Occupied(Entry),
}

fn empty_buckets(capacity: usize) -> Vec<Slot> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Default::default);
    buckets
}

/// A builder for [`Table`], for when the default FNV hasher should be swapped out.
#[derive(Debug)]
pub struct TableBuilder<S> {
    capacity: usize,
    max_load_factor: f64,
    hasher: S,
}

impl Default for TableBuilder<FnvBuildHasher> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            hasher: FnvBuildHasher::default(),
        }
    }
}

impl TableBuilder<FnvBuildHasher> {
    /// Create a new builder with default capacity, load factor and FNV-1a hashing.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: BuildHasher> TableBuilder<S> {
    /// Sets the initial number of slots. Zero selects [`DEFAULT_CAPACITY`].
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        self
    }

    /// Sets the maximum load factor. Stored as given; values outside `(0, 1]` are the
    /// caller's problem.
    pub fn with_max_load_factor(mut self, alpha: f64) -> Self {
        self.max_load_factor = alpha;
        self
    }

    /// Replaces the hasher builder.
    pub fn with_hasher<T: BuildHasher>(self, hasher: T) -> TableBuilder<T> {
        TableBuilder {
            capacity: self.capacity,
            max_load_factor: self.max_load_factor,
            hasher,
        }
    }

    /// Build an empty table.
    pub fn build(self) -> Table<S> {
        Table {
            buckets: empty_buckets(self.capacity),
            len: 0,
            max_load_factor: self.max_load_factor,
            build_hasher: self.hasher,
        }
    }
}

/// Open addressing, linear probing table from words to counts.
///
/// Dropping the table drops every entry along with the slot array.
#[derive(Debug, Clone)]
pub struct Table<S = FnvBuildHasher> {
    buckets: Vec<Slot>,
    len: usize,
    max_load_factor: f64,
    build_hasher: S,
}

impl Table<FnvBuildHasher> {
    /// Creates an empty table with `capacity` slots (zero selects [`DEFAULT_CAPACITY`])
    /// and maximum load factor `alpha`.
    pub fn create(capacity: usize, alpha: f64) -> Self {
        TableBuilder::new()
            .with_capacity(capacity)
            .with_max_load_factor(alpha)
            .build()
    }
}

impl Default for Table<FnvBuildHasher> {
    fn default() -> Self {
        TableBuilder::new().build()
    }
}

impl<S: BuildHasher> Table<S> {
    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// The maximum load factor the table was built with.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Current ratio of occupied slots to capacity.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Finds the slot holding `key`, or the empty slot where it would be inserted.
    ///
    /// Returns `None` when all `capacity` slots along the probe sequence are occupied by
    /// other keys.
    pub fn locate<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Option<usize> {
        let key = key.as_ref();
        let capacity = self.capacity();
        let mut index = self.home_index(key);

        for _ in 0..capacity {
            match &self.buckets[index] {
                Slot::Empty => return Some(index),
                Slot::Occupied(entry) if *entry.key == *key => return Some(index),
                Slot::Occupied(_) => {}
            }
            index = (index + 1) % capacity;
        }
        None
    }

    /// Sets the count for `key`, adding an entry if the key is new.
    ///
    /// May double the capacity first. If the probe sequence turns out to be full the
    /// call leaves the table untouched.
    pub fn insert_or_update<K: AsRef<[u8]> + ?Sized>(&mut self, key: &K, value: u64) {
        if self.load_factor() >= self.max_load_factor {
            let doubled = self.capacity().checked_mul(2);
            debug_assert!(doubled.is_some(), "capacity overflow while doubling");
            match doubled {
                Some(new_capacity) => self.resize(new_capacity),
                None => warn!("table cannot grow past {} slots", self.capacity()),
            }
        }
        self.store(Cow::Borrowed(key.as_ref()), value);
    }

    /// Returns the count stored for `key`.
    pub fn lookup<K: AsRef<[u8]> + ?Sized>(&self, key: &K) -> Option<u64> {
        let index = self.locate(key)?;
        match &self.buckets[index] {
            Slot::Occupied(entry) => Some(entry.value),
            Slot::Empty => None,
        }
    }

    /// Rebuilds the table with `new_capacity` slots, rehoming every entry.
    ///
    /// The table never shrinks; a capacity not larger than the current one is ignored.
    pub fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        if new_capacity <= old_capacity {
            debug!(
                "ignoring resize from {} to {} slots: tables only grow",
                old_capacity, new_capacity
            );
            return;
        }

        let old_buckets = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        let moved = self.len;
        self.len = 0;

        for slot in old_buckets {
            if let Slot::Occupied(Entry { key, value }) = slot {
                self.store(Cow::Owned(key.into_vec()), value);
            }
        }
        debug_assert_eq!(self.len, moved);

        debug!(
            "resized table from {} to {} slots ({} entries)",
            old_capacity, new_capacity, moved
        );
    }

    /// Iterates over the entries in bucket order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: self.buckets.iter(),
        }
    }

    /// Calls `visit` on every entry in bucket order.
    pub fn for_each_entry<F>(&self, visit: F)
    where
        F: FnMut(&Entry),
    {
        self.iter().for_each(visit);
    }

    /// Writes one `<key> <value>` line per entry, in bucket order. Key bytes are written
    /// unchanged.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.iter().try_for_each(|entry| {
            out.write_all(&entry.key)?;
            writeln!(out, " {}", entry.value)
        })
    }

    fn home_index(&self, key: &[u8]) -> usize {
        let mut hasher = self.build_hasher.build_hasher();
        hasher.write(key);
        (hasher.finish() % self.capacity() as u64) as usize
    }

    /// Locate-and-fill half of insertion, without the growth check.
    fn store(&mut self, key: Cow<'_, [u8]>, value: u64) {
        let Some(index) = self.locate(&key) else {
            warn!(
                "dropping insert of {:?}: all {} slots on its probe sequence are taken",
                String::from_utf8_lossy(&key),
                self.capacity()
            );
            return;
        };

        let slot = &mut self.buckets[index];
        match slot {
            Slot::Occupied(entry) => entry.value = value,
            Slot::Empty => {
                *slot = Slot::Occupied(Entry::new(key.into_owned(), value));
                self.len += 1;
            }
        }
    }
}

/// Iterator over the entries of a [`Table`], in bucket order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    slots: std::slice::Iter<'a, Slot>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.by_ref().find_map(|slot| match slot {
            Slot::Occupied(entry) => Some(entry),
            Slot::Empty => None,
        })
    }
}

impl<'a, S: BuildHasher> IntoIterator for &'a Table<S> {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

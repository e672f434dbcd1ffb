//! ChainHashMap: separate-chaining hash table over a slotmap entry arena.

use crate::hash::key_hash;
use core::borrow::Borrow;
use core::fmt::{self, Display};
use slotmap::{DefaultKey, SlotMap};

/// Lookup/removal failure: the requested key is not in the table.
///
/// Always recoverable; the table stays fully usable afterwards.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NotFound;

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not found")
    }
}

impl std::error::Error for NotFound {}

/// One chain node, stored in the arena. `hash` is computed once at
/// insertion and replayed during rehashes; the key's `Display` never runs
/// again after the entry is linked.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
    hash: i64,
    next: Option<DefaultKey>,
}

/// A separate-chaining hash table with a fixed string-derived hash function
/// and load-factor-triggered doubling.
///
/// Entries live in a [`SlotMap`] arena and chains are `next` links between
/// arena keys, so each bucket's chain is walked by index rather than by
/// owned pointers, and deleted slots are recycled by the arena's free list.
///
/// Keys need `Eq` for chain walks and [`Display`] for hashing; values are
/// unconstrained. Capacity and load factor are both caller-supplied at
/// construction, with no defaults.
///
/// Single-threaded by design: there is no internal locking, and operations
/// that resize run the full rehash inline before returning. Wrap the table
/// in a lock for any multi-threaded use.
pub struct ChainHashMap<K, V> {
    entries: SlotMap<DefaultKey, Entry<K, V>>,
    /// Bucket heads; length is always `capacity`.
    buckets: Vec<Option<DefaultKey>>,
    capacity: usize,
    size: usize,
    load_factor: f64,
    /// `floor(capacity * load_factor)`; growth fires when `size` exceeds it.
    bound: usize,
}

impl<K, V> ChainHashMap<K, V>
where
    K: Eq + Display,
{
    /// Creates a table with `capacity` buckets and the given load factor.
    ///
    /// Growth doubles `capacity` whenever the entry count exceeds
    /// `floor(capacity * load_factor)`, so a load factor above 1 permits
    /// that many entries per bucket on average before resizing.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `load_factor` is not a positive
    /// finite number.
    pub fn new(capacity: usize, load_factor: f64) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        assert!(
            load_factor > 0.0 && load_factor.is_finite(),
            "load factor must be positive and finite"
        );
        Self {
            entries: SlotMap::with_capacity_and_key(capacity),
            buckets: vec![None; capacity],
            capacity,
            size: 0,
            load_factor,
            bound: (capacity as f64 * load_factor) as usize,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Entry count above which the next insert doubles the table.
    pub fn bound(&self) -> usize {
        self.bound
    }

    fn bucket_of(&self, hash: i64) -> usize {
        // key_hash is non-negative apart from the documented i64::MIN
        // boundary; rem_euclid keeps the index in range for any sign.
        hash.rem_euclid(self.capacity as i64) as usize
    }

    /// Looks up `key`, returning a reference to its value.
    ///
    /// Borrowed lookups work the same way as in std maps (`String` keys
    /// queried with `&str`), with one extra requirement on top of the
    /// `Borrow` contract: `Q` must render identically to `K` under
    /// `Display`, since the bucket index is derived from that rendering.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, NotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Display,
    {
        let idx = self.bucket_of(key_hash(key));
        let mut cursor = self.buckets[idx];
        while let Some(k) = cursor {
            let entry = &self.entries[k];
            // Key equality, never hash equality: colliding keys share a
            // chain and must not satisfy each other's lookups.
            if entry.key.borrow() == key {
                return Ok(&entry.value);
            }
            cursor = entry.next;
        }
        Err(NotFound)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Display,
    {
        self.get(key).is_ok()
    }

    /// Inserts `value` under `key`, overwriting in place if the key is
    /// already present (the entry keeps its cached hash and chain
    /// position).
    ///
    /// Linking a new entry may push the table past its bound, in which case
    /// the doubling rehash runs inline before this call returns.
    pub fn set(&mut self, key: K, value: V) {
        let hash = key_hash(&key);
        self.set_by_hash(key, value, hash);
    }

    /// Insert path shared by `set` and `enlarge`: the hash is supplied by
    /// the caller so rehashing replays cached hashes instead of rendering
    /// keys again.
    fn set_by_hash(&mut self, key: K, value: V, hash: i64) {
        let idx = self.bucket_of(hash);
        let head = match self.buckets[idx] {
            Some(head) => head,
            None => {
                let k = self.entries.insert(Entry {
                    key,
                    value,
                    hash,
                    next: None,
                });
                self.buckets[idx] = Some(k);
                self.bump_size();
                return;
            }
        };
        let mut cursor = head;
        loop {
            let entry = &mut self.entries[cursor];
            if entry.key == key {
                entry.value = value;
                return;
            }
            match entry.next {
                Some(next) => cursor = next,
                None => {
                    let k = self.entries.insert(Entry {
                        key,
                        value,
                        hash,
                        next: None,
                    });
                    self.entries[cursor].next = Some(k);
                    self.bump_size();
                    return;
                }
            }
        }
    }

    /// Accounts for a newly linked entry and resizes once past the bound.
    fn bump_size(&mut self) {
        self.size += 1;
        if self.size > self.bound {
            self.enlarge();
        }
    }

    /// Removes `key`, returning its value.
    ///
    /// A matching bucket head is unlinked by promoting its successor to
    /// head; a mid-chain match is spliced out. Capacity never shrinks.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<V, NotFound>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq + Display,
    {
        let idx = self.bucket_of(key_hash(key));
        let head = self.buckets[idx].ok_or(NotFound)?;
        if self.entries[head].key.borrow() == key {
            let entry = self.entries.remove(head).unwrap();
            self.buckets[idx] = entry.next;
            self.size -= 1;
            return Ok(entry.value);
        }
        let mut cursor = head;
        loop {
            let next = self.entries[cursor].next.ok_or(NotFound)?;
            if self.entries[next].key.borrow() == key {
                let entry = self.entries.remove(next).unwrap();
                self.entries[cursor].next = entry.next;
                self.size -= 1;
                return Ok(entry.value);
            }
            cursor = next;
        }
    }

    /// Doubles capacity and re-links every entry by its cached hash.
    ///
    /// The transfer goes through `set_by_hash` on a fresh table, which
    /// keeps the fresh table's own size/bound accounting live; if a doubled
    /// capacity were ever still insufficient the nested growth would fire
    /// recursively rather than being special-cased away. Entries move by
    /// value between arenas; keys and values are never cloned and their
    /// hashes never recomputed.
    fn enlarge(&mut self) {
        let mut grown = Self::new(self.capacity * 2, self.load_factor);
        for idx in 0..self.capacity {
            let mut cursor = self.buckets[idx];
            while let Some(k) = cursor {
                let entry = self.entries.remove(k).unwrap();
                cursor = entry.next;
                grown.set_by_hash(entry.key, entry.value, entry.hash);
            }
        }
        debug_assert_eq!(grown.size, self.size);
        // Adopt the grown table's storage wholesale (capacity included, in
        // case a nested growth ran), then recompute the bound so
        // `bound == floor(capacity * load_factor)` holds after every
        // resize.
        self.entries = grown.entries;
        self.buckets = grown.buckets;
        self.capacity = grown.capacity;
        self.bound = (self.capacity as f64 * self.load_factor) as usize;
    }
}

impl<K, V> fmt::Debug for ChainHashMap<K, V>
where
    K: Eq + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainHashMap")
            .field("capacity", &self.capacity)
            .field("size", &self.size)
            .field("load_factor", &self.load_factor)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

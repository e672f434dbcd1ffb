//! chain-hashmap: a single-threaded, separate-chaining hash table with a
//! deterministic string-derived hash function and load-factor doubling.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a self-contained hash table whose bucket addressing, collision
//!   chains, and rehashing are all explicit and testable, rather than
//!   delegated to std's map.
//! - Layers:
//!   - `key_hash` (hash module): pure function from a key's `Display`
//!     rendering to a non-negative `i64` via Jenkins one-at-a-time mixing
//!     with two's-complement wraparound. Leaf dependency, no state.
//!   - `ChainHashMap<K, V>`: bucket-head array plus a slotmap arena of
//!     entries; chains are `next` links between arena keys. Implements
//!     get/set/delete and the doubling rehash.
//!
//! Constraints
//! - Single-threaded: no internal locking; concurrent mutation requires
//!   external synchronization.
//! - Capacity and load factor are caller-supplied at construction; there
//!   are no defaults and capacity never shrinks.
//! - Every operation runs to completion synchronously. A `set` that
//!   crosses the load-factor bound pays for the full rehash inline, so
//!   that call's latency spikes by design; the bench harness exists to
//!   keep that profile visible.
//!
//! Hasher and rehashing invariants
//! - Each entry stores the `i64` hash computed at insertion; rehashing
//!   replays stored hashes and never re-renders keys, so `K: Display` runs
//!   exactly once per entry lifetime and determinism of `key_hash` is
//!   load-bearing.
//! - Known boundary: a hash that finalizes to exactly `i64::MIN` stays
//!   negative after wrapping negation. Bucket addressing uses `rem_euclid`
//!   and tolerates it; see `key_hash` docs.
//!
//! Notes and non-goals
//! - No iteration/enumeration API; lookups and removals are the only read
//!   paths.
//! - No persistence and no pluggable hashers: the string-derived mixing
//!   function is the table's identity, and entries cache its output.
//! - Deleting never shrinks the table.
//! - Errors: exactly one recoverable failure, `NotFound`, from `get` and
//!   `delete`. Constructor misuse (zero capacity, non-positive load
//!   factor) panics instead of widening the error type.

mod chain_hash_map;
mod chain_hash_map_proptest;
mod hash;

// Public surface
pub use chain_hash_map::{ChainHashMap, NotFound};
pub use hash::key_hash;

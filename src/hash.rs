//! String-derived key hashing: Jenkins one-at-a-time on a signed 64-bit
//! accumulator with two's-complement wraparound.
//!
//! The function is pure and deterministic across calls and process
//! lifetimes; `ChainHashMap` caches its output per entry and replays it
//! during rehashes, so these guarantees are load-bearing.

use core::fmt::{self, Write};

/// Hashes a key through its `Display` rendering.
///
/// Each rendered `char` (Unicode code point) is folded into the accumulator
/// in order:
///
/// ```text
/// h += cp;  h += h << 10;  h ^= h >> 6
/// ```
///
/// followed by the finalization steps `h += h << 3; h ^= h >> 11;
/// h += h << 15`. Additions wrap, `<<` discards high bits, and `>>` on
/// `i64` is an arithmetic shift, so the mixing is exact two's-complement
/// wraparound throughout. A negative result is wrapping-negated before
/// returning, so the hash is non-negative for every practical input.
///
/// Known boundary: if the accumulator finalizes to exactly `i64::MIN`,
/// wrapping negation returns `i64::MIN` and the result stays negative.
/// This is inherited behavior and deliberately not patched; bucket
/// addressing in `ChainHashMap` uses `rem_euclid`, which remains in range
/// for any sign.
pub fn key_hash<Q>(key: &Q) -> i64
where
    Q: ?Sized + fmt::Display,
{
    let mut mixer = Mixer { h: 0 };
    // Mixer::write_str never fails; an Err here could only come from a
    // Display impl violating its contract, in which case the prefix it did
    // render has already been mixed and determinism per key still holds.
    let _ = write!(mixer, "{key}");
    mixer.finish()
}

/// `fmt::Write` sink that mixes text as it is rendered, so hashing a key
/// does not allocate an intermediate `String`.
struct Mixer {
    h: i64,
}

impl Mixer {
    fn finish(self) -> i64 {
        let mut h = self.h;
        h = h.wrapping_add(h << 3);
        h ^= h >> 11;
        h = h.wrapping_add(h << 15);
        if h >= 0 {
            h
        } else {
            h.wrapping_neg()
        }
    }
}

impl Write for Mixer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for cp in s.chars() {
            self.h = self.h.wrapping_add(cp as i64);
            self.h = self.h.wrapping_add(self.h << 10);
            self.h ^= self.h >> 6;
        }
        Ok(())
    }
}

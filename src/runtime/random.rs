//! Secure random source
//!
//! Turns raw entropy bytes into integers, floats, ranged values, booleans and
//! collection picks.
//!
//! # Failure policy
//!
//! The plain API is total: if the entropy source fails, the buffer is
//! zero-filled and a warning is logged, so `random_float()` yields 0.0,
//! `random_bool()` yields false and `random_range(s, e)` yields `s`. Callers that
//! must know about the failure use the `try_*` methods instead.
//!
//! # Modulo bias
//!
//! Ranged draws reduce a uniform value modulo the range width. When the width
//! does not divide 2^32 (or 2^64) evenly, low offsets are very slightly more
//! likely. That is fine for simulation and sampling, not for key material.

use numcore_stdlib::udivmod64;
use once_cell::sync::Lazy;

use super::entropy::{EntropyError, EntropySource, SeededEntropy, SystemEntropy};

/// 2^-24: one step of the 24-bit float mantissa grid.
const FLOAT_UNIT: f32 = 1.0 / (1u32 << 24) as f32;

/// Random value generator over an entropy source.
pub struct SecureRandom<S = SystemEntropy> {
    source: S,
}

impl SecureRandom<SystemEntropy> {
    /// Generator backed by the operating system CSPRNG.
    pub fn system() -> Self {
        Self::new(SystemEntropy::new())
    }
}

impl Default for SecureRandom<SystemEntropy> {
    fn default() -> Self {
        Self::system()
    }
}

impl SecureRandom<SeededEntropy> {
    /// Reproducible generator for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeededEntropy::new(seed))
    }
}

impl<S: EntropySource> SecureRandom<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fill `dest` with entropy, surfacing source failures.
    pub fn try_fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.source.fill(dest)
    }

    /// Fill `dest` with entropy; zero-fills if the source fails.
    pub fn fill_bytes(&self, dest: &mut [u8]) {
        if let Err(err) = self.source.fill(dest) {
            tracing::warn!(
                source = self.source.name(),
                len = dest.len(),
                "Entropy request failed, zero-filling: {}",
                err
            );
            dest.fill(0);
        }
    }

    fn bytes<const N: usize>(&self) -> [u8; N] {
        let mut buf = [0u8; N];
        self.fill_bytes(&mut buf);
        buf
    }

    pub fn try_random_u32(&self) -> Result<u32, EntropyError> {
        let mut buf = [0u8; 4];
        self.try_fill_bytes(&mut buf)?;
        Ok(u32::from_ne_bytes(buf))
    }

    pub fn try_random_u64(&self) -> Result<u64, EntropyError> {
        let mut buf = [0u8; 8];
        self.try_fill_bytes(&mut buf)?;
        Ok(u64::from_ne_bytes(buf))
    }

    pub fn random_u32(&self) -> u32 {
        u32::from_ne_bytes(self.bytes())
    }

    pub fn random_u64(&self) -> u64 {
        u64::from_ne_bytes(self.bytes())
    }

    /// Raw entropy reinterpreted as a signed 32-bit integer (any value).
    pub fn random_i32(&self) -> i32 {
        i32::from_ne_bytes(self.bytes())
    }

    /// Raw entropy reinterpreted as a signed 64-bit integer (any value).
    pub fn random_i64(&self) -> i64 {
        i64::from_ne_bytes(self.bytes())
    }

    /// Uniform float in [0, 1) on a 2^-24 grid.
    ///
    /// The low 8 bits of the draw are discarded so every result is exactly
    /// representable; the largest result is `1 - 2^-24`.
    pub fn random_float(&self) -> f32 {
        (self.random_u32() >> 8) as f32 * FLOAT_UNIT
    }

    /// Integer in `[start, end)`; returns `start` when `start >= end`.
    pub fn random_range(&self, start: i32, end: i32) -> i32 {
        if start >= end {
            return start;
        }
        let range = end.wrapping_sub(start) as u32;
        let offset = self.random_u32() % range;
        start.wrapping_add(offset as i32)
    }

    /// 64-bit integer in `[start, end)`; returns `start` when `start >= end`.
    ///
    /// Reduces through the long-division intrinsic rather than a native 64-bit
    /// remainder.
    pub fn random_range64(&self, start: i64, end: i64) -> i64 {
        if start >= end {
            return start;
        }
        let range = end.wrapping_sub(start) as u64;
        let (_, offset) = udivmod64(self.random_u64(), range);
        start.wrapping_add(offset as i64)
    }

    /// Low bit of one random byte.
    pub fn random_bool(&self) -> bool {
        let [byte] = self.bytes::<1>();
        byte & 1 != 0
    }

    /// A uniformly chosen element; `T::default()` for an empty slice.
    pub fn random_choice<T: Clone + Default>(&self, items: &[T]) -> T {
        if items.is_empty() {
            return T::default();
        }
        let index = self.random_range64(0, items.len() as i64) as usize;
        items[index].clone()
    }
}

// =============================================================================
// Process-wide generator
// =============================================================================

static SYSTEM_RANDOM: Lazy<SecureRandom<SystemEntropy>> = Lazy::new(SecureRandom::system);

/// The shared OS-backed generator used by the free functions below.
pub fn system_random() -> &'static SecureRandom<SystemEntropy> {
    &SYSTEM_RANDOM
}

/// Random 32-bit integer.
pub fn random() -> i32 {
    SYSTEM_RANDOM.random_i32()
}

/// Random 64-bit integer.
pub fn random64() -> i64 {
    SYSTEM_RANDOM.random_i64()
}

/// Random float in [0, 1).
pub fn random_float() -> f32 {
    SYSTEM_RANDOM.random_float()
}

/// Random integer in `[start, end)`, or `start` for an empty range.
pub fn random_range(start: i32, end: i32) -> i32 {
    SYSTEM_RANDOM.random_range(start, end)
}

/// Random 64-bit integer in `[start, end)`, or `start` for an empty range.
pub fn random_range64(start: i64, end: i64) -> i64 {
    SYSTEM_RANDOM.random_range64(start, end)
}

pub fn random_bool() -> bool {
    SYSTEM_RANDOM.random_bool()
}

/// Random element of `items`, or `T::default()` when empty.
pub fn random_choice<T: Clone + Default>(items: &[T]) -> T {
    SYSTEM_RANDOM.random_choice(items)
}

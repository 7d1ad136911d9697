//! Seeded deterministic random stream for level content
//!
//! Maze extras and coworker placement must be bit-identical for a given
//! seed across platforms and replays, so they draw from this fixed
//! linear-congruential recurrence rather than a general-purpose RNG:
//!
//! ```text
//! value = (value * 9301 + 49297) mod 233280
//! output = value / 233280        (in [0, 1))
//! ```
//!
//! The state stays well under 2^32, so the arithmetic is exact in u64.

use serde::{Deserialize, Serialize};

const MULTIPLIER: u64 = 9301;
const INCREMENT: u64 = 49297;
const MODULUS: u64 = 233280;

/// Deterministic `[0, 1)` stream with a documented recurrence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededRandom {
    value: u64,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { value: seed as u64 }
    }

    /// Next sample in `[0, 1)`
    pub fn next(&mut self) -> f32 {
        self.value = (self.value * MULTIPLIER + INCREMENT) % MODULUS;
        self.value as f32 / MODULUS as f32
    }

    /// Next sample scaled to `[lo, hi)`
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next() * (hi - lo)
    }
}

//! xorshift64* random number generator
//!
//! Small, fast PRNG with 64-bit state. It passes TestU01's BigCrush and is
//! more than adequate for queueing experiments.
//!
//! # Determinism
//!
//! Same seed → same sequence of draws → same simulated run. Independent
//! runs get independent `RngManager` instances, so parallel runs never
//! contend on a shared generator.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use queue_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let gap = rng.exponential(10.0); // mean 0.1
/// let queue = rng.index(4);        // [0, 4)
/// assert!(gap > 0.0);
/// assert!(queue < 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngManager {
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is mapped to 1 (xorshift state must never be zero).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Draw a uniform index in `[0, len)`
    ///
    /// # Panics
    /// Panics if `len` is zero
    ///
    /// # Example
    /// ```
    /// use queue_simulator_core_rs::RngManager;
    ///
    /// let mut rng = RngManager::new(7);
    /// assert_eq!(rng.index(1), 0);
    /// ```
    pub fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        (self.next() % len as u64) as usize
    }

    /// Get current RNG state (a new `RngManager` built from it replays
    /// the remaining sequence)
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        // Top 53 bits scaled by 2^-53
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Sample an exponential variate with the given rate (mean `1 / rate`)
    ///
    /// Inverse transform on `1 - u`, which lies in (0, 1], so the result is
    /// finite. It is strictly positive except in the 2^-53 case `u == 0`.
    ///
    /// # Panics
    /// Panics if `rate` is not a positive finite number
    pub fn exponential(&mut self, rate: f64) -> f64 {
        assert!(
            rate.is_finite() && rate > 0.0,
            "exponential rate must be positive"
        );
        let u = self.next_f64();
        -(1.0 - u).ln() / rate
    }
}

//! Seeded linear congruential generator
//!
//! A 32-bit LCG with the multiplier/increment pair used by the reference
//! engine. Each draw steps the state once.
//!
//! # Float formulas
//!
//! - current: step, then the top 23 bits of the new state become the
//!   mantissa of a float in `[1.0, 2.0)` and 1.0 is subtracted
//! - legacy: step, but convert the state from *before* the step, taking its
//!   top 16 bits divided by 65536
//!
//! Both land in `[0.0, 1.0)` and both step the state exactly once, but the
//! legacy stream lags the current one by a draw. Mixing the two within one
//! build would repeat or skip a value.

use super::RandomSource;
use serde::{Deserialize, Serialize};

const MULTIPLIER: u32 = 0x5D58_8B65;
const INCREMENT: u32 = 0x0026_9EC3;

/// Exponent bits of 1.0f32
const ONE_EXPONENT_BITS: u32 = 0x3F80_0000;

/// Deterministic random number generator shared across a game turn
///
/// # Example
/// ```
/// use golf_wind_core::rng::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next_f32(false);
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (32-bit)
    state: u32,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// Every seed, including zero, is a valid LCG state.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Step the generator and return the raw 32-bit state
    pub fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Get current RNG state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use golf_wind_core::rng::RngManager;
    ///
    /// let rng = RngManager::new(42);
    /// let restored = RngManager::new(rng.get_state());
    /// assert_eq!(rng, restored);
    /// ```
    pub fn get_state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for RngManager {
    fn next_f32(&mut self, legacy_mode: bool) -> f32 {
        let previous = self.state;
        let value = self.next();
        if legacy_mode {
            (previous >> 16) as f32 / 65536.0
        } else {
            f32::from_bits(ONE_EXPONENT_BITS | (value >> 9)) - 1.0
        }
    }

    fn advance(&mut self, count: u32) {
        for _ in 0..count {
            self.next();
        }
    }
}

//! Scripted random source for reproducing exact draw sequences
//!
//! Replays a fixed list of floats in order and records how it was used, so
//! tests can assert on draw counts, discards and the legacy flag.

use super::RandomSource;
use std::collections::VecDeque;

/// Random source that returns pre-recorded draws
///
/// Once the script is exhausted further draws return `0.0` and are counted
/// in [`ScriptedRandom::overruns`].
///
/// # Example
/// ```
/// use golf_wind_core::rng::{RandomSource, ScriptedRandom};
///
/// let mut rng = ScriptedRandom::new([0.25, 0.75]);
/// assert_eq!(rng.next_f32(false), 0.25);
/// assert_eq!(rng.next_f32(false), 0.75);
/// assert_eq!(rng.remaining(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<f32>,
    draws: usize,
    discarded: u64,
    overruns: usize,
    legacy_flags: Vec<bool>,
}

impl ScriptedRandom {
    /// Create a source that yields `draws` in order
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        Self {
            script: draws.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Append more draws to the end of the script
    pub fn extend(&mut self, draws: impl IntoIterator<Item = f32>) {
        self.script.extend(draws);
    }

    /// Number of values drawn so far (including overruns)
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Total count passed to [`RandomSource::advance`]
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Draws requested after the script ran out
    pub fn overruns(&self) -> usize {
        self.overruns
    }

    /// Scripted draws not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Legacy flag passed to each draw, in call order
    pub fn legacy_flags(&self) -> &[bool] {
        &self.legacy_flags
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f32(&mut self, legacy_mode: bool) -> f32 {
        self.draws += 1;
        self.legacy_flags.push(legacy_mode);
        match self.script.pop_front() {
            Some(value) => value,
            None => {
                self.overruns += 1;
                0.0
            }
        }
    }

    fn advance(&mut self, count: u32) {
        self.discarded += u64::from(count);
    }
}

//! Random sequence generation
//!
//! Produces a permutation of `0..max` by repeatedly drawing a rank among the
//! slots that are still unfilled. This is not a Fisher-Yates shuffle: the
//! rank is taken in slot-position order and each slot costs exactly one
//! draw, which is what keeps the stream aligned with recorded rounds.
//!
//! # Example
//!
//! ```
//! use golf_wind_core::rng::ScriptedRandom;
//! use golf_wind_core::sequence::make_random_sequence;
//!
//! // Rank 2 of 4, then rank 0 of 3, rank 1 of 2, rank 0 of 1
//! let mut rng = ScriptedRandom::new([0.5, 0.0, 0.9, 0.0]);
//! assert_eq!(make_random_sequence(4, &mut rng, false), vec![2, 0, 3, 1]);
//! ```

use crate::rng::RandomSource;
use tracing::debug;

/// Generate a permutation of `0..max` using one draw per slot.
///
/// For each output position the draw `f` picks rank `trunc(f * remaining)`
/// among the unfilled slots, counted in slot order; the chosen slot's
/// position is the next value. `max == 0` yields an empty sequence without
/// touching `rng`.
pub fn make_random_sequence<R>(max: usize, rng: &mut R, legacy_mode: bool) -> Vec<i32>
where
    R: RandomSource + ?Sized,
{
    // Unfilled slot positions, always ascending
    let mut unfilled: Vec<usize> = (0..max).collect();
    let mut sequence = Vec::with_capacity(max);

    while !unfilled.is_empty() {
        let remaining = unfilled.len();
        let draw = rng.next_f32(legacy_mode);

        // Single-precision product, truncated, as recorded rounds were computed.
        // A conforming source never reaches `remaining`; clamp for scripted ones.
        let rank = ((draw * remaining as f32) as usize).min(remaining - 1);

        let slot = unfilled.remove(rank);
        sequence.push(slot as i32);
    }

    debug!(max, ?sequence, "random sequence generated");
    sequence
}

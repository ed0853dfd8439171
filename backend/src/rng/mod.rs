//! Deterministic random number sources
//!
//! Wind generation never owns a generator. It borrows a [`RandomSource`] for
//! the duration of one build, which keeps the draw order exclusive and lets
//! tests substitute a scripted stream.
//!
//! CRITICAL: the number and order of draws is part of the compatibility
//! contract. Every draw goes through [`RandomSource::next_f32`] and every skip
//! through [`RandomSource::advance`].

mod lcg;
mod scripted;

pub use lcg::RngManager;
pub use scripted::ScriptedRandom;

/// A stream of uniform floats shared with the rest of a game turn
pub trait RandomSource {
    /// Draw the next float in `[0.0, 1.0)`.
    ///
    /// `legacy_mode` selects the older float formula. A single build passes
    /// the same flag to every draw.
    fn next_f32(&mut self, legacy_mode: bool) -> f32;

    /// Discard `count` draws without producing values.
    fn advance(&mut self, count: u32);
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f32(&mut self, legacy_mode: bool) -> f32 {
        (**self).next_f32(legacy_mode)
    }

    fn advance(&mut self, count: u32) {
        (**self).advance(count)
    }
}

//! Golf Wind Core - Deterministic per-hole wind generation
//!
//! Reproduces the historical wind procedure for a golf round: identical
//! random stream plus identical difficulty gives a bit-identical wind set.
//!
//! # Architecture
//!
//! - **core**: Course constants that are part of the compatibility surface
//! - **rng**: The borrowed random stream and its default implementation
//! - **sequence**: Draw-and-scan permutation generator
//! - **models**: Domain types (Difficulty, WindEntry, WindSet)
//! - **builder**: Budgeted per-hole wind assignment
//! - **replay**: Round records for replay verification
//!
//! # Critical Invariants
//!
//! 1. Draw count and order are fixed for a given difficulty
//! 2. The legacy flag is applied to every draw of a build, never mixed
//! 3. At most 8 played holes carry nonzero wind

// Module declarations
pub mod builder;
pub mod core;
pub mod models;
pub mod replay;
pub mod rng;
pub mod sequence;

// Re-exports for convenience
pub use builder::{make_wind_set, WindError, WindSetBuilder};
pub use models::{Difficulty, WindEntry, WindSet};
pub use replay::{ReplayError, RoundRecord, RoundRequest};
pub use rng::{RandomSource, RngManager, ScriptedRandom};
pub use sequence::make_random_sequence;

//! Domain models for wind generation

pub mod difficulty;
pub mod wind;

// Re-exports
pub use difficulty::Difficulty;
pub use wind::{WindEntry, WindSet};

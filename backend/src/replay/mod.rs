//! Round records for replay verification
//!
//! A round is fully described by its seed, legacy flag and difficulty. The
//! record stores those inputs alongside the generated wind and its
//! fingerprint so a later build can confirm it reproduces the round exactly.
//!
//! # Critical Invariants
//!
//! - **Determinism**: same request produces the same wind set
//! - **Integrity**: stored fingerprint matches the stored wind set

use crate::builder::{make_wind_set, WindError};
use crate::models::{Difficulty, WindSet};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors raised while recording or verifying a round
#[derive(Debug, Error, PartialEq)]
pub enum ReplayError {
    #[error("Wind generation failed: {0}")]
    Wind(#[from] WindError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Fingerprint mismatch: recorded {expected}, computed {actual}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error("Regenerated wind differs from record at hole {hole}")]
    WindSetMismatch { hole: usize },
}

/// Inputs that fully determine a round's wind
///
/// # Example
/// ```
/// use golf_wind_core::replay::RoundRequest;
///
/// let json = r#"{"seed": 7, "difficulty": {"start_hole": 0, "end_hole": 8, "min_wind": 0, "max_wind": 15}}"#;
/// let request: RoundRequest = serde_json::from_str(json).unwrap();
/// assert!(!request.legacy_mode);
/// assert_eq!(request.generate().unwrap().nonzero_count_in(&request.difficulty), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRequest {
    /// Seed of the turn's random stream
    pub seed: u32,

    /// Use the older float formula for every draw
    #[serde(default)]
    pub legacy_mode: bool,

    pub difficulty: Difficulty,
}

impl RoundRequest {
    /// Seed a fresh stream and build the wind set
    pub fn generate(&self) -> Result<WindSet, WindError> {
        let mut rng = RngManager::new(self.seed);
        make_wind_set(&self.difficulty, &mut rng, self.legacy_mode)
    }
}

/// A generated round together with its inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub request: RoundRequest,
    pub wind_set: WindSet,

    /// SHA256 of `wind_set` at the time of recording
    pub fingerprint: String,
}

impl RoundRecord {
    pub fn generate(request: RoundRequest) -> Result<Self, ReplayError> {
        let wind_set = request.generate()?;
        let fingerprint = wind_set.fingerprint();
        debug!(seed = request.seed, %fingerprint, "round recorded");
        Ok(Self {
            request,
            wind_set,
            fingerprint,
        })
    }

    pub fn to_json(&self) -> Result<String, ReplayError> {
        serde_json::to_string(self).map_err(|e| ReplayError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        serde_json::from_str(json).map_err(|e| ReplayError::Serialization(e.to_string()))
    }

    /// Check the record's integrity, then rebuild it and compare hole by hole
    pub fn verify(&self) -> Result<(), ReplayError> {
        let actual = self.wind_set.fingerprint();
        if actual != self.fingerprint {
            return Err(ReplayError::FingerprintMismatch {
                expected: self.fingerprint.clone(),
                actual,
            });
        }

        let regenerated = self.request.generate()?;
        if let Some(hole) = self
            .wind_set
            .iter()
            .zip(regenerated.iter())
            .position(|(recorded, rebuilt)| recorded != rebuilt)
        {
            return Err(ReplayError::WindSetMismatch { hole });
        }

        Ok(())
    }
}

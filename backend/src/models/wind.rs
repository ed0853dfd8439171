//! Wind entries and per-course wind sets
//!
//! A wind set always has one entry per course hole. Holes outside the played
//! range carry sentinel values instead of being omitted.

use crate::core::course::{HOLE_COUNT, WIND_DIRECTION_COUNT, WIND_SPEED_COUNT};
use crate::models::Difficulty;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::ops::Index;

/// Wind on a single hole
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindEntry {
    pub speed: i32,

    /// Raw direction; may equal `WIND_DIRECTION_COUNT` on unplayed holes
    pub direction: i32,
}

impl WindEntry {
    /// Sentinel wind for holes that are not played this round
    pub const UNPLAYED: WindEntry = WindEntry {
        speed: WIND_SPEED_COUNT,
        direction: WIND_DIRECTION_COUNT,
    };

    pub fn new(speed: i32, direction: i32) -> Self {
        Self { speed, direction }
    }

    /// Direction reduced into `0..WIND_DIRECTION_COUNT`
    ///
    /// # Example
    /// ```
    /// use golf_wind_core::models::WindEntry;
    /// use golf_wind_core::core::course::SOUTH;
    ///
    /// assert_eq!(WindEntry::UNPLAYED.normalized_direction(), SOUTH);
    /// ```
    pub fn normalized_direction(&self) -> i32 {
        self.direction.rem_euclid(WIND_DIRECTION_COUNT)
    }

    pub fn is_calm(&self) -> bool {
        self.speed == 0
    }
}

/// Wind for every hole on the course, indexed by hole
///
/// Built once per round and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindSet {
    entries: [WindEntry; HOLE_COUNT],
}

impl WindSet {
    pub fn new(entries: [WindEntry; HOLE_COUNT]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[WindEntry; HOLE_COUNT] {
        &self.entries
    }

    pub fn get(&self, hole: usize) -> Option<&WindEntry> {
        self.entries.get(hole)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindEntry> {
        self.entries.iter()
    }

    /// Number of played holes with strictly positive speed
    pub fn nonzero_count_in(&self, difficulty: &Difficulty) -> usize {
        self.iter()
            .enumerate()
            .filter(|(hole, entry)| difficulty.is_played(*hole) && entry.speed > 0)
            .count()
    }

    /// SHA256 digest of the raw entry values
    ///
    /// Each entry contributes its speed then direction as little-endian
    /// `i32` bytes, in hole order. Two sets share a fingerprint exactly when
    /// they are byte-identical.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for entry in &self.entries {
            hasher.update(entry.speed.to_le_bytes());
            hasher.update(entry.direction.to_le_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

impl Index<usize> for WindSet {
    type Output = WindEntry;

    fn index(&self, hole: usize) -> &WindEntry {
        &self.entries[hole]
    }
}

impl<'a> IntoIterator for &'a WindSet {
    type Item = &'a WindEntry;
    type IntoIter = std::slice::Iter<'a, WindEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

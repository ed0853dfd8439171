//! Difficulty configuration
//!
//! Selects which holes of the course are played this round and which wind
//! speeds are acceptable on them. Supplied by the caller and never modified.

use crate::core::course::HOLE_COUNT;
use serde::{Deserialize, Serialize};

/// Played hole range and wind speed bounds for one round
///
/// Both ranges are inclusive.
///
/// # Example
/// ```
/// use golf_wind_core::Difficulty;
///
/// let difficulty = Difficulty::new(3, 5, 0, 10);
/// assert_eq!(difficulty.played_hole_count(), 3);
/// assert!(difficulty.is_played(4));
/// assert!(!difficulty.is_played(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty {
    /// First played hole (inclusive)
    pub start_hole: u32,

    /// Last played hole (inclusive)
    pub end_hole: u32,

    /// Lowest acceptable wind speed (inclusive)
    pub min_wind: i32,

    /// Highest acceptable wind speed (inclusive)
    pub max_wind: i32,
}

impl Difficulty {
    pub fn new(start_hole: u32, end_hole: u32, min_wind: i32, max_wind: i32) -> Self {
        Self {
            start_hole,
            end_hole,
            min_wind,
            max_wind,
        }
    }

    /// Play every hole on the course with the given speed bounds
    pub fn full_course(min_wind: i32, max_wind: i32) -> Self {
        Self::new(0, HOLE_COUNT as u32 - 1, min_wind, max_wind)
    }

    /// Whether `hole` lies inside the played range
    pub fn is_played(&self, hole: usize) -> bool {
        (self.start_hole as usize..=self.end_hole as usize).contains(&hole)
    }

    /// Number of holes in the played range (0 if the range is inverted)
    pub fn played_hole_count(&self) -> usize {
        if self.end_hole < self.start_hole {
            0
        } else {
            (self.end_hole - self.start_hole) as usize + 1
        }
    }

    /// Whether `speed` lies inside the wind bounds
    pub fn accepts_speed(&self, speed: i32) -> bool {
        (self.min_wind..=self.max_wind).contains(&speed)
    }
}

//! Wind set builder
//!
//! Turns a [`Difficulty`] and a borrowed random stream into the wind for every
//! hole of the course.
//!
//! # Draw order
//!
//! 1. `DRAWS_BEFORE_WIND` draws are discarded
//! 2. one draw per direction slot (direction permutation)
//! 3. one draw per speed slot (speed permutation)
//! 4. one draw per played hole that would exceed the nonzero budget
//!
//! # Budget
//!
//! At most `NONZERO_WIND_BUDGET` played holes keep a nonzero speed. Once the
//! budget is spent, a calm draw is taken as-is and faces south, while a windy
//! draw is donated: a random earlier played hole is made calm and the current
//! hole takes over its direction and keeps the new speed.
//!
//! # Example
//!
//! ```
//! use golf_wind_core::{make_wind_set, Difficulty, RngManager};
//!
//! let difficulty = Difficulty::full_course(0, 15);
//! let mut rng = RngManager::new(42);
//! let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();
//!
//! assert_eq!(wind.nonzero_count_in(&difficulty), 8);
//! ```

use crate::core::course::{
    DRAWS_BEFORE_WIND, HOLE_COUNT, NONZERO_WIND_BUDGET, SOUTH, WIND_DIRECTION_COUNT,
    WIND_SPEED_COUNT,
};
use crate::models::{Difficulty, WindEntry, WindSet};
use crate::rng::RandomSource;
use crate::sequence::make_random_sequence;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised when a difficulty cannot produce a wind set
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindError {
    #[error("Invalid hole range {start_hole}..={end_hole} for a course of {hole_count} holes")]
    InvalidHoleRange {
        start_hole: u32,
        end_hole: u32,
        hole_count: usize,
    },

    #[error("Wind range {min_wind}..={max_wind} allows {available} speed(s) but {required} hole(s) are played")]
    UnsatisfiableWindRange {
        min_wind: i32,
        max_wind: i32,
        required: usize,
        available: usize,
    },
}

/// Validated builder for one difficulty
///
/// Validation happens once in [`WindSetBuilder::new`], so [`build`] cannot
/// fail and never consumes draws for a configuration it would reject.
///
/// [`build`]: WindSetBuilder::build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindSetBuilder {
    difficulty: Difficulty,
}

impl WindSetBuilder {
    /// Create a builder after checking the difficulty preconditions
    ///
    /// # Returns
    /// * `Ok(WindSetBuilder)` - The difficulty can always be satisfied
    /// * `Err(WindError)` - The hole range is off the course, or fewer speeds
    ///   fall inside the wind range than there are played holes
    pub fn new(difficulty: Difficulty) -> Result<Self, WindError> {
        if let Err(err) = Self::validate(&difficulty) {
            warn!(?difficulty, %err, "rejected difficulty");
            return Err(err);
        }
        Ok(Self { difficulty })
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    fn validate(difficulty: &Difficulty) -> Result<(), WindError> {
        if difficulty.start_hole > difficulty.end_hole
            || difficulty.end_hole as usize >= HOLE_COUNT
        {
            return Err(WindError::InvalidHoleRange {
                start_hole: difficulty.start_hole,
                end_hole: difficulty.end_hole,
                hole_count: HOLE_COUNT,
            });
        }

        // Each played hole consumes a distinct speed from the permutation
        let required = difficulty.played_hole_count();
        let available = (0..WIND_SPEED_COUNT)
            .filter(|speed| difficulty.accepts_speed(*speed))
            .count();
        if available < required {
            return Err(WindError::UnsatisfiableWindRange {
                min_wind: difficulty.min_wind,
                max_wind: difficulty.max_wind,
                required,
                available,
            });
        }

        Ok(())
    }

    /// Generate the wind set, drawing from `rng`
    ///
    /// `legacy_mode` is passed unchanged to every draw.
    pub fn build<R>(&self, rng: &mut R, legacy_mode: bool) -> WindSet
    where
        R: RandomSource + ?Sized,
    {
        let difficulty = &self.difficulty;
        debug!(?difficulty, legacy_mode, "building wind set");

        rng.advance(DRAWS_BEFORE_WIND);

        let directions = make_random_sequence(WIND_DIRECTION_COUNT as usize, rng, legacy_mode);
        let speeds = make_random_sequence(WIND_SPEED_COUNT as usize, rng, legacy_mode);

        // Donors are drawn from [start_hole, end_hole)
        let donor_range = difficulty.end_hole - difficulty.start_hole;

        let mut entries = [WindEntry::UNPLAYED; HOLE_COUNT];
        let mut nonzero = 0u32;
        let mut next_direction = 0usize;

        let played_holes = difficulty.start_hole as usize..=difficulty.end_hole as usize;
        let accepted_speeds = speeds
            .into_iter()
            .filter(|speed| difficulty.accepts_speed(*speed));

        // Validation guarantees one accepted speed per played hole
        for (hole, speed) in played_holes.zip(accepted_speeds) {
            entries[hole].speed = speed;

            if nonzero < NONZERO_WIND_BUDGET {
                // Calm holes peek at the direction without consuming it
                entries[hole].direction = directions[next_direction];
                if speed > 0 {
                    nonzero += 1;
                    next_direction += 1;
                }
            } else if speed == 0 {
                entries[hole].direction = SOUTH;
            } else {
                let draw = rng.next_f32(legacy_mode);
                let donor = (draw * donor_range as f32) as usize + difficulty.start_hole as usize;

                entries[donor].speed = 0;
                entries[hole].direction = entries[donor].direction;

                debug!(
                    hole,
                    donor,
                    speed,
                    direction = entries[hole].direction,
                    "wind budget exceeded, donated"
                );
            }
        }

        let wind = WindSet::new(entries);
        debug!(nonzero = wind.nonzero_count_in(difficulty), "wind set built");
        wind
    }
}

/// Validate `difficulty` and build its wind set in one call
pub fn make_wind_set<R>(
    difficulty: &Difficulty,
    rng: &mut R,
    legacy_mode: bool,
) -> Result<WindSet, WindError>
where
    R: RandomSource + ?Sized,
{
    Ok(WindSetBuilder::new(*difficulty)?.build(rng, legacy_mode))
}

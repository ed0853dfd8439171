//! Course constants
//!
//! These values are part of the compatibility surface: changing any of them
//! changes how many draws a round consumes or which sentinels downstream code
//! sees, so generated wind would no longer match recorded rounds.

/// Number of holes on a course (length of every wind set)
pub const HOLE_COUNT: usize = 9;

/// Number of distinct wind directions
///
/// Also used as the sentinel direction for holes that are not played. It is
/// deliberately not reduced modulo itself; consumers apply that reduction.
pub const WIND_DIRECTION_COUNT: i32 = 8;

/// Number of distinct wind speeds (`0..WIND_SPEED_COUNT`)
///
/// Also used as the sentinel speed for holes that are not played.
pub const WIND_SPEED_COUNT: i32 = 16;

/// Direction forced onto calm holes once the nonzero budget is spent.
///
/// Equals `WIND_DIRECTION_COUNT % WIND_DIRECTION_COUNT`, so unplayed holes
/// read as south after normalization too.
pub const SOUTH: i32 = 0;

/// Maximum number of played holes that may end with nonzero wind
pub const NONZERO_WIND_BUDGET: u32 = 8;

/// Draws consumed by the rest of a game turn before wind is generated.
///
/// The builder discards exactly this many draws so that the wind sequences
/// line up with the stream position the reference rounds were recorded at.
pub const DRAWS_BEFORE_WIND: u32 = 2;

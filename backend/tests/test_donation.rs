//! Budget and donation scenarios driven by scripted draws
//!
//! Each test scripts the direction permutation, the speed permutation and
//! any donation draw explicitly, so the expected wind can be worked out by
//! hand.

use golf_wind_core::core::course::{
    DRAWS_BEFORE_WIND, HOLE_COUNT, SOUTH, WIND_DIRECTION_COUNT, WIND_SPEED_COUNT,
};
use golf_wind_core::rng::ScriptedRandom;
use golf_wind_core::{make_wind_set, Difficulty, WindEntry};

// ============================================================================
// Test Helpers
// ============================================================================

/// Draw that selects `rank` among `remaining` unfilled slots
fn draw_for_rank(rank: usize, remaining: usize) -> f32 {
    (rank as f32 + 0.5) / remaining as f32
}

/// Draws producing a permutation chosen by per-step ranks
fn draws_for_ranks(ranks: &[usize]) -> Vec<f32> {
    let max = ranks.len();
    ranks
        .iter()
        .enumerate()
        .map(|(filled, rank)| draw_for_rank(*rank, max - filled))
        .collect()
}

/// Directions come out as 7, 6, ..., 0
fn descending_directions() -> Vec<f32> {
    let max = WIND_DIRECTION_COUNT as usize;
    draws_for_ranks(&(0..max).map(|filled| max - 1 - filled).collect::<Vec<_>>())
}

/// Speeds come out as 0, 1, ..., 15
fn ascending_speeds() -> Vec<f32> {
    vec![0.0; WIND_SPEED_COUNT as usize]
}

fn script(directions: Vec<f32>, speeds: Vec<f32>, extra: &[f32]) -> ScriptedRandom {
    let mut rng = ScriptedRandom::new(directions);
    rng.extend(speeds);
    rng.extend(extra.iter().copied());
    rng
}

// ============================================================================
// Donation
// ============================================================================

#[test]
fn test_ninth_windy_hole_donates() {
    // Speeds 1..=9 on holes 0..=8; directions 7..=0 on holes 0..=7.
    // Hole 8 exceeds the budget; 0.3 * 8 = 2.4 picks hole 2 (direction 5).
    let difficulty = Difficulty::full_course(1, 15);
    let mut rng = script(descending_directions(), ascending_speeds(), &[0.3]);
    let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();

    let zeroed: Vec<usize> = (0..HOLE_COUNT).filter(|hole| wind[*hole].speed == 0).collect();
    assert_eq!(zeroed, vec![2], "exactly one earlier hole should be zeroed");

    assert_eq!(wind[2], WindEntry::new(0, 5));
    assert_eq!(wind[8], WindEntry::new(9, 5));

    // Other holes keep their original speed and direction
    for hole in (0..8).filter(|hole| *hole != 2) {
        assert_eq!(wind[hole], WindEntry::new(hole as i32 + 1, 7 - hole as i32));
    }

    assert_eq!(rng.remaining(), 0);
    assert_eq!(rng.overruns(), 0);
}

#[test]
fn test_donor_range_excludes_end_hole() {
    // A draw just below 1.0 selects the last hole before the current one
    let difficulty = Difficulty::full_course(1, 15);
    let mut rng = script(descending_directions(), ascending_speeds(), &[0.999]);
    let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();

    assert_eq!(wind[7], WindEntry::new(0, 0));
    assert_eq!(wind[8], WindEntry::new(9, 0));
}

#[test]
fn test_donor_range_starts_at_first_hole() {
    let difficulty = Difficulty::full_course(1, 15);
    let mut rng = script(descending_directions(), ascending_speeds(), &[0.0]);
    let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();

    assert_eq!(wind[0], WindEntry::new(0, 7));
    assert_eq!(wind[8], WindEntry::new(9, 7));
}

#[test]
fn test_donation_keeps_drawn_speed() {
    // Speeds come out 15, 14, ..., 0: hole 8 draws 7 and donates
    let difficulty = Difficulty::full_course(0, 15);
    let mut rng = script(
        descending_directions(),
        vec![0.999; WIND_SPEED_COUNT as usize],
        &[0.6],
    );
    let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();

    // 0.6 * 8 = 4.8 picks hole 4, which held speed 11 and direction 3
    assert_eq!(wind[4], WindEntry::new(0, 3));
    assert_eq!(wind[8], WindEntry::new(7, 3));
    assert_eq!(wind.nonzero_count_in(&difficulty), 8);
}

// ============================================================================
// Calm holes
// ============================================================================

#[test]
fn test_calm_hole_after_budget_faces_south() {
    // Speeds come out 1, 2, ..., 8, 0, 9, ...: hole 8 is calm after the budget
    let mut ranks = vec![1; 8];
    ranks.extend(vec![0; WIND_SPEED_COUNT as usize - 8]);
    let difficulty = Difficulty::full_course(0, 15);
    let mut rng = script(descending_directions(), draws_for_ranks(&ranks), &[]);
    let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();

    for hole in 0..8 {
        assert_eq!(wind[hole], WindEntry::new(hole as i32 + 1, 7 - hole as i32));
    }
    assert_eq!(wind[8], WindEntry::new(0, SOUTH));

    // No donation draw was taken
    assert_eq!(rng.draws(), (WIND_DIRECTION_COUNT + WIND_SPEED_COUNT) as usize);
    assert_eq!(rng.discarded(), u64::from(DRAWS_BEFORE_WIND));
}

#[test]
fn test_calm_hole_under_budget_shares_next_direction() {
    // Speeds 0, 1, 2, ...: hole 0 is calm and previews direction 7 without
    // consuming it, so hole 1 gets direction 7 as well
    let difficulty = Difficulty::full_course(0, 15);
    let mut rng = script(descending_directions(), ascending_speeds(), &[]);
    let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();

    assert_eq!(wind[0], WindEntry::new(0, 7));
    assert_eq!(wind[1], WindEntry::new(1, 7));
    assert_eq!(wind[2], WindEntry::new(2, 6));
    assert_eq!(wind[8], WindEntry::new(8, 0));
    assert_eq!(rng.remaining(), 0);
}

// ============================================================================
// Partial rounds
// ============================================================================

#[test]
fn test_partial_round_never_donates() {
    let difficulty = Difficulty::new(1, 8, 0, 15);
    let mut rng = script(descending_directions(), vec![0.999; 16], &[0.5]);
    let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();

    assert_eq!(wind[0], WindEntry::UNPLAYED);
    for hole in 1..HOLE_COUNT {
        assert_eq!(wind[hole], WindEntry::new(16 - hole as i32, 8 - hole as i32));
    }
    // The extra scripted draw is left untouched
    assert_eq!(rng.remaining(), 1);
}

#[test]
fn test_single_hole_round_scripted() {
    let difficulty = Difficulty::new(6, 6, 4, 4);
    let mut rng = script(descending_directions(), ascending_speeds(), &[]);
    let wind = make_wind_set(&difficulty, &mut rng, false).unwrap();

    assert_eq!(wind[6], WindEntry::new(4, 7));
    assert_eq!(
        wind.iter().filter(|entry| **entry == WindEntry::UNPLAYED).count(),
        HOLE_COUNT - 1
    );
}

//! B3/S23 transition rule
//!
//! Pure functions over one cell and its neighbor count; the grid decides
//! where those counts come from.

use super::cell::STREAK_UNSET;

/// Moore neighborhood as (d_row, d_col), self excluded.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Next state of a cell with `neighbors` live neighbors.
#[inline]
pub const fn next_alive(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Under/overpopulation or stays dead
    }
}

/// Streak carried into the next generation.
#[inline]
pub const fn next_streak(was_alive: bool, streak: i32, now_alive: bool) -> i32 {
    if !now_alive {
        STREAK_UNSET
    } else if was_alive {
        streak.saturating_add(1)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cells_survive_only_on_two_or_three() {
        let survivors: Vec<u8> = (0..=8).filter(|&n| next_alive(true, n)).collect();
        assert_eq!(survivors, vec![2, 3]);
    }

    #[test]
    fn dead_cells_are_born_only_on_three() {
        let births: Vec<u8> = (0..=8).filter(|&n| next_alive(false, n)).collect();
        assert_eq!(births, vec![3]);
    }

    #[test]
    fn streak_continues_starts_and_resets() {
        assert_eq!(next_streak(true, 4, true), 5);
        assert_eq!(next_streak(false, STREAK_UNSET, true), 0);
        assert_eq!(next_streak(true, 9, false), STREAK_UNSET);
        assert_eq!(next_streak(true, i32::MAX, true), i32::MAX);
    }

    #[test]
    fn offsets_cover_the_ring_once() {
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));
        for dr in -1..=1 {
            for dc in -1..=1 {
                if (dr, dc) != (0, 0) {
                    assert!(NEIGHBOR_OFFSETS.contains(&(dr, dc)));
                }
            }
        }
    }
}

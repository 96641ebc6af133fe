//! HIGHLANDER: survives up to two consecutive bad steps.
//!
//! A step is bad when the neighbor count is outside `2..=3`. The streak
//! resets on any good step; death happens on the third bad step in a row.

use crate::cell::Cell;

/// Consecutive bad steps that kill a highlander.
pub const FATAL_STREAK: u8 = 3;

pub fn evolve_highlander(cell: &mut Cell, alive_neighbors: u8) -> bool {
    if (2..=3).contains(&alive_neighbors) {
        cell.near_death_streak = 0;
    } else {
        cell.near_death_streak = cell.near_death_streak.saturating_add(1);
    }

    if cell.near_death_streak >= FATAL_STREAK {
        false
    } else if !cell.alive && alive_neighbors == 3 {
        true
    } else {
        cell.alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    fn highlander(alive: bool) -> Cell {
        let mut cell = Cell::new(Coord::new(0, 0));
        cell.alive = alive;
        cell
    }

    #[test]
    fn survives_two_bad_steps_then_resets() {
        let mut cell = highlander(true);
        assert!(evolve_highlander(&mut cell, 0));
        assert!(evolve_highlander(&mut cell, 5));
        assert_eq!(cell.near_death_streak(), 2);
        assert!(evolve_highlander(&mut cell, 2));
        assert_eq!(cell.near_death_streak(), 0);
        assert!(evolve_highlander(&mut cell, 1));
    }

    #[test]
    fn third_bad_step_kills() {
        let mut cell = highlander(true);
        assert!(evolve_highlander(&mut cell, 1));
        assert!(evolve_highlander(&mut cell, 1));
        assert!(!evolve_highlander(&mut cell, 1));
        assert_eq!(cell.near_death_streak(), FATAL_STREAK);
    }

    #[test]
    fn dead_highlander_respawns_at_three() {
        let mut cell = highlander(false);
        cell.near_death_streak = 7;
        assert!(evolve_highlander(&mut cell, 3));
        assert_eq!(cell.near_death_streak(), 0);
    }

    #[test]
    fn dead_highlander_stays_dead_at_two() {
        let mut cell = highlander(false);
        assert!(!evolve_highlander(&mut cell, 2));
    }
}

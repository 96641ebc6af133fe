//! BASIC: Conway's rule. Dies below 2 or above 3, respawns at 3.

use super::threshold_rule;

#[must_use]
pub fn evolve_basic(alive: bool, alive_neighbors: u8) -> bool {
    threshold_rule(alive, alive_neighbors, 2, 3)
}

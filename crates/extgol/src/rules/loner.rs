//! LONER: tolerates a single neighbor. Dies at 0 or above 3, respawns at 3.

use super::threshold_rule;

#[must_use]
pub fn evolve_loner(alive: bool, alive_neighbors: u8) -> bool {
    threshold_rule(alive, alive_neighbors, 1, 3)
}

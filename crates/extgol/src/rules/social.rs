//! SOCIAL: tolerates crowding. Dies below 2, respawns at 3.

use super::threshold_rule;

#[must_use]
pub fn evolve_social(alive: bool, alive_neighbors: u8) -> bool {
    threshold_rule(alive, alive_neighbors, 2, 8)
}

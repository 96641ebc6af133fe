//! Per-type survival/respawn rules dispatched from the evolution phase.

mod basic;
pub(crate) mod highlander;
mod loner;
mod social;

use crate::cell::{Cell, CellType};

pub use basic::evolve_basic;
pub use highlander::evolve_highlander;
pub use loner::evolve_loner;
pub use social::evolve_social;

/// Shared shape of the threshold rules: outside `min..=max` the cell dies,
/// a dead cell with exactly 3 neighbors respawns, otherwise nothing changes.
fn threshold_rule(alive: bool, alive_neighbors: u8, min: u8, max: u8) -> bool {
    if alive_neighbors < min || alive_neighbors > max {
        false
    } else if !alive && alive_neighbors == 3 {
        true
    } else {
        alive
    }
}

/// Decide whether `cell` lives next step, then resolve its pending mood
/// transitions so they apply to the following step's interactions.
pub fn evolve(cell: &mut Cell, alive_neighbors: u8) -> bool {
    let will_live = match cell.cell_type {
        CellType::Basic => evolve_basic(cell.alive, alive_neighbors),
        CellType::Highlander => evolve_highlander(cell, alive_neighbors),
        CellType::Loner => evolve_loner(cell.alive, alive_neighbors),
        CellType::Social => evolve_social(cell.alive, alive_neighbors),
    };
    cell.settle_mood();
    will_live
}

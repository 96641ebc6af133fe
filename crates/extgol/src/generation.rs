//! Frozen per-step snapshots of the board.

use crate::cell::Mood;
use crate::coord::Coord;
use crate::event::Event;
use crate::Board;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What a generation remembers about one cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub coord: Coord,
    pub alive: bool,
    pub life_points: i32,
    pub mood: Mood,
}

/// Board state at one step. The snapshot never changes once captured;
/// only the event that fired while leaving this step is recorded later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    step: u32,
    event: Option<Event>,
    /// Sorted by coordinate.
    cells: Vec<CellSnapshot>,
}

impl Generation {
    /// Snapshot every cell of `board` as step `step`.
    #[must_use]
    pub fn capture(step: u32, board: &Board) -> Self {
        let cells = board
            .canonical_order()
            .iter()
            .filter_map(|&i| board.tiles()[i].cell())
            .map(|c| CellSnapshot {
                coord: c.coord(),
                alive: c.alive,
                life_points: c.life_points,
                mood: c.mood,
            })
            .collect();
        Self {
            step,
            event: None,
            cells,
        }
    }

    #[must_use]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// The event applied to the board before evolving out of this step.
    #[must_use]
    pub fn event(&self) -> Option<Event> {
        self.event
    }

    pub(crate) fn record_event(&mut self, event: Event) {
        self.event = Some(event);
    }

    #[must_use]
    pub fn cells(&self) -> &[CellSnapshot] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&CellSnapshot> {
        self.cells
            .binary_search_by_key(&coord, |s| s.coord)
            .ok()
            .map(|i| &self.cells[i])
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = &CellSnapshot> {
        self.cells.iter().filter(|s| s.alive)
    }

    #[must_use]
    pub fn alive_coords(&self) -> BTreeSet<Coord> {
        self.alive_cells().map(|s| s.coord).collect()
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.alive_cells().count()
    }
}

//! Board slot: hosts one cell, caches its neighbors and an energy modifier.

use crate::cell::Cell;
use crate::coord::Coord;

#[derive(Clone, Debug)]
pub struct Tile {
    coord: Coord,
    modifier: i32,
    interactable: bool,
    pub(crate) cell: Option<Cell>,
    neighbors: Vec<usize>,
}

impl Tile {
    /// A non-interactable tile hosting a fresh dead cell. Neighbors are
    /// resolved by the board in a second pass.
    #[must_use]
    pub(crate) fn new(coord: Coord) -> Self {
        Self {
            coord,
            modifier: 0,
            interactable: false,
            cell: Some(Cell::new(coord)),
            neighbors: Vec::new(),
        }
    }

    pub(crate) fn link(&mut self, neighbors: Vec<usize>) {
        self.neighbors = neighbors;
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Board indices of the adjacent tiles, ascending by coordinate.
    #[must_use]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    #[must_use]
    pub fn cell(&self) -> Option<&Cell> {
        self.cell.as_ref()
    }

    #[must_use]
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    #[must_use]
    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    pub(crate) fn set_modifier(&mut self, modifier: i32) {
        self.interactable = true;
        self.modifier = modifier;
    }

    /// Energy this tile adds to its cell for the current step. Only alive
    /// cells on interactable tiles receive it.
    #[must_use]
    pub fn energy_for(&self, cell: &Cell) -> i32 {
        if self.interactable && cell.alive {
            self.modifier
        } else {
            0
        }
    }
}

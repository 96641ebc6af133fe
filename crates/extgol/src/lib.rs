//! Extended Game of Life engine.
//!
//! Cells evolve synchronously on a fixed Moore-neighborhood grid, with a
//! per-cell rule variant ([`CellType`]), a pairwise interaction variant
//! ([`Mood`]), an energy budget, tile energy modifiers and step-scheduled
//! [`Event`]s.

pub mod api;
pub mod cell;
pub mod config;
pub mod coord;
pub mod error;
pub mod event;
pub mod game;
pub mod generation;
pub mod moods;
pub mod rules;
pub mod step;
pub mod tile;
pub mod universe;


pub use cell::{Cell, CellType, Mood};
pub use config::SimConfig;
pub use coord::Coord;
pub use error::SimError;
pub use event::{Event, EventSchedule};
pub use game::Game;
pub use generation::{CellSnapshot, Generation};
pub use tile::Tile;
pub use universe::Universe;

use coord::MOORE_OFFSETS;

/// Fixed rectangular topology. Tiles are stored row-major; every tile hosts
/// exactly one cell and its neighbor set never changes after construction.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    pub(crate) tiles: Vec<Tile>,
    order: Vec<usize>,
}

impl Board {
    /// Build the grid in two passes: one tile per coordinate, then neighbor
    /// resolution. Every cell starts dead, BASIC and NAIVE.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let mut tiles = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(Coord::new(x as i32, y as i32)));
            }
        }

        let mut board = Self {
            width,
            height,
            tiles,
            order: Vec::with_capacity(width * height),
        };

        for i in 0..board.tiles.len() {
            let center = board.tiles[i].coord();
            let adjacent: Vec<usize> = MOORE_OFFSETS
                .iter()
                .filter_map(|&(dx, dy)| board.index(center.offset(dx, dy)))
                .collect();
            board.tiles[i].link(adjacent);
        }

        for x in 0..width {
            for y in 0..height {
                board.order.push(y * width + x);
            }
        }
        board
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && (coord.x as usize) < self.width
            && coord.y >= 0
            && (coord.y as usize) < self.height
    }

    #[must_use]
    pub fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.y as usize * self.width + coord.x as usize)
    }

    fn index_of(&self, coord: Coord) -> Result<usize, SimError> {
        self.index(coord).ok_or(SimError::UnknownCoord(coord))
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, coord: Coord) -> Result<&Tile, SimError> {
        let i = self.index_of(coord)?;
        Ok(&self.tiles[i])
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell, SimError> {
        let i = self.index_of(coord)?;
        self.cell_at(i)
    }

    pub fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, SimError> {
        let i = self.index_of(coord)?;
        self.cell_at_mut(i)
    }

    pub(crate) fn cell_at(&self, i: usize) -> Result<&Cell, SimError> {
        let tile = &self.tiles[i];
        tile.cell().ok_or(SimError::MissingCell(tile.coord()))
    }

    pub(crate) fn cell_at_mut(&mut self, i: usize) -> Result<&mut Cell, SimError> {
        let tile = &mut self.tiles[i];
        let coord = tile.coord();
        tile.cell.as_mut().ok_or(SimError::MissingCell(coord))
    }

    /// Make the tile at `coord` interactable with the given energy modifier.
    pub fn configure_tile(&mut self, coord: Coord, modifier: i32) -> Result<(), SimError> {
        let i = self.index_of(coord)?;
        self.tiles[i].set_modifier(modifier);
        Ok(())
    }

    /// Coordinates of the up to 8 tiles around `coord`.
    pub fn adjacent(&self, coord: Coord) -> Result<Vec<Coord>, SimError> {
        let tile = self.tile(coord)?;
        Ok(tile
            .neighbors()
            .iter()
            .map(|&n| self.tiles[n].coord())
            .collect())
    }

    /// Tile indices ascending by `(x, y)`.
    #[must_use]
    pub fn canonical_order(&self) -> &[usize] {
        &self.order
    }

    /// Alive cells around tile `i`, read from the cells' committed state.
    #[must_use]
    pub fn alive_neighbors(&self, i: usize) -> u8 {
        self.tiles[i]
            .neighbors()
            .iter()
            .filter(|&&n| self.tiles[n].cell().is_some_and(|c| c.alive))
            .count() as u8
    }

    #[must_use]
    pub fn alive_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.cell().is_some_and(|c| c.alive))
            .count()
    }

    /// Fail on the first tile hosting no cell.
    pub(crate) fn check_cells(&self) -> Result<(), SimError> {
        match self.tiles.iter().find(|t| t.cell().is_none()) {
            Some(t) => Err(SimError::MissingCell(t.coord())),
            None => Ok(()),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.tiles.iter().filter_map(Tile::cell)
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.tiles.iter_mut().filter_map(|t| t.cell.as_mut())
    }
}

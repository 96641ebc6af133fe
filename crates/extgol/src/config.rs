//! JSON seed configuration for a game.

use crate::cell::{CellType, Mood};
use crate::coord::Coord;
use crate::error::SimError;
use crate::event::EventSchedule;
use crate::game::Game;
use crate::Board;
use serde::{Deserialize, Serialize};

/// An interactable tile and its per-step energy modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSeed {
    pub x: i32,
    pub y: i32,
    pub modifier: i32,
}

/// Initial state of one cell. Omitted fields keep the board defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSeed {
    pub x: i32,
    pub y: i32,
    #[serde(default = "alive_by_default")]
    pub alive: bool,
    #[serde(default)]
    pub cell_type: CellType,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub life_points: i32,
}

fn alive_by_default() -> bool {
    true
}

/// Static configuration for a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Columns on the board.
    pub width: usize,
    /// Rows on the board.
    pub height: usize,
    /// Tiles made interactable before the first step.
    pub tiles: Vec<TileSeed>,
    /// Cells seeded into generation 0.
    pub cells: Vec<CellSeed>,
    /// Events keyed by the step they fire on.
    pub events: EventSchedule,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            tiles: Vec::new(),
            cells: Vec::new(),
            events: EventSchedule::new(),
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(SimError::InvalidConfig(format!(
                "board {}x{} exceeds the coordinate range",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Build the seeded board.
    pub fn board(&self) -> Result<Board, SimError> {
        self.validate()?;
        let mut board = Board::new(self.width, self.height);
        for tile in &self.tiles {
            board.configure_tile(Coord::new(tile.x, tile.y), tile.modifier)?;
        }
        for seed in &self.cells {
            let cell = board.cell_mut(Coord::new(seed.x, seed.y))?;
            cell.alive = seed.alive;
            cell.cell_type = seed.cell_type;
            cell.mood = seed.mood;
            cell.life_points = seed.life_points;
        }
        Ok(board)
    }

    /// Build a game whose generation 0 is the seeded board and whose
    /// schedule is `events`.
    pub fn build(&self) -> Result<Game, SimError> {
        let mut game = Game::new(self.board()?);
        for (step, event) in self.events.iter() {
            game.schedule(step, event);
        }
        Ok(game)
    }
}

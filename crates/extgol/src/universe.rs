//! `wasm-bindgen` façade over [`Game`] with flat, integer-coded accessors.

use crate::cell::{Cell, CellType, Mood};
use crate::coord::Coord;
use crate::event::Event;
use crate::game::Game;
use crate::Board;
use tracing::warn;
use wasm_bindgen::prelude::*;

/// Setters return `false` for unknown coordinates or codes instead of
/// throwing. Cell edits made before the first tick become part of
/// generation 0.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    game: Game,
    width: u32,
    height: u32,
    seed_dirty: bool,
}

#[wasm_bindgen]
impl Universe {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(width: u32, height: u32) -> Universe {
        Universe {
            game: Game::new(Board::new(width as usize, height as usize)),
            width,
            height,
            seed_dirty: false,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Index of the latest generation.
    #[must_use]
    pub fn step(&self) -> u32 {
        self.game.latest().map_or(0, crate::Generation::step)
    }

    pub fn set_alive(&mut self, x: i32, y: i32, alive: bool) -> bool {
        self.edit(x, y, |c| c.alive = alive)
    }

    pub fn set_life_points(&mut self, x: i32, y: i32, life_points: i32) -> bool {
        self.edit(x, y, |c| c.life_points = life_points)
    }

    pub fn set_cell_type(&mut self, x: i32, y: i32, code: u8) -> bool {
        match CellType::from_code(code) {
            Some(cell_type) => self.edit(x, y, |c| c.cell_type = cell_type),
            None => false,
        }
    }

    pub fn set_mood(&mut self, x: i32, y: i32, code: u8) -> bool {
        match Mood::from_code(code) {
            Some(mood) => self.edit(x, y, |c| c.mood = mood),
            None => false,
        }
    }

    pub fn set_tile_modifier(&mut self, x: i32, y: i32, modifier: i32) -> bool {
        self.game
            .board_mut()
            .is_some_and(|b| b.configure_tile(Coord::new(x, y), modifier).is_ok())
    }

    pub fn schedule_event(&mut self, step: u32, code: u8) -> bool {
        match Event::from_code(code) {
            Some(event) => {
                self.game.schedule(step, event);
                true
            }
            None => false,
        }
    }

    /// Advance one generation. Returns `false` if the step was aborted.
    pub fn tick(&mut self) -> bool {
        if std::mem::take(&mut self.seed_dirty) && self.game.history().len() == 1 {
            if let Err(err) = self.game.reseed() {
                warn!(%err, "reseed failed");
                return false;
            }
        }
        match self.game.step() {
            Ok(_) => true,
            Err(err) => {
                warn!(%err, "tick aborted");
                false
            }
        }
    }

    /// Row-major, 1 for alive cells.
    #[must_use]
    pub fn alive_mask(&self) -> Vec<u8> {
        self.read(|c| u8::from(c.alive))
    }

    /// Row-major life points.
    #[must_use]
    pub fn life_points(&self) -> Vec<i32> {
        self.read(|c| c.life_points)
    }

    /// Row-major mood codes.
    #[must_use]
    pub fn moods(&self) -> Vec<u8> {
        self.read(|c| c.mood as u8)
    }
}

impl Universe {
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn edit(&mut self, x: i32, y: i32, f: impl FnOnce(&mut Cell)) -> bool {
        let Some(board) = self.game.board_mut() else {
            return false;
        };
        match board.cell_mut(Coord::new(x, y)) {
            Ok(cell) => f(cell),
            Err(_) => return false,
        }
        self.seed_dirty = true;
        true
    }

    fn read<T>(&self, f: impl Fn(&Cell) -> T) -> Vec<T> {
        self.game
            .board()
            .map(|b| b.cells().map(f).collect())
            .unwrap_or_default()
    }
}

//! A running simulation: the live board, its generation history and the
//! event schedule.

use crate::cell::Cell;
use crate::coord::Coord;
use crate::error::SimError;
use crate::event::{Event, EventSchedule};
use crate::generation::{CellSnapshot, Generation};
use crate::{step, Board};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// History is append-only. The board is not serialized: a deserialized
/// game keeps its generations and schedule for inspection but cannot step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    #[serde(skip)]
    board: Option<Board>,
    history: Vec<Generation>,
    events: EventSchedule,
}

impl Game {
    /// Start a game whose generation 0 is the current state of `board`.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let start = Generation::capture(0, &board);
        Self {
            board: Some(board),
            history: vec![start],
            events: EventSchedule::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Mutable access to the live board. Edits show up in the next
    /// generation; captured generations are unaffected.
    pub fn board_mut(&mut self) -> Option<&mut Board> {
        self.board.as_mut()
    }

    /// Drop the history and capture the board as a new generation 0.
    pub fn reseed(&mut self) -> Result<(), SimError> {
        let board = self
            .board
            .as_ref()
            .ok_or(SimError::Uninitialized { step: 0 })?;
        self.history = vec![Generation::capture(0, board)];
        Ok(())
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell, SimError> {
        self.board
            .as_ref()
            .ok_or(SimError::Uninitialized {
                step: self.latest().map_or(0, Generation::step),
            })?
            .cell(coord)
    }

    #[must_use]
    pub fn history(&self) -> &[Generation] {
        &self.history
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Generation> {
        self.history.last()
    }

    #[must_use]
    pub fn generation(&self, step: u32) -> Option<&Generation> {
        self.history
            .binary_search_by_key(&step, Generation::step)
            .ok()
            .map(|i| &self.history[i])
    }

    /// Alive cells of generation `step`, keyed by coordinate.
    #[must_use]
    pub fn alive_cells(&self, step: u32) -> Option<BTreeMap<Coord, CellSnapshot>> {
        self.generation(step)
            .map(|g| g.alive_cells().map(|s| (s.coord, *s)).collect())
    }

    #[must_use]
    pub fn events(&self) -> &EventSchedule {
        &self.events
    }

    pub fn schedule(&mut self, step: u32, event: Event) -> Option<Event> {
        self.events.schedule(step, event)
    }

    /// Advance one generation, firing the event scheduled for the current
    /// step, and return the new generation.
    pub fn step(&mut self) -> Result<&Generation, SimError> {
        let Some(board) = self.board.as_mut() else {
            return Err(SimError::Uninitialized {
                step: self.history.last().map_or(0, Generation::step),
            });
        };
        let Some(current) = self.history.last_mut() else {
            return Err(SimError::Uninitialized { step: 0 });
        };
        let event = self.events.at(current.step());
        let next = step::advance(board, current, event)?;
        self.history.push(next);
        Ok(&self.history[self.history.len() - 1])
    }

    /// Merge `schedule` into the game's schedule and advance `steps`
    /// generations. Returns the last generation.
    pub fn run(&mut self, steps: u32, schedule: &EventSchedule) -> Result<&Generation, SimError> {
        self.events.merge(schedule);
        let from = self.latest().map_or(0, Generation::step);
        info!(from, steps, events = self.events.len(), "run started");

        for _ in 0..steps {
            self.step()?;
        }

        let last = self
            .history
            .last()
            .ok_or(SimError::Uninitialized { step: from })?;
        info!(step = last.step(), alive = last.alive_count(), "run finished");
        Ok(last)
    }
}

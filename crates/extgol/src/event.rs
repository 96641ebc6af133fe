//! Global perturbations scheduled at specific steps.

use crate::cell::{Cell, Mood};
use crate::Board;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// Event kinds. Each has one per-cell effect, applied to every cell on the
/// board before the step's interactions. Discriminants are façade codes.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    /// Every cell's life points reset to 0.
    Cataclysm = 0,
    /// Every cell loses 1 life point.
    Famine = 1,
    /// Every cell gains 2 life points.
    Bloom = 2,
    /// Every cell is empowered: vampire bites and healer feeding can turn
    /// healers into vampires this step.
    BloodMoon = 3,
    /// Healers gain 1 life point and vampires revert to naive.
    Sanctuary = 4,
}

impl Event {
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Cataclysm),
            1 => Some(Self::Famine),
            2 => Some(Self::Bloom),
            3 => Some(Self::BloodMoon),
            4 => Some(Self::Sanctuary),
            _ => None,
        }
    }

    pub fn unroll(self, cell: &mut Cell) {
        match self {
            Self::Cataclysm => cell.life_points = 0,
            Self::Famine => cell.life_points = cell.life_points.saturating_sub(1),
            Self::Bloom => cell.life_points = cell.life_points.saturating_add(2),
            Self::BloodMoon => cell.empowered = true,
            Self::Sanctuary => match cell.mood {
                Mood::Healer => cell.life_points = cell.life_points.saturating_add(1),
                Mood::Vampire => cell.mood = Mood::Naive,
                Mood::Naive => {}
            },
        }
    }

    /// Unroll the event on every cell of `board`.
    pub fn apply(self, board: &mut Board) {
        let mut touched = 0usize;
        for cell in board.cells_mut() {
            self.unroll(cell);
            touched += 1;
        }
        trace!(event = %self, cells = touched, "event applied");
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cataclysm => write!(f, "Cataclysm"),
            Self::Famine => write!(f, "Famine"),
            Self::Bloom => write!(f, "Bloom"),
            Self::BloodMoon => write!(f, "BloodMoon"),
            Self::Sanctuary => write!(f, "Sanctuary"),
        }
    }
}

/// Step index to event. Steps without an entry fire nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventSchedule(BTreeMap<u32, Event>);

impl EventSchedule {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` at `step`, returning any event it replaces.
    pub fn schedule(&mut self, step: u32, event: Event) -> Option<Event> {
        self.0.insert(step, event)
    }

    #[must_use]
    pub fn at(&self, step: u32) -> Option<Event> {
        self.0.get(&step).copied()
    }

    /// Merge `other` into `self`; entries of `other` win on conflict.
    pub fn merge(&mut self, other: &EventSchedule) {
        self.0.extend(other.iter());
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Event)> + '_ {
        self.0.iter().map(|(&step, &event)| (step, event))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u32, Event)> for EventSchedule {
    fn from_iter<I: IntoIterator<Item = (u32, Event)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

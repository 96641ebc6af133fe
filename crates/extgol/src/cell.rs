//! Cell, CellType and Mood types for the board.

use crate::coord::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Survival/respawn rule variant. Discriminants are the integer codes used
/// by the embedding façade, do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellType {
    #[default]
    Basic = 0,
    Highlander = 1,
    Loner = 2,
    Social = 3,
}

impl CellType {
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Basic),
            1 => Some(Self::Highlander),
            2 => Some(Self::Loner),
            3 => Some(Self::Social),
            _ => None,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic"),
            Self::Highlander => write!(f, "Highlander"),
            Self::Loner => write!(f, "Loner"),
            Self::Social => write!(f, "Social"),
        }
    }
}

/// Interaction variant. Discriminants are façade codes, do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mood {
    #[default]
    Naive = 0,
    Healer = 1,
    Vampire = 2,
}

impl Mood {
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Naive),
            1 => Some(Self::Healer),
            2 => Some(Self::Vampire),
            _ => None,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => write!(f, "Naive"),
            Self::Healer => write!(f, "Healer"),
            Self::Vampire => write!(f, "Vampire"),
        }
    }
}

/// The live simulation unit hosted by exactly one tile.
///
/// `near_death_streak` and the two pending-vampire flags are working state
/// for the step in progress; they are not part of a generation snapshot.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    coord: Coord,
    pub alive: bool,
    pub life_points: i32,
    pub cell_type: CellType,
    pub mood: Mood,
    pub empowered: bool,
    pub(crate) near_death_streak: u8,
    pub(crate) naive_to_vampire: bool,
    pub(crate) healer_to_vampire: bool,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}/{}", self.coord, self.cell_type, self.mood)
    }
}

impl Cell {
    /// A dead BASIC/NAIVE cell with no energy.
    #[must_use]
    pub fn new(coord: Coord) -> Self {
        Self {
            coord,
            alive: false,
            life_points: 0,
            cell_type: CellType::Basic,
            mood: Mood::Naive,
            empowered: false,
            near_death_streak: 0,
            naive_to_vampire: false,
            healer_to_vampire: false,
        }
    }

    #[must_use]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[must_use]
    pub fn near_death_streak(&self) -> u8 {
        self.near_death_streak
    }

    #[must_use]
    pub fn turning_from_naive(&self) -> bool {
        self.naive_to_vampire
    }

    #[must_use]
    pub fn turning_from_healer(&self) -> bool {
        self.healer_to_vampire
    }

    /// Resolve pending vampire transitions and consume both flags.
    pub(crate) fn settle_mood(&mut self) {
        match self.mood {
            Mood::Naive if self.naive_to_vampire => self.mood = Mood::Vampire,
            Mood::Healer if self.healer_to_vampire => self.mood = Mood::Vampire,
            _ => {}
        }
        self.naive_to_vampire = false;
        self.healer_to_vampire = false;
    }
}

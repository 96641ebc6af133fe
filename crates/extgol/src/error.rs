//! Error type shared by board construction, stepping and configuration.

use crate::coord::Coord;
use thiserror::Error;

/// Errors raised by the simulation core.
///
/// Energy going negative, deaths and mood changes are ordinary state
/// transitions and never surface here.
#[derive(Debug, Error)]
pub enum SimError {
    /// A coordinate outside `[0, width) x [0, height)` was addressed.
    #[error("unknown coordinate {0}")]
    UnknownCoord(Coord),

    /// A generation was stepped without a board to evolve.
    #[error("uninitialized simulation: generation {step} has no associated board")]
    Uninitialized { step: u32 },

    /// A tile hosts no cell. The grid was built incorrectly.
    #[error("tile {0} hosts no cell")]
    MissingCell(Coord),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configuration document could not be parsed.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

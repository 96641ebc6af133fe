//! Two-cell mutable view for mood interaction functions.

use crate::cell::Cell;
use crate::error::SimError;
use crate::Board;

/// An interacting pair. The actor's mood selects the effect; changes are
/// written straight through to both cells.
#[derive(Debug)]
pub struct PairApi<'a> {
    pub actor: &'a mut Cell,
    pub other: &'a mut Cell,
}

impl<'a> PairApi<'a> {
    pub fn new(actor: &'a mut Cell, other: &'a mut Cell) -> Self {
        Self { actor, other }
    }

    /// Borrow the cells of two distinct tiles of `board`.
    pub fn on_board(board: &'a mut Board, actor: usize, other: usize) -> Result<Self, SimError> {
        debug_assert_ne!(actor, other);
        let (a, o) = if actor < other {
            let (lo, hi) = board.tiles.split_at_mut(other);
            (&mut lo[actor], &mut hi[0])
        } else {
            let (lo, hi) = board.tiles.split_at_mut(actor);
            (&mut hi[0], &mut lo[other])
        };
        let (a_coord, o_coord) = (a.coord(), o.coord());
        let actor = a.cell.as_mut().ok_or(SimError::MissingCell(a_coord))?;
        let other = o.cell.as_mut().ok_or(SimError::MissingCell(o_coord))?;
        Ok(Self { actor, other })
    }

    /// Move `amount` life points from the other cell to the actor.
    pub fn drain_other(&mut self, amount: i32) {
        transfer(self.other, self.actor, amount);
    }

    /// Move `amount` life points from the actor to the other cell.
    pub fn feed_other(&mut self, amount: i32) {
        transfer(self.actor, self.other, amount);
    }
}

/// Saturating at both ends, so a transfer near the `i32` limits may not
/// conserve the total.
fn transfer(from: &mut Cell, to: &mut Cell, amount: i32) {
    from.life_points = from.life_points.saturating_sub(amount);
    to.life_points = to.life_points.saturating_add(amount);
}

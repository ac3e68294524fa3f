//! Confirmed-move history.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::Move;

/// A move that was confirmed and applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub player: PlayerId,

    /// The move as it was evaluated when confirmed.
    pub mv: Move,

    /// Turn number when the move was made.
    pub turn: u32,

    /// Position within the turn, starting at 0. Bonus rolls add moves
    /// to the same turn.
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            mv,
            turn,
            sequence,
        }
    }

    /// Whether the move earned a bonus roll.
    #[must_use]
    pub fn was_bonus(&self) -> bool {
        self.mv.lands_on_rosetta()
    }
}

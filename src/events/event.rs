//! Game event types.
//!
//! Events narrate what the turn machine did. They are queued in an outbox
//! and drained by whoever is listening; nothing in the engine reads them
//! back.

use serde::{Deserialize, Serialize};

use crate::board::SquareId;
use crate::core::{DiceRoll, PlayerId};
use crate::pieces::{PieceId, PieceRef};

/// Why a turn was passed without a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassReason {
    /// The roll had no successes.
    ZeroRoll,
    /// Every piece was blocked, finished or would overshoot.
    NoLegalMove,
}

impl std::fmt::Display for PassReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassReason::ZeroRoll => write!(f, "No moves available"),
            PassReason::NoLegalMove => write!(f, "No valid moves"),
        }
    }
}

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new game began.
    GameStarted {
        /// Player who rolls first.
        first_player: PlayerId,
        /// Roster size.
        pieces_per_player: u8,
    },

    /// A player's turn began (not emitted for bonus rolls).
    TurnStarted {
        player: PlayerId,
        /// Turn number, starting at 1.
        turn: u32,
    },

    /// Dice were thrown.
    DiceRolled { player: PlayerId, roll: DiceRoll },

    /// The roll allows no move; the turn passes after the delay.
    TurnPassed { player: PlayerId, reason: PassReason },

    /// A move was applied.
    MoveConfirmed {
        player: PlayerId,
        piece: PieceId,
        /// Path index before the move (`None` from hand).
        from: Option<u8>,
        /// Square landed on (`None` when finishing).
        to: Option<SquareId>,
        /// Name of the square landed on.
        square_name: Option<String>,
        /// Opposing piece sent back to hand.
        captured: Option<PieceRef>,
        /// The piece left the board.
        finished: bool,
        /// The move earned another roll.
        bonus: bool,
    },

    /// A player brought every piece home.
    GameWon { player: PlayerId },
}

impl GameEvent {
    /// The player the event is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            GameEvent::GameStarted { first_player, .. } => *first_player,
            GameEvent::TurnStarted { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::TurnPassed { player, .. }
            | GameEvent::MoveConfirmed { player, .. }
            | GameEvent::GameWon { player } => *player,
        }
    }
}

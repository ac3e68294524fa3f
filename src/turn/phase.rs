//! Turn phases, command names and the auto-pass token.

use std::time::Duration;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::events::PassReason;
use crate::pieces::PieceRef;
use crate::rules::{IllegalMove, Move};

/// A pending pass to the opponent.
///
/// The turn machine hands this out when a roll leaves no move. The caller
/// waits `delay` and then calls [`Game::run_auto_pass`](super::Game::run_auto_pass)
/// with it. The token only fires if nothing has changed since it was issued:
/// any later command (a new game in particular) bumps the machine's
/// generation and the token is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoPass {
    /// Generation of the machine when the pass was scheduled.
    pub generation: u64,
    /// Player whose turn is being passed.
    pub player: PlayerId,
    /// Why there is nothing to move.
    pub reason: PassReason,
    /// How long to show the roll before passing.
    pub delay: Duration,
}

/// Where the turn is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Only `roll` is accepted.
    AwaitingRoll,
    /// The current player picks a piece for the roll.
    AwaitingSelection,
    /// A move is pending; confirm or cancel.
    AwaitingConfirmation,
    /// The roll allows nothing; waiting for the auto-pass to fire.
    PassPending(AutoPass),
    /// Terminal.
    GameOver {
        /// Player with every piece home.
        winner: PlayerId,
    },
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::AwaitingRoll => write!(f, "awaiting roll"),
            TurnPhase::AwaitingSelection => write!(f, "awaiting selection"),
            TurnPhase::AwaitingConfirmation => write!(f, "awaiting confirmation"),
            TurnPhase::PassPending(pass) => write!(f, "passing {}'s turn", pass.player),
            TurnPhase::GameOver { winner } => write!(f, "game over, {winner} won"),
        }
    }
}

/// Commands accepted by the turn machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Command {
    #[display("roll")]
    Roll,
    #[display("select a piece")]
    SelectPiece,
    #[display("confirm a move")]
    ConfirmMove,
    #[display("cancel a move")]
    CancelMove,
}

/// A command that did not apply. The game state is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum CommandRejected {
    /// The command is not accepted in the current phase.
    #[display("cannot {command} while {phase}")]
    WrongPhase {
        /// What was attempted.
        command: Command,
        /// Phase at the time.
        phase: TurnPhase,
    },
    /// The piece reference names no piece.
    #[display("no such piece {piece}")]
    UnknownPiece {
        /// The reference that was given.
        piece: PieceRef,
    },
}

/// What selecting a piece did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// The move is pending confirmation.
    Pending(Move),
    /// The piece cannot move; pick another.
    Illegal(IllegalMove),
    /// The piece cannot move and neither can any other; the turn passes.
    Passed {
        /// Why the selected piece could not move.
        illegal: IllegalMove,
        /// The scheduled pass.
        auto_pass: AutoPass,
    },
}

/// What happens after a confirmed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Landed on a rosetta: the same player rolls again.
    BonusRoll(PlayerId),
    /// The other player is up.
    NextTurn(PlayerId),
    /// The mover brought their last piece home.
    GameOver(PlayerId),
}

/// Result of a confirmed move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The move that was applied.
    pub applied: Move,
    /// Where the game goes next.
    pub outcome: TurnOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message() {
        let err = CommandRejected::WrongPhase {
            command: Command::ConfirmMove,
            phase: TurnPhase::AwaitingRoll,
        };
        assert_eq!(err.to_string(), "cannot confirm a move while awaiting roll");

        let err = CommandRejected::WrongPhase {
            command: Command::Roll,
            phase: TurnPhase::GameOver {
                winner: PlayerId::SECOND,
            },
        };
        assert_eq!(err.to_string(), "cannot roll while game over, Player 2 won");
    }
}

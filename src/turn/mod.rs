//! Turn state machine.
//!
//! [`Game`] owns the position and drives one turn at a time:
//!
//! ```text
//! AwaitingRoll --roll--> AwaitingSelection --select--> AwaitingConfirmation
//!      ^  |                    ^                            |      |
//!      |  | no move            +----------cancel------------+      | confirm
//!      |  v                                                        v
//!      | PassPending --auto-pass--> other player     bonus / next turn / GameOver
//! ```
//!
//! Commands in the wrong phase return [`CommandRejected`] and change
//! nothing. A roll with no move returns an [`AutoPass`] token; the caller
//! waits out its delay and hands it back to [`Game::run_auto_pass`]. Tokens
//! go stale as soon as any later command runs.
//!
//! ## Example Usage
//!
//! ```
//! use rust_ur::core::DiceRoll;
//! use rust_ur::pieces::{PieceId, PieceRef};
//! use rust_ur::turn::{Selection, TurnOutcome};
//! use rust_ur::{Game, PlayerId, UrConfig};
//!
//! let mut game = Game::new(UrConfig::default());
//! game.roll_with(DiceRoll::with_successes(4)).unwrap();
//!
//! let piece = PieceRef::new(PlayerId::FIRST, PieceId(0));
//! assert!(matches!(game.select_piece(piece).unwrap(), Selection::Pending(_)));
//!
//! // Index 3 is a rosetta: roll again.
//! let resolution = game.confirm_pending_move().unwrap();
//! assert_eq!(resolution.outcome, TurnOutcome::BonusRoll(PlayerId::FIRST));
//! ```

mod machine;
mod phase;
mod record;

pub use machine::{Game, RollOutcome};
pub use phase::{
    AutoPass, Command, CommandRejected, Resolution, Selection, TurnOutcome, TurnPhase,
};
pub use record::MoveRecord;

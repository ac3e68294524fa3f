//! # rust-ur
//!
//! Rules engine for the Royal Game of Ur: two players race seven pieces
//! along fourteen-square paths that share a middle lane.
//!
//! ## Design Principles
//!
//! 1. **One Source of Truth**: Legality lives in [`rules::check_move`]. The
//!    turn machine, highlighting and the computer player all call it.
//!
//! 2. **Explicit State Machine**: [`Game`] owns the position and the turn.
//!    Every change goes through one of its commands; a command in the wrong
//!    phase is rejected and changes nothing.
//!
//! 3. **Deterministic**: Dice come from a seeded ChaCha8 stream and the
//!    computer player has no randomness, so a seed replays a game exactly.
//!
//! ## Architecture
//!
//! - **Occupancy by Square Identity**: No occupancy map. Shared squares are
//!   matched by `SquareId`, recomputed from piece positions on demand.
//!
//! - **Cancellable Auto-Pass**: A roll with no move yields an [`AutoPass`]
//!   token tied to the machine's generation counter. Stale tokens do
//!   nothing.
//!
//! - **Fire-and-Forget Events**: The machine queues [`GameEvent`]s for the
//!   log and statistics panels; nothing in the engine reads them back.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG, configuration, game state
//! - `board`: Squares and per-player paths
//! - `pieces`: Pieces and rosters
//! - `rules`: Move legality
//! - `turn`: The turn state machine
//! - `ai`: Priority-ladder computer player
//! - `events`: Game events, narration log and statistics

pub mod ai;
pub mod board;
pub mod core;
pub mod events;
pub mod pieces;
pub mod rules;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    Dice, DiceConfig, DiceRoll, GameRng, GameRngState, GameState, PlayerId, PlayerMap, Seat,
    UrConfig,
};

pub use crate::board::{Board, BoardError, Square, SquareFlags, SquareId};

pub use crate::pieces::{ParsePieceRefError, Piece, PieceId, PiecePosition, PieceRef, Roster};

pub use crate::rules::{
    check_move, evaluate_move, has_any_legal_move, legal_moves, Destination, IllegalMove, Move,
};

pub use crate::turn::{
    AutoPass, CommandRejected, Game, MoveRecord, Resolution, RollOutcome, Selection, TurnOutcome,
    TurnPhase,
};

pub use crate::ai::{ComputerPlayer, MovePolicy, PriorityLadder, Tier};

pub use crate::events::{EventSink, GameEvent, GameLog, PassReason, Statistics};

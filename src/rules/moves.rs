//! Move legality.
//!
//! `check_move` is the single source of truth for what a piece may do with a
//! given step count. It is pure, so it is safe to call speculatively (for
//! highlighting, auto-pass checks, or the computer player).

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{SquareFlags, SquareId};
use crate::core::{GameState, PlayerId};
use crate::pieces::{PieceId, PieceRef, Roster};

/// Where a move ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Lands on a square of the mover's path.
    Square {
        /// Index in the mover's path.
        index: u8,
        /// The square at that index.
        square: SquareId,
        /// Its flags, copied so the move can be judged on its own.
        flags: SquareFlags,
    },
    /// Leaves the board one step past the last square.
    Exit,
}

/// A candidate move: one piece, moved by the current roll.
///
/// Moves are computed on demand and never stored in the game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The moving piece.
    pub piece: PieceRef,
    /// Path index before moving (`None` when entering from hand).
    pub from: Option<u8>,
    /// Where it ends up.
    pub destination: Destination,
    /// Opposing piece sent back to hand, if any.
    pub captures: Option<PieceRef>,
}

impl Move {
    /// Target path index, `None` for a finishing move.
    #[must_use]
    pub fn target_index(&self) -> Option<u8> {
        match self.destination {
            Destination::Square { index, .. } => Some(index),
            Destination::Exit => None,
        }
    }

    /// Target square, `None` for a finishing move.
    #[must_use]
    pub fn target_square(&self) -> Option<SquareId> {
        match self.destination {
            Destination::Square { square, .. } => Some(square),
            Destination::Exit => None,
        }
    }

    /// Whether the piece exits the track.
    #[must_use]
    pub fn finishes(&self) -> bool {
        self.destination == Destination::Exit
    }

    /// Whether the piece enters from hand.
    #[must_use]
    pub fn enters(&self) -> bool {
        self.from.is_none()
    }

    /// Whether the move earns another roll. Finishing never does.
    #[must_use]
    pub fn lands_on_rosetta(&self) -> bool {
        matches!(self.destination, Destination::Square { flags, .. } if flags.rosetta)
    }

    /// Owner of the moving piece.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.piece.player
    }
}

/// Why a move is not allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum IllegalMove {
    /// A roll of zero moves nothing.
    #[display("no steps to move")]
    NoSteps,
    /// The piece does not exist.
    #[display("no such piece {piece}")]
    UnknownPiece {
        /// The reference that was given.
        piece: PieceRef,
    },
    /// The piece belongs to the player who is not on turn.
    #[display("{piece} does not belong to {player}")]
    NotYourPiece {
        /// The selected piece.
        piece: PieceRef,
        /// The player on turn.
        player: PlayerId,
    },
    /// The piece has already exited.
    #[display("{piece} has already finished")]
    Finished {
        /// The selected piece.
        piece: PieceRef,
    },
    /// The roll carries the piece past the exit.
    #[display("{piece} would overshoot the exit by {excess}")]
    Overshoot {
        /// The selected piece.
        piece: PieceRef,
        /// Steps beyond the exit.
        excess: u8,
    },
    /// The target square holds one of the mover's own pieces.
    #[display("{piece} would land on own piece {blocker}")]
    OwnPiece {
        /// The selected piece.
        piece: PieceRef,
        /// The piece already there.
        blocker: PieceRef,
    },
    /// The target square protects the opposing piece standing on it.
    #[display("{occupant} is protected on {square}")]
    Protected {
        /// The opposing piece.
        occupant: PieceRef,
        /// Its square.
        square: SquareId,
    },
}

/// Decide what moving `piece` by `steps` does, or why it cannot.
///
/// 1. Zero steps and finished pieces never move.
/// 2. A piece in hand starts one step before index 0.
/// 3. Landing exactly one past the last index finishes the piece; going
///    further is illegal.
/// 4. Otherwise the target square's occupant, found by square identity,
///    decides: own piece blocks, opposing piece on a safe or fort square
///    blocks, any other opposing piece is captured.
pub fn check_move(state: &GameState, piece: PieceRef, steps: u8) -> Result<Move, IllegalMove> {
    if steps == 0 {
        return Err(IllegalMove::NoSteps);
    }
    let current = state
        .piece(piece)
        .ok_or(IllegalMove::UnknownPiece { piece })?;
    if current.is_finished() {
        return Err(IllegalMove::Finished { piece });
    }

    let board = state.board();
    let path_len = i16::from(board.path_len(piece.player));
    let from = current.position_index();
    let start = from.map_or(-1, i16::from);
    let target = start + i16::from(steps);

    if target > path_len {
        return Err(IllegalMove::Overshoot {
            piece,
            excess: (target - path_len) as u8,
        });
    }
    if target == path_len {
        return Ok(Move {
            piece,
            from,
            destination: Destination::Exit,
            captures: None,
        });
    }

    let index = target as u8;
    let square = board
        .square_at(piece.player, index)
        .ok_or(IllegalMove::UnknownPiece { piece })?;

    let occupant = state.occupant(square.id());
    if let Some(occupant) = occupant {
        if occupant.player == piece.player {
            return Err(IllegalMove::OwnPiece {
                piece,
                blocker: occupant,
            });
        }
        if square.flags().is_protected() {
            return Err(IllegalMove::Protected {
                occupant,
                square: square.id(),
            });
        }
    }

    Ok(Move {
        piece,
        from,
        destination: Destination::Square {
            index,
            square: square.id(),
            flags: square.flags(),
        },
        captures: occupant,
    })
}

/// `check_move` without the reason. `None` means no move.
#[must_use]
pub fn evaluate_move(state: &GameState, piece: PieceRef, steps: u8) -> Option<Move> {
    check_move(state, piece, steps).ok()
}

/// Every legal move of `player` for `steps`, in piece order.
///
/// Empty for an id outside the two seats.
#[must_use]
pub fn legal_moves(state: &GameState, player: PlayerId, steps: u8) -> SmallVec<[Move; 7]> {
    state
        .try_roster(player)
        .into_iter()
        .flat_map(Roster::available)
        .filter_map(|p| evaluate_move(state, p.id(), steps))
        .collect()
}

/// Whether `player` has any move for `steps`. Always false for zero steps.
#[must_use]
pub fn has_any_legal_move(state: &GameState, player: PlayerId, steps: u8) -> bool {
    state
        .try_roster(player)
        .into_iter()
        .flat_map(Roster::available)
        .any(|p| evaluate_move(state, p.id(), steps).is_some())
}

/// Pieces of `player` that can move `steps`, for highlighting.
#[must_use]
pub fn movable_pieces(state: &GameState, player: PlayerId, steps: u8) -> SmallVec<[PieceId; 7]> {
    legal_moves(state, player, steps)
        .into_iter()
        .map(|m| m.piece.piece)
        .collect()
}

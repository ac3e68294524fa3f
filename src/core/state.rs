//! Game state: the board and where every piece is.
//!
//! `GameState` is pure position data. It knows nothing about whose turn it
//! is; the turn machine in [`crate::turn`] owns that and is the only code
//! that applies moves during play.
//!
//! ## Occupancy
//!
//! There is no occupancy map. `occupant` scans the (at most 14) pieces and
//! compares the square each one stands on by `SquareId`, so it can never
//! disagree with the piece positions.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::board::{Board, Square, SquareId};
use crate::pieces::{Piece, PiecePosition, PieceRef, Roster};

/// Board plus both rosters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    rosters: PlayerMap<Roster>,
}

impl GameState {
    /// Fresh state: every piece in hand.
    #[must_use]
    pub fn new(board: Board, pieces_per_player: u8) -> Self {
        Self {
            board,
            rosters: PlayerMap::new(|player| Roster::new(player, pieces_per_player)),
        }
    }

    /// Fresh state on the standard board.
    #[must_use]
    pub fn standard(pieces_per_player: u8) -> Self {
        Self::new(Board::standard(), pieces_per_player)
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn roster(&self, player: PlayerId) -> &Roster {
        &self.rosters[player]
    }

    /// Like `roster`, but `None` for an id outside the two seats.
    #[must_use]
    pub fn try_roster(&self, player: PlayerId) -> Option<&Roster> {
        self.rosters.try_get(player)
    }

    /// Look up a piece.
    #[must_use]
    pub fn piece(&self, piece: PieceRef) -> Option<&Piece> {
        self.rosters.try_get(piece.player)?.get(piece.piece)
    }

    /// Every piece of both players.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.rosters.values().flat_map(Roster::iter)
    }

    /// Position class of a piece.
    #[must_use]
    pub fn position_of(&self, piece: PieceRef) -> Option<PiecePosition> {
        self.piece(piece).map(Piece::position)
    }

    /// Square a piece currently stands on.
    #[must_use]
    pub fn square_of(&self, piece: PieceRef) -> Option<&Square> {
        let index = self.piece(piece)?.position_index()?;
        self.board.square_at(piece.player, index)
    }

    /// The active piece standing on a square, of either player.
    #[must_use]
    pub fn occupant(&self, square: SquareId) -> Option<PieceRef> {
        self.pieces()
            .filter(|p| !p.is_finished())
            .find(|p| {
                p.position_index()
                    .and_then(|i| self.board.square_at(p.owner(), i))
                    .is_some_and(|s| s.id() == square)
            })
            .map(Piece::id)
    }

    /// Victory check for one player.
    #[must_use]
    pub fn all_finished(&self, player: PlayerId) -> bool {
        self.try_roster(player).is_some_and(Roster::all_finished)
    }

    /// Put a piece somewhere without any rule check.
    ///
    /// Meant for setting up positions in tests and tools. Returns `false`
    /// if the piece does not exist.
    pub fn place(&mut self, piece: PieceRef, position: PiecePosition) -> bool {
        match self
            .rosters
            .try_get_mut(piece.player)
            .and_then(|r| r.get_mut(piece.piece))
        {
            Some(p) => {
                p.set_position(position);
                true
            }
            None => false,
        }
    }

    /// Send every piece back to hand.
    pub(crate) fn reset(&mut self) {
        for (_, roster) in self.rosters.iter_mut() {
            roster.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceId;

    fn piece(player: u8, id: u8) -> PieceRef {
        PieceRef::new(PlayerId(player), PieceId(id))
    }

    #[test]
    fn test_new_state_all_in_hand() {
        let state = GameState::standard(7);
        assert_eq!(state.pieces().count(), 14);
        assert!(state.pieces().all(Piece::is_in_hand));
        assert!(!state.all_finished(PlayerId::FIRST));
    }

    #[test]
    fn test_occupant_by_square_identity() {
        let mut state = GameState::standard(7);
        let shared_5 = state.board().find("shared-5").unwrap().id();

        // Index 6 on the second player's path is shared-5.
        state.place(piece(1, 2), PiecePosition::OnBoard(6));

        assert_eq!(state.occupant(shared_5), Some(piece(1, 2)));
        assert_eq!(state.square_of(piece(1, 2)).map(Square::id), Some(shared_5));
    }

    #[test]
    fn test_private_squares_do_not_collide() {
        let mut state = GameState::standard(7);
        state.place(piece(0, 0), PiecePosition::OnBoard(0));
        state.place(piece(1, 0), PiecePosition::OnBoard(0));

        let black_4 = state.board().find("black-4").unwrap().id();
        let white_4 = state.board().find("white-4").unwrap().id();
        assert_eq!(state.occupant(black_4), Some(piece(0, 0)));
        assert_eq!(state.occupant(white_4), Some(piece(1, 0)));
    }

    #[test]
    fn test_finished_and_in_hand_occupy_nothing() {
        let mut state = GameState::standard(7);
        state.place(piece(0, 0), PiecePosition::Finished);

        assert!(state.board().squares().all(|s| state.occupant(s.id()).is_none()));
        assert_eq!(state.square_of(piece(0, 0)), None);
    }

    #[test]
    fn test_place_unknown_piece() {
        let mut state = GameState::standard(7);
        assert!(!state.place(piece(0, 9), PiecePosition::OnBoard(1)));
        assert!(!state.place(piece(4, 0), PiecePosition::OnBoard(1)));
        assert!(state.piece(piece(4, 0)).is_none());
        assert!(state.try_roster(PlayerId(4)).is_none());
        assert!(!state.all_finished(PlayerId(4)));
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::standard(7);
        state.place(piece(0, 0), PiecePosition::Finished);
        state.place(piece(1, 3), PiecePosition::OnBoard(9));

        state.reset();

        assert!(state.pieces().all(Piece::is_in_hand));
    }
}

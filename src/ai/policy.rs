//! Move policies.
//!
//! A policy looks at the position and the legal moves for the current roll
//! and picks one. Policies only read; the turn machine applies the move.

use smallvec::SmallVec;

use crate::core::GameState;
use crate::rules::Move;

// =============================================================================
// Policy trait
// =============================================================================

/// Picks one move out of the legal candidates.
pub trait MovePolicy: Send + Sync {
    /// Choose a move. `candidates` are the legal moves of the player on turn.
    ///
    /// Returns `None` only when `candidates` is empty.
    fn choose_move(&self, state: &GameState, candidates: &[Move]) -> Option<Move>;
}

// =============================================================================
// Priority ladder
// =============================================================================

/// One rung of the [`PriorityLadder`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Lands on a rosetta.
    Rosetta,
    /// Brings a piece in from hand.
    Entry,
    /// Captures an opposing piece.
    Capture,
    /// Takes a piece off the board.
    Finish,
    /// Advances the piece nearest the exit, ignoring pieces on a fort.
    ClosestToExit,
    /// Leaves a fort, capturing if possible.
    FortDeparture,
}

impl Tier {
    /// Rungs from highest priority to lowest.
    pub const LADDER: [Tier; 6] = [
        Tier::Rosetta,
        Tier::Entry,
        Tier::Capture,
        Tier::Finish,
        Tier::ClosestToExit,
        Tier::FortDeparture,
    ];

    /// The candidates this rung accepts. Empty means fall through.
    #[must_use]
    pub fn narrow(self, state: &GameState, candidates: &[Move]) -> SmallVec<[Move; 7]> {
        let keep = |pred: &dyn Fn(&Move) -> bool| -> SmallVec<[Move; 7]> {
            candidates.iter().copied().filter(|m| pred(m)).collect()
        };
        match self {
            Tier::Rosetta => keep(&Move::lands_on_rosetta),
            Tier::Entry => keep(&Move::enters),
            Tier::Capture => keep(&|m| m.captures.is_some()),
            Tier::Finish => keep(&Move::finishes),
            Tier::ClosestToExit => {
                let off_fort: SmallVec<[(Move, i16); 7]> = candidates
                    .iter()
                    .filter(|m| starts_on_fort(state, m) == Some(false))
                    .map(|m| (*m, distance_to_exit(state, m)))
                    .collect();
                let Some(nearest) = off_fort.iter().map(|&(_, d)| d).min() else {
                    return SmallVec::new();
                };
                off_fort
                    .into_iter()
                    .filter(|&(_, d)| d == nearest)
                    .map(|(m, _)| m)
                    .collect()
            }
            Tier::FortDeparture => {
                let from_fort: SmallVec<[Move; 7]> = candidates
                    .iter()
                    .copied()
                    .filter(|m| starts_on_fort(state, m) == Some(true))
                    .collect();
                let capturing: SmallVec<[Move; 7]> = from_fort
                    .iter()
                    .copied()
                    .filter(|m| m.captures.is_some())
                    .collect();
                if capturing.is_empty() {
                    from_fort
                } else {
                    capturing
                }
            }
        }
    }
}

/// Whether the moving piece stands on a fort. `None` when it is in hand.
fn starts_on_fort(state: &GameState, mv: &Move) -> Option<bool> {
    let from = mv.from?;
    state
        .board()
        .square_at(mv.player(), from)
        .map(|s| s.is_fort())
}

/// Steps from the piece's square to the exit; a piece in hand counts from -1.
fn distance_to_exit(state: &GameState, mv: &Move) -> i16 {
    let path_len = i16::from(state.board().path_len(mv.player()));
    path_len - mv.from.map_or(-1, i16::from)
}

/// Stable tie-break: lowest piece, then lowest target index, exits last.
#[must_use]
pub fn pick_deterministic(moves: &[Move]) -> Option<Move> {
    moves
        .iter()
        .copied()
        .min_by_key(|m| (m.piece, m.target_index().map_or(u16::MAX, u16::from)))
}

/// The fixed priority ladder.
///
/// Walks [`Tier::LADDER`] and takes the first rung that accepts any
/// candidate, breaking ties with [`pick_deterministic`]. No lookahead and no
/// randomness: the same position and roll always give the same move.
///
/// ## Example
///
/// ```
/// use rust_ur::ai::{MovePolicy, PriorityLadder};
/// use rust_ur::core::GameState;
/// use rust_ur::rules::legal_moves;
/// use rust_ur::PlayerId;
///
/// let state = GameState::standard(7);
/// let moves = legal_moves(&state, PlayerId::FIRST, 4);
/// let chosen = PriorityLadder.choose_move(&state, &moves).unwrap();
/// assert!(chosen.lands_on_rosetta());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorityLadder;

impl PriorityLadder {
    /// The chosen move and the rung that chose it.
    #[must_use]
    pub fn decide(&self, state: &GameState, candidates: &[Move]) -> Option<(Tier, Move)> {
        Tier::LADDER.into_iter().find_map(|tier| {
            let narrowed = tier.narrow(state, candidates);
            pick_deterministic(&narrowed).map(|mv| (tier, mv))
        })
    }
}

impl MovePolicy for PriorityLadder {
    fn choose_move(&self, state: &GameState, candidates: &[Move]) -> Option<Move> {
        self.decide(state, candidates).map(|(_, mv)| mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{SquareFlags, SquareId};
    use crate::core::PlayerId;
    use crate::pieces::{PieceId, PiecePosition, PieceRef};
    use crate::rules::{evaluate_move, legal_moves, Destination};

    fn piece(player: u8, id: u8) -> PieceRef {
        PieceRef::new(PlayerId(player), PieceId(id))
    }

    fn only_on_board(positions: &[(u8, u8)]) -> GameState {
        let mut state = GameState::standard(7);
        for id in 0..7 {
            state.place(piece(0, id), PiecePosition::Finished);
        }
        for &(id, index) in positions {
            state.place(piece(0, id), PiecePosition::OnBoard(index));
        }
        state
    }

    #[test]
    fn test_empty_candidates() {
        let state = GameState::standard(7);
        assert_eq!(PriorityLadder.choose_move(&state, &[]), None);
        assert_eq!(pick_deterministic(&[]), None);
    }

    #[test]
    fn test_tie_break_prefers_lower_piece() {
        let state = GameState::standard(7);
        let moves = legal_moves(&state, PlayerId::FIRST, 1);
        let (tier, mv) = PriorityLadder.decide(&state, &moves).unwrap();
        assert_eq!(tier, Tier::Entry);
        assert_eq!(mv.piece, piece(0, 0));
    }

    #[test]
    fn test_tie_break_puts_exit_last() {
        let state = only_on_board(&[(0, 13)]);
        let exit = evaluate_move(&state, piece(0, 0), 1).unwrap();
        let mut step = exit;
        step.destination = Destination::Square {
            index: 5,
            square: SquareId(0),
            flags: SquareFlags::PLAIN,
        };
        assert_eq!(pick_deterministic(&[exit, step]), Some(step));
    }

    #[test]
    fn test_closest_to_exit() {
        let state = only_on_board(&[(0, 2), (1, 10)]);
        let moves = legal_moves(&state, PlayerId::FIRST, 2);
        let (tier, mv) = PriorityLadder.decide(&state, &moves).unwrap();
        assert_eq!(tier, Tier::ClosestToExit);
        assert_eq!(mv.piece, piece(0, 1));
    }

    #[test]
    fn test_fort_piece_waits() {
        // Piece 0 sits on the fort (index 7), piece 1 is further back.
        let state = only_on_board(&[(0, 7), (1, 4)]);
        let moves = legal_moves(&state, PlayerId::FIRST, 1);
        let (tier, mv) = PriorityLadder.decide(&state, &moves).unwrap();
        assert_eq!(tier, Tier::ClosestToExit);
        assert_eq!(mv.piece, piece(0, 1));
    }

    #[test]
    fn test_fort_departure_prefers_capture() {
        let mut state = only_on_board(&[(0, 7)]);
        state.place(piece(1, 0), PiecePosition::OnBoard(9));
        let moves = legal_moves(&state, PlayerId::FIRST, 2);
        let (tier, mv) = PriorityLadder.decide(&state, &moves).unwrap();
        // A capture from the fort is caught by the capture rung first.
        assert_eq!(tier, Tier::Capture);
        assert_eq!(mv.captures, Some(piece(1, 0)));

        let narrowed = Tier::FortDeparture.narrow(&state, &moves);
        assert_eq!(narrowed.as_slice(), &[mv]);
    }

    #[test]
    fn test_only_fort_piece_moves() {
        let state = only_on_board(&[(0, 7)]);
        let moves = legal_moves(&state, PlayerId::FIRST, 1);
        let (tier, mv) = PriorityLadder.decide(&state, &moves).unwrap();
        assert_eq!(tier, Tier::FortDeparture);
        assert_eq!(mv.target_index(), Some(8));
    }
}

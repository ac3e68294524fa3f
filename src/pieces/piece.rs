//! Pieces and piece references.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Index of a piece within its owner's roster (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u8);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Displays 1-based, matching the numbering shown to players.
impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "piece {}", self.0 + 1)
    }
}

/// A piece anywhere in the game: owner plus roster index.
///
/// Orders by owner, then by piece index.
///
/// ```
/// use rust_ur::core::PlayerId;
/// use rust_ur::pieces::{PieceId, PieceRef};
///
/// let piece: PieceRef = "1:3".parse().unwrap();
/// assert_eq!(piece, PieceRef::new(PlayerId::SECOND, PieceId(3)));
/// assert_eq!(piece.to_string(), "1:3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceRef {
    /// Owner.
    pub player: PlayerId,
    /// Index in the owner's roster.
    pub piece: PieceId,
}

impl PieceRef {
    /// Create a piece reference.
    #[must_use]
    pub const fn new(player: PlayerId, piece: PieceId) -> Self {
        Self { player, piece }
    }
}

/// Formats as the `player:piece` key used by presentation layers.
impl std::fmt::Display for PieceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.player.0, self.piece.0)
    }
}

/// Error parsing a `player:piece` key.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display("invalid piece key {key:?}: expected \"<player 0-1>:<piece>\"")]
pub struct ParsePieceRefError {
    /// The rejected input.
    pub key: String,
}

impl FromStr for PieceRef {
    type Err = ParsePieceRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePieceRefError { key: s.to_string() };

        let (player, piece) = s.split_once(':').ok_or_else(err)?;
        let player: u8 = player.trim().parse().map_err(|_| err())?;
        let piece: u8 = piece.trim().parse().map_err(|_| err())?;
        let player = PlayerId::try_from(player).map_err(|_| err())?;

        Ok(Self::new(player, PieceId(piece)))
    }
}

/// Where a piece is. This is also the position class shown to players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PiecePosition {
    /// Waiting to enter; conceptually one step before path index 0.
    #[default]
    InHand,
    /// On the board at this index of the owner's path.
    OnBoard(u8),
    /// Exited past the last square.
    Finished,
}

/// A single piece.
///
/// "Finished implies not on the board" holds by construction: position and
/// finished state are one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    id: PieceRef,
    position: PiecePosition,
}

impl Piece {
    /// A new piece, in hand.
    #[must_use]
    pub fn new(id: PieceRef) -> Self {
        Self {
            id,
            position: PiecePosition::InHand,
        }
    }

    #[must_use]
    pub fn id(&self) -> PieceRef {
        self.id
    }

    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.id.player
    }

    #[must_use]
    pub fn position(&self) -> PiecePosition {
        self.position
    }

    /// Path index if on the board, `None` when in hand or finished.
    #[must_use]
    pub fn position_index(&self) -> Option<u8> {
        match self.position {
            PiecePosition::OnBoard(index) => Some(index),
            PiecePosition::InHand | PiecePosition::Finished => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position == PiecePosition::Finished
    }

    #[must_use]
    pub fn is_in_hand(&self) -> bool {
        self.position == PiecePosition::InHand
    }

    /// Move the piece. Legality is the rules engine's business.
    pub(crate) fn set_position(&mut self, position: PiecePosition) {
        self.position = position;
    }

    /// Send the piece back to hand.
    pub(crate) fn reset(&mut self) {
        self.position = PiecePosition::InHand;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_in_hand() {
        let piece = Piece::new(PieceRef::new(PlayerId::FIRST, PieceId(2)));
        assert!(piece.is_in_hand());
        assert!(!piece.is_finished());
        assert_eq!(piece.position_index(), None);
        assert_eq!(piece.owner(), PlayerId::FIRST);
    }

    #[test]
    fn test_finished_has_no_index() {
        let mut piece = Piece::new(PieceRef::new(PlayerId::FIRST, PieceId(0)));
        piece.set_position(PiecePosition::OnBoard(13));
        assert_eq!(piece.position_index(), Some(13));

        piece.set_position(PiecePosition::Finished);
        assert!(piece.is_finished());
        assert_eq!(piece.position_index(), None);
    }

    #[test]
    fn test_reset_clears_finished() {
        let mut piece = Piece::new(PieceRef::new(PlayerId::SECOND, PieceId(0)));
        piece.set_position(PiecePosition::Finished);
        piece.reset();
        assert!(piece.is_in_hand());
        assert!(!piece.is_finished());
    }

    #[test]
    fn test_parse_piece_ref() {
        assert_eq!(
            "0:6".parse::<PieceRef>(),
            Ok(PieceRef::new(PlayerId::FIRST, PieceId(6)))
        );
        assert!("2:0".parse::<PieceRef>().is_err());
        assert!("0".parse::<PieceRef>().is_err());
        assert!("a:b".parse::<PieceRef>().is_err());

        let err = "x".parse::<PieceRef>().unwrap_err();
        assert_eq!(err.key, "x");
    }

    #[test]
    fn test_piece_ref_ordering() {
        let a = PieceRef::new(PlayerId::FIRST, PieceId(5));
        let b = PieceRef::new(PlayerId::SECOND, PieceId(0));
        let c = PieceRef::new(PlayerId::FIRST, PieceId(1));
        let mut refs = vec![a, b, c];
        refs.sort();
        assert_eq!(refs, vec![c, a, b]);
    }
}

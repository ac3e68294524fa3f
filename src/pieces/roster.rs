//! A player's fixed roster of pieces.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceId, PieceRef};
use crate::core::PlayerId;

/// All pieces of one player, indexed by `PieceId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    player: PlayerId,
    pieces: Vec<Piece>,
}

impl Roster {
    /// A roster of `count` pieces, all in hand.
    #[must_use]
    pub fn new(player: PlayerId, count: u8) -> Self {
        let pieces = (0..count)
            .map(|i| Piece::new(PieceRef::new(player, PieceId(i))))
            .collect();
        Self { player, pieces }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Pieces that have not exited yet.
    pub fn available(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| !p.is_finished())
    }

    /// Victory condition.
    #[must_use]
    pub fn all_finished(&self) -> bool {
        self.pieces.iter().all(Piece::is_finished)
    }

    /// Pieces still waiting to enter.
    #[must_use]
    pub fn in_hand_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_in_hand()).count()
    }

    /// Pieces that have exited.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_finished()).count()
    }

    /// Send every piece back to hand.
    pub(crate) fn reset(&mut self) {
        self.pieces.iter_mut().for_each(Piece::reset);
    }
}

//! Piece and roster model.
//!
//! Each player owns a fixed roster of pieces. A piece is in hand, on the
//! board at an index of its owner's path, or finished. Pieces never check
//! their own legality; the rules engine decides every move.

mod piece;
mod roster;

pub use piece::{ParsePieceRefError, Piece, PieceId, PiecePosition, PieceRef};
pub use roster::Roster;

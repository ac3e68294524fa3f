//! Board model: squares and per-player paths.
//!
//! A path is the ordered list of squares a player's pieces travel, from the
//! entry square (index 0) to the last square before exiting. Both players'
//! paths run through the same shared squares at the same indices on the
//! standard board, but occupancy is always resolved by `SquareId` so that
//! nothing depends on the indices lining up.

mod layout;
mod square;

pub use layout::{Board, BoardError};
pub use square::{Square, SquareFlags, SquareId};

//! Move engine.
//!
//! Decides whether a piece may move by a step count and what the move does:
//! advance, capture, finish or nothing. All functions here are pure and
//! take the state by shared reference.

mod moves;

pub use moves::{
    check_move, evaluate_move, has_any_legal_move, legal_moves, movable_pieces, Destination,
    IllegalMove, Move,
};

//! Computer opponent.
//!
//! [`PriorityLadder`] is a stateless rule list: rosetta, entry, capture,
//! finish, closest-to-exit (pieces off the fort), then leaving the fort.
//! Each rung is a [`Tier`] that narrows the candidates and can be tested
//! on its own. [`ComputerPlayer`] drives a seat through the turn commands.

mod player;
mod policy;

pub use player::{ComputerPlayer, TurnEnd, TurnReport};
pub use policy::{pick_deterministic, MovePolicy, PriorityLadder, Tier};

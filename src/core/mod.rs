//! Core types: players, dice, RNG, configuration and the game state.
//!
//! Everything the rules engine and the turn machine share lives here.

pub mod config;
pub mod dice;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{Seat, UrConfig};
pub use dice::{Dice, DiceConfig, DiceRoll};
pub use player::{InvalidPlayerId, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;

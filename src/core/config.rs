//! Game configuration.
//!
//! `UrConfig` covers everything a table can choose before a game starts:
//! seed, roster size, dice, the auto-pass delay and who sits in each seat.
//! The path geometry is fixed and is not part of the configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::dice::DiceConfig;
use super::player::{PlayerId, PlayerMap};

/// Who controls a seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Moves are entered through the commands by a person.
    #[default]
    Human,
    /// Moves are chosen by the computer player.
    Computer,
}

/// Game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrConfig {
    /// Seed for the dice RNG.
    /// Same seed and same commands replay the same game.
    pub seed: u64,

    /// Pieces each player must bring home.
    pub pieces_per_player: u8,

    /// Dice thrown each turn.
    pub dice: DiceConfig,

    /// Pause before a turn with no legal move passes to the opponent.
    /// Only there so the roll can be shown; the engine does not sleep.
    pub auto_pass_delay: Duration,

    /// Player who rolls first.
    pub starting_player: PlayerId,

    /// Controller per seat.
    pub seats: PlayerMap<Seat>,
}

impl Default for UrConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            pieces_per_player: 7,
            dice: DiceConfig::default(),
            auto_pass_delay: Duration::from_millis(800),
            starting_player: PlayerId::FIRST,
            seats: PlayerMap::with_value(Seat::Human),
        }
    }
}

impl UrConfig {
    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the roster size (at least one piece).
    #[must_use]
    pub fn with_pieces_per_player(mut self, pieces: u8) -> Self {
        self.pieces_per_player = pieces.max(1);
        self
    }

    /// Set the auto-pass delay.
    #[must_use]
    pub fn with_auto_pass_delay(mut self, delay: Duration) -> Self {
        self.auto_pass_delay = delay;
        self
    }

    /// Set the first player to roll.
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = player;
        self
    }

    /// Set the controller of one seat. Ignored for an id outside the two seats.
    #[must_use]
    pub fn with_seat(mut self, player: PlayerId, seat: Seat) -> Self {
        if let Some(slot) = self.seats.try_get_mut(player) {
            *slot = seat;
        }
        self
    }

    /// Human as the first player, the computer as the second.
    #[must_use]
    pub fn against_computer(self) -> Self {
        self.with_seat(PlayerId::FIRST, Seat::Human)
            .with_seat(PlayerId::SECOND, Seat::Computer)
    }

    /// Computer in both seats.
    #[must_use]
    pub fn computer_only(self) -> Self {
        self.with_seat(PlayerId::FIRST, Seat::Computer)
            .with_seat(PlayerId::SECOND, Seat::Computer)
    }
}

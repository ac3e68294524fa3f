//! Per-player statistics collected from events.

use serde::{Deserialize, Serialize};

use super::event::GameEvent;
use super::EventSink;
use crate::core::{PlayerId, PlayerMap};

/// Counters for one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Rolls per success count, index 0-4.
    pub roll_counts: [u32; 5],
    /// Rolls thrown.
    pub total_rolls: u32,
    /// Opposing pieces sent back to hand.
    pub captures: u32,
    /// Extra rolls earned on rosettas.
    pub bonuses: u32,
    /// Pieces still in hand.
    pub waiting: u32,
    /// Pieces finished.
    pub home: u32,
}

impl PlayerStats {
    /// Share of rolls with `successes` successes, in whole percent.
    #[must_use]
    pub fn roll_percent(&self, successes: usize) -> u32 {
        let count = self.roll_counts.get(successes).copied().unwrap_or(0);
        let total = self.total_rolls.max(1);
        ((f64::from(count) / f64::from(total)) * 100.0).round() as u32
    }
}

/// Statistics for both players over the current game.
///
/// After [`Statistics::accumulate`] this becomes a multi-game summary: the
/// roll, capture and bonus counters are totals, `turn` is the total number
/// of turns, and the per-game `waiting`/`home` snapshot is not kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    players: PlayerMap<PlayerStats>,
    starting_player: Option<PlayerId>,
    turn: u32,
    games: u32,
}

impl Statistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerStats {
        &self.players[player]
    }

    /// Who rolled first this game.
    #[must_use]
    pub fn starting_player(&self) -> Option<PlayerId> {
        self.starting_player
    }

    /// Latest turn number seen, or total turns for a summary.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Games folded in by `accumulate`. Zero for a single live game.
    #[must_use]
    pub fn games(&self) -> u32 {
        self.games
    }

    /// Clear everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add another game's counters onto these (used for multi-game summaries).
    ///
    /// Only the counters that add up across games are summed. `other` may
    /// itself be a summary.
    pub fn accumulate(&mut self, other: &Statistics) {
        for (player, stats) in self.players.iter_mut() {
            let theirs = other.player(player);
            for (mine, add) in stats.roll_counts.iter_mut().zip(theirs.roll_counts) {
                *mine += add;
            }
            stats.total_rolls += theirs.total_rolls;
            stats.captures += theirs.captures;
            stats.bonuses += theirs.bonuses;
            stats.waiting = 0;
            stats.home = 0;
        }
        self.starting_player = None;
        self.turn += other.turn;
        self.games += other.games.max(1);
    }
}

impl EventSink for Statistics {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted {
                first_player,
                pieces_per_player,
            } => {
                self.reset();
                self.starting_player = Some(*first_player);
                for (_, stats) in self.players.iter_mut() {
                    stats.waiting = u32::from(*pieces_per_player);
                }
            }
            GameEvent::TurnStarted { turn, .. } => {
                self.turn = *turn;
            }
            GameEvent::DiceRolled { player, roll } => {
                let stats = &mut self.players[*player];
                let bucket = usize::from(roll.successes.min(4));
                stats.roll_counts[bucket] += 1;
                stats.total_rolls += 1;
            }
            GameEvent::MoveConfirmed {
                player,
                from,
                captured,
                finished,
                bonus,
                ..
            } => {
                if let Some(captured) = captured {
                    self.players[*player].captures += 1;
                    self.players[captured.player].waiting += 1;
                }
                let stats = &mut self.players[*player];
                if from.is_none() {
                    stats.waiting = stats.waiting.saturating_sub(1);
                }
                if *finished {
                    stats.home += 1;
                }
                if *bonus {
                    stats.bonuses += 1;
                }
            }
            GameEvent::TurnPassed { .. } | GameEvent::GameWon { .. } => {}
        }
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = self.games > 0;
        if summary {
            writeln!(f, "Turns over {} games: {}", self.games, self.turn)?;
        }
        for (player, stats) in self.players.iter() {
            let starter = if self.starting_player == Some(player) {
                " (start)"
            } else {
                ""
            };
            writeln!(f, "{player}{starter}")?;
            writeln!(f, "Rolls:")?;
            for (successes, count) in stats.roll_counts.iter().enumerate() {
                writeln!(f, "  {successes}: {count} ({}%)", stats.roll_percent(successes))?;
            }
            writeln!(f, "Bonus rolls: {}", stats.bonuses)?;
            writeln!(f, "Captures: {}", stats.captures)?;
            if !summary {
                writeln!(f, "Waiting: {}", stats.waiting)?;
                writeln!(f, "Home: {}", stats.home)?;
            }
        }
        Ok(())
    }
}

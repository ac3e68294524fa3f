//! Narration log.
//!
//! Turns events into the one-line messages shown in the scrolling log
//! panel. Uses a persistent vector so a presentation layer can keep a cheap
//! snapshot of the log while the game moves on.

use im::Vector;

use super::event::GameEvent;
use super::EventSink;

/// Append-only list of narration lines.
#[derive(Clone, Debug, Default)]
pub struct GameLog {
    entries: Vector<String>,
}

impl GameLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push_back(message.into());
    }

    /// Forget every line.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &Vector<String> {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The log as newline-separated text.
    #[must_use]
    pub fn text(&self) -> String {
        self.entries.iter().cloned().collect::<Vec<_>>().join("\n")
    }
}

impl EventSink for GameLog {
    fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted { .. } => {
                self.reset();
                self.append("New game started");
            }
            GameEvent::TurnStarted { player, .. } => {
                self.append(format!("{player} turn"));
            }
            GameEvent::DiceRolled { player, roll } => {
                self.append(format!("{player} rolled {roll}"));
            }
            GameEvent::TurnPassed { reason, .. } => {
                self.append(format!("{reason}, passing turn"));
            }
            GameEvent::MoveConfirmed {
                player,
                piece,
                square_name,
                captured,
                finished,
                bonus,
                ..
            } => {
                if let Some(captured) = captured {
                    self.append(format!("{player} captured {}", captured.piece));
                }
                if *finished {
                    self.append(format!("{player} moved {piece} off the board"));
                } else {
                    let name = square_name.as_deref().unwrap_or("the board");
                    self.append(format!("{player} moved {piece} to {name}"));
                }
                if *bonus {
                    self.append(format!("{player} earned a bonus roll"));
                }
            }
            GameEvent::GameWon { player } => {
                self.append(format!("{player} wins!"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::SquareId;
    use crate::core::{DiceRoll, PlayerId};
    use crate::events::PassReason;
    use crate::pieces::{PieceId, PieceRef};

    #[test]
    fn test_append_keeps_text() {
        let mut log = GameLog::new();
        log.append("first");
        log.append("second");

        assert_eq!(log.len(), 2);
        assert_eq!(log.text(), "first\nsecond");
    }

    #[test]
    fn test_reset_clears_entries() {
        let mut log = GameLog::new();
        log.append("first");
        log.reset();

        assert!(log.is_empty());
        assert_eq!(log.text(), "");
    }

    #[test]
    fn test_narration() {
        let mut log = GameLog::new();
        let events = [
            GameEvent::GameStarted {
                first_player: PlayerId::FIRST,
                pieces_per_player: 7,
            },
            GameEvent::TurnStarted {
                player: PlayerId::FIRST,
                turn: 1,
            },
            GameEvent::DiceRolled {
                player: PlayerId::FIRST,
                roll: DiceRoll::from_faces(&[1, 3, 4, 2], 3),
            },
            GameEvent::MoveConfirmed {
                player: PlayerId::FIRST,
                piece: PieceId(0),
                from: Some(3),
                to: Some(SquareId(6)),
                square_name: Some("shared-6".to_string()),
                captured: Some(PieceRef::new(PlayerId::SECOND, PieceId(2))),
                finished: false,
                bonus: false,
            },
            GameEvent::TurnPassed {
                player: PlayerId::SECOND,
                reason: PassReason::ZeroRoll,
            },
            GameEvent::GameWon {
                player: PlayerId::FIRST,
            },
        ];
        for event in &events {
            log.record(event);
        }

        let lines: Vec<_> = log.entries().iter().cloned().collect();
        assert_eq!(
            lines,
            vec![
                "New game started",
                "Player 1 turn",
                "Player 1 rolled 2 (1, 3, 4, 2)",
                "Player 1 captured piece 3",
                "Player 1 moved piece 1 to shared-6",
                "No moves available, passing turn",
                "Player 1 wins!",
            ]
        );
    }

    #[test]
    fn test_new_game_resets_log() {
        let mut log = GameLog::new();
        log.append("old line");
        log.record(&GameEvent::GameStarted {
            first_player: PlayerId::FIRST,
            pieces_per_player: 7,
        });
        assert_eq!(log.len(), 1);
    }
}

//! Computer player driver.
//!
//! Plays through the same commands a person would use, so it can never do
//! anything the turn machine would not accept from a human.

use tracing::{debug, trace};

use super::policy::{MovePolicy, PriorityLadder};
use crate::core::PlayerId;
use crate::rules::Move;
use crate::turn::{AutoPass, CommandRejected, Game, Selection, TurnOutcome, TurnPhase};

/// How a computer turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnEnd {
    /// A move ended the turn (or the game).
    Moved(TurnOutcome),
    /// The roll allowed nothing; fire the token to pass.
    Passed(AutoPass),
    /// The policy found nothing to play.
    NoChoice,
    /// The game was already over.
    GameOver(PlayerId),
}

/// What happened during one computer turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Moves applied, one per roll (bonus rolls add more).
    pub moves: Vec<Move>,
    /// How the turn ended.
    pub end: TurnEnd,
}

/// A seat played by a [`MovePolicy`].
#[derive(Clone, Debug, Default)]
pub struct ComputerPlayer<P: MovePolicy = PriorityLadder> {
    policy: P,
}

impl<P: MovePolicy> ComputerPlayer<P> {
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The move the policy would play for the current roll.
    #[must_use]
    pub fn choose(&self, game: &Game) -> Option<Move> {
        let candidates = game.legal_moves();
        self.policy.choose_move(game.state(), &candidates)
    }

    /// Play the current player's turn to its end, bonus rolls included.
    ///
    /// Picks up wherever the turn is: a roll already thrown or a move
    /// already pending are played on. Auto-passes are returned, not fired.
    pub fn play_turn(&self, game: &mut Game) -> Result<TurnReport, CommandRejected> {
        let mut moves = Vec::new();
        loop {
            let end = match game.phase() {
                TurnPhase::GameOver { winner } => TurnEnd::GameOver(winner),
                TurnPhase::PassPending(pass) => TurnEnd::Passed(pass),
                TurnPhase::AwaitingRoll => {
                    let outcome = game.roll()?;
                    trace!(roll = %outcome.roll, "computer rolled");
                    continue;
                }
                TurnPhase::AwaitingSelection => {
                    let Some(mv) = self.choose(game) else {
                        break Ok(TurnReport {
                            moves,
                            end: TurnEnd::NoChoice,
                        });
                    };
                    match game.select_piece(mv.piece)? {
                        Selection::Pending(_) => continue,
                        Selection::Passed { auto_pass, .. } => TurnEnd::Passed(auto_pass),
                        Selection::Illegal(reason) => {
                            debug!(%reason, "policy picked an illegal move");
                            TurnEnd::NoChoice
                        }
                    }
                }
                TurnPhase::AwaitingConfirmation => {
                    let resolution = game.confirm_pending_move()?;
                    debug!(mv = ?resolution.applied, "computer moved");
                    moves.push(resolution.applied);
                    match resolution.outcome {
                        TurnOutcome::BonusRoll(_) => continue,
                        outcome => TurnEnd::Moved(outcome),
                    }
                }
            };
            break Ok(TurnReport { moves, end });
        }
    }

    /// Play both seats until someone wins or `max_turns` turns have gone by.
    ///
    /// Auto-passes fire at once. Returns the winner, if any.
    pub fn play_game(
        &self,
        game: &mut Game,
        max_turns: u32,
    ) -> Result<Option<PlayerId>, CommandRejected> {
        while game.turn_number() <= max_turns {
            let report = self.play_turn(game)?;
            match report.end {
                TurnEnd::GameOver(winner) | TurnEnd::Moved(TurnOutcome::GameOver(winner)) => {
                    return Ok(Some(winner));
                }
                TurnEnd::Passed(pass) => {
                    game.run_auto_pass(pass);
                }
                TurnEnd::Moved(_) => {}
                TurnEnd::NoChoice => return Ok(None),
            }
        }
        Ok(game.winner())
    }
}

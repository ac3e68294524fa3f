//! The `Game` state machine.

use im::Vector;
use smallvec::SmallVec;
use tracing::{debug, info, instrument, warn};

use super::phase::{
    AutoPass, Command, CommandRejected, Resolution, Selection, TurnOutcome, TurnPhase,
};
use super::record::MoveRecord;
use crate::board::Board;
use crate::core::{Dice, DiceRoll, GameRng, GameRngState, GameState, PlayerId, Seat, UrConfig};
use crate::events::{GameEvent, PassReason};
use crate::pieces::{PieceId, PiecePosition, PieceRef};
use crate::rules::{check_move, has_any_legal_move, legal_moves, IllegalMove, Move};

/// One game of Ur: position, whose turn it is and where in the turn we are.
///
/// Every mutation goes through the commands (`start_new_game`, `roll`,
/// `select_piece`, `confirm_pending_move`, `cancel_pending_move`,
/// `run_auto_pass`). Each successful command bumps the generation counter.
#[derive(Clone, Debug)]
pub struct Game {
    config: UrConfig,
    state: GameState,
    dice: Dice,
    rng: GameRng,
    phase: TurnPhase,
    current_player: PlayerId,
    last_roll: Option<DiceRoll>,
    pending_move: Option<Move>,
    generation: u64,
    turn_number: u32,
    history: Vector<MoveRecord>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Set up the board and start the first game.
    #[must_use]
    pub fn new(config: UrConfig) -> Self {
        let state = GameState::standard(config.pieces_per_player);
        let mut game = Self::with_parts(config, state, PlayerId::FIRST);
        game.start_new_game();
        game
    }

    /// Resume from an arbitrary position, `current_player` about to roll.
    ///
    /// Only `TurnStarted` is announced. Useful for puzzles and tests.
    #[must_use]
    pub fn from_state(config: UrConfig, state: GameState, current_player: PlayerId) -> Self {
        let mut game = Self::with_parts(config, state, current_player);
        game.turn_number = 1;
        game.events.push(GameEvent::TurnStarted {
            player: game.current_player,
            turn: game.turn_number,
        });
        game
    }

    /// Ids outside the two seats fall back to the first player.
    fn with_parts(mut config: UrConfig, state: GameState, current_player: PlayerId) -> Self {
        if !config.starting_player.is_valid() {
            warn!(id = config.starting_player.0, "starting player out of range");
            config.starting_player = PlayerId::FIRST;
        }
        let current_player = if current_player.is_valid() {
            current_player
        } else {
            warn!(id = current_player.0, "current player out of range");
            config.starting_player
        };
        Self {
            dice: Dice::new(config.dice),
            rng: GameRng::new(config.seed),
            state,
            phase: TurnPhase::AwaitingRoll,
            current_player,
            last_roll: None,
            pending_move: None,
            generation: 0,
            turn_number: 0,
            history: Vector::new(),
            events: Vec::new(),
            config,
        }
    }

    // === Commands ===

    /// Throw everything away and start over. Accepted in every phase.
    ///
    /// The dice stream keeps running, so consecutive games differ.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn start_new_game(&mut self) {
        self.state.reset();
        self.current_player = self.config.starting_player;
        self.phase = TurnPhase::AwaitingRoll;
        self.last_roll = None;
        self.pending_move = None;
        self.turn_number = 1;
        self.history = Vector::new();
        self.bump();

        info!(first = %self.current_player, "new game");
        self.events.push(GameEvent::GameStarted {
            first_player: self.current_player,
            pieces_per_player: self.config.pieces_per_player,
        });
        self.events.push(GameEvent::TurnStarted {
            player: self.current_player,
            turn: self.turn_number,
        });
    }

    /// Throw the dice for the current player.
    pub fn roll(&mut self) -> Result<RollOutcome, CommandRejected> {
        self.expect_phase(Command::Roll, TurnPhase::AwaitingRoll)?;
        let roll = self.dice.roll(&mut self.rng);
        self.apply_roll(roll)
    }

    /// Use a given roll instead of throwing. Same rules as [`Game::roll`].
    pub fn roll_with(&mut self, roll: DiceRoll) -> Result<RollOutcome, CommandRejected> {
        self.expect_phase(Command::Roll, TurnPhase::AwaitingRoll)?;
        self.apply_roll(roll)
    }

    #[instrument(skip(self), fields(player = %self.current_player))]
    fn apply_roll(&mut self, roll: DiceRoll) -> Result<RollOutcome, CommandRejected> {
        self.last_roll = Some(roll.clone());
        self.pending_move = None;
        self.bump();
        self.events.push(GameEvent::DiceRolled {
            player: self.current_player,
            roll: roll.clone(),
        });

        let steps = roll.steps();
        let auto_pass = if steps == 0 {
            Some(self.schedule_pass(PassReason::ZeroRoll))
        } else if !has_any_legal_move(&self.state, self.current_player, steps) {
            Some(self.schedule_pass(PassReason::NoLegalMove))
        } else {
            self.phase = TurnPhase::AwaitingSelection;
            debug!(steps, "awaiting selection");
            None
        };

        Ok(RollOutcome { roll, auto_pass })
    }

    /// Pick a piece to move with the current roll.
    ///
    /// An illegal choice is not an error: the machine stays in
    /// `AwaitingSelection` and the reason comes back in
    /// [`Selection::Illegal`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select_piece(&mut self, piece: PieceRef) -> Result<Selection, CommandRejected> {
        self.expect_phase(Command::SelectPiece, TurnPhase::AwaitingSelection)?;
        if self.state.piece(piece).is_none() {
            return Err(CommandRejected::UnknownPiece { piece });
        }
        let steps = self.last_roll.as_ref().map_or(0, DiceRoll::steps);

        let result = if piece.player == self.current_player {
            check_move(&self.state, piece, steps)
        } else {
            Err(IllegalMove::NotYourPiece {
                piece,
                player: self.current_player,
            })
        };

        match result {
            Ok(mv) => {
                self.pending_move = Some(mv);
                self.phase = TurnPhase::AwaitingConfirmation;
                self.bump();
                debug!(?mv, "move pending");
                Ok(Selection::Pending(mv))
            }
            Err(illegal) if !has_any_legal_move(&self.state, self.current_player, steps) => {
                self.bump();
                let auto_pass = self.schedule_pass(PassReason::NoLegalMove);
                Ok(Selection::Passed { illegal, auto_pass })
            }
            Err(illegal) => {
                debug!(%illegal, "selection rejected");
                Ok(Selection::Illegal(illegal))
            }
        }
    }

    /// Drop the pending move and pick again with the same roll.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn cancel_pending_move(&mut self) -> Result<Move, CommandRejected> {
        self.expect_phase(Command::CancelMove, TurnPhase::AwaitingConfirmation)?;
        let mv = self.pending_move.take().ok_or(CommandRejected::WrongPhase {
            command: Command::CancelMove,
            phase: self.phase,
        })?;
        self.phase = TurnPhase::AwaitingSelection;
        self.bump();
        debug!("move cancelled");
        Ok(mv)
    }

    /// Apply the pending move and settle what happens next.
    ///
    /// A capture sends the opposing piece back to hand. Victory is checked
    /// before the bonus roll; a finishing move never lands on a rosetta.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn confirm_pending_move(&mut self) -> Result<Resolution, CommandRejected> {
        self.expect_phase(Command::ConfirmMove, TurnPhase::AwaitingConfirmation)?;
        let mv = self.pending_move.take().ok_or(CommandRejected::WrongPhase {
            command: Command::ConfirmMove,
            phase: self.phase,
        })?;
        let player = self.current_player;

        if let Some(captured) = mv.captures {
            self.state.place(captured, PiecePosition::InHand);
        }
        let landing = match mv.target_index() {
            Some(index) => PiecePosition::OnBoard(index),
            None => PiecePosition::Finished,
        };
        self.state.place(mv.piece, landing);

        let sequence = self
            .history
            .iter()
            .rev()
            .take_while(|r| r.turn == self.turn_number)
            .count() as u32;
        self.history
            .push_back(MoveRecord::new(player, mv, self.turn_number, sequence));

        let bonus = mv.lands_on_rosetta();
        let square_name = mv
            .target_square()
            .and_then(|id| self.state.board().square(id))
            .map(|s| s.name().to_string());
        self.events.push(GameEvent::MoveConfirmed {
            player,
            piece: mv.piece.piece,
            from: mv.from,
            to: mv.target_square(),
            square_name,
            captured: mv.captures,
            finished: mv.finishes(),
            bonus,
        });
        self.last_roll = None;
        self.bump();

        let outcome = if self.state.all_finished(player) {
            self.phase = TurnPhase::GameOver { winner: player };
            info!(winner = %player, turns = self.turn_number, "game won");
            self.events.push(GameEvent::GameWon { player });
            TurnOutcome::GameOver(player)
        } else if bonus {
            self.phase = TurnPhase::AwaitingRoll;
            debug!("bonus roll");
            TurnOutcome::BonusRoll(player)
        } else {
            self.advance_turn();
            TurnOutcome::NextTurn(self.current_player)
        };

        Ok(Resolution {
            applied: mv,
            outcome,
        })
    }

    /// Fire a scheduled pass.
    ///
    /// Returns `false` and does nothing when the token is stale: a command
    /// ran after it was issued, or a new game started.
    #[instrument(skip(self))]
    pub fn run_auto_pass(&mut self, token: AutoPass) -> bool {
        match self.phase {
            TurnPhase::PassPending(pending) if pending == token => {
                self.advance_turn();
                self.bump();
                true
            }
            _ => {
                debug!(current = self.generation, "stale auto-pass discarded");
                false
            }
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &UrConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Who controls the player on turn.
    #[must_use]
    pub fn current_seat(&self) -> Seat {
        self.config.seats[self.current_player]
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<&DiceRoll> {
        self.last_roll.as_ref()
    }

    #[must_use]
    pub fn pending_move(&self) -> Option<&Move> {
        self.pending_move.as_ref()
    }

    /// The pass waiting to fire, if any.
    #[must_use]
    pub fn scheduled_pass(&self) -> Option<AutoPass> {
        match self.phase {
            TurnPhase::PassPending(pass) => Some(pass),
            _ => None,
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            TurnPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    #[must_use]
    pub fn position_of(&self, piece: PieceRef) -> Option<PiecePosition> {
        self.state.position_of(piece)
    }

    /// Legal moves of the current player for the roll being played.
    ///
    /// Empty unless a piece is being picked or a move is pending.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Move; 7]> {
        match (self.phase, &self.last_roll) {
            (TurnPhase::AwaitingSelection | TurnPhase::AwaitingConfirmation, Some(roll)) => {
                legal_moves(&self.state, self.current_player, roll.steps())
            }
            _ => SmallVec::new(),
        }
    }

    /// Pieces to highlight for the current roll.
    #[must_use]
    pub fn eligible_pieces(&self) -> SmallVec<[PieceId; 7]> {
        self.legal_moves().into_iter().map(|m| m.piece.piece).collect()
    }

    #[must_use]
    pub fn is_eligible(&self, piece: PieceRef) -> bool {
        self.legal_moves().iter().any(|m| m.piece == piece)
    }

    /// Every confirmed move this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Bumped by every successful command.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot of the dice stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue the dice stream from a snapshot.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Take every event queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // === Internals ===

    fn expect_phase(&self, command: Command, expected: TurnPhase) -> Result<(), CommandRejected> {
        if self.phase == expected {
            Ok(())
        } else {
            debug!(%command, phase = %self.phase, "command rejected");
            Err(CommandRejected::WrongPhase {
                command,
                phase: self.phase,
            })
        }
    }

    fn bump(&mut self) {
        self.generation += 1;
    }

    /// Enter `PassPending`. Call after bumping for the triggering command.
    fn schedule_pass(&mut self, reason: PassReason) -> AutoPass {
        let pass = AutoPass {
            generation: self.generation,
            player: self.current_player,
            reason,
            delay: self.config.auto_pass_delay,
        };
        self.phase = TurnPhase::PassPending(pass);
        self.pending_move = None;
        debug!(%reason, "auto-pass scheduled");
        self.events.push(GameEvent::TurnPassed {
            player: self.current_player,
            reason,
        });
        pass
    }

    fn advance_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.last_roll = None;
        self.pending_move = None;
        self.phase = TurnPhase::AwaitingRoll;
        self.turn_number += 1;
        debug!(player = %self.current_player, turn = self.turn_number, "turn started");
        self.events.push(GameEvent::TurnStarted {
            player: self.current_player,
            turn: self.turn_number,
        });
    }
}

/// Result of a roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RollOutcome {
    /// The dice.
    pub roll: DiceRoll,
    /// Set when the roll allows nothing and the turn will pass.
    pub auto_pass: Option<AutoPass>,
}

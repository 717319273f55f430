//! Game engine for tic-tac-toe.

use crate::random::{RandomIndex, RngIndex};
use crate::rules::{is_full, winning_combo};
use crate::{
    Board, EngineError, FiredMove, GameState, GameStatus, Mark, MoveError, MoveResult, RoundId,
    ScheduledMove, ScoreTally, Square, WinCombo,
};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, instrument, warn};

/// Owns one game: the current round, the session scores and the random
/// source used for computer moves.
///
/// Every transition is synchronous and free of I/O, so several engines can
/// live side by side and the whole thing runs headless in tests.
#[derive(Debug, Clone)]
pub struct GameEngine<R = RngIndex<ChaCha8Rng>> {
    state: GameState,
    scores: ScoreTally,
    random: R,
    next_ticket: u64,
}

impl GameEngine {
    /// Creates an engine whose computer moves are seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_random(RngIndex::from_entropy())
    }

    /// Creates an engine with reproducible computer moves.
    pub fn seeded(seed: u64) -> Self {
        Self::with_random(RngIndex::seeded(seed))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomIndex> GameEngine<R> {
    /// Creates an engine drawing computer moves from `random`.
    pub fn with_random(random: R) -> Self {
        Self {
            state: GameState::default(),
            scores: ScoreTally::new(),
            random,
            next_ticket: 0,
        }
    }

    /// Returns the current round's state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the mark on move.
    pub fn current_player(&self) -> Mark {
        self.state.current_player()
    }

    /// False once the round is won or drawn.
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Returns the session scores.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// The line that won the round, if any.
    pub fn winning_combo(&self) -> Option<WinCombo> {
        self.state.winning_combo()
    }

    /// Returns the current round identifier.
    pub fn round(&self) -> RoundId {
        self.state.round()
    }

    /// Derives the round status from the state.
    pub fn status(&self) -> GameStatus {
        if self.state.is_running() {
            return GameStatus::InProgress;
        }
        match self.state.winning_combo() {
            Some(combo) => match self.board().get(combo[0]) {
                Some(Square::Occupied(mark)) => GameStatus::Won(mark),
                _ => GameStatus::Drawn,
            },
            None => GameStatus::Drawn,
        }
    }

    /// Places `mark` at `index` and evaluates the round.
    ///
    /// A win is checked before a draw, so a move that completes a line on
    /// the last free cell is a win. Illegal moves leave everything
    /// untouched and come back as [`MoveResult::Rejected`].
    #[instrument(skip(self), fields(round = %self.state.round()))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> MoveResult {
        if let Err(reason) = self.check_move(index) {
            debug!(%reason, "Rejected move");
            return MoveResult::Rejected(reason);
        }

        self.state.board_mut().place(index, mark);
        debug!("Move applied");

        if let Some(combo) = winning_combo(self.state.board(), mark) {
            self.state.finish(Some(combo));
            self.scores.record_win(mark);
            info!(?combo, board = %self.state.board().display(), "Round won");
            return MoveResult::Win { mark, combo };
        }

        if is_full(self.state.board()) {
            self.state.finish(None);
            self.scores.record_draw();
            info!(board = %self.state.board().display(), "Round drawn");
            return MoveResult::Draw;
        }

        MoveResult::Continue
    }

    fn check_move(&self, index: usize) -> Result<(), MoveError> {
        if !self.state.is_running() {
            return Err(MoveError::GameOver);
        }
        match self.state.board().get(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(index)),
            Some(Square::Empty) => Ok(()),
        }
    }

    /// Picks a uniformly random empty cell without playing it.
    #[instrument(skip(self))]
    pub fn choose_random_move(&mut self) -> Result<usize, EngineError> {
        if !self.state.is_running() {
            warn!("Random move requested after the round ended");
            return Err(EngineError::ImpossibleState);
        }

        let empties = self.state.board().empty_indices();
        if empties.is_empty() {
            warn!("Random move requested on a full board");
            return Err(EngineError::ImpossibleState);
        }

        let pick = self.random.next_index(empties.len());
        let index = empties
            .get(pick)
            .copied()
            .ok_or(EngineError::ImpossibleState)?;
        debug!(index, candidates = empties.len(), "Chose random move");
        Ok(index)
    }

    /// Hands the move to the other mark. Call only after [`MoveResult::Continue`].
    #[instrument(skip(self))]
    pub fn swap_turn(&mut self) {
        self.state.swap_turn();
        debug!(current_player = %self.state.current_player(), "Turn swapped");
    }

    /// Starts a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let round = self.state.round().next();
        self.state = GameState::new(round);
        info!(%round, "Round restarted");
    }

    /// Zeroes the scoreboard. The round is left alone.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
    }

    /// Requests a computer move for `mark` in the current round.
    pub fn schedule_computer_move(&mut self, mark: Mark) -> ScheduledMove {
        self.next_ticket += 1;
        ScheduledMove::new(self.state.round(), mark, self.next_ticket)
    }

    /// Plays a previously scheduled computer move.
    ///
    /// Returns `Ok(None)` without touching the state when the move belongs
    /// to an earlier round, the round has ended, or it is not `mark`'s turn.
    /// On [`MoveResult::Continue`] the caller still swaps turns.
    #[instrument(skip(self), fields(current_round = %self.state.round()))]
    pub fn fire_scheduled(
        &mut self,
        scheduled: ScheduledMove,
    ) -> Result<Option<FiredMove>, EngineError> {
        if scheduled.round() != self.state.round() {
            debug!(scheduled_round = %scheduled.round(), "Dropping stale computer move");
            return Ok(None);
        }
        if !self.state.is_running() || self.state.current_player() != scheduled.mark() {
            debug!("Computer move no longer applicable");
            return Ok(None);
        }

        let index = self.choose_random_move()?;
        let result = self.apply_move(index, scheduled.mark());
        Ok(Some(FiredMove::new(index, scheduled.mark(), result)))
    }
}

//! Application state and logic.

use crate::config::SessionConfig;
use crate::input::{Action, move_cursor};
use tictactoe_engine::{EngineError, GameEngine, Mark, MoveResult, RandomIndex, ScheduledMove};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Sits between the keyboard and the engine. Computer moves are not played
/// here directly: they are queued as [`ScheduledMove`]s for the event loop,
/// which hands them back through [`App::fire`] once the delay has passed.
pub struct App<R> {
    engine: GameEngine<R>,
    computer_enabled: bool,
    computer_mark: Mark,
    cursor: usize,
    status_message: String,
    banner: Option<String>,
    awaiting: Option<ScheduledMove>,
    outbox: Vec<ScheduledMove>,
    should_quit: bool,
}

impl<R: RandomIndex> App<R> {
    /// Creates a new application around `engine`.
    pub fn new(engine: GameEngine<R>, config: &SessionConfig) -> Self {
        let mut app = Self {
            engine,
            computer_enabled: *config.computer_enabled(),
            computer_mark: *config.computer_mark(),
            cursor: 4,
            status_message: "Game ready - X starts".to_string(),
            banner: None,
            awaiting: None,
            outbox: Vec::new(),
            should_quit: false,
        };
        app.schedule_computer_if_due();
        app
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Gets the selected cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Winning-line banner, shown only after a win.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Whether the computer opponent is on.
    pub fn computer_enabled(&self) -> bool {
        self.computer_enabled
    }

    /// Mark played by the computer.
    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    /// Set once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// True while a computer move for the current round is pending.
    pub fn is_waiting_for_computer(&self) -> bool {
        self.awaiting
            .is_some_and(|scheduled| scheduled.round() == self.engine.round())
    }

    /// Whether a human cell selection would reach the engine.
    pub fn accepts_input(&self) -> bool {
        self.engine.is_running() && !self.is_computer_turn() && !self.is_waiting_for_computer()
    }

    /// Drains computer moves the event loop still has to schedule.
    pub fn take_scheduled(&mut self) -> Vec<ScheduledMove> {
        std::mem::take(&mut self.outbox)
    }

    /// Handles a player action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Play(index) => self.play(index),
            Action::PlayCursor => self.play(self.cursor),
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Restart => self.restart(),
            Action::ResetScores => self.reset_scores(),
            Action::ToggleComputer => self.toggle_computer(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Plays a computer move whose delay has elapsed.
    ///
    /// Only the move currently awaited is played. Moves cancelled by
    /// switching the computer off, or from an earlier round, change nothing.
    #[instrument(skip(self))]
    pub fn fire(&mut self, scheduled: ScheduledMove) -> Result<(), EngineError> {
        if self.awaiting != Some(scheduled) {
            debug!("Dropping cancelled computer move");
            return Ok(());
        }
        self.awaiting = None;
        if !self.computer_enabled {
            debug!("Computer disabled, dropping move");
            return Ok(());
        }

        match self.engine.fire_scheduled(scheduled)? {
            Some(fired) => {
                debug!(index = fired.index, mark = %fired.mark, "Computer moved");
                self.after_move(fired.result);
            }
            None => debug!("Stale computer move ignored"),
        }
        Ok(())
    }

    fn is_computer_turn(&self) -> bool {
        self.computer_enabled && self.engine.current_player() == self.computer_mark
    }

    fn play(&mut self, index: usize) {
        if !self.accepts_input() {
            debug!(index, "Input ignored");
            return;
        }
        if !self.engine.board().is_empty(index) {
            debug!(index, "Ignoring occupied cell");
            return;
        }

        let mark = self.engine.current_player();
        let result = self.engine.apply_move(index, mark);
        self.after_move(result);
    }

    fn after_move(&mut self, result: MoveResult) {
        match result {
            MoveResult::Continue => {
                self.engine.swap_turn();
                self.status_message = format!("{}'s turn", self.engine.current_player());
                self.schedule_computer_if_due();
            }
            MoveResult::Win { mark, .. } => {
                let message = format!("{} wins!", mark);
                self.status_message = message.clone();
                self.banner = Some(message);
            }
            MoveResult::Draw => {
                self.status_message = "It's a draw".to_string();
            }
            MoveResult::Rejected(reason) => {
                warn!(%reason, "Engine rejected move");
            }
        }
    }

    fn schedule_computer_if_due(&mut self) {
        if !self.engine.is_running() || !self.is_computer_turn() || self.is_waiting_for_computer() {
            return;
        }
        let scheduled = self.engine.schedule_computer_move(self.computer_mark);
        debug!(?scheduled, "Scheduling computer move");
        self.awaiting = Some(scheduled);
        self.outbox.push(scheduled);
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.restart();
        self.banner = None;
        self.status_message = "Restarted - X starts".to_string();
        self.schedule_computer_if_due();
    }

    fn reset_scores(&mut self) {
        self.engine.reset_scores();
        self.engine.restart();
        self.banner = None;
        self.status_message = "Scores reset - X starts".to_string();
        self.schedule_computer_if_due();
    }

    fn toggle_computer(&mut self) {
        self.computer_enabled = !self.computer_enabled;
        info!(enabled = self.computer_enabled, "Computer opponent toggled");
        if self.computer_enabled {
            self.status_message = format!("Computer plays {}", self.computer_mark);
            self.schedule_computer_if_due();
        } else {
            self.awaiting = None;
            self.status_message = "Computer opponent off".to_string();
        }
    }
}

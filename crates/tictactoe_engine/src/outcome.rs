//! Results and errors produced by the engine.
//!
//! A move is a request, not a command: the engine answers every
//! [`GameEngine::apply_move`](crate::GameEngine::apply_move) with a
//! [`MoveResult`], and an illegal move comes back as
//! [`MoveResult::Rejected`] with the board untouched.

use crate::{Mark, WinCombo};
use derive_more::{Display, Error};

/// Outcome of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The round goes on; the caller swaps turns.
    Continue,
    /// `mark` completed `combo`.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        combo: WinCombo,
    },
    /// The board filled without a line.
    Draw,
    /// The move was illegal and nothing changed.
    Rejected(MoveError),
}

impl MoveResult {
    /// True for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win { .. } | MoveResult::Draw)
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The round already ended.
    #[display("Game is already over")]
    GameOver,

    /// The index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(usize),
}

impl std::error::Error for MoveError {}

/// Contract violations by the engine's caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A random move was requested with no empty cell or after the round ended.
    #[display("No legal move available for the computer")]
    ImpossibleState,
}

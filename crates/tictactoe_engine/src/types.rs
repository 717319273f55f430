//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Index triple making up a winning line.
pub type WinCombo = [usize; 3];

/// A player, and the token that player places in a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Gets the cell at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a cell is in range and empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all cells.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Indices of every empty cell, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Places `mark` at `index`. Bounds and occupancy are checked by the engine.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        if let Some(square) = self.squares.get_mut(index) {
            *square = Square::Occupied(mark);
        }
    }

    /// Formats the board as a human-readable string, empty cells numbered 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.squares[index] {
                    Square::Empty => (index + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Identifies one round; bumped on every restart.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[display("round {}", _0)]
pub struct RoundId(u64);

impl RoundId {
    /// The round that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board filled up without a line.
    Drawn,
}

/// Board, turn and round bookkeeping for a single round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    running: bool,
    winning_combo: Option<WinCombo>,
    round: RoundId,
}

impl GameState {
    /// Creates a fresh round: empty board, X to move.
    pub fn new(round: RoundId) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            running: true,
            winning_combo: None,
            round,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark on move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// False once the round reached a win or a draw.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The line that won the round, if any.
    pub fn winning_combo(&self) -> Option<WinCombo> {
        self.winning_combo
    }

    /// Returns the round identifier.
    pub fn round(&self) -> RoundId {
        self.round
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub(crate) fn swap_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Ends the round, recording the winning line when there is one.
    pub(crate) fn finish(&mut self, combo: Option<WinCombo>) {
        self.running = false;
        self.winning_combo = combo;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RoundId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mark_parses_case_insensitively() {
        assert_eq!(Mark::from_str("o").unwrap(), Mark::O);
        assert_eq!(Mark::from_str("X").unwrap(), Mark::X);
        assert!(Mark::from_str("z").is_err());
    }

    #[test]
    fn test_empty_indices_skip_occupied() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(4, Mark::O);
        assert_eq!(board.empty_indices(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.place(4, Mark::X);
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_empty(9));
    }
}

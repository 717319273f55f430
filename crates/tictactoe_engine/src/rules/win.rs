//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Square, WinCombo};
use tracing::instrument;

/// Every winning line: rows, columns, then diagonals.
pub const WIN_COMBOS: [WinCombo; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line fully held by `mark`, if any.
#[instrument(skip(board))]
pub fn winning_combo(board: &Board, mark: Mark) -> Option<WinCombo> {
    WIN_COMBOS.iter().copied().find(|combo| {
        combo
            .iter()
            .all(|&index| board.get(index) == Some(Square::Occupied(mark)))
    })
}

/// Checks both marks for a completed line.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Mark, WinCombo)> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| winning_combo(board, mark).map(|combo| (mark, combo)))
}

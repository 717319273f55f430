//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the given cell (0-8).
    Play(usize),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Start a new round.
    Restart,
    /// Zero the scoreboard and start a new round.
    ResetScores,
    /// Enable or disable the computer opponent.
    ToggleComputer,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c) if ('1'..='9').contains(&c) => {
            c.to_digit(10).map(|digit| Action::Play(digit as usize - 1))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Action::ResetScores),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::ToggleComputer),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    match key {
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Down if row < 2 => cursor + 3,
        KeyCode::Up if row > 0 => cursor - 3,
        _ => cursor,
    }
}

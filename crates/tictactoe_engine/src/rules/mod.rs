//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine composes them
//! into move evaluation; the win check always runs before the draw check.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_COMBOS, check_winner, winning_combo};

//! Headless tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Types**: board, marks, round state
//! - **Rules**: pure win and draw checks over a board
//! - **Engine**: move application, turn alternation and scorekeeping
//! - **Random**: injectable index source for the computer opponent
//! - **Schedule**: round-tagged deferred computer moves
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, MoveResult};
//!
//! let mut engine = GameEngine::seeded(7);
//! for (index, mark) in [(0, Mark::X), (4, Mark::O), (1, Mark::X), (5, Mark::O)] {
//!     assert_eq!(engine.apply_move(index, mark), MoveResult::Continue);
//!     engine.swap_turn();
//! }
//! let result = engine.apply_move(2, Mark::X);
//! assert_eq!(result, MoveResult::Win { mark: Mark::X, combo: [0, 1, 2] });
//! assert_eq!(*engine.scores().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod outcome;
mod random;
pub mod rules;
mod schedule;
mod score;
mod types;

pub use engine::GameEngine;
pub use outcome::{EngineError, MoveError, MoveResult};
pub use random::{RandomIndex, RngIndex, ScriptedIndex};
pub use rules::WIN_COMBOS;
pub use schedule::{FiredMove, ScheduledMove};
pub use score::ScoreTally;
pub use types::{BOARD_SIZE, Board, GameState, GameStatus, Mark, RoundId, Square, WinCombo};

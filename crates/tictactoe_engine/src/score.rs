//! Session scoreboard.

use crate::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per mark and draws, kept across restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Rounds drawn.
    draws: u32,
}

impl ScoreTally {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    pub(crate) fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }

    #[instrument(skip(self))]
    pub(crate) fn reset(&mut self) {
        info!(x = self.x, o = self.o, draws = self.draws, "Resetting scores");
        *self = Self::default();
    }
}

//! Deferred computer moves.
//!
//! The presentation layer delays the computer's reply for pacing. The delay
//! itself lives outside the engine; the engine only hands out a
//! [`ScheduledMove`] tagged with the round it belongs to and refuses to play
//! it once that round is gone.

use crate::{Mark, MoveResult, RoundId};
use derive_new::new;

/// A computer move requested for a specific round.
///
/// Every request carries its own ticket, so two requests for the same
/// round and mark never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct ScheduledMove {
    round: RoundId,
    mark: Mark,
    ticket: u64,
}

impl ScheduledMove {
    /// Round the move was scheduled in.
    pub fn round(&self) -> RoundId {
        self.round
    }

    /// Mark the computer plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Sequence number of the request.
    pub fn ticket(&self) -> u64 {
        self.ticket
    }
}

/// A scheduled move that was actually played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct FiredMove {
    /// Cell the computer picked.
    pub index: usize,
    /// Mark that was placed.
    pub mark: Mark,
    /// What the engine made of it.
    pub result: MoveResult,
}

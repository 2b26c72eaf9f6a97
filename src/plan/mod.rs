//! Shot planning
//!
//! Candidate generation and selection. The planner is a pure function of a
//! frozen snapshot: same board, same pucks, same answer.

mod bank;
mod candidate;
mod direct;
mod select;

pub use candidate::StrikeCandidate;
pub use select::{PassToggles, PlanningRequest, plan_best_shot};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of one planning call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlanOutcome {
    /// Best candidate found; ready to hand to the shot applicator
    Shot(StrikeCandidate),
    /// Search exhausted even with obstruction checks relaxed. A normal
    /// outcome: leave the striker unplaced.
    NoShotAvailable,
}

/// Malformed planning input. Search exhaustion is not an error; see
/// [`PlanOutcome::NoShotAvailable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Player id outside the configured sides
    #[error("player {player} out of range (board has {sides} sides)")]
    InvalidPlayer { player: u32, sides: u32 },
    /// Layout too small for the canonical four-sided pot mapping
    #[error(
        "layout incomplete: {play_lines} play lines, {walls} walls, {pots} pots \
         (need {required} of each)"
    )]
    IncompleteLayout {
        play_lines: usize,
        walls: usize,
        pots: usize,
        required: usize,
    },
    /// No pucks to plan against
    #[error("board has no pucks to plan against")]
    EmptyBoard,
}

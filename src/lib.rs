//! Carrom Strike - shot planning for a disc-striking board game
//!
//! Core modules:
//! - `geom`: ray/segment intersection and reflection primitives
//! - `config`: board tunables
//! - `board`: static board model (play lines, walls, pots)
//! - `query`: collision query port consumed by the planner
//! - `world`: analytic reference implementation of the port
//! - `plan`: candidate generation and best-shot selection
//! - `apply`: shot applicator port and turn state machine

pub mod apply;
pub mod board;
pub mod config;
pub mod geom;
pub mod plan;
pub mod query;
pub mod world;

pub use board::{BoardLayout, Disc, LineSegment, Pot};
pub use config::BoardConfig;
pub use plan::{PlanError, PlanOutcome, PlanningRequest, StrikeCandidate, plan_best_shot};

use glam::Vec2;

/// Board dimension defaults, matching the reference board
pub mod consts {
    /// Half extent of the square playing field (board units)
    pub const BOARD_HALF_EXTENT: f32 = 3.0;
    /// Striker disc radius
    pub const STRIKER_RADIUS: f32 = 0.37;
    /// Puck (token) disc radius
    pub const PUCK_RADIUS: f32 = 0.26;
    /// Pot (pocket) radius
    pub const POT_RADIUS: f32 = 0.37;
    /// A disc slower than this inside a pot is captured
    pub const CATCH_SPEED_THRESHOLD: f32 = 5.0;
    /// Number of pucks on a full board
    pub const PUCK_COUNT: usize = 9;

    /// Number of board sides (one player seat per side)
    pub const SIDE_COUNT: u32 = 4;
    /// Number of corner pots
    pub const POT_COUNT: usize = 4;
}

/// Counter-clockwise perpendicular of a vector
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

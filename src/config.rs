//! Board tunables
//!
//! Fixed at setup and read-only for the lifetime of a board. The planner
//! never writes results back into the config; outputs travel as explicit
//! `PlanOutcome` values.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Scalar tunables for one board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Half extent of the square playing field
    pub half_extent: f32,
    /// Striker disc radius
    pub striker_radius: f32,
    /// Puck disc radius
    pub puck_radius: f32,
    /// Pot (pocket) radius
    pub pot_radius: f32,
    /// Minimum acceptable alignment dot-product for a candidate
    pub alignment_threshold: f32,
    /// Additive constant in the speed formula
    pub speed_bias: f32,
    /// Allowed strike speed range (min, max); speeds clamp into it
    pub speed_range: (f32, f32),
    /// Evenly spaced fallback placements per line
    pub samples_per_line: usize,
    /// A disc slower than this inside a pot is captured
    pub catch_speed_threshold: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            half_extent: BOARD_HALF_EXTENT,
            striker_radius: STRIKER_RADIUS,
            puck_radius: PUCK_RADIUS,
            pot_radius: POT_RADIUS,
            alignment_threshold: 0.5,
            speed_bias: 1.0,
            speed_range: (2.0, 25.0),
            samples_per_line: 10,
            catch_speed_threshold: CATCH_SPEED_THRESHOLD,
        }
    }
}

impl BoardConfig {
    /// Furthest a striker center can sit from the board center per axis
    #[inline]
    pub fn striker_limit(&self) -> f32 {
        self.half_extent - self.striker_radius
    }
}

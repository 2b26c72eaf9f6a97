//! Static board model
//!
//! A square field with four player sides, a striker placement line per side,
//! four rim walls usable for bank shots, and four corner pots. The layout is
//! built once from a `BoardConfig` and read-only afterwards; live puck
//! positions are supplied per planning call, not stored here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::consts::SIDE_COUNT;
use crate::perp;

/// A placement or reflection line on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineSegment {
    /// Start point
    pub origin: Vec2,
    /// Unit direction from origin toward the far end
    pub direction: Vec2,
    /// Segment length
    pub length: f32,
    /// When set, a valid strike direction must point into this half-plane
    pub play_dir: Option<Vec2>,
    /// Diagnostic label; not serialized
    #[serde(skip)]
    pub name: &'static str,
}

impl LineSegment {
    /// Start endpoint
    #[inline]
    pub fn a(&self) -> Vec2 {
        self.origin
    }

    /// Far endpoint
    #[inline]
    pub fn b(&self) -> Vec2 {
        self.origin + self.direction * self.length
    }

    /// Point at fraction `frac` in `[0, 1]` along the segment
    #[inline]
    pub fn point_at(&self, frac: f32) -> Vec2 {
        self.origin + self.direction * (self.length * frac)
    }
}

/// A movable disc: puck or striker
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Disc {
    pub pos: Vec2,
    pub radius: f32,
    /// Pocketed pucks go inactive and drop out of planning
    pub active: bool,
}

impl Disc {
    pub fn puck(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            active: true,
        }
    }
}

/// A corner pocket
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pot {
    pub pos: Vec2,
    pub radius: f32,
}

impl Pot {
    /// Capture rule: a disc inside the pot moving slower than the threshold
    /// is potted. Compared on squared speed.
    pub fn captures(&self, disc_pos: Vec2, disc_speed: f32, catch_speed_threshold: f32) -> bool {
        (disc_pos - self.pos).length_squared() <= self.radius * self.radius
            && disc_speed * disc_speed < catch_speed_threshold * catch_speed_threshold
    }
}

/// The full static layout: placement lines, walls, pots
///
/// Sides are indexed counter-clockwise: 0 = south (bottom), 1 = east,
/// 2 = north, 3 = west. Pot `i` sits at the corner between side `i` and side
/// `i + 1`: 0 = south-east, 1 = north-east, 2 = north-west, 3 = south-west.
/// Other components rely on this ordering for the player/pot mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardLayout {
    /// One striker placement line per side
    pub play_lines: Vec<LineSegment>,
    /// One rim wall (reflect line) per side
    pub walls: Vec<LineSegment>,
    /// Four corner pots, canonical order
    pub pots: Vec<Pot>,
}

/// Inward normal of side `s`
fn side_normal(side: u32) -> Vec2 {
    match side % SIDE_COUNT {
        0 => Vec2::new(0.0, 1.0),
        1 => Vec2::new(-1.0, 0.0),
        2 => Vec2::new(0.0, -1.0),
        _ => Vec2::new(1.0, 0.0),
    }
}

fn side_name(side: u32) -> &'static str {
    match side % SIDE_COUNT {
        0 => "south",
        1 => "east",
        2 => "north",
        _ => "west",
    }
}

fn wall_name(side: u32) -> &'static str {
    match side % SIDE_COUNT {
        0 => "wall south",
        1 => "wall east",
        2 => "wall north",
        _ => "wall west",
    }
}

/// Build a line parallel to side `side` at `dist` from center, spanning
/// `half_span` each way from the side's midpoint.
fn side_line(
    side: u32,
    dist: f32,
    half_span: f32,
    play_dir: Option<Vec2>,
    name: &'static str,
) -> LineSegment {
    let normal = side_normal(side);
    let tangent = perp(normal);
    let center = -normal * dist;
    LineSegment {
        origin: center - tangent * half_span,
        direction: tangent,
        length: half_span * 2.0,
        play_dir,
        name,
    }
}

impl BoardLayout {
    /// Standard four-sided board derived from the config scalars.
    ///
    /// Play lines sit one striker diameter inside the rim; walls sit at the
    /// rim inset by the striker radius, so every point on either line is a
    /// legal striker center.
    pub fn standard(config: &BoardConfig) -> Self {
        let play_dist = config.half_extent - 2.0 * config.striker_radius;
        let wall_dist = config.half_extent - config.striker_radius;
        let play_span = config.half_extent * 0.7;

        let play_lines = (0..SIDE_COUNT)
            .map(|s| {
                side_line(
                    s,
                    play_dist,
                    play_span,
                    Some(side_normal(s)),
                    side_name(s),
                )
            })
            .collect();
        let walls = (0..SIDE_COUNT)
            .map(|s| side_line(s, wall_dist, wall_dist, Some(side_normal(s)), wall_name(s)))
            .collect();

        let c = config.half_extent - config.pot_radius;
        let pots = [
            Vec2::new(c, -c),
            Vec2::new(c, c),
            Vec2::new(-c, c),
            Vec2::new(-c, -c),
        ]
        .into_iter()
        .map(|pos| Pot {
            pos,
            radius: config.pot_radius,
        })
        .collect();

        Self {
            play_lines,
            walls,
            pots,
        }
    }
}

/// Scatter `count` pucks uniformly inside the spawn box, deterministically
/// per seed. Reset utility only; planning itself draws no randomness.
pub fn scatter_pucks(count: usize, spawn_box: f32, radius: f32, seed: u64) -> Vec<Disc> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.random_range(-spawn_box..=spawn_box);
            let y = rng.random_range(-spawn_box..=spawn_box);
            Disc::puck(Vec2::new(x, y), radius)
        })
        .collect()
}

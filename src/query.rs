//! Collision query port
//!
//! The planner never talks to a physics engine directly; it sees a frozen
//! world through this trait. Hosts adapt their own broadphase behind it, the
//! crate ships `world::DiscWorld` as the analytic reference.

use glam::Vec2;

/// Layer selector for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Puck obstacle layer
    pub const DISCS: LayerMask = LayerMask(1);
    /// Board edge / rim layer
    pub const RIM: LayerMask = LayerMask(1 << 1);
    /// Everything
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    #[inline]
    pub fn contains(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

/// What a query ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstacle {
    /// A puck, by its index in the planning snapshot
    Puck(u32),
    /// The board rim
    Rim,
}

/// One obstruction along a cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    pub obstacle: Obstacle,
    /// Travel distance from the cast origin to first contact
    pub distance: f32,
}

/// Read-only collision queries against a frozen disc snapshot.
///
/// Casts sweep a circle of the given radius along `dir` for at most
/// `max_dist`; a cast that starts overlapping an obstacle reports it at
/// distance zero. All queries are pure with respect to the snapshot.
pub trait CollisionQuery {
    /// First obstruction along the swept circle, or `None`
    fn cast_circle(
        &self,
        origin: Vec2,
        radius: f32,
        dir: Vec2,
        max_dist: f32,
        mask: LayerMask,
    ) -> Option<CastHit>;

    /// Every obstruction along the swept circle, nearest first
    fn cast_circle_all(
        &self,
        origin: Vec2,
        radius: f32,
        dir: Vec2,
        max_dist: f32,
        mask: LayerMask,
    ) -> Vec<CastHit>;

    /// Static overlap test at a point
    fn overlap_circle(&self, point: Vec2, radius: f32, mask: LayerMask) -> Option<Obstacle>;
}

//! Candidate record and the placement math shared by both generators

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::board::LineSegment;
use crate::config::BoardConfig;
use crate::geom::ray_segment_intersection;
use crate::query::{CollisionQuery, LayerMask, Obstacle};

/// One fully validated way to strike a puck into a pot.
///
/// Immutable value record: built once by a generator, consumed by the
/// selector, never mutated. All coordinates are board-world.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeCandidate {
    /// Index of the target puck in the planning snapshot
    pub puck: u32,
    /// Index of the target pot in the board layout
    pub pot: u32,
    /// Where the striker must be placed
    pub placement: Vec2,
    /// Unit direction of the impulse
    pub strike_dir: Vec2,
    /// Dot-product quality score in `[-1, 1]`, higher is better
    pub alignment: f32,
    /// Strike speed, clamped into the configured range
    pub speed: f32,
    /// Point the striker center must reach to contact the puck
    pub contact_point: Vec2,
    /// Wall bounce location; present only for bank shots
    pub reflection_point: Option<Vec2>,
}

/// Geometry of one (puck, pot) pairing
#[derive(Debug, Clone, Copy)]
pub(crate) struct Approach {
    /// Unit puck-to-pot direction
    pub dir: Vec2,
    /// Puck-to-pot distance
    pub distance: f32,
    /// Striker center position at the moment of contact
    pub contact_point: Vec2,
}

/// Compute the contact point for sending `puck_pos` toward `pot_pos`.
///
/// The striker must touch the puck on its far side from the pot, so the
/// contact point sits `puck_radius + striker_radius` behind the puck along
/// the puck-to-pot direction. A contact point overlapping the rim is clamped
/// per axis back inside the striker's reachable box.
///
/// Returns `None` when the puck already sits on the pot (degenerate
/// direction).
pub(crate) fn approach(
    world: &impl CollisionQuery,
    config: &BoardConfig,
    puck_pos: Vec2,
    pot_pos: Vec2,
) -> Option<Approach> {
    let to_pot = pot_pos - puck_pos;
    let dir = to_pot.normalize_or_zero();
    if dir == Vec2::ZERO {
        return None;
    }

    let mut contact_point = puck_pos - dir * (config.puck_radius + config.striker_radius);
    if world
        .overlap_circle(contact_point, config.striker_radius, LayerMask::RIM)
        .is_some()
    {
        let limit = config.striker_limit();
        contact_point.x = contact_point.x.clamp(-limit, limit);
        contact_point.y = contact_point.y.clamp(-limit, limit);
    }

    Some(Approach {
        dir,
        distance: to_pot.length(),
        contact_point,
    })
}

/// True when a straight puck-to-pot run is blocked by another disc.
///
/// The cast starts inside the puck itself, so the puck is always the first
/// hit; any second hit is a genuine blocker.
pub(crate) fn pair_is_blocked(
    world: &impl CollisionQuery,
    config: &BoardConfig,
    puck_pos: Vec2,
    dir: Vec2,
) -> bool {
    world
        .cast_circle_all(
            puck_pos,
            config.puck_radius,
            dir,
            2.0 * config.half_extent,
            LayerMask::DISCS,
        )
        .len()
        > 1
}

/// Placement candidates along a line: the exact back-ray crossing first (when
/// it exists), then the evenly spaced fallback samples.
pub(crate) fn placements(
    line: &LineSegment,
    contact_point: Vec2,
    approach_dir: Vec2,
    samples: usize,
) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(samples + 1);

    // Best case: extend the contact ray backward until it crosses the line
    if let Some(t) = ray_segment_intersection(contact_point, -approach_dir, line.a(), line.b()) {
        out.push(contact_point - approach_dir * t);
    }

    for i in 0..samples {
        out.push(line.point_at(i as f32 / samples as f32));
    }
    out
}

/// Scores for one accepted placement
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlacementEval {
    /// Unit direction from the placement to the contact point
    pub hit_dir: Vec2,
    /// Distance from the placement to the contact point
    pub hit_len: f32,
    pub alignment: f32,
    pub speed: f32,
}

/// Validate one striker placement against a (puck, pot) approach.
///
/// Applies, in order: the occupancy check at the placement, the alignment and
/// speed gates, the half-plane gate from the line's `play_dir`, and the final
/// confirmation that the first disc hit along the strike is the intended
/// puck. Disc-layer checks are skipped when `obstruction_check` is off (the
/// relaxation pass).
pub(crate) fn evaluate_placement(
    world: &impl CollisionQuery,
    config: &BoardConfig,
    s_pos: Vec2,
    approach: &Approach,
    target_puck: u32,
    play_dir: Option<Vec2>,
    obstruction_check: bool,
) -> Option<PlacementEval> {
    if obstruction_check
        && world
            .overlap_circle(s_pos, config.striker_radius, LayerMask::DISCS)
            .is_some()
    {
        return None;
    }

    let hit_vect = approach.contact_point - s_pos;
    let hit_dir = hit_vect.normalize_or_zero();
    if hit_dir == Vec2::ZERO {
        return None;
    }
    let hit_len = hit_vect.length();

    let alignment = approach.dir.dot(hit_dir);
    let (speed_min, speed_max) = config.speed_range;
    let speed = ((approach.distance + hit_len) / alignment + config.speed_bias)
        .clamp(speed_min, speed_max);

    if speed >= speed_max || alignment <= config.alignment_threshold {
        return None;
    }
    if let Some(play_dir) = play_dir
        && play_dir.dot(hit_dir) <= 0.0
    {
        return None;
    }

    // The strike must reach the intended puck, not whatever drifts in between
    if obstruction_check {
        let first = world.cast_circle(
            s_pos,
            config.striker_radius,
            hit_dir,
            4.0 * config.half_extent,
            LayerMask::DISCS,
        );
        match first {
            Some(hit) if hit.obstacle == Obstacle::Puck(target_puck) => {}
            _ => return None,
        }
    }

    Some(PlacementEval {
        hit_dir,
        hit_len,
        alignment,
        speed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::DiscWorld;

    #[test]
    fn test_contact_point_sits_behind_puck() {
        let config = BoardConfig::default();
        let world = DiscWorld::new(&[], config.half_extent);
        let a = approach(&world, &config, Vec2::ZERO, Vec2::new(2.0, 0.0)).unwrap();
        assert_eq!(a.dir, Vec2::new(1.0, 0.0));
        assert!((a.distance - 2.0).abs() < 1e-5);
        let expected = -(config.puck_radius + config.striker_radius);
        assert!((a.contact_point.x - expected).abs() < 1e-5);
        assert!(a.contact_point.y.abs() < 1e-6);
    }

    #[test]
    fn test_contact_point_clamps_at_rim() {
        let config = BoardConfig::default();
        let world = DiscWorld::new(&[], config.half_extent);
        // Puck near the east rim, pot to the west: the raw contact point
        // lands outside the board and must clamp back in.
        let a = approach(
            &world,
            &config,
            Vec2::new(2.6, 0.0),
            Vec2::new(-2.63, 0.1),
        )
        .unwrap();
        assert!((a.contact_point.x - config.striker_limit()).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_pairing_is_none() {
        let config = BoardConfig::default();
        let world = DiscWorld::new(&[], config.half_extent);
        assert!(approach(&world, &config, Vec2::ONE, Vec2::ONE).is_none());
    }
}

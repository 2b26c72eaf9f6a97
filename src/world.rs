//! Analytic reference world
//!
//! Implements the collision query port over a frozen puck snapshot plus the
//! square board rim. Swept-circle tests are solved in closed form; no
//! stepping or sampling. Stands in for the external physics engine in tests
//! and the demo binary.

use glam::Vec2;

use crate::board::Disc;
use crate::query::{CastHit, CollisionQuery, LayerMask, Obstacle};

/// Frozen collision world: active pucks and the rim of a square board
#[derive(Debug, Clone)]
pub struct DiscWorld {
    pucks: Vec<Disc>,
    half_extent: f32,
}

impl DiscWorld {
    pub fn new(pucks: &[Disc], half_extent: f32) -> Self {
        Self {
            pucks: pucks.to_vec(),
            half_extent,
        }
    }

    /// Sweep a circle against one static circle. Returns the travel distance
    /// to first contact; zero if already overlapping at the origin.
    fn sweep_vs_circle(
        origin: Vec2,
        radius: f32,
        dir: Vec2,
        max_dist: f32,
        center: Vec2,
        other_radius: f32,
    ) -> Option<f32> {
        let rsum = radius + other_radius;
        let oc = center - origin;
        if oc.length_squared() <= rsum * rsum {
            return Some(0.0);
        }

        let proj = oc.dot(dir);
        if proj < 0.0 {
            return None;
        }
        let closest_sq = oc.length_squared() - proj * proj;
        if closest_sq > rsum * rsum {
            return None;
        }

        let t = proj - (rsum * rsum - closest_sq).sqrt();
        (t >= 0.0 && t <= max_dist).then_some(t)
    }

    /// Sweep a circle against the rim band. The free region for a disc of
    /// this radius is the box `|x|, |y| <= half_extent - radius`.
    fn sweep_vs_rim(&self, origin: Vec2, radius: f32, dir: Vec2, max_dist: f32) -> Option<f32> {
        let limit = self.half_extent - radius;
        if origin.x.abs() >= limit || origin.y.abs() >= limit {
            return Some(0.0);
        }

        let o = origin.to_array();
        let d = dir.to_array();
        let mut nearest = f32::INFINITY;
        for axis in 0..2 {
            if d[axis] > 1e-6 {
                nearest = nearest.min((limit - o[axis]) / d[axis]);
            } else if d[axis] < -1e-6 {
                nearest = nearest.min((-limit - o[axis]) / d[axis]);
            }
        }
        (nearest <= max_dist).then(|| nearest.max(0.0))
    }

    fn collect_hits(
        &self,
        origin: Vec2,
        radius: f32,
        dir: Vec2,
        max_dist: f32,
        mask: LayerMask,
    ) -> Vec<CastHit> {
        let mut hits = Vec::new();
        let dir = dir.normalize_or_zero();
        if dir == Vec2::ZERO {
            return hits;
        }

        if mask.contains(LayerMask::DISCS) {
            for (i, puck) in self.pucks.iter().enumerate() {
                if !puck.active {
                    continue;
                }
                if let Some(t) =
                    Self::sweep_vs_circle(origin, radius, dir, max_dist, puck.pos, puck.radius)
                {
                    hits.push(CastHit {
                        obstacle: Obstacle::Puck(i as u32),
                        distance: t,
                    });
                }
            }
        }

        if mask.contains(LayerMask::RIM)
            && let Some(t) = self.sweep_vs_rim(origin, radius, dir, max_dist)
        {
            hits.push(CastHit {
                obstacle: Obstacle::Rim,
                distance: t,
            });
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

impl CollisionQuery for DiscWorld {
    fn cast_circle(
        &self,
        origin: Vec2,
        radius: f32,
        dir: Vec2,
        max_dist: f32,
        mask: LayerMask,
    ) -> Option<CastHit> {
        self.collect_hits(origin, radius, dir, max_dist, mask)
            .into_iter()
            .next()
    }

    fn cast_circle_all(
        &self,
        origin: Vec2,
        radius: f32,
        dir: Vec2,
        max_dist: f32,
        mask: LayerMask,
    ) -> Vec<CastHit> {
        self.collect_hits(origin, radius, dir, max_dist, mask)
    }

    fn overlap_circle(&self, point: Vec2, radius: f32, mask: LayerMask) -> Option<Obstacle> {
        if mask.contains(LayerMask::DISCS) {
            for (i, puck) in self.pucks.iter().enumerate() {
                if !puck.active {
                    continue;
                }
                let rsum = radius + puck.radius;
                if (point - puck.pos).length_squared() < rsum * rsum {
                    return Some(Obstacle::Puck(i as u32));
                }
            }
        }

        if mask.contains(LayerMask::RIM) {
            let limit = self.half_extent - radius;
            if point.x.abs() > limit || point.y.abs() > limit {
                return Some(Obstacle::Rim);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> DiscWorld {
        DiscWorld::new(
            &[
                Disc::puck(Vec2::new(1.0, 0.0), 0.25),
                Disc::puck(Vec2::new(2.0, 0.0), 0.25),
                Disc {
                    pos: Vec2::new(0.5, 0.0),
                    radius: 0.25,
                    active: false,
                },
            ],
            3.0,
        )
    }

    #[test]
    fn test_cast_hits_nearest_puck_first() {
        let hit = world()
            .cast_circle(Vec2::ZERO, 0.25, Vec2::new(1.0, 0.0), 10.0, LayerMask::DISCS)
            .unwrap();
        assert_eq!(hit.obstacle, Obstacle::Puck(0));
        // Contact when centers are 0.5 apart
        assert!((hit.distance - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_cast_all_is_sorted_and_skips_inactive() {
        let hits =
            world().cast_circle_all(Vec2::ZERO, 0.25, Vec2::new(1.0, 0.0), 10.0, LayerMask::ALL);
        // Puck 0, puck 1, then the rim; inactive puck 2 is invisible
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].obstacle, Obstacle::Puck(0));
        assert_eq!(hits[1].obstacle, Obstacle::Puck(1));
        assert_eq!(hits[2].obstacle, Obstacle::Rim);
        assert!(hits[0].distance <= hits[1].distance);
        assert!(hits[1].distance <= hits[2].distance);
    }

    #[test]
    fn test_cast_starting_overlapped_reports_zero() {
        let hits = world().cast_circle_all(
            Vec2::new(1.0, 0.0),
            0.25,
            Vec2::new(1.0, 0.0),
            10.0,
            LayerMask::DISCS,
        );
        assert_eq!(hits[0].obstacle, Obstacle::Puck(0));
        assert_eq!(hits[0].distance, 0.0);
    }

    #[test]
    fn test_rim_cast_distance() {
        let hit = world()
            .cast_circle(Vec2::ZERO, 0.5, Vec2::new(1.0, 0.0), 10.0, LayerMask::RIM)
            .unwrap();
        assert_eq!(hit.obstacle, Obstacle::Rim);
        assert!((hit.distance - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_rim_overlap() {
        let w = world();
        assert_eq!(
            w.overlap_circle(Vec2::new(2.9, 0.0), 0.3, LayerMask::RIM),
            Some(Obstacle::Rim)
        );
        assert_eq!(w.overlap_circle(Vec2::new(2.0, 2.0), 0.3, LayerMask::RIM), None);
    }

    #[test]
    fn test_cast_respects_max_distance() {
        let hit = world().cast_circle(Vec2::ZERO, 0.25, Vec2::new(1.0, 0.0), 0.3, LayerMask::DISCS);
        assert!(hit.is_none());
    }
}

//! Ray and reflection primitives
//!
//! Everything the candidate generators do reduces to these two functions, so
//! sign conventions here matter more than anywhere else in the crate.

use glam::Vec2;

use crate::perp;

/// Determinant below which a ray and segment count as parallel
pub const PARALLEL_EPS: f32 = 1e-6;

/// Intersect a ray with the segment `[a, b]`.
///
/// Returns the ray parameter `t` such that `origin + t * dir` lies on the
/// segment, or `None` when the ray is parallel to the segment, the crossing
/// is behind the origin, or it falls outside the segment.
pub fn ray_segment_intersection(origin: Vec2, dir: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let seg = b - a;
    let denom = dir.perp_dot(seg);
    if denom.abs() < PARALLEL_EPS {
        return None;
    }

    let ao = a - origin;
    let t = ao.perp_dot(seg) / denom;
    let u = ao.perp_dot(dir) / denom;

    if t >= 0.0 && (0.0..=1.0).contains(&u) {
        Some(t)
    } else {
        None
    }
}

/// Mirror a vector across the line whose direction is `wall_dir`.
///
/// The mirror normal is the perpendicular of `wall_dir`; a unit input stays
/// unit length.
#[inline]
pub fn reflect_across(v: Vec2, wall_dir: Vec2) -> Vec2 {
    let normal = perp(wall_dir).normalize_or_zero();
    v - 2.0 * v.dot(normal) * normal
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_intersection_straight_up() {
        let t = ray_segment_intersection(
            Vec2::ZERO,
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 5.0),
            Vec2::new(1.0, 5.0),
        );
        assert!((t.unwrap() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_intersection_parallel_is_none() {
        let t = ray_segment_intersection(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(5.0, 1.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_intersection_behind_origin_is_none() {
        let t = ray_segment_intersection(
            Vec2::ZERO,
            Vec2::new(0.0, -1.0),
            Vec2::new(-1.0, 5.0),
            Vec2::new(1.0, 5.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_intersection_outside_segment_is_none() {
        // Crosses the segment's carrier line at x = 3, past endpoint b
        let t = ray_segment_intersection(
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 5.0),
            Vec2::new(1.0, 5.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn test_reflect_across_horizontal_wall() {
        // Incoming down-right across a horizontal wall bounces up-right
        let r = reflect_across(Vec2::new(1.0, -1.0).normalize(), Vec2::new(1.0, 0.0));
        assert!((r.x - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
        assert!((r.y - std::f32::consts::FRAC_1_SQRT_2).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_reflection_preserves_length(
            vx in -10.0f32..10.0, vy in -10.0f32..10.0,
            angle in 0.0f32..std::f32::consts::TAU,
        ) {
            let v = Vec2::new(vx, vy);
            let wall = Vec2::new(angle.cos(), angle.sin());
            let r = reflect_across(v, wall);
            prop_assert!((r.length() - v.length()).abs() < 1e-3);
        }

        #[test]
        fn prop_intersection_point_lies_on_segment(
            ox in -5.0f32..5.0, oy in -5.0f32..5.0,
            theta in 0.0f32..std::f32::consts::TAU,
        ) {
            let origin = Vec2::new(ox, oy);
            let dir = Vec2::new(theta.cos(), theta.sin());
            let a = Vec2::new(-20.0, 8.0);
            let b = Vec2::new(20.0, 8.0);
            if let Some(t) = ray_segment_intersection(origin, dir, a, b) {
                let p = origin + dir * t;
                prop_assert!((p.y - 8.0).abs() < 1e-3);
                prop_assert!(p.x >= a.x - 1e-3 && p.x <= b.x + 1e-3);
            }
        }
    }
}

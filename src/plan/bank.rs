//! Reflected (one-bank) candidate search
//!
//! Same setup as the direct search, but placements are sampled along a wall
//! and then mirrored: the provisional wall placement becomes the bounce
//! point, and the real placement is where the reflected ray crosses the
//! player's own play line. No crossing, no candidate.

use crate::board::{Disc, LineSegment, Pot};
use crate::config::BoardConfig;
use crate::geom::{ray_segment_intersection, reflect_across};
use crate::query::{CollisionQuery, LayerMask};

use super::candidate::{StrikeCandidate, approach, evaluate_placement, pair_is_blocked, placements};

/// Push at most one bank candidate per active puck for the given pot,
/// bouncing off `wall` onto `play_line`.
pub(crate) fn bank_candidates(
    world: &impl CollisionQuery,
    config: &BoardConfig,
    pucks: &[Disc],
    wall: &LineSegment,
    play_line: &LineSegment,
    pot_id: u32,
    pot: &Pot,
    obstruction_check: bool,
    out: &mut Vec<StrikeCandidate>,
) {
    let (_, speed_max) = config.speed_range;

    for (puck_id, puck) in pucks.iter().enumerate() {
        if !puck.active {
            continue;
        }
        let puck_id = puck_id as u32;

        let Some(approach) = approach(world, config, puck.pos, pot.pos) else {
            continue;
        };
        if obstruction_check && pair_is_blocked(world, config, puck.pos, approach.dir) {
            continue;
        }

        let mut best: Option<StrikeCandidate> = None;
        for s_pos in placements(wall, approach.contact_point, approach.dir, config.samples_per_line)
        {
            // Provisional strike as if placed on the wall itself
            let Some(eval) = evaluate_placement(
                world,
                config,
                s_pos,
                &approach,
                puck_id,
                wall.play_dir,
                obstruction_check,
            ) else {
                continue;
            };
            if best.is_some_and(|b| eval.alignment <= b.alignment) {
                continue;
            }

            // Mirror the incoming leg and require it to land on the play line
            let reflected = reflect_across(-eval.hit_dir, wall.direction);
            let Some(t) =
                ray_segment_intersection(s_pos, reflected, play_line.a(), play_line.b())
            else {
                continue;
            };

            let speed = eval.speed + t;
            if speed >= speed_max {
                continue;
            }
            let strike_dir = -reflected;
            if let Some(play_dir) = play_line.play_dir
                && play_dir.dot(strike_dir) <= 0.0
            {
                continue;
            }

            let placement = s_pos + reflected * t;
            if obstruction_check {
                // The leg from the placement up to the bounce must be clear
                if world
                    .cast_circle(
                        placement,
                        config.striker_radius,
                        strike_dir,
                        t,
                        LayerMask::DISCS,
                    )
                    .is_some()
                {
                    continue;
                }
                if world
                    .overlap_circle(placement, config.striker_radius, LayerMask::DISCS)
                    .is_some()
                {
                    continue;
                }
            }

            best = Some(StrikeCandidate {
                puck: puck_id,
                pot: pot_id,
                placement,
                strike_dir,
                alignment: eval.alignment,
                speed,
                contact_point: approach.contact_point,
                reflection_point: Some(s_pos),
            });
        }

        if let Some(candidate) = best {
            out.push(candidate);
        }
    }
}

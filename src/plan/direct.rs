//! Direct-strike candidate search
//!
//! For every active puck: check the puck-to-pot run, compute the contact
//! point, then walk the placement candidates along the player's play line
//! keeping the best-aligned survivor.

use crate::board::{Disc, LineSegment, Pot};
use crate::config::BoardConfig;
use crate::query::CollisionQuery;

use super::candidate::{StrikeCandidate, approach, evaluate_placement, pair_is_blocked, placements};

/// Push at most one candidate per active puck for the given pot, searched
/// along `line`.
pub(crate) fn direct_candidates(
    world: &impl CollisionQuery,
    config: &BoardConfig,
    pucks: &[Disc],
    line: &LineSegment,
    pot_id: u32,
    pot: &Pot,
    obstruction_check: bool,
    out: &mut Vec<StrikeCandidate>,
) {
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
        for s_pos in placements(line, approach.contact_point, approach.dir, config.samples_per_line)
        {
            let Some(eval) = evaluate_placement(
                world,
                config,
                s_pos,
                &approach,
                puck_id,
                line.play_dir,
                obstruction_check,
            ) else {
                continue;
            };
            if best.is_some_and(|b| eval.alignment <= b.alignment) {
                continue;
            }

            best = Some(StrikeCandidate {
                puck: puck_id,
                pot: pot_id,
                placement: s_pos,
                strike_dir: eval.hit_dir,
                alignment: eval.alignment,
                speed: eval.speed,
                contact_point: approach.contact_point,
                reflection_point: None,
            });
        }

        if let Some(candidate) = best {
            out.push(candidate);
        }
    }
}

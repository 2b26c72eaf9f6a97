//! Best-shot selection across pots and passes
//!
//! Maps a player side onto its reachable pots, runs the direct and bank
//! searches in a fixed order, and keeps the first strictly-best-aligned
//! candidate. When the obstruction-checked search comes up empty it reruns
//! once with obstruction checks off, so a geometrically possible shot is
//! never lost to a momentarily parked puck.

use serde::{Deserialize, Serialize};

use crate::board::{BoardLayout, Disc};
use crate::config::BoardConfig;
use crate::consts::SIDE_COUNT;
use crate::query::CollisionQuery;

use super::bank::bank_candidates;
use super::direct::direct_candidates;
use super::{PlanError, PlanOutcome, StrikeCandidate};

/// Frozen input snapshot for one planning call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningRequest {
    /// All pucks on the board; inactive ones are skipped
    pub pucks: Vec<Disc>,
}

/// Which search passes to run
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PassToggles {
    /// Direct shots at the far pots
    pub direct: bool,
    /// Bank shots off the wall opposite the player
    pub bank_back: bool,
    /// Bank shots off the two side walls
    pub bank_side: bool,
}

impl Default for PassToggles {
    fn default() -> Self {
        Self {
            direct: true,
            bank_back: true,
            bank_side: true,
        }
    }
}

/// Far pots, strikeable straight from the player's play line
fn direct_pots(player: u32) -> [u32; 2] {
    [(player + 1) % SIDE_COUNT, (player + 2) % SIDE_COUNT]
}

/// Near pots, reachable only off a wall
fn bank_pots(player: u32) -> [u32; 2] {
    [player, (player + 3) % SIDE_COUNT]
}

/// Run every enabled pass and concatenate candidates in the fixed order:
/// direct pots, back-wall banks, side-wall banks.
fn gather(
    world: &impl CollisionQuery,
    layout: &BoardLayout,
    config: &BoardConfig,
    request: &PlanningRequest,
    player: u32,
    toggles: PassToggles,
    obstruction_check: bool,
) -> Vec<StrikeCandidate> {
    let play_line = &layout.play_lines[player as usize];
    let mut out = Vec::new();

    if toggles.direct {
        for pot_id in direct_pots(player) {
            direct_candidates(
                world,
                config,
                &request.pucks,
                play_line,
                pot_id,
                &layout.pots[pot_id as usize],
                obstruction_check,
                &mut out,
            );
        }
    }

    if toggles.bank_back {
        let wall = &layout.walls[((player + 2) % SIDE_COUNT) as usize];
        for pot_id in bank_pots(player) {
            bank_candidates(
                world,
                config,
                &request.pucks,
                wall,
                play_line,
                pot_id,
                &layout.pots[pot_id as usize],
                obstruction_check,
                &mut out,
            );
        }
    }

    if toggles.bank_side {
        for wall_side in [(player + 1) % SIDE_COUNT, (player + 3) % SIDE_COUNT] {
            let wall = &layout.walls[wall_side as usize];
            for pot_id in bank_pots(player) {
                bank_candidates(
                    world,
                    config,
                    &request.pucks,
                    wall,
                    play_line,
                    pot_id,
                    &layout.pots[pot_id as usize],
                    obstruction_check,
                    &mut out,
                );
            }
        }
    }

    out
}

/// Index of the strictly highest-alignment candidate; ties keep the first
/// occurrence. Never re-sorts.
pub(crate) fn select_best(candidates: &[StrikeCandidate]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, c) in candidates.iter().enumerate() {
        if best.is_none_or(|b| c.alignment > candidates[b].alignment) {
            best = Some(i);
        }
    }
    best
}

/// Plan the single best shot for one player side.
///
/// Runs the obstruction-checked search first; if it finds nothing, retries
/// exactly once with obstruction checks relaxed. An empty result after both
/// passes is the normal `NoShotAvailable` outcome, not an error.
pub fn plan_best_shot(
    world: &impl CollisionQuery,
    layout: &BoardLayout,
    config: &BoardConfig,
    request: &PlanningRequest,
    player: u32,
    toggles: PassToggles,
    obstruction_check: bool,
) -> Result<PlanOutcome, PlanError> {
    if player >= SIDE_COUNT {
        return Err(PlanError::InvalidPlayer {
            player,
            sides: SIDE_COUNT,
        });
    }
    // The canonical mapping indexes all four sides and pots, whatever the
    // toggles say; a short layout must fail here, not panic mid-search
    let required = SIDE_COUNT as usize;
    if layout.play_lines.len() < required
        || layout.walls.len() < required
        || layout.pots.len() < required
    {
        return Err(PlanError::IncompleteLayout {
            play_lines: layout.play_lines.len(),
            walls: layout.walls.len(),
            pots: layout.pots.len(),
            required,
        });
    }
    if request.pucks.is_empty() {
        return Err(PlanError::EmptyBoard);
    }

    for check in [obstruction_check, false] {
        let candidates = gather(world, layout, config, request, player, toggles, check);
        log::debug!(
            "player {player}: {} candidate(s), obstruction_check={check}",
            candidates.len(),
        );
        if let Some(i) = select_best(&candidates) {
            return Ok(PlanOutcome::Shot(candidates[i]));
        }
        if !obstruction_check {
            break;
        }
    }

    Ok(PlanOutcome::NoShotAvailable)
}

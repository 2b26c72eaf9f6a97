//! Demo entry point
//!
//! Scatters a seeded board, plans the best shot for every side, and walks one
//! full turn cycle with a logging applicator. Seed comes from the first CLI
//! argument when given.

use glam::Vec2;

use carrom_strike::apply::{ShotApplicator, TurnCycle};
use carrom_strike::board::scatter_pucks;
use carrom_strike::consts::{PUCK_COUNT, SIDE_COUNT};
use carrom_strike::plan::{PassToggles, PlanOutcome, PlanningRequest};
use carrom_strike::world::DiscWorld;
use carrom_strike::{BoardConfig, BoardLayout, plan_best_shot};

/// Applicator that just narrates what the physics host would do
struct LogApplicator;

impl ShotApplicator for LogApplicator {
    fn place_striker(&mut self, pos: Vec2) {
        log::info!("striker placed at {pos}");
    }
    fn set_striker_velocity(&mut self, vel: Vec2) {
        log::info!("striker velocity {vel} (speed {:.2})", vel.length());
    }
    fn activate_striker(&mut self) {
        log::info!("striker activated");
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42u64);

    let config = BoardConfig::default();
    let layout = BoardLayout::standard(&config);
    let request = PlanningRequest {
        pucks: scatter_pucks(PUCK_COUNT, config.half_extent * 0.6, config.puck_radius, seed),
    };
    let world = DiscWorld::new(&request.pucks, config.half_extent);
    log::info!("board seeded with {} pucks (seed {seed})", request.pucks.len());

    for player in 0..SIDE_COUNT {
        match plan_best_shot(
            &world,
            &layout,
            &config,
            &request,
            player,
            PassToggles::default(),
            true,
        ) {
            Ok(PlanOutcome::Shot(c)) => {
                let kind = if c.reflection_point.is_some() {
                    "bank"
                } else {
                    "direct"
                };
                log::info!(
                    "player {player}: {kind} shot, puck {} -> pot {}, \
                     alignment {:.3}, speed {:.2}",
                    c.puck,
                    c.pot,
                    c.alignment,
                    c.speed,
                );
            }
            Ok(PlanOutcome::NoShotAvailable) => {
                log::info!("player {player}: no shot available");
            }
            Err(e) => log::error!("player {player}: {e}"),
        }
    }

    // Walk one full turn for player 0
    let mut cycle = TurnCycle::new();
    let mut applicator = LogApplicator;
    cycle.begin_planning();
    let outcome = plan_best_shot(
        &world,
        &layout,
        &config,
        &request,
        0,
        PassToggles::default(),
        true,
    )
    .expect("player 0 is always in range");
    cycle.resolve(outcome);
    cycle.commit(&mut applicator);
    cycle.fire(&mut applicator);
    cycle.settled();
}

//! Shot application
//!
//! The physics host owns the striker; the planner only hands it a candidate.
//! `ShotApplicator` is the outbound port, `TurnCycle` tracks one
//! planning-to-execution cycle.

use glam::Vec2;

use crate::plan::{PlanOutcome, StrikeCandidate};

/// Outbound port to the physics host. For a committed shot the calls arrive
/// exactly once each, in declaration order.
pub trait ShotApplicator {
    fn place_striker(&mut self, pos: Vec2);
    fn set_striker_velocity(&mut self, vel: Vec2);
    fn activate_striker(&mut self);
}

/// Phase of one planning-to-execution cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TurnPhase {
    /// Waiting for a turn to start
    #[default]
    Idle,
    /// Snapshot frozen, search running
    Planning,
    /// A candidate was found and awaits commitment
    Found(StrikeCandidate),
    /// Search exhausted; the striker stays unplaced this turn
    NoShot,
    /// Striker placed, velocity pending
    Committed(StrikeCandidate),
    /// Velocity applied; waiting for the discs to settle
    Fired,
}

/// State machine for one shot. Illegal transitions are logged and ignored,
/// never applied.
#[derive(Debug, Clone, Default)]
pub struct TurnCycle {
    phase: TurnPhase,
}

impl TurnCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// `Idle -> Planning`
    pub fn begin_planning(&mut self) {
        if self.phase == TurnPhase::Idle {
            self.phase = TurnPhase::Planning;
        } else {
            log::warn!("begin_planning ignored in phase {:?}", self.phase);
        }
    }

    /// `Planning -> Found | NoShot`
    pub fn resolve(&mut self, outcome: PlanOutcome) {
        if self.phase != TurnPhase::Planning {
            log::warn!("resolve ignored in phase {:?}", self.phase);
            return;
        }
        self.phase = match outcome {
            PlanOutcome::Shot(candidate) => TurnPhase::Found(candidate),
            PlanOutcome::NoShotAvailable => TurnPhase::NoShot,
        };
    }

    /// `Found -> Committed`: place the striker at the candidate position
    pub fn commit(&mut self, applicator: &mut impl ShotApplicator) {
        if let TurnPhase::Found(candidate) = self.phase {
            applicator.place_striker(candidate.placement);
            self.phase = TurnPhase::Committed(candidate);
        } else {
            log::warn!("commit ignored in phase {:?}", self.phase);
        }
    }

    /// `Committed -> Fired`: impart the strike velocity and activate
    pub fn fire(&mut self, applicator: &mut impl ShotApplicator) {
        if let TurnPhase::Committed(candidate) = self.phase {
            applicator.set_striker_velocity(candidate.strike_dir * candidate.speed);
            applicator.activate_striker();
            self.phase = TurnPhase::Fired;
        } else {
            log::warn!("fire ignored in phase {:?}", self.phase);
        }
    }

    /// `Fired | NoShot -> Idle`: the host signals all discs at rest
    pub fn settled(&mut self) {
        match self.phase {
            TurnPhase::Fired | TurnPhase::NoShot => self.phase = TurnPhase::Idle,
            _ => log::warn!("settled ignored in phase {:?}", self.phase),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl ShotApplicator for Recorder {
        fn place_striker(&mut self, pos: Vec2) {
            self.calls.push(format!("place {pos}"));
        }
        fn set_striker_velocity(&mut self, vel: Vec2) {
            self.calls.push(format!("velocity {vel}"));
        }
        fn activate_striker(&mut self) {
            self.calls.push("activate".into());
        }
    }

    fn candidate() -> StrikeCandidate {
        StrikeCandidate {
            puck: 0,
            pot: 1,
            placement: Vec2::new(-3.0, 0.0),
            strike_dir: Vec2::new(1.0, 0.0),
            alignment: 1.0,
            speed: 8.0,
            contact_point: Vec2::new(-0.63, 0.0),
            reflection_point: None,
        }
    }

    #[test]
    fn test_full_cycle_call_order() {
        let mut cycle = TurnCycle::new();
        let mut recorder = Recorder::default();

        cycle.begin_planning();
        cycle.resolve(PlanOutcome::Shot(candidate()));
        cycle.commit(&mut recorder);
        cycle.fire(&mut recorder);
        cycle.settled();

        assert_eq!(cycle.phase(), &TurnPhase::Idle);
        assert_eq!(recorder.calls.len(), 3);
        assert!(recorder.calls[0].starts_with("place"));
        assert!(recorder.calls[1].starts_with("velocity"));
        assert_eq!(recorder.calls[2], "activate");
    }

    #[test]
    fn test_no_shot_leaves_striker_unplaced() {
        let mut cycle = TurnCycle::new();
        let mut recorder = Recorder::default();

        cycle.begin_planning();
        cycle.resolve(PlanOutcome::NoShotAvailable);
        assert_eq!(cycle.phase(), &TurnPhase::NoShot);

        // Commit and fire are illegal here and must not touch the host
        cycle.commit(&mut recorder);
        cycle.fire(&mut recorder);
        assert!(recorder.calls.is_empty());

        cycle.settled();
        assert_eq!(cycle.phase(), &TurnPhase::Idle);
    }

    #[test]
    fn test_illegal_transitions_are_ignored() {
        let mut cycle = TurnCycle::new();
        let mut recorder = Recorder::default();

        cycle.resolve(PlanOutcome::Shot(candidate()));
        assert_eq!(cycle.phase(), &TurnPhase::Idle);

        cycle.commit(&mut recorder);
        cycle.settled();
        assert_eq!(cycle.phase(), &TurnPhase::Idle);
        assert!(recorder.calls.is_empty());
    }
}

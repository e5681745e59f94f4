use crate::actions::{BodyActions, MoveDiagnostics};
use crate::constants::{
    DIST_THRESHOLD_BALL_RATE, INTERCEPT_OPPONENT_MARGIN, INTERCEPT_SURE_REACH, MIN_DIST_THRESHOLD,
    TACKLE_BODY_ANGLE_THRESHOLD, TACKLE_MIN_PROBABILITY,
};
use crate::params::ServerParams;
use crate::positioning::HomePosition;
use crate::stamina::{DashPowerContext, StaminaRegulator};
use crate::world::WorldSnapshot;
use log::debug;
use std::fmt::{Display, Formatter};

/// Command issued by [`BasicMove::execute`] in one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveDecision {
    Tackle,
    Intercept,
    GoToPoint(MoveDiagnostics),
    TurnToBall(MoveDiagnostics),
}

impl MoveDecision {
    pub fn diagnostics(&self) -> Option<&MoveDiagnostics> {
        match self {
            MoveDecision::GoToPoint(diagnostics) | MoveDecision::TurnToBall(diagnostics) => Some(diagnostics),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoveDecision::Tackle => "tackle",
            MoveDecision::Intercept => "intercept",
            MoveDecision::GoToPoint(_) => "go_to_point",
            MoveDecision::TurnToBall(_) => "turn_to_ball",
        }
    }
}

impl Display for MoveDecision {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.diagnostics() {
            Some(diagnostics) => write!(f, "{} {}", self.name(), diagnostics),
            None => write!(f, "{}", self.name()),
        }
    }
}

/// Off-ball movement of a field player: contest the ball, chase it, or hold
/// the formation slot.
///
/// One instance lives as long as the agent; only the stamina regime is
/// carried from one cycle to the next.
#[derive(Debug, Clone, Default)]
pub struct BasicMove {
    stamina: StaminaRegulator,
    params: ServerParams,
}

impl BasicMove {
    pub fn new(params: ServerParams) -> Self {
        BasicMove {
            stamina: StaminaRegulator::default(),
            params,
        }
    }

    pub fn params(&self) -> &ServerParams {
        &self.params
    }

    pub fn is_recovering(&self) -> bool {
        self.stamina.is_recovering()
    }

    pub fn execute<B: BodyActions>(&mut self, world: &WorldSnapshot, body: &mut B) -> MoveDecision {
        if body.tackle(world, TACKLE_MIN_PROBABILITY, TACKLE_BODY_ANGLE_THRESHOLD) {
            debug!("{}: tackle", world.cycle);
            return MoveDecision::Tackle;
        }

        if Self::should_intercept(world) {
            debug!(
                "{}: intercept (self={} mate={} opp={})",
                world.cycle, world.intercept.self_reach, world.intercept.teammate_reach, world.intercept.opponent_reach
            );
            body.intercept(world);
            return MoveDecision::Intercept;
        }

        let home = HomePosition::evaluate(world, &self.params);
        let dash_power = self.stamina.dash_power(&DashPowerContext::from(world), &self.params);
        let dist_thr = (world.ball_distance() * DIST_THRESHOLD_BALL_RATE).max(MIN_DIST_THRESHOLD);

        let diagnostics = MoveDiagnostics {
            target: home.target,
            dist_thr,
            dash_power,
        };

        debug!("{}: go to home position {}", world.cycle, diagnostics);

        if body.go_to_point(world, home.target, dist_thr, dash_power) {
            MoveDecision::GoToPoint(diagnostics)
        } else {
            body.turn_to_ball(world);
            MoveDecision::TurnToBall(diagnostics)
        }
    }

    /// Chase the ball when no teammate controls it and the agent is either
    /// very close or the first of its side without an opponent far ahead.
    pub fn should_intercept(world: &WorldSnapshot) -> bool {
        if world.kickable_teammate {
            return false;
        }

        let reach = &world.intercept;

        reach.self_reach <= INTERCEPT_SURE_REACH
            || (reach.self_reach <= reach.teammate_reach
                && reach.self_reach < reach.opponent_reach.saturating_add(INTERCEPT_OPPONENT_MARGIN))
    }
}

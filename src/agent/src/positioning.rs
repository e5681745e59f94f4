use crate::constants::BALL_STEP_CAP;
use crate::field::{FieldPoint, normalize};
use crate::formation::{FALLBACK_REGION, FormationKind, FormationTable, MAX_ROLE_SLOTS};
use crate::offside::OffsideLine;
use crate::params::ServerParams;
use crate::world::WorldSnapshot;
use log::debug;

/// Home positions of every role slot for one ball prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationPositions {
    kind: FormationKind,
    positions: [FieldPoint; MAX_ROLE_SLOTS],
    fallback: FieldPoint,
}

impl FormationPositions {
    pub fn compute(ball: &FieldPoint, kind: FormationKind) -> Self {
        Self::compute_with_table(ball, kind, kind.table())
    }

    /// Same as [`FormationPositions::compute`] with a custom table.
    pub fn compute_with_table(ball: &FieldPoint, kind: FormationKind, table: &FormationTable) -> Self {
        let (u, v) = normalize(ball);

        let mut positions = [FieldPoint::zeros(); MAX_ROLE_SLOTS];
        for (position, region) in positions.iter_mut().zip(table.regions()) {
            *position = region.interpolate(u, v);
        }

        FormationPositions {
            kind,
            positions,
            fallback: FALLBACK_REGION.interpolate(u, v),
        }
    }

    pub fn kind(&self) -> FormationKind {
        self.kind
    }

    /// Home position of a role slot; unknown slots get the fallback point.
    pub fn get(&self, slot: u8) -> FieldPoint {
        match slot {
            1..=11 => self.positions[slot as usize - 1],
            _ => self.fallback,
        }
    }

    pub fn positions(&self) -> &[FieldPoint] {
        &self.positions
    }

    /// Pulls every slot back behind the offside line.
    pub fn apply_offside(&mut self, line: f32) {
        OffsideLine::clamp(&mut self.positions, line);
    }
}

/// Number of cycles the ball is projected before computing the formation.
/// Only open play projects the ball: to the moment the fastest player of
/// either side can reach it.
pub fn ball_step(world: &WorldSnapshot) -> u32 {
    if world.game_mode.is_open_play() {
        world.intercept.fastest_reach().min(BALL_STEP_CAP)
    } else {
        0
    }
}

/// Home position of one role slot, without offside handling.
pub fn home_position<I>(ball_prediction: &FieldPoint, slot: u8, self_unum: u8, teammate_unums: I) -> FieldPoint
where
    I: IntoIterator<Item = u8>,
{
    let kind = FormationKind::select(self_unum, teammate_unums);
    kind.table().region(slot).interpolate_at(ball_prediction)
}

/// Result of the full home-position pipeline for the agent.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePosition {
    pub target: FieldPoint,
    pub ball_prediction: FieldPoint,
    pub ball_step: u32,
    pub offside_line: Option<f32>,
    pub formation: FormationPositions,
}

impl HomePosition {
    /// Ball projection, formation lookup and offside clamp for the agent's
    /// own slot.
    pub fn evaluate(world: &WorldSnapshot, params: &ServerParams) -> Self {
        let ball_step = ball_step(world);
        let ball_prediction = world.ball.inertia_point(ball_step, params.ball_decay);

        debug!(
            "home position: ball pos=({:.1} {:.1}) step={}",
            ball_prediction.x, ball_prediction.y, ball_step
        );

        let kind = FormationKind::select(world.me.unum, world.teammate_unums());
        let mut formation = FormationPositions::compute(&ball_prediction, kind);

        let offside_line = OffsideLine::compute(world, params);
        if let Some(line) = offside_line {
            formation.apply_offside(line);
        }

        HomePosition {
            target: formation.get(world.me.unum),
            ball_prediction,
            ball_step,
            offside_line,
            formation,
        }
    }
}

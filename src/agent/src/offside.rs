use crate::constants::{OFFSIDE_SAFETY_MARGIN, OFFSIDE_TRAP_REACH_CAP};
use crate::field::FieldPoint;
use crate::params::ServerParams;
use crate::world::WorldSnapshot;
use log::debug;

pub struct OffsideLine;

impl OffsideLine {
    /// Highest x a home position may take this cycle, or `None` when the
    /// league plays without offside.
    pub fn compute(world: &WorldSnapshot, params: &ServerParams) -> Option<f32> {
        if !params.use_offside {
            return None;
        }

        if params.kickoff_offside && world.game_mode.is_kickoff_restart() {
            return Some(0.0);
        }

        let mut max_x = world.offside_line_x;

        // A teammate about to trap the ball drags the legal line up to it
        let mate_step = world.intercept.teammate_reach;
        if mate_step < OFFSIDE_TRAP_REACH_CAP {
            let trap_pos = world.ball.inertia_point(mate_step, params.ball_decay);
            if trap_pos.x > max_x {
                max_x = trap_pos.x;
            }
        }

        Some(max_x - OFFSIDE_SAFETY_MARGIN)
    }

    /// Caps the x of every slot at `line`, y unchanged. Slot `n` is at index `n - 1`.
    pub fn clamp(positions: &mut [FieldPoint], line: f32) {
        for (idx, position) in positions.iter_mut().enumerate() {
            if position.x > line {
                debug!(
                    "____ {} offside. home_pos_x {:.2} -> {:.2}",
                    idx + 1,
                    position.x,
                    line
                );
                position.x = line;
            }
        }
    }
}

use crate::constants::{DANGER_DISTANCE, RECOVER_ENTER_RATE, RECOVER_EXIT_RATE, RELAXED_DASH_RATE};
use crate::params::ServerParams;
use crate::world::WorldSnapshot;
use log::debug;

/// What the regulator looks at in one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPowerContext {
    pub stamina: f32,
    pub capacity_is_empty: bool,
    pub extra_stamina: f32,
    pub recovery_increment: f32,
    pub self_x: f32,
    pub ball_x: f32,
    pub ball_distance: f32,
    pub defense_line_x: f32,
    pub offside_line_x: f32,
    pub kickable_teammate: bool,
}

impl From<&WorldSnapshot> for DashPowerContext {
    fn from(world: &WorldSnapshot) -> Self {
        DashPowerContext {
            stamina: world.me.stamina,
            capacity_is_empty: world.me.capacity_is_empty(),
            extra_stamina: world.me.player_type.extra_stamina,
            recovery_increment: world.me.stamina_recovery_increment(),
            self_x: world.me.position.x,
            ball_x: world.ball.position.x,
            ball_distance: world.ball_distance(),
            defense_line_x: world.defense_line_x,
            offside_line_x: world.offside_line_x,
            kickable_teammate: world.kickable_teammate,
        }
    }
}

/// Dash power controller with a normal and a recover regime.
///
/// Recover mode starts under half of the maximum stamina and ends above 70%;
/// between the two the previous regime is kept.
#[derive(Debug, Clone, Default)]
pub struct StaminaRegulator {
    recover_mode: bool,
}

impl StaminaRegulator {
    pub fn is_recovering(&self) -> bool {
        self.recover_mode
    }

    /// Hysteresis step on the recover flag.
    pub fn update_recover_mode(&mut self, stamina: f32, capacity_is_empty: bool, stamina_max: f32) {
        let previous = self.recover_mode;

        if capacity_is_empty {
            self.recover_mode = false;
        } else if stamina < stamina_max * RECOVER_ENTER_RATE {
            self.recover_mode = true;
        } else if stamina > stamina_max * RECOVER_EXIT_RATE {
            self.recover_mode = false;
        }

        if previous != self.recover_mode {
            debug!(
                "recover mode {} -> {} (stamina {:.0})",
                previous, self.recover_mode, stamina
            );
        }
    }

    /// Dash power for moving to the home position this cycle.
    pub fn dash_power(&mut self, ctx: &DashPowerContext, params: &ServerParams) -> f32 {
        if ctx.capacity_is_empty {
            self.update_recover_mode(ctx.stamina, true, params.stamina_max);
            return params.max_dash_power.min(ctx.stamina + ctx.extra_stamina);
        }

        self.update_recover_mode(ctx.stamina, false, params.stamina_max);

        let max_dash_power = params.max_dash_power;

        if ctx.defense_line_x > ctx.self_x && ctx.ball_x < ctx.defense_line_x + DANGER_DISTANCE {
            // behind our defense line with the ball close to it: sprint back
            max_dash_power
        } else if self.recover_mode {
            max_dash_power
        } else if ctx.kickable_teammate && ctx.ball_distance < DANGER_DISTANCE {
            max_dash_power
        } else if ctx.self_x > ctx.offside_line_x {
            max_dash_power
        } else {
            (ctx.recovery_increment * RELAXED_DASH_RATE).min(max_dash_power)
        }
    }
}

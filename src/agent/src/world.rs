use crate::constants::CAPACITY_EPSILON;
use crate::field::FieldPoint;
use crate::params::PlayerType;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    BeforeKickOff,
    PlayOn,
    KickOff,
    KickIn,
    FreeKick,
    CornerKick,
    GoalKick,
    AfterGoal,
    Offside,
    FoulCharge,
    BackPass,
    IndFreeKick,
    TimeOver,
}

impl GameMode {
    /// Play in which the ball keeps moving and can be projected forward.
    pub fn is_open_play(&self) -> bool {
        matches!(self, GameMode::PlayOn | GameMode::GoalKick)
    }

    pub fn is_kickoff_restart(&self) -> bool {
        matches!(self, GameMode::BeforeKickOff | GameMode::AfterGoal)
    }
}

impl Display for GameMode {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            GameMode::BeforeKickOff => write!(f, "before_kick_off"),
            GameMode::PlayOn => write!(f, "play_on"),
            GameMode::KickOff => write!(f, "kick_off"),
            GameMode::KickIn => write!(f, "kick_in"),
            GameMode::FreeKick => write!(f, "free_kick"),
            GameMode::CornerKick => write!(f, "corner_kick"),
            GameMode::GoalKick => write!(f, "goal_kick"),
            GameMode::AfterGoal => write!(f, "after_goal"),
            GameMode::Offside => write!(f, "offside"),
            GameMode::FoulCharge => write!(f, "foul_charge"),
            GameMode::BackPass => write!(f, "back_pass"),
            GameMode::IndFreeKick => write!(f, "indirect_free_kick"),
            GameMode::TimeOver => write!(f, "time_over"),
        }
    }
}

/// The agent's own body as estimated by the world model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfPlayer {
    pub unum: u8,
    pub position: FieldPoint,
    pub stamina: f32,
    pub stamina_capacity: f32,
    #[serde(default = "full_recovery")]
    pub recovery: f32,
    #[serde(default)]
    pub player_type: PlayerType,
    #[serde(default)]
    pub tackle_probability: f32,
    /// Body direction in degrees, 0 facing the opponent goal.
    #[serde(default)]
    pub body_angle: f32,
}

fn full_recovery() -> f32 {
    1.0
}

impl SelfPlayer {
    #[inline]
    pub fn capacity_is_empty(&self) -> bool {
        self.stamina_capacity >= 0.0 && self.stamina_capacity <= CAPACITY_EPSILON
    }

    /// Stamina regained in one cycle with the current recovery rate.
    #[inline]
    pub fn stamina_recovery_increment(&self) -> f32 {
        self.player_type.stamina_inc_max * self.recovery
    }

    /// Body direction folded into `[-180, 180)`.
    pub fn normalized_body_angle(&self) -> f32 {
        (self.body_angle + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// A teammate seen by the agent. Only its uniform number, which is not
/// always known, takes part in the decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerObject {
    #[serde(default)]
    pub unum: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallObject {
    pub position: FieldPoint,
    #[serde(default = "FieldPoint::zeros")]
    pub velocity: FieldPoint,
}

impl BallObject {
    /// Position the ball reaches after `steps` cycles without being touched,
    /// with its speed multiplied by `decay` every cycle.
    pub fn inertia_point(&self, steps: u32, decay: f32) -> FieldPoint {
        if steps == 0 {
            return self.position;
        }

        let travel = if (1.0 - decay).abs() < f32::EPSILON {
            steps as f32
        } else {
            (1.0 - decay.powi(steps.min(i32::MAX as u32) as i32)) / (1.0 - decay)
        };

        self.position + self.velocity * travel
    }
}

/// Reach cycles produced by the intercept predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterceptTable {
    pub self_reach: u32,
    pub teammate_reach: u32,
    pub opponent_reach: u32,
}

impl InterceptTable {
    pub fn new(self_reach: u32, teammate_reach: u32, opponent_reach: u32) -> Self {
        InterceptTable {
            self_reach,
            teammate_reach,
            opponent_reach,
        }
    }

    /// Cycles until the fastest player of either side touches the ball.
    pub fn fastest_reach(&self) -> u32 {
        self.self_reach
            .min(self.teammate_reach)
            .min(self.opponent_reach)
    }
}

/// Everything the decision core reads in one cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSnapshot {
    #[serde(default)]
    pub cycle: u32,
    pub game_mode: GameMode,
    pub me: SelfPlayer,
    #[serde(default)]
    pub teammates: Vec<PlayerObject>,
    pub ball: BallObject,
    pub intercept: InterceptTable,
    pub defense_line_x: f32,
    pub offside_line_x: f32,
    #[serde(default)]
    pub kickable_teammate: bool,
}

impl WorldSnapshot {
    #[inline]
    pub fn ball_distance(&self) -> f32 {
        (self.ball.position - self.me.position).norm()
    }

    /// Known uniform numbers of the teammates.
    pub fn teammate_unums(&self) -> impl Iterator<Item = u8> + '_ {
        self.teammates.iter().filter_map(|p| p.unum)
    }
}

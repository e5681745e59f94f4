/// Minimum success probability the tackle primitive must see before committing
pub const TACKLE_MIN_PROBABILITY: f32 = 0.8;

/// Body angle tolerance (degrees) handed to the tackle primitive
pub const TACKLE_BODY_ANGLE_THRESHOLD: f32 = 80.0;

/// The agent always intercepts when it can reach the ball within this many cycles
pub const INTERCEPT_SURE_REACH: u32 = 3;

/// Head start the fastest opponent may have before the agent gives up the chase
pub const INTERCEPT_OPPONENT_MARGIN: u32 = 3;

/// Upper bound on the number of cycles the ball is projected forward
pub const BALL_STEP_CAP: u32 = 1000;

/// Teammate reach cycles at or above this are too far off to move the offside line
pub const OFFSIDE_TRAP_REACH_CAP: u32 = 50;

/// Distance kept behind the offside line
pub const OFFSIDE_SAFETY_MARGIN: f32 = 1.0;

/// Minimum arrival threshold for the move branch
pub const MIN_DIST_THRESHOLD: f32 = 1.0;

/// Arrival threshold as a share of the current distance to the ball
pub const DIST_THRESHOLD_BALL_RATE: f32 = 0.1;

/// Stamina share under which recover mode starts
pub const RECOVER_ENTER_RATE: f32 = 0.5;

/// Stamina share above which recover mode ends
pub const RECOVER_EXIT_RATE: f32 = 0.7;

/// Ball distance (from the defense line, or from the agent) that calls for a full sprint
pub const DANGER_DISTANCE: f32 = 20.0;

/// Multiplier on the per-cycle stamina recovery used for the relaxed dash power
pub const RELAXED_DASH_RATE: f32 = 1.7;

/// Capacity at or below this is treated as exhausted
pub const CAPACITY_EPSILON: f32 = 1.0e-5;

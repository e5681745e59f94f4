use serde::{Deserialize, Serialize};

/// League/server parameters the decision core depends on.
///
/// Defaults follow the rcssserver v16 configuration. Every field is optional
/// when deserializing, so a scenario file only has to list what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerParams {
    pub max_dash_power: f32,
    pub stamina_max: f32,
    pub ball_decay: f32,
    pub use_offside: bool,
    pub kickoff_offside: bool,
}

impl Default for ServerParams {
    fn default() -> Self {
        ServerParams {
            max_dash_power: 100.0,
            stamina_max: 8000.0,
            ball_decay: 0.97,
            use_offside: true,
            kickoff_offside: true,
        }
    }
}

#[cfg(test)]
impl ServerParams {
    pub fn without_offside() -> Self {
        ServerParams {
            use_offside: false,
            ..Default::default()
        }
    }
}

/// Heterogeneous player parameters of the agent's own body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerType {
    /// Stamina regained per cycle at full recovery.
    pub stamina_inc_max: f32,
    /// Stamina that can still be spent once the capacity is gone.
    pub extra_stamina: f32,
}

impl Default for PlayerType {
    fn default() -> Self {
        PlayerType {
            stamina_inc_max: 45.0,
            extra_stamina: 50.0,
        }
    }
}

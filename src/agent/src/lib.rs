pub mod actions;
pub mod constants;
pub mod decision;
pub mod field;
pub mod formation;
pub mod offside;
pub mod params;
pub mod positioning;
pub mod stamina;
pub mod world;

pub use actions::{BodyActions, MoveDiagnostics};
pub use decision::{BasicMove, MoveDecision};
pub use field::FieldPoint;
pub use formation::{FormationError, FormationKind, FormationTable, RegionRect};
pub use offside::OffsideLine;
pub use params::{PlayerType, ServerParams};
pub use positioning::{FormationPositions, HomePosition, home_position};
pub use stamina::StaminaRegulator;

pub use world::{BallObject, GameMode, InterceptTable, PlayerObject, SelfPlayer, WorldSnapshot};

use crate::field::FieldPoint;
use crate::world::WorldSnapshot;
use std::fmt::{Display, Formatter};

/// Locomotion and ball-contest primitives the decision policy drives.
///
/// Every method returns `true` when a command was issued for this cycle.
pub trait BodyActions {
    fn tackle(&mut self, world: &WorldSnapshot, min_probability: f32, body_angle_threshold: f32) -> bool;

    fn intercept(&mut self, world: &WorldSnapshot) -> bool;

    /// Move towards `target`. Returns `false` when already within `dist_thr`
    /// of it, so nothing had to be done.
    fn go_to_point(&mut self, world: &WorldSnapshot, target: FieldPoint, dist_thr: f32, dash_power: f32) -> bool;

    fn turn_to_ball(&mut self, world: &WorldSnapshot) -> bool;
}

/// What the move branch decided, kept for debuggers and visualisers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveDiagnostics {
    pub target: FieldPoint,
    pub dist_thr: f32,
    pub dash_power: f32,
}

impl Display for MoveDiagnostics {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "target=({:.2} {:.2}) dist_thr={:.2} power={:.1}",
            self.target.x, self.target.y, self.dist_thr, self.dash_power
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_display() {
        let diagnostics = MoveDiagnostics {
            target: FieldPoint::new(24.88, -3.5),
            dist_thr: 1.0,
            dash_power: 76.5,
        };

        assert_eq!(
            diagnostics.to_string(),
            "target=(24.88 -3.50) dist_thr=1.00 power=76.5"
        );
    }
}

use nalgebra::Vector2;

/// A point on the pitch, in field-length units. The origin is the centre
/// spot and the own goal lies at negative x.
pub type FieldPoint = Vector2<f32>;

/// Half of the pitch length.
pub const HALF_LENGTH: f32 = 52.5;

/// Half of the pitch width.
pub const HALF_WIDTH: f32 = 34.0;

/// Divisor used to map ball x onto the formation interpolation factor.
/// Slightly larger than the pitch length, so a ball on the centre spot
/// lands just short of the rectangle midpoint on x.
pub const NORMALIZE_LENGTH: f32 = 105.5;

/// Divisor used to map ball y onto the formation interpolation factor.
pub const NORMALIZE_WIDTH: f32 = 68.0;

/// Maps a ball position onto the (u, v) interpolation factors.
///
/// Neither factor is clamped: a ball outside the pitch gives factors outside
/// `[0, 1]` and the home positions extrapolate past their rectangles.
#[inline]
pub fn normalize(point: &FieldPoint) -> (f32, f32) {
    let u = (point.x + HALF_LENGTH) / NORMALIZE_LENGTH;
    let v = (point.y + HALF_WIDTH) / NORMALIZE_WIDTH;

    (u, v)
}

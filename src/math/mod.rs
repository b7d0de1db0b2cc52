/// 2D point type. Screen coordinates: x grows right, y grows down.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Midpoint of two points.
#[must_use]
pub fn midpoint(p: &Point2, q: &Point2) -> Point2 {
    Point2::from((p.coords + q.coords) * 0.5)
}

/// Rotates a vector a quarter turn.
#[must_use]
pub fn rot90(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Unit vector along `v`, or `None` when `v` is (nearly) zero.
#[must_use]
pub fn unit(v: &Vector2) -> Option<Vector2> {
    v.try_normalize(TOLERANCE)
}

/// Sort key placing tangents in clockwise order around a vertex.
///
/// This is `atan2(dx, dy)`, not the conventional `atan2(dy, dx)`: with
/// y pointing down the key starts at straight down and sweeps through
/// right, up, left. Edge order at every vertex and therefore the shape of
/// the extracted term depend on it.
#[must_use]
pub fn clockwise_key(v: &Vector2) -> f64 {
    v.x.atan2(v.y)
}

/// Screen angle of a vector, `atan2(dy, dx)`.
#[must_use]
pub fn angle(v: &Vector2) -> f64 {
    v.y.atan2(v.x)
}

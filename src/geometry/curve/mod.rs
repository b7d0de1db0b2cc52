mod arc;
mod cubic;

pub use arc::ArcSegment;
pub use cubic::Cubic;

use crate::math::{unit, Point2, Vector2};

/// Trait for parametric Bézier pieces over `t ∈ [0, 1]`.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Derivative of the curve at parameter `t` (not normalized).
    fn derivative(&self, t: f64) -> Vector2;
}

/// Unit vector along `primary`, falling back to `fallback`, then to zero.
///
/// Hand-drawn input produces coincident control points now and then; a
/// tangent must still order deterministically instead of turning into NaN.
pub(crate) fn direction_or(primary: &Vector2, fallback: &Vector2) -> Vector2 {
    unit(primary)
        .or_else(|| unit(fallback))
        .unwrap_or_else(Vector2::zeros)
}

use crate::math::{Point2, Vector2};

use super::Curve;

/// A cubic Bézier piece with control points `a, b, c, d`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub a: Point2,
    pub b: Point2,
    pub c: Point2,
    pub d: Point2,
}

impl Cubic {
    /// Creates a new cubic from its four control points.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2, d: Point2) -> Self {
        Self { a, b, c, d }
    }

    /// Exact cubic form of a quadratic with control point `control`.
    #[must_use]
    pub fn from_quadratic(start: Point2, control: Point2, end: Point2) -> Self {
        let two_thirds = 2.0 / 3.0;
        Self {
            a: start,
            b: start + (control - start) * two_thirds,
            c: end + (control - end) * two_thirds,
            d: end,
        }
    }
}

impl Curve for Cubic {
    fn evaluate(&self, t: f64) -> Point2 {
        let s = 1.0 - t;
        Point2::from(
            self.a.coords * (s * s * s)
                + self.b.coords * (3.0 * s * s * t)
                + self.c.coords * (3.0 * s * t * t)
                + self.d.coords * (t * t * t),
        )
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let s = 1.0 - t;
        (self.b - self.a) * (3.0 * s * s)
            + (self.c - self.b) * (6.0 * s * t)
            + (self.d - self.c) * (3.0 * t * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::curve::ArcSegment;
    use approx::assert_relative_eq;

    #[test]
    fn quadratic_elevation_traces_same_curve() {
        let arc = ArcSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(1.0, 1.0),
        );
        let cubic = Cubic::from_quadratic(*arc.start(), arc.control_point(), *arc.end());
        for i in 0..=8 {
            let t = f64::from(i) / 8.0;
            assert_relative_eq!(cubic.evaluate(t), arc.evaluate(t), epsilon = 1e-12);
            assert_relative_eq!(cubic.derivative(t), arc.derivative(t), epsilon = 1e-12);
        }
    }

    #[test]
    fn endpoint_derivatives() {
        let c = Cubic::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(2.0, 2.0),
        );
        assert_relative_eq!(c.derivative(0.0), Vector2::new(3.0, 0.0));
        assert_relative_eq!(c.derivative(1.0), Vector2::new(0.0, 3.0));
    }
}

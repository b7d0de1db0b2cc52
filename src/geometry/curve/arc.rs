use crate::math::{Point2, Vector2};
use crate::topology::Side;

use super::{direction_or, Curve};

/// A single drawn edge stroke: a quadratic Bézier between two vertices.
///
/// The stroke is recorded as its two endpoints plus an `anchor`, the
/// center of gravity of the ink. A quadratic through the endpoints whose
/// midpoint (`t = 0.5`) lands on the anchor has control point
/// `2 * anchor - (start + end) / 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    start: Point2,
    end: Point2,
    anchor: Point2,
}

impl ArcSegment {
    /// Creates a new arc segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2, anchor: Point2) -> Self {
        Self { start, end, anchor }
    }

    /// Returns the start point (side `A`).
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point (side `B`).
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the curvature anchor.
    #[must_use]
    pub fn anchor(&self) -> &Point2 {
        &self.anchor
    }

    /// Returns the endpoint on the given side.
    #[must_use]
    pub fn endpoint(&self, side: Side) -> &Point2 {
        match side {
            Side::A => &self.start,
            Side::B => &self.end,
        }
    }

    /// Returns the quadratic control point implied by the anchor.
    #[must_use]
    pub fn control_point(&self) -> Point2 {
        Point2::from(self.anchor.coords * 2.0 - (self.start.coords + self.end.coords) * 0.5)
    }

    /// Unit tangent pointing from the endpoint on `side` into the curve.
    #[must_use]
    pub fn velocity(&self, side: Side) -> Vector2 {
        let from = self.endpoint(side);
        let to = self.endpoint(side.opposite());
        direction_or(&(self.control_point() - from), &(to - from))
    }

    /// Returns the same stroke traversed end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            anchor: self.anchor,
        }
    }
}

impl Curve for ArcSegment {
    fn evaluate(&self, t: f64) -> Point2 {
        let c = self.control_point();
        let s = 1.0 - t;
        Point2::from(
            self.start.coords * (s * s) + c.coords * (2.0 * s * t) + self.end.coords * (t * t),
        )
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let c = self.control_point();
        (c - self.start) * (2.0 * (1.0 - t)) + (self.end - c) * (2.0 * t)
    }
}

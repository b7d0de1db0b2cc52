use crate::math::{Point2, Vector2};
use crate::topology::Side;

use super::curve::{direction_or, ArcSegment, Cubic};

/// Handle scale at the two ends of a chain, reaching to the knot after next.
pub const OUTER_TENSION: f64 = 0.25;

/// Handle scale at interior knots, Catmull-Rom style.
pub const INNER_TENSION: f64 = 1.0 / 6.0;

/// A multi-segment edge produced by merging strokes end to end.
///
/// The chain keeps every merged [`ArcSegment`] in traversal order. Its
/// drawn shape is a smooth cubic spline through the knots
/// `[start, anchor_0, ..., anchor_n, end]`.
///
/// Invariant: holds at least one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    segments: Vec<ArcSegment>,
}

impl Chain {
    /// Builds a chain from segments already oriented end to end.
    ///
    /// Returns `None` for an empty segment list.
    #[must_use]
    pub fn from_segments(segments: Vec<ArcSegment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// Returns the merged segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[ArcSegment] {
        &self.segments
    }

    /// Returns the start point (side `A`).
    #[must_use]
    pub fn start(&self) -> &Point2 {
        self.segments[0].start()
    }

    /// Returns the end point (side `B`).
    #[must_use]
    pub fn end(&self) -> &Point2 {
        self.segments[self.segments.len() - 1].end()
    }

    /// Returns the anchors of all segments in traversal order.
    #[must_use]
    pub fn anchors(&self) -> Vec<Point2> {
        self.segments.iter().map(|s| *s.anchor()).collect()
    }

    /// Knots of the spline: the start, every anchor, then the end.
    fn knots(&self) -> Vec<Point2> {
        let mut knots = Vec::with_capacity(self.segments.len() + 2);
        knots.push(*self.start());
        knots.extend(self.segments.iter().map(|s| *s.anchor()));
        knots.push(*self.end());
        knots
    }

    /// Tangent handles for each knot.
    fn handles(knots: &[Point2]) -> Vec<Vector2> {
        let n = knots.len() - 1;
        (0..=n)
            .map(|i| {
                if i == 0 {
                    (knots[2] - knots[0]) * OUTER_TENSION
                } else if i == n {
                    (knots[n] - knots[n - 2]) * OUTER_TENSION
                } else {
                    (knots[i + 1] - knots[i - 1]) * INNER_TENSION
                }
            })
            .collect()
    }

    /// Returns the cubic pieces of the spline, one per pair of knots.
    ///
    /// Each piece starts and ends exactly on a knot, so the spline passes
    /// through every anchor.
    #[must_use]
    pub fn cubics(&self) -> Vec<Cubic> {
        let knots = self.knots();
        let handles = Self::handles(&knots);
        knots
            .windows(2)
            .enumerate()
            .map(|(i, w)| Cubic::new(w[0], w[0] + handles[i], w[1] - handles[i + 1], w[1]))
            .collect()
    }

    /// Unit tangent pointing from the endpoint on `side` into the chain.
    ///
    /// This is the direction of the outermost cubic's derivative at that
    /// end, which reaches toward the knot after next.
    #[must_use]
    pub fn velocity(&self, side: Side) -> Vector2 {
        let knots = self.knots();
        let n = knots.len() - 1;
        match side {
            Side::A => direction_or(&(knots[2] - knots[0]), &(knots[1] - knots[0])),
            Side::B => direction_or(&(knots[n - 2] - knots[n]), &(knots[n - 1] - knots[n])),
        }
    }

    /// Returns the chain traversed end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            segments: self.segments.iter().rev().map(ArcSegment::reversed).collect(),
        }
    }
}

use std::f64::consts::PI;

use crate::math::{angle, rot90, unit, Point2, Vector2};
use crate::topology::Side;

use super::chain::Chain;
use super::curve::{ArcSegment, Cubic, Curve};

/// Distance between an edge's anchor and the points offered for re-rooting.
pub const ROOT_CHOICE_OFFSET: f64 = 12.0;

/// A direction marker a renderer can place on an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowHead {
    /// Where the arrowhead sits.
    pub point: Point2,
    /// Rotation of the arrowhead in radians.
    pub theta: f64,
}

/// The geometric shape of a graph edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeShape {
    /// One drawn stroke.
    Arc(ArcSegment),
    /// Several strokes merged through removed bend or crossing vertices.
    Chain(Chain),
}

impl EdgeShape {
    /// Creates a single-stroke shape.
    #[must_use]
    pub fn arc(start: Point2, end: Point2, anchor: Point2) -> Self {
        Self::Arc(ArcSegment::new(start, end, anchor))
    }

    /// Returns the underlying strokes in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[ArcSegment] {
        match self {
            Self::Arc(arc) => std::slice::from_ref(arc),
            Self::Chain(chain) => chain.segments(),
        }
    }

    /// Returns the point at side `A`.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        match self {
            Self::Arc(arc) => arc.start(),
            Self::Chain(chain) => chain.start(),
        }
    }

    /// Returns the point at side `B`.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        match self {
            Self::Arc(arc) => arc.end(),
            Self::Chain(chain) => chain.end(),
        }
    }

    /// Returns the point on the given side.
    #[must_use]
    pub fn endpoint(&self, side: Side) -> &Point2 {
        match side {
            Side::A => self.start(),
            Side::B => self.end(),
        }
    }

    /// Returns every anchor in traversal order.
    #[must_use]
    pub fn anchors(&self) -> Vec<Point2> {
        self.segments().iter().map(|s| *s.anchor()).collect()
    }

    /// Unit tangent pointing from the endpoint on `side` into the edge.
    #[must_use]
    pub fn velocity(&self, side: Side) -> Vector2 {
        match self {
            Self::Arc(arc) => arc.velocity(side),
            Self::Chain(chain) => chain.velocity(side),
        }
    }

    /// Point where the edge is cut when it is broken to make a root.
    #[must_use]
    pub fn break_point(&self) -> Point2 {
        *self.segments()[0].anchor()
    }

    /// Returns the shape traversed end to start.
    #[must_use]
    pub fn reversed(&self) -> Self {
        match self {
            Self::Arc(arc) => Self::Arc(arc.reversed()),
            Self::Chain(chain) => Self::Chain(chain.reversed()),
        }
    }

    /// Concatenates `self` and `next` into one chain.
    ///
    /// `self` must end where `next` starts; orient both with
    /// [`EdgeShape::reversed`] first where needed.
    #[must_use]
    pub fn join(&self, next: &EdgeShape) -> Self {
        let segments = self.segments().iter().chain(next.segments()).cloned().collect();
        match Chain::from_segments(segments) {
            Some(chain) => Self::Chain(chain),
            None => self.clone(),
        }
    }

    /// Returns the cubic pieces a renderer strokes for this edge.
    #[must_use]
    pub fn cubics(&self) -> Vec<Cubic> {
        match self {
            Self::Arc(arc) => vec![Cubic::from_quadratic(
                *arc.start(),
                arc.control_point(),
                *arc.end(),
            )],
            Self::Chain(chain) => chain.cubics(),
        }
    }

    /// Unit normal of the first stroke's chord, if the chord has length.
    #[must_use]
    pub fn chord_normal(&self) -> Option<Vector2> {
        let first = &self.segments()[0];
        unit(&(first.start() - first.end())).map(|u| rot90(&u))
    }

    /// Two points on either side of the break point, for side `A` and `B`.
    #[must_use]
    pub fn root_points(&self) -> [Point2; 2] {
        let m = self.break_point();
        let off = self.chord_normal().unwrap_or_else(Vector2::zeros) * ROOT_CHOICE_OFFSET;
        [m + off, m - off]
    }

    /// Arrowheads showing the edge flowing toward its `downstream` side.
    #[must_use]
    pub fn arrow_heads(&self, downstream: Side) -> Vec<ArrowHead> {
        let turn = match downstream {
            Side::A => 0.5 * PI,
            Side::B => 1.5 * PI,
        };
        match self {
            Self::Arc(arc) => vec![ArrowHead {
                point: *arc.anchor(),
                theta: turn - angle(&(arc.start() - arc.end())),
            }],
            Self::Chain(chain) => chain
                .cubics()
                .iter()
                .map(|cubic| ArrowHead {
                    point: cubic.evaluate(0.5),
                    theta: turn - angle(&(-cubic.derivative(0.5))),
                })
                .collect(),
        }
    }
}

use crate::geometry::EdgeShape;
use crate::math::Point2;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the graph.
    pub struct EdgeId;
}

/// One of the two ends of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// Returns the other end.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A reference to one end of one edge.
///
/// Vertices list the ends incident to them; the reference never owns the
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeEnd {
    /// The edge identifier.
    pub edge: EdgeId,
    /// Which end of the edge.
    pub side: Side,
}

impl EdgeEnd {
    /// Creates a new edge end.
    #[must_use]
    pub fn new(edge: EdgeId, side: Side) -> Self {
        Self { edge, side }
    }

    /// The other end of the same edge.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self {
            edge: self.edge,
            side: self.side.opposite(),
        }
    }
}

/// A point a user can pick to root the graph on a particular edge end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootChoice {
    /// Where the choice is offered on screen.
    pub point: Point2,
    /// The edge end that breaking at this choice treats as "near".
    pub end: EdgeEnd,
}

/// Data associated with a graph edge.
///
/// An edge connects vertex `a` (at side `A` of its shape) to vertex `b`
/// (at side `B`).
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    /// Vertex at side `A`.
    pub a: VertexId,
    /// Vertex at side `B`.
    pub b: VertexId,
    /// The geometric shape of this edge.
    pub shape: EdgeShape,
}

impl EdgeData {
    /// Creates a new edge.
    #[must_use]
    pub fn new(a: VertexId, b: VertexId, shape: EdgeShape) -> Self {
        Self { a, b, shape }
    }

    /// Returns the vertex at the given side.
    #[must_use]
    pub fn endpoint(&self, side: Side) -> VertexId {
        match side {
            Side::A => self.a,
            Side::B => self.b,
        }
    }

    /// Returns the edge with its ends swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
            shape: self.shape.reversed(),
        }
    }

    /// The two points offered for re-rooting on this edge, tagged with the
    /// end each one is nearest to.
    #[must_use]
    pub fn root_choices(&self, id: EdgeId) -> [RootChoice; 2] {
        let [pa, pb] = self.shape.root_points();
        [
            RootChoice {
                point: pa,
                end: EdgeEnd::new(id, Side::A),
            },
            RootChoice {
                point: pb,
                end: EdgeEnd::new(id, Side::B),
            },
        ]
    }
}

use crate::math::Point2;

use super::edge::{EdgeEnd, EdgeId};

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the graph.
    pub struct VertexId;
}

/// Data associated with a graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexData {
    /// The position of the vertex.
    pub point: Point2,
    /// Edge ends incident to this vertex, in clockwise order.
    pub ends: Vec<EdgeEnd>,
}

impl VertexData {
    /// Creates a new vertex at the given point with no incident edges.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            ends: Vec::new(),
        }
    }

    /// Number of incident edge ends. A self-loop counts twice.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.ends.len()
    }

    /// Position of `end` in the clockwise order, if present.
    #[must_use]
    pub fn position_of(&self, end: EdgeEnd) -> Option<usize> {
        self.ends.iter().position(|&e| e == end)
    }

    /// Whether any two ends belong to the same edge.
    #[must_use]
    pub fn has_loop(&self) -> bool {
        self.ends
            .iter()
            .enumerate()
            .any(|(i, e)| self.ends[i + 1..].iter().any(|f| f.edge == e.edge))
    }

    /// Whether an end of `edge` is incident here.
    #[must_use]
    pub fn touches(&self, edge: EdgeId) -> bool {
        self.ends.iter().any(|e| e.edge == edge)
    }
}

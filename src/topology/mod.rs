pub mod edge;
pub mod vertex;

pub use edge::{EdgeData, EdgeEnd, EdgeId, RootChoice, Side};
pub use vertex::{VertexData, VertexId};

use crate::error::GraphError;
use slotmap::SlotMap;

/// Central arena that owns a planar graph's vertices and edges.
///
/// Vertices and edges reference each other via typed IDs (generational
/// indices). A removed slot is reissued only under a new version, so an ID
/// created by a merge or a split never aliases one that was retired.
/// Iteration follows slot order, which makes every pass over the graph
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
}

impl Graph {
    /// Creates a new, empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Inserts a vertex and returns its ID.
    pub fn add_vertex(&mut self, data: VertexData) -> VertexId {
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the graph.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, GraphError> {
        self.vertices
            .get(id)
            .ok_or(GraphError::EntityNotFound("vertex"))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the graph.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, GraphError> {
        self.vertices
            .get_mut(id)
            .ok_or(GraphError::EntityNotFound("vertex"))
    }

    /// Removes a vertex, returning its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is not in the graph.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<VertexData, GraphError> {
        self.vertices
            .remove(id)
            .ok_or(GraphError::EntityNotFound("vertex"))
    }

    /// Iterates over all vertices in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &VertexData)> {
        self.vertices.iter()
    }

    /// Returns all vertex IDs in slot order.
    #[must_use]
    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.vertices.keys().collect()
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Inserts an edge and returns its ID.
    ///
    /// The caller is responsible for registering the edge's ends with its
    /// endpoint vertices.
    pub fn add_edge(&mut self, data: EdgeData) -> EdgeId {
        self.edges.insert(data)
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the graph.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, GraphError> {
        self.edges.get(id).ok_or(GraphError::EntityNotFound("edge"))
    }

    /// Removes an edge, returning its data.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the graph.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<EdgeData, GraphError> {
        self.edges
            .remove(id)
            .ok_or(GraphError::EntityNotFound("edge"))
    }

    /// Iterates over all edges in slot order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &EdgeData)> {
        self.edges.iter()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Incidence ---

    /// Inserts an edge between `a` and `b` and appends its ends to both
    /// vertices.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is not in the graph.
    pub fn connect(&mut self, data: EdgeData) -> Result<EdgeId, GraphError> {
        let (a, b) = (data.a, data.b);
        self.vertex(a)?;
        self.vertex(b)?;
        let id = self.add_edge(data);
        self.vertex_mut(a)?.ends.push(EdgeEnd::new(id, Side::A));
        self.vertex_mut(b)?.ends.push(EdgeEnd::new(id, Side::B));
        Ok(id)
    }

    /// Vertex holding the given edge end.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the graph.
    pub fn vertex_at(&self, end: EdgeEnd) -> Result<VertexId, GraphError> {
        Ok(self.edge(end.edge)?.endpoint(end.side))
    }

    /// Crosses the edge of `end`, returning the vertex on the far side and
    /// the edge end by which it is entered.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not in the graph.
    pub fn across(&self, end: EdgeEnd) -> Result<(VertexId, EdgeEnd), GraphError> {
        let far = end.opposite();
        Ok((self.vertex_at(far)?, far))
    }

    /// Replaces `old` with `new` in the clockwise list of `vertex`, keeping
    /// its position.
    ///
    /// # Errors
    ///
    /// Returns an error if the vertex is missing or does not hold `old`.
    pub fn replace_end(
        &mut self,
        vertex: VertexId,
        old: EdgeEnd,
        new: EdgeEnd,
    ) -> Result<(), GraphError> {
        let data = self.vertex_mut(vertex)?;
        let idx = data.position_of(old).ok_or(GraphError::DetachedEdgeEnd {
            vertex,
            edge: old.edge,
        })?;
        data.ends[idx] = new;
        Ok(())
    }
}

use crate::error::{GraphError, Result};
use crate::geometry::EdgeShape;
use crate::math::{midpoint, rot90, unit, Vector2};
use crate::topology::{EdgeData, EdgeEnd, Graph, RootChoice, Side, VertexData, VertexId};

/// Where the synthetic root sits and how it was made.
#[derive(Debug, Clone, PartialEq)]
pub struct RootData {
    /// The degree-2 vertex created by the break.
    pub root: VertexId,
    /// Unit direction a renderer points the root stub in.
    pub root_dir: Vector2,
    /// Both choices of every other edge, for forcing a different root.
    pub other_roots: Vec<RootChoice>,
    /// The end, in the unbroken graph, whose edge was split.
    pub broken_edge: EdgeEnd,
}

/// A graph together with its synthetic root.
#[derive(Debug, Clone)]
pub struct RootedGraph {
    pub graph: Graph,
    pub root: RootData,
}

/// Roots a graph at its topmost vertex.
///
/// The vertex with the smallest `y` is chosen; among equally high vertices
/// the one with the smallest key, which is the earliest segmentation label,
/// wins. Its first edge end in clockwise order is broken with
/// [`BreakAtEdge`].
#[derive(Debug, Default)]
pub struct FindRoot;

impl FindRoot {
    /// Creates a new `FindRoot` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EmptyGraph`] if there are no vertices and
    /// [`GraphError::NoIncidentEdges`] if the topmost vertex is isolated.
    pub fn execute(&self, graph: &Graph) -> Result<RootedGraph> {
        let (top, data) = graph
            .vertices()
            .min_by(|(ia, a), (ib, b)| a.point.y.total_cmp(&b.point.y).then(ia.cmp(ib)))
            .ok_or(GraphError::EmptyGraph)?;
        let end = *data
            .ends
            .first()
            .ok_or(GraphError::NoIncidentEdges { vertex: top })?;
        BreakAtEdge::new(end).execute(graph)
    }
}

/// Splits one edge at its break point, inserting a root vertex.
///
/// The vertex at the given end is "near", the other one "far". The edge is
/// replaced by `far -> root` and `root -> near`, each bowed through the
/// midpoint between the break point and its endpoint. The root's ends are
/// `[far side, near side]`.
#[derive(Debug)]
pub struct BreakAtEdge {
    end: EdgeEnd,
}

impl BreakAtEdge {
    /// Creates a new `BreakAtEdge` operation for the given edge end.
    #[must_use]
    pub fn new(end: EdgeEnd) -> Self {
        Self { end }
    }

    /// Executes the operation, leaving the input untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge end is not part of the graph.
    pub fn execute(&self, input: &Graph) -> Result<RootedGraph> {
        let es = self.end;
        let mut graph = input.clone();
        let edge = graph.edge(es.edge)?.clone();

        let near = edge.endpoint(es.side);
        let far = edge.endpoint(es.side.opposite());
        let near_pos = *edge.shape.endpoint(es.side);
        let far_pos = *edge.shape.endpoint(es.side.opposite());
        let m = edge.shape.break_point();

        let root = graph.add_vertex(VertexData::new(m));
        let e_old = graph.add_edge(EdgeData::new(
            far,
            root,
            EdgeShape::arc(far_pos, m, midpoint(&m, &far_pos)),
        ));
        let e_new = graph.add_edge(EdgeData::new(
            root,
            near,
            EdgeShape::arc(m, near_pos, midpoint(&m, &near_pos)),
        ));

        graph.replace_end(far, es.opposite(), EdgeEnd::new(e_old, Side::A))?;
        graph.replace_end(near, es, EdgeEnd::new(e_new, Side::B))?;
        graph.vertex_mut(root)?.ends =
            vec![EdgeEnd::new(e_old, Side::B), EdgeEnd::new(e_new, Side::A)];
        graph.remove_edge(es.edge)?;

        let root_dir = unit(&(edge.shape.start() - edge.shape.end()))
            .map_or_else(|| Vector2::new(0.0, -1.0), |u| rot90(&u));

        let other_roots = input
            .edges()
            .filter(|(id, _)| *id != es.edge)
            .flat_map(|(id, e)| e.root_choices(id))
            .collect();

        tracing::debug!(?root, ?near, ?far, "broke edge to make root");

        Ok(RootedGraph {
            graph,
            root: RootData {
                root,
                root_dir,
                other_roots,
                broken_edge: es,
            },
        })
    }
}

use crate::error::{GraphError, Result};
use crate::topology::{EdgeData, EdgeEnd, EdgeId, Graph, Side, VertexId};

/// Removes bends and drawn crossings from a graph.
///
/// A degree-2 vertex is a bend in one stroke: it is removed and its two
/// edges are joined end to end into one chain. A degree-4 vertex is two
/// strokes crossing: the ends at cyclic positions 0/2 and 1/3 are joined
/// pairwise and the vertex is removed. Vertices of every other degree are
/// left alone.
///
/// A bend whose two ends belong to one edge is all that remains of a closed
/// ring with no real node on it. The ring is dropped with a warning.
///
/// Only the vertices present before the pass are considered, in key order.
/// The input graph is not modified.
#[derive(Debug, Default)]
pub struct Coalesce;

impl Coalesce {
    /// Creates a new `Coalesce` operation.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the operation, returning the coalesced graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::AmbiguousCrossing`] for a degree-4 vertex that
    /// is not two opposed strands.
    pub fn execute(&self, input: &Graph) -> Result<Graph> {
        let mut graph = input.clone();
        let mut bends = 0_usize;
        let mut crossings = 0_usize;
        let mut rings = 0_usize;

        for vertex in input.vertex_ids() {
            let ends = graph.vertex(vertex)?.ends.clone();
            match ends[..] {
                [e0, e1] => {
                    if e0.edge == e1.edge {
                        tracing::warn!(?vertex, "dropping closed ring with no node on it");
                        graph.remove_edge(e0.edge)?;
                        rings += 1;
                    } else {
                        merge(&mut graph, e0, e1)?;
                        bends += 1;
                    }
                }
                [e0, e1, e2, e3] => {
                    check_crossing(&graph, vertex, &ends)?;
                    merge(&mut graph, e0, e2)?;
                    merge(&mut graph, e1, e3)?;
                    crossings += 1;
                }
                _ => continue,
            }
            graph.remove_vertex(vertex)?;
        }

        tracing::debug!(
            bends,
            crossings,
            rings,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "coalesced graph"
        );
        Ok(graph)
    }
}

/// Rejects a degree-4 vertex unless it is two distinct strands whose
/// paired tangents point away from each other.
fn check_crossing(graph: &Graph, vertex: VertexId, ends: &[EdgeEnd]) -> Result<()> {
    if graph.vertex(vertex)?.has_loop() {
        return Err(GraphError::AmbiguousCrossing { vertex }.into());
    }
    let mut v = Vec::with_capacity(ends.len());
    for end in ends {
        v.push(graph.edge(end.edge)?.shape.velocity(end.side));
    }
    if v[0].dot(&v[2]) >= 0.0 || v[1].dot(&v[3]) >= 0.0 {
        return Err(GraphError::AmbiguousCrossing { vertex }.into());
    }
    Ok(())
}

/// Joins the edges of `into` and `out_of`, two ends meeting at one vertex,
/// into a single new edge. The far endpoints keep their clockwise order,
/// with the new edge in place of the old ones.
fn merge(graph: &mut Graph, into: EdgeEnd, out_of: EdgeEnd) -> Result<EdgeId> {
    let first = oriented(graph.edge(into.edge)?, into.side, Side::B);
    let second = oriented(graph.edge(out_of.edge)?, out_of.side, Side::A);
    let (u, w) = (first.a, second.b);

    let merged = graph.add_edge(EdgeData::new(u, w, first.shape.join(&second.shape)));
    graph.replace_end(u, into.opposite(), EdgeEnd::new(merged, Side::A))?;
    graph.replace_end(w, out_of.opposite(), EdgeEnd::new(merged, Side::B))?;
    graph.remove_edge(into.edge)?;
    graph.remove_edge(out_of.edge)?;
    Ok(merged)
}

/// Copy of `edge` flipped if needed so that its `at` end lands on `want`.
fn oriented(edge: &EdgeData, at: Side, want: Side) -> EdgeData {
    if at == want {
        edge.clone()
    } else {
        edge.reversed()
    }
}

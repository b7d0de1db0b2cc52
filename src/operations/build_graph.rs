use std::collections::BTreeMap;

use crate::error::Result;
use crate::geometry::EdgeShape;
use crate::math::clockwise_key;
use crate::raster::{Label, MarkType, Marks};
use crate::topology::{EdgeData, EdgeEnd, Graph, VertexData, VertexId};

/// Reconstructs a planar graph from segmented ink.
///
/// Every node blob becomes a vertex at its centroid. Every edge blob that
/// touches exactly two node blobs becomes an arc between them whose anchor
/// is the edge blob's centroid; edge blobs touching anything else are
/// dropped as ambiguous ink. Each vertex's edge ends are then sorted into
/// clockwise order.
pub struct BuildGraph<'a> {
    marks: &'a Marks,
}

impl<'a> BuildGraph<'a> {
    /// Creates a new `BuildGraph` operation.
    #[must_use]
    pub fn new(marks: &'a Marks) -> Self {
        Self { marks }
    }

    /// Executes the operation, returning the new graph.
    ///
    /// # Errors
    ///
    /// Returns an error only if the graph's own bookkeeping is broken.
    pub fn execute(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        let mut vertex_of: BTreeMap<Label, VertexId> = BTreeMap::new();

        for blob in self.marks.blobs() {
            if blob.kind == MarkType::Node {
                vertex_of.insert(blob.id, graph.add_vertex(VertexData::new(blob.centroid)));
            }
        }

        let mut dropped = 0_usize;
        for blob in self.marks.blobs() {
            if blob.kind != MarkType::Edge {
                continue;
            }
            let ends: Vec<VertexId> = blob
                .adjacent
                .iter()
                .filter_map(|label| vertex_of.get(label).copied())
                .collect();
            let [a, b] = ends[..] else {
                dropped += 1;
                tracing::warn!(
                    blob = blob.id,
                    touching = blob.adjacent.len(),
                    "dropping edge ink that does not join exactly two nodes"
                );
                continue;
            };
            if ends.len() != blob.adjacent.len() {
                dropped += 1;
                tracing::warn!(blob = blob.id, "dropping edge ink that touches non-node ink");
                continue;
            }
            let shape = EdgeShape::arc(
                graph.vertex(a)?.point,
                graph.vertex(b)?.point,
                blob.centroid,
            );
            graph.connect(EdgeData::new(a, b, shape))?;
        }

        for id in graph.vertex_ids() {
            sort_clockwise(&mut graph, id)?;
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            dropped,
            "built graph"
        );
        Ok(graph)
    }
}

/// Sorts the ends at `vertex` by the clockwise key of each edge's tangent.
pub(crate) fn sort_clockwise(graph: &mut Graph, vertex: VertexId) -> Result<()> {
    let mut keyed: Vec<(f64, EdgeEnd)> = Vec::new();
    for &end in &graph.vertex(vertex)?.ends {
        let velocity = graph.edge(end.edge)?.shape.velocity(end.side);
        keyed.push((clockwise_key(&velocity), end));
    }
    keyed.sort_by(|x, y| x.0.total_cmp(&y.0));
    graph.vertex_mut(vertex)?.ends = keyed.into_iter().map(|(_, end)| end).collect();
    Ok(())
}

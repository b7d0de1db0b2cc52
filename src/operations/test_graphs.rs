//! Small hand-built graphs shared by the operation tests.
//!
//! Vertices are inserted in the order segmentation would label them (top
//! to bottom, then left to right) and every edge is a straight arc from
//! the earlier vertex to the later one, so these graphs match what
//! `BuildGraph` produces for the same drawing.

#![allow(clippy::unwrap_used)]

use crate::geometry::EdgeShape;
use crate::math::{midpoint, Point2};
use crate::topology::{EdgeData, Graph, VertexData, VertexId};

use super::build_graph::sort_clockwise;

pub(crate) fn build(points: &[(f64, f64)], pairs: &[(usize, usize)]) -> (Graph, Vec<VertexId>) {
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = points
        .iter()
        .map(|&(x, y)| graph.add_vertex(VertexData::new(Point2::new(x, y))))
        .collect();
    for &(i, j) in pairs {
        let (i, j) = (i.min(j), i.max(j));
        let (a, b) = (Point2::new(points[i].0, points[i].1), Point2::new(points[j].0, points[j].1));
        let shape = EdgeShape::arc(a, b, midpoint(&a, &b));
        graph.connect(EdgeData::new(ids[i], ids[j], shape)).unwrap();
    }
    for &id in &ids {
        sort_clockwise(&mut graph, id).unwrap();
    }
    (graph, ids)
}

/// Apex, center, bottom-left, bottom-right; all six edges.
pub(crate) fn tetrahedron() -> Graph {
    build(
        &[(200.0, 40.0), (200.0, 190.0), (40.0, 280.0), (360.0, 280.0)],
        &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
    )
    .0
}

/// Outer diamond around an inner diamond, spokes between them.
pub(crate) fn cube() -> Graph {
    // 0: P1 top, 1: Q1, 2: P4 left, 3: Q4, 4: Q2, 5: P2 right, 6: Q3, 7: P3 bottom
    build(
        &[
            (200.0, 20.0),
            (200.0, 120.0),
            (20.0, 200.0),
            (120.0, 200.0),
            (280.0, 200.0),
            (380.0, 200.0),
            (200.0, 280.0),
            (200.0, 380.0),
        ],
        &[
            // outer cycle
            (0, 5),
            (5, 7),
            (7, 2),
            (2, 0),
            // inner cycle
            (1, 4),
            (4, 6),
            (6, 3),
            (3, 1),
            // spokes
            (0, 1),
            (5, 4),
            (7, 6),
            (2, 3),
        ],
    )
    .0
}

/// Two nodes joined by a straight edge and two bent ones; the bends are
/// degree-2 vertices.
pub(crate) fn bent_theta() -> Graph {
    // 0: A top, 1: X left bend, 2: Y right bend, 3: B bottom
    build(
        &[(150.0, 30.0), (40.0, 150.0), (260.0, 150.0), (150.0, 270.0)],
        &[(0, 3), (0, 1), (1, 3), (0, 2), (2, 3)],
    )
    .0
}

/// Two nodes joined by three straight-ish edges, already coalesced.
pub(crate) fn theta() -> Graph {
    // 0: A top, 1: B bottom; the side edges bulge through their anchors
    let mut graph = Graph::new();
    let a = Point2::new(150.0, 30.0);
    let b = Point2::new(150.0, 270.0);
    let va = graph.add_vertex(VertexData::new(a));
    let vb = graph.add_vertex(VertexData::new(b));
    for anchor in [(60.0, 150.0), (150.0, 150.0), (240.0, 150.0)] {
        let shape = EdgeShape::arc(a, b, Point2::new(anchor.0, anchor.1));
        graph.connect(EdgeData::new(va, vb, shape)).unwrap();
    }
    sort_clockwise(&mut graph, va).unwrap();
    sort_clockwise(&mut graph, vb).unwrap();
    graph
}

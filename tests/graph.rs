#![allow(
    clippy::unwrap_used,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]

mod common;

use approx::assert_relative_eq;
use common::synthetic_drawing::{crossed_square, cube, degree2, tetrahedron};
use lamdraw::geometry::EdgeShape;
use lamdraw::math::{midpoint, Point2};
use lamdraw::operations::{BuildGraph, Coalesce, FindMarks};
use lamdraw::raster::MarkType;
use lamdraw::topology::{EdgeEnd, Side};

#[test]
fn painted_drawings_segment_into_nodes_and_edges() {
    for (bitmap, nodes, edges) in [(tetrahedron(), 4, 6), (cube(), 8, 12), (degree2(), 4, 5)] {
        let marks = FindMarks::new(&bitmap).execute();
        let count = |kind: MarkType| marks.blobs().iter().filter(|b| b.kind == kind).count();
        assert_eq!(count(MarkType::Node), nodes);
        assert_eq!(count(MarkType::Edge), edges);
        assert_eq!(count(MarkType::Unknown), 0);
    }
}

#[test]
fn centroids_are_pixel_means() {
    let marks = FindMarks::new(&tetrahedron()).execute();
    let (w, h) = (marks.width(), marks.height());
    for blob in marks.blobs() {
        let (mut sx, mut sy, mut n) = (0.0, 0.0, 0_usize);
        for y in 0..h {
            for x in 0..w {
                if marks.label_at(x, y) == blob.id {
                    sx += x as f64;
                    sy += y as f64;
                    n += 1;
                }
            }
        }
        assert_eq!(n, blob.pixel_count);
        assert_relative_eq!(blob.centroid, Point2::new(sx / n as f64, sy / n as f64));
    }
}

#[test]
fn adjacency_is_symmetric_and_irreflexive() {
    let marks = FindMarks::new(&cube()).execute();
    for blob in marks.blobs() {
        assert!(!blob.adjacent.contains(&blob.id));
        for &other in &blob.adjacent {
            assert!(marks.blob(other).unwrap().adjacent.contains(&blob.id));
        }
    }
}

#[test]
fn edge_anchors_sit_between_their_nodes() {
    let marks = FindMarks::new(&tetrahedron()).execute();
    let graph = BuildGraph::new(&marks).execute().unwrap();
    assert_eq!(graph.edge_count(), 6);
    for (_, edge) in graph.edges() {
        let a = graph.vertex(edge.a).unwrap().point;
        let b = graph.vertex(edge.b).unwrap().point;
        let EdgeShape::Arc(arc) = &edge.shape else {
            panic!("freshly built edges are single arcs");
        };
        assert_relative_eq!(*arc.anchor(), midpoint(&a, &b), epsilon = 1e-9);
    }
}

#[test]
fn every_tetrahedron_vertex_is_trivalent() {
    let marks = FindMarks::new(&tetrahedron()).execute();
    let graph = BuildGraph::new(&marks).execute().unwrap();
    for (vid, v) in graph.vertices() {
        assert_eq!(v.degree(), 3);
        for &end in &v.ends {
            assert_eq!(graph.vertex_at(end).unwrap(), vid);
        }
    }
}

#[test]
fn coalescing_keeps_every_anchor_once() {
    let marks = FindMarks::new(&degree2()).execute();
    let graph = BuildGraph::new(&marks).execute().unwrap();
    let coalesced = Coalesce::new().execute(&graph).unwrap();

    let key = |p: Point2| ((p.x * 2.0).round() as i64, (p.y * 2.0).round() as i64);
    let mut before: Vec<_> = graph
        .edges()
        .flat_map(|(_, e)| e.shape.anchors())
        .map(key)
        .collect();
    let mut after: Vec<_> = coalesced
        .edges()
        .flat_map(|(_, e)| e.shape.anchors())
        .map(key)
        .collect();
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);

    for (id, e) in coalesced.edges() {
        assert!(coalesced.vertex(e.a).unwrap().ends.contains(&EdgeEnd::new(id, Side::A)));
        assert!(coalesced.vertex(e.b).unwrap().ends.contains(&EdgeEnd::new(id, Side::B)));
    }
}

#[test]
fn drawn_crossing_is_coalesced_into_two_strands() {
    let marks = FindMarks::new(&crossed_square()).execute();
    let graph = BuildGraph::new(&marks).execute().unwrap();
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 8);

    let coalesced = Coalesce::new().execute(&graph).unwrap();
    assert_eq!(coalesced.vertex_count(), 4);
    assert_eq!(coalesced.edge_count(), 6);
    assert!(coalesced.vertices().all(|(_, v)| v.degree() == 3));
}

#![cfg(test)]

use super::*;
use crate::route::{G1, G2};

fn undirected(size: usize, edges: &[Edge]) -> RelationMatrix {
    RelationMatrix::from_fn(size, |x, y| edges.contains(&(x, y)) || edges.contains(&(y, x)))
}

/// A path 0-1-2 leading into the triangle 2-3-4.
fn lollipop() -> RelationMatrix {
    undirected(5, &[(0, 1), (1, 2), (2, 3), (3, 4), (2, 4)])
}

#[test]
fn test_components() {
    let graph = undirected(6, &[(0, 1), (2, 3), (3, 4)]);
    assert_eq!(components(&graph), vec![0, 0, 2, 2, 2, 5]);
    assert_eq!(component_count(&graph), 3);
    assert!(!is_connected(&graph));
    assert!(is_connected(&lollipop()));
    assert!(is_connected(&RelationMatrix::new(0)));
    assert!(is_connected(&RelationMatrix::from_rows(&G1).unwrap()));
}

#[test]
fn test_spanning_forest() {
    let graph = lollipop();
    let SpanningForest { forest, buckets, edges } = spanning_forest(&graph);
    assert_eq!(edges, vec![(0, 1), (1, 2), (2, 3), (2, 4)]);
    assert_eq!(buckets, vec![0; 5]);
    assert!(forest.is_subset(&graph));
    assert_eq!(component_count(&forest), 1);

    let scattered = undirected(5, &[(0, 4), (1, 3), (3, 4), (1, 4)]);
    let spanning = spanning_forest(&scattered);
    assert_eq!(spanning.edges.len(), 5 - component_count(&scattered), "A forest has n - c edges.");
    assert_eq!(spanning.buckets, vec![0, 0, 2, 0, 0]);
    assert_eq!(components(&spanning.forest), components(&scattered));
}

#[test]
fn test_bridges() {
    assert_eq!(bridges(&lollipop()), vec![(0, 1), (1, 2)]);
    assert!(bridges(&RelationMatrix::from_rows(&G2).unwrap()).is_empty());

    let two_triangles = undirected(6, &[(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (4, 5), (3, 5)]);
    assert_eq!(bridges(&two_triangles), vec![(2, 3)], "Only the edge joining the triangles is a bridge.");

    let forest = undirected(4, &[(0, 1), (2, 3)]);
    assert_eq!(bridges(&forest), vec![(0, 1), (2, 3)]);
}

#[test]
fn test_split_into_two() {
    let graph = lollipop();
    let Split { graph: split, removed } = split_into_two(&graph).unwrap();
    assert_eq!(component_count(&split), 2);
    assert_eq!(removed, vec![(0, 1), (3, 4)]);
    assert_eq!(edge_difference(&graph, &split), removed);

    let g1 = RelationMatrix::from_rows(&G1).unwrap();
    let split = split_into_two(&g1).unwrap();
    assert_eq!(component_count(&split.graph), 2);
    assert_eq!(split.removed.len(), g1.len() / 2 - 5, "A two tree forest over 7 vertices keeps 5 edges.");

    assert_eq!(split_into_two(&undirected(4, &[(0, 1)])), Err(NotConnected));
    assert_eq!(split_into_two(&RelationMatrix::new(1)), Err(NotConnected));
}

#[test]
fn test_edge_difference() {
    let a = undirected(3, &[(0, 1), (1, 2)]);
    let b = undirected(3, &[(1, 2)]);
    assert_eq!(edge_difference(&a, &b), vec![(0, 1)]);
    assert!(edge_difference(&b, &a).is_empty());
}

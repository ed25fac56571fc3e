//! Connectivity of undirected graphs given as symmetric [`RelationMatrix`]es: components,
//! spanning forests, bridges and splitting a connected graph in two.

mod tests;

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::relation::RelationMatrix;

/// An undirected edge, written with the smaller vertex first.
pub type Edge = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotConnected;

impl Display for NotConnected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Graph must be connected and have at least two vertices!")
    }
}

impl Error for NotConnected {}

/// A spanning forest along with the tree each vertex ended up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    pub forest: RelationMatrix,
    /// The label of each vertex's tree. Every vertex in a tree shares the label of the tree's
    /// smallest vertex.
    pub buckets: Vec<usize>,
    /// The forest's edges, in the order they were chosen.
    pub edges: Vec<Edge>,
}

/// A graph split into exactly two components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    /// A spanning forest of the original graph with two trees.
    pub graph: RelationMatrix,
    /// Every edge of the original graph missing from `graph`.
    pub removed: Vec<Edge>,
}

/// Labels every vertex with the smallest vertex of its connected component.
pub fn components(graph: &RelationMatrix) -> Vec<usize> {
    let size = graph.size();
    let mut labels = vec![usize::MAX; size];
    for root in 0..size {
        if labels[root] != usize::MAX {
            continue;
        }
        labels[root] = root;
        let mut stack = vec![root];
        while let Some(vertex) = stack.pop() {
            for next in graph.successors(vertex) {
                if labels[next] == usize::MAX {
                    labels[next] = root;
                    stack.push(next);
                }
            }
        }
    }
    labels
}

pub fn component_count(graph: &RelationMatrix) -> usize {
    components(graph).iter()
        .enumerate()
        .filter(|(vertex, label)| vertex == *label)
        .count()
}

/// A graph without vertices counts as connected.
pub fn is_connected(graph: &RelationMatrix) -> bool {
    component_count(graph) <= 1
}

/// Builds a spanning forest by scanning the edges in order and keeping each one that joins two
/// different buckets, then merging those buckets.
pub fn spanning_forest(graph: &RelationMatrix) -> SpanningForest {
    let size = graph.size();
    let mut forest = RelationMatrix::new(size);
    let mut buckets: Vec<usize> = (0..size).collect();
    let mut edges = Vec::new();

    for a in 0..size {
        for b in a + 1..size {
            if !graph.get(a, b) || buckets[a] == buckets[b] {
                continue;
            }
            forest.set(a, b, true);
            forest.set(b, a, true);
            edges.push((a, b));

            let (kept, merged) = (buckets[a].min(buckets[b]), buckets[a].max(buckets[b]));
            for bucket in buckets.iter_mut().filter(|bucket| **bucket == merged) {
                *bucket = kept;
            }
        }
    }

    SpanningForest { forest, buckets, edges }
}

/// Finds every edge whose removal disconnects its component, using Tarjan's low-link values.
pub fn bridges(graph: &RelationMatrix) -> Vec<Edge> {
    struct Search<'a> {
        graph: &'a RelationMatrix,
        entered: Vec<Option<usize>>,
        low: Vec<usize>,
        timer: usize,
        bridges: Vec<Edge>,
    }

    impl Search<'_> {
        fn visit(&mut self, vertex: usize, parent: Option<usize>) {
            let entered = self.timer;
            self.entered[vertex] = Some(entered);
            self.low[vertex] = entered;
            self.timer += 1;

            let graph = self.graph;
            for next in graph.successors(vertex) {
                if Some(next) == parent {
                    continue;
                }
                match self.entered[next] {
                    Some(next_entered) => self.low[vertex] = self.low[vertex].min(next_entered),
                    None => {
                        self.visit(next, Some(vertex));
                        self.low[vertex] = self.low[vertex].min(self.low[next]);
                        if self.low[next] > entered {
                            self.bridges.push((vertex.min(next), vertex.max(next)));
                        }
                    },
                }
            }
        }
    }

    let size = graph.size();
    let mut search = Search {
        graph,
        entered: vec![None; size],
        low: vec![0; size],
        timer: 0,
        bridges: Vec::new(),
    };
    for root in 0..size {
        if search.entered[root].is_none() {
            search.visit(root, None);
        }
    }

    let mut bridges = search.bridges;
    bridges.sort_unstable();
    bridges
}

/// The edges of `a` that aren't in `b`.
pub fn edge_difference(a: &RelationMatrix, b: &RelationMatrix) -> Vec<Edge> {
    a.pairs()
        .filter(|&(x, y)| x <= y && !b.get(x, y))
        .collect()
}

/// Splits a connected graph into two components by keeping a spanning tree and dropping one of
/// its edges. A tree edge that is also a bridge of the original graph is preferred, so that as
/// few of the original edges as possible need to go.
pub fn split_into_two(graph: &RelationMatrix) -> Result<Split, NotConnected> {
    if graph.size() < 2 || !is_connected(graph) {
        return Err(NotConnected);
    }

    let SpanningForest { mut forest, edges, .. } = spanning_forest(graph);
    let bridges = bridges(graph);
    let (a, b) = edges.iter()
        .find(|edge| bridges.contains(edge))
        .or(edges.first())
        .copied()
        .ok_or(NotConnected)?;

    forest.set(a, b, false);
    forest.set(b, a, false);
    Ok(Split {
        removed: edge_difference(graph, &forest),
        graph: forest,
    })
}

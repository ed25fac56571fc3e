//! Walks through undirected graphs given as symmetric [`RelationMatrix`]es: classifying vertex
//! sequences, enumerating paths and counting walks.
//!
//! Vertices are numbered from zero. A sequence of `k` vertices describes `k - 1` edges.

mod tests;

use derive_more::{Display, IsVariant};

use crate::relation::RelationMatrix;

/// Counts of walks between every pair of vertices, indexed `[from][to]`.
pub type CountMatrix = Vec<Vec<u64>>;

/// The first lab graph, over 7 vertices.
pub const G1: [[u8; 7]; 7] = [
    [0, 1, 0, 0, 0, 0, 1],
    [1, 0, 0, 0, 0, 1, 1],
    [0, 0, 0, 1, 1, 1, 0],
    [0, 0, 1, 0, 1, 0, 0],
    [0, 0, 1, 1, 0, 1, 0],
    [0, 1, 1, 0, 1, 0, 1],
    [1, 1, 0, 0, 0, 1, 0],
];

/// The second lab graph, over 7 vertices.
pub const G2: [[u8; 7]; 7] = [
    [0, 1, 0, 1, 0, 1, 1],
    [1, 0, 1, 1, 0, 0, 0],
    [0, 1, 0, 1, 1, 1, 0],
    [1, 1, 1, 0, 0, 0, 0],
    [0, 0, 1, 0, 0, 1, 0],
    [1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 1, 0],
];

/// The most specific description of a vertex sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum RouteKind {
    /// Some consecutive vertices aren't adjacent.
    #[display("not a route")]
    NotRoute,
    /// Every consecutive pair is adjacent, but an edge is used twice.
    #[display("route")]
    Route,
    /// No edge is used twice, but a vertex is visited twice.
    #[display("chain")]
    Chain,
    /// No vertex is visited twice.
    #[display("simple chain")]
    SimpleChain,
    /// A chain that ends where it started.
    #[display("cycle")]
    Cycle,
    /// A cycle that visits no vertex twice, apart from its ends.
    #[display("simple cycle")]
    SimpleCycle,
}

/// Every consecutive pair of vertices is adjacent. An empty sequence isn't a route.
pub fn is_route(graph: &RelationMatrix, sequence: &[usize]) -> bool {
    !sequence.is_empty()
        && sequence.iter().all(|&vertex| vertex < graph.size())
        && sequence.windows(2).all(|pair| graph.get(pair[0], pair[1]))
}

/// A route that never uses the same edge twice, in either direction.
pub fn is_chain(graph: &RelationMatrix, sequence: &[usize]) -> bool {
    if !is_route(graph, sequence) {
        return false;
    }
    let mut used = RelationMatrix::new(graph.size());
    for pair in sequence.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if used.get(a, b) {
            return false;
        }
        used.set(a, b, true);
        used.set(b, a, true);
    }
    true
}

/// A chain that never visits the same vertex twice.
pub fn is_simple_chain(graph: &RelationMatrix, sequence: &[usize]) -> bool {
    is_chain(graph, sequence) && all_distinct(sequence)
}

/// A chain of at least one edge that ends on its starting vertex.
pub fn is_cycle(graph: &RelationMatrix, sequence: &[usize]) -> bool {
    sequence.len() > 1 && is_chain(graph, sequence) && sequence.first() == sequence.last()
}

/// A cycle whose vertices, other than the repeated end, are all distinct.
pub fn is_simple_cycle(graph: &RelationMatrix, sequence: &[usize]) -> bool {
    is_cycle(graph, sequence) && all_distinct(&sequence[1..])
}

pub fn classify(graph: &RelationMatrix, sequence: &[usize]) -> RouteKind {
    if !is_route(graph, sequence) {
        RouteKind::NotRoute
    } else if !is_chain(graph, sequence) {
        RouteKind::Route
    } else if is_simple_cycle(graph, sequence) {
        RouteKind::SimpleCycle
    } else if is_cycle(graph, sequence) {
        RouteKind::Cycle
    } else if is_simple_chain(graph, sequence) {
        RouteKind::SimpleChain
    } else {
        RouteKind::Chain
    }
}

fn all_distinct(sequence: &[usize]) -> bool {
    sequence.iter()
        .enumerate()
        .all(|(index, vertex)| !sequence[index + 1..].contains(vertex))
}

/// Every simple path of `vertices` vertices starting at `start`, in lexicographic order.
pub fn simple_paths_of_length(graph: &RelationMatrix, start: usize, vertices: usize) -> Vec<Vec<usize>> {
    fn extend(
        graph: &RelationMatrix,
        path: &mut Vec<usize>,
        visited: &mut [bool],
        vertices: usize,
        paths: &mut Vec<Vec<usize>>,
    ) {
        if path.len() == vertices {
            paths.push(path.clone());
            return;
        }
        let Some(&last) = path.last() else { return };
        for next in graph.successors(last) {
            if !visited[next] {
                visited[next] = true;
                path.push(next);
                extend(graph, path, visited, vertices, paths);
                path.pop();
                visited[next] = false;
            }
        }
    }

    let mut paths = Vec::new();
    if start >= graph.size() || vertices == 0 {
        return paths;
    }
    let mut visited = vec![false; graph.size()];
    visited[start] = true;
    extend(graph, &mut vec![start], &mut visited, vertices, &mut paths);
    paths
}

/// Counts the walks of `edges` edges between every pair of vertices by following every walk.
pub fn walk_count_matrix(graph: &RelationMatrix, edges: usize) -> CountMatrix {
    fn walk(graph: &RelationMatrix, vertex: usize, remaining: usize, counts: &mut [u64]) {
        if remaining == 0 {
            counts[vertex] += 1;
            return;
        }
        for next in graph.successors(vertex) {
            walk(graph, next, remaining - 1, counts);
        }
    }

    (0..graph.size())
        .map(|from| {
            let mut counts = vec![0; graph.size()];
            walk(graph, from, edges, &mut counts);
            counts
        })
        .collect()
}

/// Counts the walks of `edges` edges between every pair of vertices as a power of the adjacency
/// matrix, using repeated squaring.
pub fn walk_count_matrix_by_power(graph: &RelationMatrix, edges: usize) -> CountMatrix {
    let size = graph.size();
    let mut result: CountMatrix = (0..size)
        .map(|x| (0..size).map(|y| u64::from(x == y)).collect())
        .collect();
    let mut base: CountMatrix = (0..size)
        .map(|x| (0..size).map(|y| u64::from(graph.get(x, y))).collect())
        .collect();

    let mut power = edges;
    while power > 0 {
        if power % 2 == 1 {
            result = multiply(&result, &base);
        }
        base = multiply(&base, &base);
        power /= 2;
    }
    result
}

fn multiply(left: &CountMatrix, right: &CountMatrix) -> CountMatrix {
    let size = left.len();
    (0..size)
        .map(|x| {
            (0..size)
                .map(|y| (0..size).map(|z| left[x][z] * right[z][y]).sum())
                .collect()
        })
        .collect()
}

/// Every walk of `edges` edges from `from` to `to`, in lexicographic order.
pub fn walks_between(graph: &RelationMatrix, from: usize, to: usize, edges: usize) -> Vec<Vec<usize>> {
    fn extend(graph: &RelationMatrix, walk: &mut Vec<usize>, to: usize, edges: usize, walks: &mut Vec<Vec<usize>>) {
        let Some(&last) = walk.last() else { return };
        if walk.len() == edges + 1 {
            if last == to {
                walks.push(walk.clone());
            }
            return;
        }
        for next in graph.successors(last) {
            walk.push(next);
            extend(graph, walk, to, edges, walks);
            walk.pop();
        }
    }

    let mut walks = Vec::new();
    if from < graph.size() {
        extend(graph, &mut vec![from], to, edges, &mut walks);
    }
    walks
}

/// Every simple chain from `start` that can't be extended without revisiting a vertex.
pub fn maximal_simple_chains(graph: &RelationMatrix, start: usize) -> Vec<Vec<usize>> {
    fn extend(graph: &RelationMatrix, chain: &mut Vec<usize>, visited: &mut [bool], chains: &mut Vec<Vec<usize>>) {
        let Some(&last) = chain.last() else { return };
        let mut dead_end = true;
        for next in graph.successors(last) {
            if !visited[next] {
                dead_end = false;
                visited[next] = true;
                chain.push(next);
                extend(graph, chain, visited, chains);
                chain.pop();
                visited[next] = false;
            }
        }
        if dead_end {
            chains.push(chain.clone());
        }
    }

    let mut chains = Vec::new();
    if start >= graph.size() {
        return chains;
    }
    let mut visited = vec![false; graph.size()];
    visited[start] = true;
    extend(graph, &mut vec![start], &mut visited, &mut chains);
    chains
}

//! Eulerian and Hamiltonian properties of random undirected graphs.


use std::error::Error;
use std::fmt::{self, Display, Formatter};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::forest::components;
use crate::relation::RelationMatrix;

/// The number of graphs [`survey`] generates for each edge count in the demo.
pub const DEFAULT_SAMPLES: usize = 200;

/// More edges were requested than a simple graph over the vertices can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManyEdges {
    pub requested: usize,
    pub max: usize,
}

impl Display for TooManyEdges {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Requested {} edges, but the graph can hold at most {}!", self.requested, self.max)
    }
}

impl Error for TooManyEdges {}

/// The number of edges in a complete graph over `vertices` vertices.
pub const fn max_edges(vertices: usize) -> usize {
    vertices * vertices.saturating_sub(1) / 2
}

/// Generates an undirected graph with exactly `edges` edges, chosen uniformly without loops or
/// repeats.
pub fn random_graph<R: Rng + ?Sized>(
    vertices: usize,
    edges: usize,
    rng: &mut R,
) -> Result<RelationMatrix, TooManyEdges> {
    let max = max_edges(vertices);
    if edges > max {
        return Err(TooManyEdges { requested: edges, max });
    }

    let mut candidates: Vec<(usize, usize)> = (0..vertices)
        .flat_map(|a| (a + 1..vertices).map(move |b| (a, b)))
        .collect();
    let (chosen, _) = candidates.partial_shuffle(rng, edges);

    let mut graph = RelationMatrix::new(vertices);
    for &(a, b) in chosen.iter() {
        graph.set(a, b, true);
        graph.set(b, a, true);
    }
    Ok(graph)
}

/// Every vertex has even degree and all vertices with edges lie in one component, so there is a
/// closed walk using every edge exactly once. A graph without edges is trivially Eulerian.
pub fn is_eulerian(graph: &RelationMatrix) -> bool {
    let size = graph.size();
    let degrees: Vec<usize> = (0..size).map(|vertex| graph.successors(vertex).count()).collect();
    if degrees.iter().any(|degree| degree % 2 != 0) {
        return false;
    }

    let labels = components(graph);
    let mut touched = (0..size).filter(|&vertex| degrees[vertex] > 0).map(|vertex| labels[vertex]);
    match touched.next() {
        Some(first) => touched.all(|label| label == first),
        None => true,
    }
}

/// Searches for a cycle through every vertex by backtracking from vertex 0. The cycle is returned
/// without repeating its first vertex. Graphs with fewer than 3 vertices have no such cycle.
pub fn hamiltonian_cycle(graph: &RelationMatrix) -> Option<Vec<usize>> {
    fn extend(graph: &RelationMatrix, path: &mut Vec<usize>, visited: &mut [bool]) -> bool {
        let Some(&last) = path.last() else { return false };
        if path.len() == graph.size() {
            return graph.get(last, path[0]);
        }
        for next in graph.successors(last) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            path.push(next);
            if extend(graph, path, visited) {
                return true;
            }
            path.pop();
            visited[next] = false;
        }
        false
    }

    let size = graph.size();
    if size < 3 {
        return None;
    }
    let mut visited = vec![false; size];
    visited[0] = true;
    let mut path = vec![0];
    extend(graph, &mut path, &mut visited).then_some(path)
}

pub fn is_hamiltonian(graph: &RelationMatrix) -> bool {
    hamiltonian_cycle(graph).is_some()
}

/// Tallies for the random graphs with one edge count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveyRow {
    pub vertices: usize,
    pub edges: usize,
    pub eulerian: usize,
    pub hamiltonian: usize,
    pub both: usize,
    pub total: usize,
}

impl Display for SurveyRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "| {:>8} | {:>5} | {:>8} | {:>11} | {:>4} | {:>5} |",
            self.vertices, self.edges, self.eulerian, self.hamiltonian, self.both, self.total
        )
    }
}

/// The header matching [`SurveyRow`]'s `Display` output.
pub const SURVEY_HEADER: &str = "| vertices | edges | eulerian | hamiltonian | both | total |";

/// For every possible edge count, generates `samples` random graphs over `vertices` vertices and
/// counts how many are Eulerian, Hamiltonian or both. The same seed always gives the same
/// tallies.
///
/// Eulerian graphs must also be connected and Hamiltonian ones need a closed cycle, so the
/// tallies are lower than those that count even degrees alone or Hamiltonian paths.
pub fn survey(vertices: usize, samples: usize, seed: u64) -> Vec<SurveyRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..=max_edges(vertices))
        .map(|edges| {
            let mut row = SurveyRow { vertices, edges, ..SurveyRow::default() };
            for _ in 0..samples {
                let Ok(graph) = random_graph(vertices, edges, &mut rng) else {
                    continue;
                };
                let eulerian = is_eulerian(&graph);
                let hamiltonian = is_hamiltonian(&graph);
                row.eulerian += usize::from(eulerian);
                row.hamiltonian += usize::from(hamiltonian);
                row.both += usize::from(eulerian && hamiltonian);
                row.total += 1;
            }
            row
        })
        .collect()
}

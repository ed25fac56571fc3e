use std::fmt::{self, Display, Formatter};

use super::{AddEdgeError, EdgeExists, EdgeNotFound, InvalidVertex, RemoveEdgeError};
use crate::linked::ForwardList;
use crate::linked::forward::Iter;
use crate::queue::Queue;

/// A directed graph over the vertices `0..n`, storing the outgoing edges of each vertex in a
/// singly linked list. The number of vertices is fixed when the graph is created.
///
/// New edges are added to the front of their source's list, so [`Graph::neighbours`] and both
/// traversals visit the most recently added neighbour first.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `v`: The number of vertices.
/// - `e`: The number of edges.
/// - `d`: The out-degree of the source vertex.
///
/// | Method | Complexity |
/// |-|-|
/// | `add_edge` / `remove_edge` / `has_edge` | `O(d)` |
/// | `edge_count` | `O(v)` |
/// | `dfs` / `bfs` | `O(v + e)` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Box<[ForwardList<usize>]>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Graph {
        Graph {
            adjacency: (0..vertex_count).map(|_| ForwardList::new()).collect(),
        }
    }

    /// Creates a graph with the provided edges, skipping any that are invalid or repeated.
    pub fn from_edges(vertex_count: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Graph {
        let mut graph = Graph::new(vertex_count);
        for (src, dst) in edges {
            let _ = graph.add_edge(src, dst);
        }
        graph
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(ForwardList::len).sum()
    }

    /// Adds an edge from `src` to `dst`. The graph is left untouched if either vertex doesn't
    /// exist or the edge is already present.
    pub fn add_edge(&mut self, src: usize, dst: usize) -> Result<(), AddEdgeError> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let list = &mut self.adjacency[src];
        if list.contains(&dst) {
            return Err(EdgeExists { src, dst }.into());
        }
        list.push_front(dst);
        Ok(())
    }

    pub fn remove_edge(&mut self, src: usize, dst: usize) -> Result<(), RemoveEdgeError> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        self.adjacency[src]
            .remove(&dst)
            .map(|_| ())
            .map_err(|_| EdgeNotFound { src, dst }.into())
    }

    /// Returns true if there is an edge from `src` to `dst`. Nonexistent vertices have no edges.
    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.adjacency.get(src).is_some_and(|list| list.contains(&dst))
    }

    /// Iterates over the vertices that `vertex` has an edge to.
    pub fn neighbours(&self, vertex: usize) -> Result<Iter<'_, usize>, InvalidVertex> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].iter())
    }

    /// Returns every vertex reachable from `start`, in depth first order.
    pub fn dfs(&self, start: usize) -> Result<Vec<usize>, InvalidVertex> {
        fn visit(graph: &Graph, vertex: usize, visited: &mut [bool], order: &mut Vec<usize>) {
            visited[vertex] = true;
            order.push(vertex);
            for &next in graph.adjacency[vertex].iter() {
                if !visited[next] {
                    visit(graph, next, visited, order);
                }
            }
        }

        self.check_vertex(start)?;
        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        visit(self, start, &mut visited, &mut order);
        Ok(order)
    }

    /// Returns every vertex reachable from `start`, in breadth first order.
    pub fn bfs(&self, start: usize) -> Result<Vec<usize>, InvalidVertex> {
        self.check_vertex(start)?;
        let mut visited = vec![false; self.vertex_count()];
        let mut order = Vec::new();
        let mut queue = Queue::new();

        visited[start] = true;
        queue.enqueue(start);
        while let Some(vertex) = queue.dequeue() {
            order.push(vertex);
            for &next in self.adjacency[vertex].iter() {
                if !visited[next] {
                    visited[next] = true;
                    queue.enqueue(next);
                }
            }
        }
        Ok(order)
    }

    fn check_vertex(&self, vertex: usize) -> Result<(), InvalidVertex> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(InvalidVertex { vertex, vertex_count: self.vertex_count() })
        }
    }
}

impl Display for Graph {
    /// One line per vertex: `0: 2 -> 1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (vertex, list) in self.adjacency.iter().enumerate() {
            write!(f, "{vertex}:")?;
            for (index, next) in list.iter().enumerate() {
                write!(f, "{}{next}", if index == 0 { " " } else { " -> " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

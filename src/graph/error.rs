use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A vertex index that isn't less than the graph's vertex count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidVertex {
    pub vertex: usize,
    pub vertex_count: usize,
}

impl Display for InvalidVertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex {} doesn't exist in a graph with {} vertices!", self.vertex, self.vertex_count)
    }
}

impl Error for InvalidVertex {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeExists {
    pub src: usize,
    pub dst: usize,
}

impl Display for EdgeExists {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Edge {} -> {} already exists!", self.src, self.dst)
    }
}

impl Error for EdgeExists {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeNotFound {
    pub src: usize,
    pub dst: usize,
}

impl Display for EdgeNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Edge {} -> {} doesn't exist!", self.src, self.dst)
    }
}

impl Error for EdgeNotFound {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AddEdgeError {
    InvalidVertex(InvalidVertex),
    EdgeExists(EdgeExists),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum RemoveEdgeError {
    InvalidVertex(InvalidVertex),
    EdgeNotFound(EdgeNotFound),
}

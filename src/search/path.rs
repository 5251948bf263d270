use std::fmt::Display;

use crate::graph::{UndirectedGraph, VertexId};

/// Result of a traversal: the vertices from start to goal, both inclusive.
///
/// An empty path means no path was found. That is an ordinary outcome, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    pub fn new(vertices: Vec<VertexId>) -> Self {
        Path { vertices }
    }

    pub fn not_found() -> Self {
        Path {
            vertices: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// Number of vertices on the path, 0 when not found.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the path, `None` when not found.
    pub fn edge_count(&self) -> Option<usize> {
        self.vertices.len().checked_sub(1)
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn start(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn goal(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Whether every consecutive pair of vertices is an edge of `graph`.
    ///
    /// The empty path is not a walk.
    pub fn is_walk_in(&self, graph: &UndirectedGraph) -> bool {
        self.is_found()
            && graph.contains_vertex(self.vertices[0])
            && self.vertices.windows(2).all(|w| graph.has_edge(w[0], w[1]))
    }
}

impl From<Vec<VertexId>> for Path {
    fn from(vertices: Vec<VertexId>) -> Self {
        Path::new(vertices)
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_found() {
            write!(f, "{:?}", self.vertices)
        } else {
            f.write_str("not found")
        }
    }
}

use crate::{error::GraphError, graph::VertexId, sets::fixed::NeighborSet};

/// Undirected graph stored as one sorted neighbor set per vertex.
///
/// # Invariants
/// - `adjacency.len() == vertex_count > 0`.
/// - `v ∈ adjacency[u] ⟺ u ∈ adjacency[v]` for all `u`, `v`.
/// - `v ∉ adjacency[v]`.
///
/// The graph is built once (usually by a generator) and only read afterwards:
/// every traversal takes it by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency: Vec<NeighborSet>,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// # Errors
    /// [`GraphError::EmptyGraph`] if `vertex_count == 0`.
    pub fn new(vertex_count: usize) -> Result<Self, GraphError> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        Ok(Self {
            adjacency: vec![NeighborSet::new(); vertex_count],
        })
    }

    /// Builds a graph from an explicit edge list.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count)?;
        for &(u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Inserts the undirected edge `{u, v}`.
    ///
    /// # Returns
    /// `true` if the edge is new, `false` if it was already present.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if either endpoint is not a vertex.
    /// - [`GraphError::SelfLoop`] if `u == v`.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }

        let inserted = self.adjacency[u].insert(v);
        let mirrored = self.adjacency[v].insert(u);
        debug_assert_eq!(inserted, mirrored, "adjacency lost its symmetry");
        Ok(inserted)
    }

    /// Neighbors of `vertex` in ascending order.
    ///
    /// # Panics
    /// If `vertex` is out of range.
    pub fn neighbors(&self, vertex: VertexId) -> &[VertexId] {
        self.adjacency[vertex].as_slice()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.adjacency.len()
    }

    /// # Panics
    /// If `vertex` is out of range.
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex].len()
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.contains_vertex(u) && self.adjacency[u].contains(v)
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(NeighborSet::len).sum::<usize>() / 2
    }

    pub fn vertices(&self) -> std::ops::Range<VertexId> {
        0..self.adjacency.len()
    }
}

use std::fmt::Debug;

use crate::graph::VertexId;

/// The neighbors of a single vertex, kept sorted ascending and free of duplicates.
///
/// Sorted storage gives every traversal the same neighbor order on every run,
/// which makes DFS and DLS outputs reproducible.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NeighborSet {
    neighbors: Vec<VertexId>,
}

impl NeighborSet {
    pub fn new() -> Self {
        NeighborSet {
            neighbors: Vec::new(),
        }
    }

    /// Inserts `vertex`, keeping the set sorted.
    ///
    /// # Returns
    /// `true` if the vertex was not already present.
    pub fn insert(&mut self, vertex: VertexId) -> bool {
        match self.neighbors.binary_search(&vertex) {
            Ok(_) => false,
            Err(position) => {
                self.neighbors.insert(position, vertex);
                true
            }
        }
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.neighbors.binary_search(&vertex).is_ok()
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// The neighbors in ascending order.
    pub fn as_slice(&self) -> &[VertexId] {
        &self.neighbors
    }
}

impl Debug for NeighborSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NeighborSet")
            .field("neighbors", &self.neighbors)
            .finish()
    }
}

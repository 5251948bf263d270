//! In-memory undirected graph with a fixed vertex count.
//!
//! Vertices are identified by integers in `[0, vertex_count)`. Adjacency is
//! symmetric, loop-free, and duplicate-free; neighbor lists iterate in
//! ascending order.

mod undirected_graph;

pub use undirected_graph::*;

/// Identifier of a vertex, in `[0, vertex_count)`.
pub type VertexId = usize;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// The six-vertex example: two disjoint length-3 routes from 0 to 5.
    pub(crate) fn diamond_graph() -> UndirectedGraph {
        UndirectedGraph::from_edges(6, &[(0, 1), (0, 2), (1, 3), (2, 4), (3, 5), (4, 5)]).unwrap()
    }

    /// Checks symmetry and absence of self-loops.
    pub(crate) fn assert_well_formed(graph: &UndirectedGraph) {
        for u in graph.vertices() {
            assert!(!graph.has_edge(u, u), "self-loop on {u}");
            for &v in graph.neighbors(u) {
                assert!(graph.has_edge(v, u), "edge {u}-{v} is not mirrored");
            }
        }
    }
}

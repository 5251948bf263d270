use tracing::debug;

use crate::{error::GraphError, generators::check_degree, graph::UndirectedGraph};

/// Circulant graph: vertex `v` is joined to `v + 1, ..., v + degree`, modulo
/// `vertex_count`. Deterministic.
///
/// Each vertex ends up with `min(2 * degree, vertex_count - 1)` neighbors; when
/// `2 * degree >= vertex_count` some pairs are generated from both sides and
/// collapse into one edge.
///
/// # Errors
/// [`GraphError::EmptyGraph`] or [`GraphError::InvalidDegree`] unless
/// `1 <= degree < vertex_count`.
pub fn generate_knn_graph(
    vertex_count: usize,
    degree: usize,
) -> Result<UndirectedGraph, GraphError> {
    check_degree(vertex_count, degree)?;
    let mut graph = UndirectedGraph::new(vertex_count)?;

    for vertex in graph.vertices() {
        for offset in 1..=degree {
            graph.add_edge(vertex, (vertex + offset) % vertex_count)?;
        }
    }

    debug!(
        vertex_count,
        degree,
        edges = graph.edge_count(),
        "generated circulant graph"
    );
    Ok(graph)
}

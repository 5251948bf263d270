use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{error::GraphError, generators::check_degree, graph::UndirectedGraph};

/// Random graph in which every vertex has at least `degree` neighbors.
///
/// Vertices are processed in order. Each one draws partners uniformly from the
/// other vertices until its degree reaches `degree`; edges donated by earlier
/// vertices count toward that target, so the final degree is often larger.
/// Uses the thread-local RNG; see [`generate_random_graph_seeded`] for a
/// reproducible variant.
///
/// # Errors
/// [`GraphError::EmptyGraph`] or [`GraphError::InvalidDegree`] unless
/// `1 <= degree < vertex_count`.
pub fn generate_random_graph(
    vertex_count: usize,
    degree: usize,
) -> Result<UndirectedGraph, GraphError> {
    generate_random_graph_with(vertex_count, degree, &mut rand::rng())
}

/// Same as [`generate_random_graph`], driven by a `StdRng` seeded with `seed`.
pub fn generate_random_graph_seeded(
    vertex_count: usize,
    degree: usize,
    seed: u64,
) -> Result<UndirectedGraph, GraphError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_random_graph_with(vertex_count, degree, &mut rng)
}

pub fn generate_random_graph_with<R: Rng>(
    vertex_count: usize,
    degree: usize,
    rng: &mut R,
) -> Result<UndirectedGraph, GraphError> {
    check_degree(vertex_count, degree)?;
    let mut graph = UndirectedGraph::new(vertex_count)?;

    let mut draws = 0usize;
    for vertex in graph.vertices() {
        // degree < vertex_count, so the loop ends once every other vertex is a neighbor at worst.
        while graph.degree(vertex) < degree {
            // uniform over the vertex_count - 1 vertices other than `vertex`
            let mut partner = rng.random_range(0..vertex_count - 1);
            if partner >= vertex {
                partner += 1;
            }
            graph.add_edge(vertex, partner)?;
            draws += 1;
        }
    }

    debug!(
        vertex_count,
        degree,
        draws,
        edges = graph.edge_count(),
        "generated random graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::assert_well_formed;

    #[test]
    fn every_vertex_reaches_requested_degree() {
        for seed in 0..20 {
            for (n, d) in [(2, 1), (10, 3), (50, 5), (50, 49), (200, 10)] {
                let graph = generate_random_graph_seeded(n, d, seed).unwrap();
                assert_eq!(graph.vertex_count(), n);
                assert!(
                    graph.vertices().all(|v| graph.degree(v) >= d),
                    "seed {seed}, n {n}, d {d}"
                );
                assert_well_formed(&graph);
            }
        }
    }

    #[test]
    fn full_degree_yields_complete_graph() {
        let graph = generate_random_graph_seeded(8, 7, 3).unwrap();
        assert_eq!(graph.edge_count(), 8 * 7 / 2);
    }

    #[test]
    fn same_seed_same_graph() {
        let a = generate_random_graph_seeded(100, 4, 42).unwrap();
        let b = generate_random_graph_seeded(100, 4, 42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn thread_rng_variant_respects_degree() {
        let graph = generate_random_graph(30, 3).unwrap();
        assert!(graph.vertices().all(|v| graph.degree(v) >= 3));
        assert_well_formed(&graph);
    }

    #[test]
    fn rejects_invalid_arguments() {
        assert_eq!(generate_random_graph(0, 1), Err(GraphError::EmptyGraph));
        assert_eq!(
            generate_random_graph(5, 0),
            Err(GraphError::InvalidDegree {
                degree: 0,
                vertex_count: 5
            })
        );
        assert_eq!(
            generate_random_graph_seeded(5, 5, 1),
            Err(GraphError::InvalidDegree {
                degree: 5,
                vertex_count: 5
            })
        );
    }
}

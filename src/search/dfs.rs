use tracing::{debug, trace};

use crate::{
    graph::{UndirectedGraph, VertexId},
    search::{Path, PathTree},
    sets::visited::{VisitedBitset, VisitorSet},
    statistics::Stats,
};

/// Iterative depth-first search from `start` to `goal`.
///
/// Returns the first path the LIFO discipline reaches, which is a valid walk
/// but not necessarily a shortest one, or [`Path::not_found`] when `goal` is
/// not reachable (or either endpoint is not a vertex of `graph`).
pub fn dfs(graph: &UndirectedGraph, start: VertexId, goal: VertexId) -> Path {
    dfs_with_stats(graph, start, goal, &mut Stats::new())
}

pub fn dfs_with_stats(
    graph: &UndirectedGraph,
    start: VertexId,
    goal: VertexId,
    stats: &mut Stats,
) -> Path {
    let mut visited = VisitedBitset::new(graph.vertex_count());
    dfs_with_visitor(graph, start, goal, &mut visited, stats)
}

/// Depth-first search using a caller-provided visited set.
///
/// The stack holds every neighbor of an expanded vertex, visited or not; the
/// visited check happens when an entry is popped. Neighbors are pushed in
/// ascending order, so the largest neighbor is explored first.
pub fn dfs_with_visitor<V: VisitorSet>(
    graph: &UndirectedGraph,
    start: VertexId,
    goal: VertexId,
    visited: &mut V,
    stats: &mut Stats,
) -> Path {
    if !graph.contains_vertex(start) || !graph.contains_vertex(goal) {
        debug!(start, goal, "dfs endpoint is not a vertex of the graph");
        return Path::not_found();
    }

    let mut tree = PathTree::new();
    let mut stack = vec![tree.root(start)];
    stats.bump_pushed(1);
    stats.observe_frontier(stack.len());
    stats.observe_retained(tree.len());

    while let Some(entry) = stack.pop() {
        let vertex = tree.vertex(entry);
        if vertex == goal {
            let path = tree.path_to(entry);
            debug!(start, goal, vertices = path.len(), "dfs reached goal");
            return path;
        }

        if visited.insert(vertex) {
            trace!(vertex, depth = tree.depth(entry), "dfs expanding");
            stats.bump_expanded();
            let neighbors = graph.neighbors(vertex);
            for &neighbor in neighbors {
                stack.push(tree.extend(entry, neighbor));
            }
            stats.bump_pushed(neighbors.len());
            stats.observe_frontier(stack.len());
            stats.observe_retained(tree.len());
        }
    }

    debug!(start, goal, expanded = stats.get_expanded(), "dfs exhausted frontier");
    Path::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::generate_random_graph_seeded,
        graph::tests::diamond_graph,
        search::tests::{isolated_tail_graph, shortest_distance},
        sets::visited::VisitedHashSet,
    };

    #[test]
    fn diamond_follows_largest_neighbor_first() {
        let graph = diamond_graph();
        let path = dfs(&graph, 0, 5);
        assert_eq!(path.vertices(), &[0, 2, 4, 5]);
        assert!(path.is_walk_in(&graph));
    }

    #[test]
    fn start_equals_goal() {
        let graph = diamond_graph();
        assert_eq!(dfs(&graph, 3, 3).vertices(), &[3]);
    }

    #[test]
    fn isolated_goal_is_not_found() {
        let graph = isolated_tail_graph();
        let mut stats = Stats::new();
        let path = dfs_with_stats(&graph, 0, 4, &mut stats);
        assert!(!path.is_found());
        // every vertex of the 0..=3 component gets expanded exactly once
        assert_eq!(stats.get_expanded(), 4);
    }

    #[test]
    fn visited_neighbors_are_still_pushed() {
        let graph = isolated_tail_graph();
        let mut stats = Stats::new();
        dfs_with_stats(&graph, 0, 4, &mut stats);
        // root, then 0 -> [1], 1 -> [0, 2], 2 -> [1, 3], 3 -> [2]; back-edges are
        // pushed and only discarded when popped
        assert_eq!(stats.get_pushed(), 1 + 1 + 2 + 2 + 1);
        assert_eq!(stats.get_expanded(), 4);
        // one arena entry per push
        assert_eq!(stats.get_peak_retained(), stats.get_pushed());
    }

    #[test]
    fn out_of_range_endpoints_are_not_found() {
        let graph = diamond_graph();
        assert!(!dfs(&graph, 0, 6).is_found());
        assert!(!dfs(&graph, 42, 0).is_found());
    }

    #[test]
    fn long_line_does_not_overflow_the_call_stack() {
        let n = 200_000;
        let edges: Vec<_> = (0..n - 1).map(|v| (v, v + 1)).collect();
        let graph = UndirectedGraph::from_edges(n, &edges).unwrap();
        let path = dfs(&graph, 0, n - 1);
        assert_eq!(path.len(), n);
    }

    #[test]
    fn paths_are_walks_on_random_graphs() {
        for seed in 0..30 {
            let graph = generate_random_graph_seeded(40, 2, seed).unwrap();
            for (start, goal) in [(0, 39), (5, 17), (20, 1)] {
                let path = dfs(&graph, start, goal);
                match shortest_distance(&graph, start, goal) {
                    Some(distance) => {
                        assert!(path.is_walk_in(&graph), "seed {seed}");
                        assert_eq!(path.start(), Some(start));
                        assert_eq!(path.goal(), Some(goal));
                        assert!(path.edge_count().unwrap() >= distance);
                    }
                    None => assert!(!path.is_found(), "seed {seed}"),
                }
            }
        }
    }

    #[test]
    fn visited_set_choice_does_not_change_the_path() {
        let graph = generate_random_graph_seeded(300, 3, 11).unwrap();
        let mut hashed = VisitedHashSet::new();
        let with_hash = dfs_with_visitor(&graph, 0, 299, &mut hashed, &mut Stats::new());
        assert_eq!(with_hash, dfs(&graph, 0, 299));
    }
}

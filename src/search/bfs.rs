use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::{
    graph::{UndirectedGraph, VertexId},
    search::{Path, PathTree},
    sets::visited::{VisitedBitset, VisitorSet},
    statistics::Stats,
};

/// Breadth-first search from `start` to `goal`.
///
/// Entries leave the queue in non-decreasing depth order, so the first time
/// `goal` is dequeued its path has the fewest edges of any path in the graph.
/// Among equally short paths the one through lower-numbered neighbors wins.
pub fn bfs(graph: &UndirectedGraph, start: VertexId, goal: VertexId) -> Path {
    bfs_with_stats(graph, start, goal, &mut Stats::new())
}

pub fn bfs_with_stats(
    graph: &UndirectedGraph,
    start: VertexId,
    goal: VertexId,
    stats: &mut Stats,
) -> Path {
    let mut visited = VisitedBitset::new(graph.vertex_count());
    bfs_with_visitor(graph, start, goal, &mut visited, stats)
}

/// Breadth-first search using a caller-provided visited set.
///
/// Like the depth-first search, every neighbor is enqueued and the visited
/// check happens on dequeue.
pub fn bfs_with_visitor<V: VisitorSet>(
    graph: &UndirectedGraph,
    start: VertexId,
    goal: VertexId,
    visited: &mut V,
    stats: &mut Stats,
) -> Path {
    if !graph.contains_vertex(start) || !graph.contains_vertex(goal) {
        debug!(start, goal, "bfs endpoint is not a vertex of the graph");
        return Path::not_found();
    }

    let mut tree = PathTree::new();
    let mut queue = VecDeque::from([tree.root(start)]);
    stats.bump_pushed(1);
    stats.observe_frontier(queue.len());
    stats.observe_retained(tree.len());

    while let Some(entry) = queue.pop_front() {
        let vertex = tree.vertex(entry);
        if vertex == goal {
            let path = tree.path_to(entry);
            debug!(start, goal, vertices = path.len(), "bfs reached goal");
            return path;
        }

        if visited.insert(vertex) {
            trace!(vertex, depth = tree.depth(entry), "bfs expanding");
            stats.bump_expanded();
            let neighbors = graph.neighbors(vertex);
            for &neighbor in neighbors {
                queue.push_back(tree.extend(entry, neighbor));
            }
            stats.bump_pushed(neighbors.len());
            stats.observe_frontier(queue.len());
            stats.observe_retained(tree.len());
        }
    }

    debug!(start, goal, expanded = stats.get_expanded(), "bfs exhausted frontier");
    Path::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::{generate_knn_graph, generate_random_graph_seeded},
        graph::tests::diamond_graph,
        search::tests::{isolated_tail_graph, shortest_distance},
        sets::visited::VisitedHashSet,
    };

    #[test]
    fn diamond_shortest_path() {
        let graph = diamond_graph();
        let path = bfs(&graph, 0, 5);
        assert_eq!(path.edge_count(), Some(3));
        assert_eq!(path.vertices(), &[0, 1, 3, 5]);
    }

    #[test]
    fn start_equals_goal() {
        let graph = diamond_graph();
        assert_eq!(bfs(&graph, 2, 2).vertices(), &[2]);
    }

    #[test]
    fn isolated_goal_is_not_found() {
        let graph = isolated_tail_graph();
        assert!(!bfs(&graph, 3, 4).is_found());
        assert!(!bfs(&graph, 4, 0).is_found());
    }

    #[test]
    fn visited_neighbors_are_still_enqueued() {
        let graph = isolated_tail_graph();
        let mut stats = Stats::new();
        let path = bfs_with_stats(&graph, 0, 4, &mut stats);
        assert!(!path.is_found());
        // root, then 0 -> [1], 1 -> [0, 2], 2 -> [1, 3], 3 -> [2]; the visited
        // check happens on dequeue
        assert_eq!(stats.get_pushed(), 1 + 1 + 2 + 2 + 1);
        assert_eq!(stats.get_expanded(), 4);
    }

    #[test]
    fn circulant_distance() {
        let graph = generate_knn_graph(100, 5).unwrap();
        // 50 steps around the ring, at most 5 per hop
        assert_eq!(bfs(&graph, 0, 50).edge_count(), Some(10));
        assert_eq!(bfs(&graph, 0, 97).edge_count(), Some(1));
    }

    #[test]
    fn matches_brute_force_distance() {
        for seed in 0..25 {
            let graph = generate_random_graph_seeded(50, 1, seed).unwrap();
            for start in [0, 13, 49] {
                for goal in graph.vertices() {
                    let path = bfs(&graph, start, goal);
                    match shortest_distance(&graph, start, goal) {
                        Some(distance) => {
                            assert_eq!(path.edge_count(), Some(distance), "seed {seed}");
                            assert!(path.is_walk_in(&graph));
                            assert_eq!(path.start(), Some(start));
                            assert_eq!(path.goal(), Some(goal));
                        }
                        None => assert!(!path.is_found(), "seed {seed}"),
                    }
                }
            }
        }
    }

    #[test]
    fn never_longer_than_dfs() {
        for seed in 0..10 {
            let graph = generate_random_graph_seeded(200, 2, seed).unwrap();
            let breadth = bfs(&graph, 0, 199);
            let depth = crate::search::dfs(&graph, 0, 199);
            assert_eq!(breadth.is_found(), depth.is_found());
            if breadth.is_found() {
                assert!(breadth.len() <= depth.len());
            }
        }
    }

    #[test]
    fn visited_set_choice_does_not_change_the_path() {
        let graph = generate_random_graph_seeded(300, 3, 5).unwrap();
        let mut hashed = VisitedHashSet::new();
        let with_hash = bfs_with_visitor(&graph, 10, 250, &mut hashed, &mut Stats::new());
        assert_eq!(with_hash, bfs(&graph, 10, 250));
    }
}

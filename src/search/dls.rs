use tracing::{debug, trace};

use crate::{
    graph::{UndirectedGraph, VertexId},
    search::Path,
    statistics::Stats,
};

/// Iterative depth-limited search: depth-first, but entries at depth `limit`
/// are never expanded, so any returned path has at most `limit` edges.
///
/// No visited set is kept. A vertex may be expanded again when it is reached
/// through another walk, which makes the search complete within the limit: it
/// finds a path whenever the shortest distance from `start` to `goal` is at
/// most `limit`. The price is a frontier that can grow exponentially in
/// `limit` on dense or cyclic graphs. Memory stays bounded by the frontier
/// plus one path of at most `limit + 1` vertices.
pub fn dls(graph: &UndirectedGraph, start: VertexId, goal: VertexId, limit: usize) -> Path {
    dls_with_stats(graph, start, goal, limit, &mut Stats::new())
}

pub fn dls_with_stats(
    graph: &UndirectedGraph,
    start: VertexId,
    goal: VertexId,
    limit: usize,
    stats: &mut Stats,
) -> Path {
    if !graph.contains_vertex(start) || !graph.contains_vertex(goal) {
        debug!(start, goal, "dls endpoint is not a vertex of the graph");
        return Path::not_found();
    }

    // DFS pop order guarantees that when an entry at depth d is popped, the
    // first d vertices of `current` are its ancestors.
    let mut current: Vec<VertexId> = Vec::with_capacity(limit + 1);
    let mut stack = vec![(start, 0usize)];
    stats.bump_pushed(1);
    stats.observe_frontier(stack.len());
    stats.observe_retained(stack.len());

    while let Some((vertex, depth)) = stack.pop() {
        current.truncate(depth);
        current.push(vertex);

        if vertex == goal {
            debug!(start, goal, limit, vertices = current.len(), "dls reached goal");
            return Path::new(current);
        }

        if depth < limit {
            trace!(vertex, depth, "dls expanding");
            stats.bump_expanded();
            let neighbors = graph.neighbors(vertex);
            for &neighbor in neighbors {
                stack.push((neighbor, depth + 1));
            }
            stats.bump_pushed(neighbors.len());
            stats.observe_frontier(stack.len());
            stats.observe_retained(stack.len() + current.len());
        }
    }

    debug!(start, goal, limit, expanded = stats.get_expanded(), "dls exhausted frontier");
    Path::not_found()
}

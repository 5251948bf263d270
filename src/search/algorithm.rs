use std::fmt::Display;

use crate::{
    graph::{UndirectedGraph, VertexId},
    search::{Path, bfs_with_stats, dfs_with_stats, dls_with_stats},
    statistics::Stats,
};

/// One of the three uninformed search strategies, ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Dfs,
    Dls { limit: usize },
    Bfs,
}

impl SearchAlgorithm {
    /// The algorithms of one benchmark case, in the order they are run.
    pub fn suite(dls_limit: usize) -> [SearchAlgorithm; 3] {
        [
            SearchAlgorithm::Dfs,
            SearchAlgorithm::Dls { limit: dls_limit },
            SearchAlgorithm::Bfs,
        ]
    }

    pub fn run(
        self,
        graph: &UndirectedGraph,
        start: VertexId,
        goal: VertexId,
        stats: &mut Stats,
    ) -> Path {
        match self {
            SearchAlgorithm::Dfs => dfs_with_stats(graph, start, goal, stats),
            SearchAlgorithm::Dls { limit } => dls_with_stats(graph, start, goal, limit, stats),
            SearchAlgorithm::Bfs => bfs_with_stats(graph, start, goal, stats),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Dfs => "dfs",
            SearchAlgorithm::Dls { .. } => "dls",
            SearchAlgorithm::Bfs => "bfs",
        }
    }
}

impl Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchAlgorithm::Dls { limit } => write!(f, "dls (limit={limit})"),
            other => f.write_str(other.name()),
        }
    }
}

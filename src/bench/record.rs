use serde::Serialize;

use crate::{generators::GraphKind, graph::VertexId, search::Path, statistics::Stats};

/// Outcome of one algorithm on one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlgorithmResult {
    pub duration_ns: u64,
    /// Vertices on the returned path; `None` when no path was found.
    pub path_length: Option<usize>,
    pub expanded: usize,
}

impl AlgorithmResult {
    pub fn new(path: &Path, duration_ns: u64, stats: &Stats) -> Self {
        AlgorithmResult {
            duration_ns,
            path_length: path.is_found().then(|| path.len()),
            expanded: stats.get_expanded(),
        }
    }
}

/// One row of the report: a generated graph and the three searches run on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalRecord {
    pub generator: GraphKind,
    pub vertex_count: usize,
    pub edges_per_vertex: usize,
    pub edge_count: usize,
    pub start: VertexId,
    pub goal: VertexId,
    pub dls_limit: usize,
    pub dfs: AlgorithmResult,
    pub dls: AlgorithmResult,
    pub bfs: AlgorithmResult,
}

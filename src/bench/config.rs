use crate::{error::BenchError, generators::GraphKind, graph::VertexId};

/// Validated settings for one benchmark sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub generators: Vec<GraphKind>,
    pub vertex_counts: Vec<usize>,
    pub degrees: Vec<usize>,
    pub dls_limit: usize,
    pub seed: u64,
    /// Fixed start vertex for every case; drawn at random when `None`.
    pub start: Option<VertexId>,
    /// Fixed goal vertex for every case; drawn at random when `None`.
    pub goal: Option<VertexId>,
    pub show_progress: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            generators: vec![GraphKind::Random, GraphKind::Knn],
            vertex_counts: vec![100, 1000, 10000],
            degrees: vec![2, 5, 10],
            dls_limit: 5,
            seed: 42,
            start: None,
            goal: None,
            show_progress: false,
        }
    }
}

impl BenchConfig {
    /// Rejects sweeps that cannot produce a single record, or fixed endpoints
    /// that fall outside the smallest graph.
    pub fn validate(self) -> Result<Self, BenchError> {
        if self.generators.is_empty() {
            return Err(BenchError::InvalidConfig("no generator selected".into()));
        }
        if self.vertex_counts.is_empty() || self.degrees.is_empty() {
            return Err(BenchError::InvalidConfig(
                "vertex counts and degrees must not be empty".into(),
            ));
        }
        if let Some(&zero) = self.vertex_counts.iter().find(|&&n| n == 0) {
            return Err(BenchError::InvalidConfig(format!(
                "vertex count {zero} is not positive"
            )));
        }

        let smallest = self.vertex_counts.iter().copied().min().unwrap_or(0);
        for (label, endpoint) in [("start", self.start), ("goal", self.goal)] {
            match endpoint {
                Some(vertex) if vertex >= smallest => {
                    return Err(BenchError::InvalidConfig(format!(
                        "{label} vertex {vertex} does not exist in a graph of {smallest} vertices"
                    )));
                }
                _ => {}
            }
        }
        Ok(self)
    }
}

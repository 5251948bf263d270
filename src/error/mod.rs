//! Error types for graph construction and the benchmark driver.
//!
//! Graph-level failures are all invalid-argument conditions. Failing to find a
//! path is *not* an error: traversals return an empty [`crate::search::Path`].

use thiserror::Error;

use crate::graph::VertexId;

/// Invalid arguments handed to a graph constructor, generator, or edge operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("a graph needs at least one vertex")]
    EmptyGraph,

    #[error("degree {degree} is out of range, expected 1 <= degree < {vertex_count}")]
    InvalidDegree { degree: usize, vertex_count: usize },

    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("self-loop on vertex {0} is not allowed")]
    SelfLoop(VertexId),
}

/// Failures of the benchmark harness.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

//! Graph construction strategies.
//!
//! - [`generate_random_graph`]: every vertex keeps drawing random partners until
//!   it has at least `degree` neighbors.
//! - [`generate_knn_graph`]: the circulant graph where `v` is joined to
//!   `v + 1, ..., v + degree` (mod `vertex_count`).

mod circulant;
mod random_degree;

pub use circulant::*;
pub use random_degree::*;

use std::fmt::Display;

use clap::ValueEnum;
use rand::Rng;
use serde::Serialize;

use crate::{error::GraphError, graph::UndirectedGraph};

/// Both generators accept `1 <= degree < vertex_count`.
fn check_degree(vertex_count: usize, degree: usize) -> Result<(), GraphError> {
    if vertex_count == 0 {
        return Err(GraphError::EmptyGraph);
    }
    if degree == 0 || degree >= vertex_count {
        return Err(GraphError::InvalidDegree {
            degree,
            vertex_count,
        });
    }
    Ok(())
}

/// Which generator builds the graph of a benchmark case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    Random,
    Knn,
}

impl GraphKind {
    /// Builds a graph of this kind. `rng` is only drawn from by [`GraphKind::Random`].
    pub fn generate<R: Rng>(
        self,
        vertex_count: usize,
        degree: usize,
        rng: &mut R,
    ) -> Result<UndirectedGraph, GraphError> {
        match self {
            GraphKind::Random => generate_random_graph_with(vertex_count, degree, rng),
            GraphKind::Knn => generate_knn_graph(vertex_count, degree),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GraphKind::Random => "random",
            GraphKind::Knn => "knn",
        }
    }
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

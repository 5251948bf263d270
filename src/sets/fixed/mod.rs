//! Per-vertex neighbor storage for [`UndirectedGraph`](crate::graph::UndirectedGraph).

mod neighbor_set;

pub use neighbor_set::*;

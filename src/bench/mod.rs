//! Benchmark harness: builds one graph per test case, times DFS, DLS and BFS
//! on it, and writes the resulting records as CSV, JSON, or a console table.

mod config;
mod matrix;
mod record;
mod report;
mod timing;

pub use config::*;
pub use matrix::*;
pub use record::*;
pub use report::*;
pub use timing::*;

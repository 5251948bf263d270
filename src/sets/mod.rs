//! Small set types used by the graph and the traversals.
//!
//! # Submodules
//!
//! - [`fixed`]: sorted per-vertex neighbor sets
//! - [`visited`]: visited-vertex tracking (packed bitset or hash set)

pub mod fixed;
pub mod visited;

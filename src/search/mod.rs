//! Uninformed path search over an [`UndirectedGraph`](crate::graph::UndirectedGraph).
//!
//! All three strategies share the same frontier layout: entries index into a
//! [`PathTree`] and paths are rebuilt only when the goal is reached.
//!
//! - [`dfs`]: explicit-stack depth-first search with a visited set.
//! - [`dls`]: depth-first search bounded by a depth limit, without a visited set.
//! - [`bfs`]: FIFO breadth-first search with a visited set; returns a shortest path.
//!
//! None of them recurse, so graph size is bounded by memory rather than by the
//! call stack.

mod algorithm;
mod bfs;
mod dfs;
mod dls;
mod path;
mod path_tree;

pub use algorithm::*;
pub use bfs::*;
pub use dfs::*;
pub use dls::*;
pub use path::*;
pub use path_tree::*;

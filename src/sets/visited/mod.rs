//! Visited-vertex tracking for the traversals that prune on revisits.

mod bitset;
mod hashset;
mod visitor_set;

pub use bitset::*;
pub use hashset::*;
pub use visitor_set::*;

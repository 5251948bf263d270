//! Work counters for a single traversal or an aggregate of many.
//!
//! The benchmark report pairs wall-clock time with these counters so that
//! algorithms can be compared on explored work as well as on speed.

mod stats;
pub use stats::*;

pub mod bench;
pub mod error;
pub mod generators;
pub mod graph;
pub mod search;
pub mod sets;
pub mod statistics;

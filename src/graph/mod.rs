//! Graph representation module

pub mod undirected;

pub use undirected::Graph;

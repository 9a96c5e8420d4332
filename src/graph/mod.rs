//! In-memory graph store: vertices, edges and matrix export.

pub mod builder;
pub mod listing;
pub mod matrix;
pub mod store;

pub use builder::GraphBuilder;
pub use matrix::AdjacencyMatrix;
pub use store::Graph;

//! GraphStore: an in-memory weighted graph for embedding in host programs.
//!
//! Vertices are identified by `u64` keys and own their outgoing weighted
//! edges. Graphs are directed or undirected; an undirected edge is kept as a
//! pair of mirrored records. The store supports insertion, removal,
//! adjacency queries and export to a dense adjacency matrix, through a Rust
//! API and a C ABI.
//!
//! Every fallible operation either succeeds or leaves the graph exactly as
//! it was, including on allocation failure.

pub mod ffi;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{AdjacencyMatrix, Graph, GraphBuilder};
pub use types::{is_connected, Edge, GraphError, GraphResult, Status, Vertex, NO_EDGE};

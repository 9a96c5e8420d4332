//! All data types for the graph store.

pub mod edge;
pub mod error;
pub mod status;
pub mod vertex;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use status::Status;
pub use vertex::{is_connected, Vertex};

/// Adjacency matrix cell value for a pair with no edge.
pub const NO_EDGE: f64 = -1.0;

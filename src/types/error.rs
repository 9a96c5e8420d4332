//! Error types for the graph store.

use std::collections::TryReserveError;

use thiserror::Error;

use super::Status;

/// All errors that can occur in graph store operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A required argument is missing or malformed.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(&'static str),

    /// An allocation failed. The graph is left unchanged.
    #[error("Out of memory")]
    OutOfMemory,

    /// A vertex with this ID is already present.
    #[error("Vertex {0} already exists")]
    VertexExists(u64),

    /// An edge between these vertices is already present.
    #[error("Edge {source_id} -> {dest_id} already exists")]
    EdgeExists { source_id: u64, dest_id: u64 },

    /// No vertex with this ID.
    #[error("Vertex {0} not found")]
    VertexNotFound(u64),

    /// No edge from `source_id` to `dest_id`.
    #[error("Edge {source_id} -> {dest_id} not found")]
    EdgeNotFound { source_id: u64, dest_id: u64 },
}

impl GraphError {
    /// The result code this error reports through the C surface.
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidParameters(_) => Status::InvalidParameters,
            Self::OutOfMemory => Status::OutOfMemory,
            Self::VertexExists(_) | Self::EdgeExists { .. } => Status::AlreadyExists,
            Self::VertexNotFound(_) | Self::EdgeNotFound { .. } => Status::NotFound,
        }
    }
}

impl From<TryReserveError> for GraphError {
    fn from(err: TryReserveError) -> Self {
        log::warn!("Allocation failed: {}", err);
        Self::OutOfMemory
    }
}

/// Convenience result type for graph store operations.
pub type GraphResult<T> = Result<T, GraphError>;

//! The weighted edge record.

use serde::Serialize;

/// A directed, weighted link stored in its source vertex's neighbor list.
///
/// An undirected edge between two distinct vertices is held as two records,
/// one under each endpoint, with swapped IDs and equal weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    /// ID of the vertex that owns this record.
    pub source_id: u64,
    /// ID of the vertex this record points at.
    pub dest_id: u64,
    /// Weight of the link.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(source_id: u64, dest_id: u64, weight: f64) -> Self {
        Self {
            source_id,
            dest_id,
            weight,
        }
    }

    /// The record stored under the destination for an undirected edge.
    pub fn mirror(&self) -> Self {
        Self {
            source_id: self.dest_id,
            dest_id: self.source_id,
            weight: self.weight,
        }
    }

    /// Whether both ends are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.dest_id
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} -> {}, {})", self.source_id, self.dest_id, self.weight)
    }
}

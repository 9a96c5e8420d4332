//! Graph vertices and the neighbor lists they own.

use super::{Edge, GraphResult};

/// A vertex and the outgoing edge records it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: u64,
    neighbors: Vec<Edge>,
}

impl Vertex {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
        }
    }

    /// The vertex ID, unique within its graph.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of outgoing edge records.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Outgoing edge records.
    pub fn neighbors(&self) -> &[Edge] {
        &self.neighbors
    }

    /// The outgoing record pointing at `dest_id`, if any.
    pub fn edge_to(&self, dest_id: u64) -> Option<&Edge> {
        self.neighbors.iter().find(|e| e.dest_id == dest_id)
    }

    /// Make room for `additional` records without touching the list.
    pub(crate) fn reserve(&mut self, additional: usize) -> GraphResult<()> {
        self.neighbors.try_reserve(additional)?;
        Ok(())
    }

    /// Append a record. Capacity must already be reserved by the caller
    /// for the insertion to be allocation-free.
    pub(crate) fn push(&mut self, edge: Edge) {
        debug_assert_eq!(edge.source_id, self.id);
        self.neighbors.push(edge);
    }

    /// Detach and return the record pointing at `dest_id`.
    pub(crate) fn take_edge_to(&mut self, dest_id: u64) -> Option<Edge> {
        let pos = self.neighbors.iter().position(|e| e.dest_id == dest_id)?;
        Some(self.neighbors.remove(pos))
    }

    /// Move every outgoing record out of this vertex.
    pub(crate) fn take_neighbors(&mut self) -> Vec<Edge> {
        std::mem::take(&mut self.neighbors)
    }
}

/// Whether `dest` appears as a destination in `source`'s neighbor list.
///
/// Returns the connecting record when it does. Cost is linear in the
/// source's neighbor count.
pub fn is_connected<'a>(source: &'a Vertex, dest: &Vertex) -> Option<&'a Edge> {
    source.edge_to(dest.id())
}

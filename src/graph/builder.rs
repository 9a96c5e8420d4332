//! Fluent API for building Graph instances.

use crate::types::GraphResult;

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Vertices are added first, then edges, each in call order. The first
/// failing insertion aborts the build.
pub struct GraphBuilder {
    directed: bool,
    capacity: usize,
    vertices: Vec<u64>,
    edges: Vec<(u64, u64, f64)>,
}

impl GraphBuilder {
    /// Create a builder for an undirected graph.
    pub fn new() -> Self {
        Self {
            directed: false,
            capacity: 0,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Build a directed graph.
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Build an undirected graph.
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    /// Reserve room for at least `capacity` vertices up front.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Add a vertex.
    pub fn vertex(mut self, id: u64) -> Self {
        self.vertices.push(id);
        self
    }

    /// Add several vertices.
    pub fn vertices<I: IntoIterator<Item = u64>>(mut self, ids: I) -> Self {
        self.vertices.extend(ids);
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(mut self, source_id: u64, dest_id: u64, weight: f64) -> Self {
        self.edges.push((source_id, dest_id, weight));
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        let capacity = self.capacity.max(self.vertices.len());
        let mut graph = Graph::with_capacity(self.directed, capacity)?;
        for id in self.vertices {
            graph.add_vertex(id)?;
        }
        for (source_id, dest_id, weight) in self.edges {
            graph.add_edge(source_id, dest_id, weight)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

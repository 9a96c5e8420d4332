//! Core graph structure: vertices owning their outgoing edge records.

use std::collections::HashMap;

use crate::types::{is_connected, Edge, GraphError, GraphResult, Vertex};

/// An in-memory weighted graph, directed or undirected.
///
/// Each vertex owns its outgoing edge records. In an undirected graph an edge
/// between distinct vertices `u` and `v` is stored twice, once under each
/// endpoint; a self-loop is stored once. Dropping the graph releases every
/// vertex and edge.
///
/// Vertices are enumerated in an unspecified order that stays fixed until the
/// next mutation.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Fixed at construction.
    directed: bool,
    /// All vertices, keyed by ID.
    vertices: HashMap<u64, Vertex>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            vertices: HashMap::new(),
        }
    }

    /// Create a new empty graph with room for `capacity` vertices.
    pub fn with_capacity(directed: bool, capacity: usize) -> GraphResult<Self> {
        let mut vertices = HashMap::new();
        vertices.try_reserve(capacity)?;
        Ok(Self { directed, vertices })
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of physical edge records across all vertices.
    ///
    /// An undirected edge between distinct vertices counts twice.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::neighbor_count).sum()
    }

    /// Whether a vertex with this ID exists.
    pub fn contains_vertex(&self, id: u64) -> bool {
        self.vertices.contains_key(&id)
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: u64) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// All vertices, in enumeration order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// All vertex IDs, in enumeration order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.vertices.keys().copied()
    }

    /// Add a vertex with no neighbors.
    pub fn add_vertex(&mut self, id: u64) -> GraphResult<()> {
        if self.vertices.contains_key(&id) {
            log::trace!("add_vertex rejected: vertex {} exists", id);
            return Err(GraphError::VertexExists(id));
        }

        self.vertices.try_reserve(1)?;
        self.vertices.insert(id, Vertex::new(id));
        log::debug!("added vertex {}", id);

        Ok(())
    }

    /// Remove a vertex and every edge incident on it.
    ///
    /// Returns the number of edge records released, counting mirrors and
    /// incoming records stored on other vertices.
    pub fn remove_vertex(&mut self, id: u64) -> GraphResult<usize> {
        let mut vertex = self.vertices.remove(&id).ok_or_else(|| {
            log::trace!("remove_vertex rejected: vertex {} not found", id);
            GraphError::VertexNotFound(id)
        })?;

        let outgoing = vertex.take_neighbors();
        let mut released = outgoing.len();

        if self.directed {
            // Incoming records are owned by their sources.
            for other in self.vertices.values_mut() {
                if other.take_edge_to(id).is_some() {
                    released += 1;
                }
            }
        } else {
            for edge in outgoing.iter().filter(|e| !e.is_self_loop()) {
                self.take_mirror(edge);
                released += 1;
            }
        }

        log::debug!("removed vertex {} and {} edge records", id, released);
        Ok(released)
    }

    /// Add an edge from `source_id` to `dest_id`.
    ///
    /// Undirected graphs also store the mirror record under `dest_id`, so
    /// adding `(v, u)` after `(u, v)` is rejected as a duplicate. Either both
    /// records are inserted or neither is.
    pub fn add_edge(&mut self, source_id: u64, dest_id: u64, weight: f64) -> GraphResult<()> {
        if weight.is_nan() {
            return Err(GraphError::InvalidParameters("edge weight is NaN"));
        }

        let source = self
            .vertices
            .get(&source_id)
            .ok_or(GraphError::VertexNotFound(source_id))?;
        let dest = self
            .vertices
            .get(&dest_id)
            .ok_or(GraphError::VertexNotFound(dest_id))?;

        let exists = is_connected(source, dest).is_some();
        if !self.directed {
            debug_assert_eq!(
                exists,
                is_connected(dest, source).is_some(),
                "mirror symmetry broken between {} and {}",
                source_id,
                dest_id
            );
        }
        if exists {
            log::trace!("add_edge rejected: {} -> {} exists", source_id, dest_id);
            return Err(GraphError::EdgeExists { source_id, dest_id });
        }

        let mirrored = !self.directed && source_id != dest_id;

        // Reserve on both ends first: a failure here has mutated nothing.
        self.vertex_mut(source_id)?.reserve(1)?;
        if mirrored {
            self.vertex_mut(dest_id)?.reserve(1)?;
        }

        let edge = Edge::new(source_id, dest_id, weight);
        self.vertex_mut(source_id)?.push(edge);
        if mirrored {
            self.vertex_mut(dest_id)?.push(edge.mirror());
        }

        log::debug!("added edge {}", edge);
        Ok(())
    }

    /// Remove the edge from `source_id` to `dest_id`, returning its record.
    ///
    /// In an undirected graph the mirror record is removed as well.
    pub fn remove_edge(&mut self, source_id: u64, dest_id: u64) -> GraphResult<Edge> {
        if !self.vertices.contains_key(&source_id) {
            return Err(GraphError::VertexNotFound(source_id));
        }
        if !self.vertices.contains_key(&dest_id) {
            return Err(GraphError::VertexNotFound(dest_id));
        }

        let edge = self
            .vertex_mut(source_id)?
            .take_edge_to(dest_id)
            .ok_or_else(|| {
                log::trace!("remove_edge rejected: {} -> {} not found", source_id, dest_id);
                GraphError::EdgeNotFound { source_id, dest_id }
            })?;

        if !self.directed && !edge.is_self_loop() {
            self.take_mirror(&edge);
        }

        log::debug!("removed edge {}", edge);
        Ok(edge)
    }

    /// Whether an edge record from `source_id` to `dest_id` exists.
    pub fn is_connected(&self, source_id: u64, dest_id: u64) -> bool {
        self.edge(source_id, dest_id).is_some()
    }

    /// The edge record from `source_id` to `dest_id`, if any.
    pub fn edge(&self, source_id: u64, dest_id: u64) -> Option<&Edge> {
        let source = self.vertices.get(&source_id)?;
        let dest = self.vertices.get(&dest_id)?;
        is_connected(source, dest)
    }

    /// Outgoing edge records of a vertex.
    pub fn neighbors(&self, id: u64) -> GraphResult<&[Edge]> {
        self.vertices
            .get(&id)
            .map(Vertex::neighbors)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Number of outgoing edge records of a vertex.
    pub fn neighbor_count(&self, id: u64) -> GraphResult<usize> {
        self.neighbors(id).map(<[Edge]>::len)
    }

    /// Release every vertex and edge. Directionality is kept.
    pub fn clear(&mut self) {
        let count = self.vertices.len();
        self.vertices.clear();
        log::debug!("cleared {} vertices", count);
    }

    /// Verify the structural invariants, logging the first violation found.
    ///
    /// Checks that keys match vertex IDs, records belong to their owner, no
    /// parallel edges exist, every destination exists, and in undirected
    /// graphs every non-loop record has a mirror with the same weight.
    pub fn check_invariants(&self) -> bool {
        match self.find_violation() {
            Some(violation) => {
                log::error!("graph invariant violated: {}", violation);
                false
            }
            None => true,
        }
    }

    fn find_violation(&self) -> Option<String> {
        for (&id, vertex) in &self.vertices {
            if vertex.id() != id {
                return Some(format!("vertex {} stored under key {}", vertex.id(), id));
            }
            let neighbors = vertex.neighbors();
            for (i, edge) in neighbors.iter().enumerate() {
                if edge.source_id != id {
                    return Some(format!("edge {} stored under vertex {}", edge, id));
                }
                if neighbors[..i].iter().any(|e| e.dest_id == edge.dest_id) {
                    return Some(format!("parallel edge {}", edge));
                }
                let Some(dest) = self.vertices.get(&edge.dest_id) else {
                    return Some(format!("edge {} points at a missing vertex", edge));
                };
                if !self.directed && !edge.is_self_loop() {
                    match dest.edge_to(id) {
                        Some(mirror) if mirror.weight == edge.weight => {}
                        Some(mirror) => {
                            return Some(format!("edge {} has mismatched mirror {}", edge, mirror))
                        }
                        None => return Some(format!("edge {} has no mirror", edge)),
                    }
                }
            }
        }
        None
    }

    fn vertex_mut(&mut self, id: u64) -> GraphResult<&mut Vertex> {
        self.vertices
            .get_mut(&id)
            .ok_or(GraphError::VertexNotFound(id))
    }

    /// Detach the mirror of an undirected, non-loop record.
    ///
    /// # Panics
    ///
    /// Panics if the mirror is missing, which means the graph is corrupt.
    fn take_mirror(&mut self, edge: &Edge) -> Edge {
        let mirror = self
            .vertices
            .get_mut(&edge.dest_id)
            .and_then(|dest| dest.take_edge_to(edge.source_id));
        match mirror {
            Some(mirror) => {
                debug_assert!(mirror.weight == edge.weight, "mirror weight differs for {}", edge);
                mirror
            }
            None => panic!("mirror of edge {} missing: undirected graph is corrupt", edge),
        }
    }
}

//! Dense adjacency-matrix export.
//!
//! Rows and columns follow the graph's vertex enumeration order. The ID at
//! each position is kept alongside the cells, and every cell is written at
//! the true position of its source and destination vertex. Positions are
//! never derived from how many edges have been visited, so uneven neighbor
//! counts cannot shift weights into the wrong column.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{GraphError, GraphResult, NO_EDGE};

use super::Graph;

/// A `size x size` matrix of edge weights, row-major.
///
/// Cell `[i][j]` holds the weight of the edge from the vertex at position `i`
/// to the vertex at position `j`, or [`NO_EDGE`] if there is none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    /// Vertex ID at each row/column position.
    order: Vec<u64>,
    /// Row-major weights.
    cells: Vec<f64>,
}

impl AdjacencyMatrix {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.order.len()
    }

    /// Vertex IDs by position.
    pub fn vertex_ids(&self) -> &[u64] {
        &self.order
    }

    /// Position of a vertex ID.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.order.iter().position(|&v| v == id)
    }

    /// Cell at a row/column position.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let size = self.size();
        if row >= size || col >= size {
            return None;
        }
        Some(self.cells[row * size + col])
    }

    /// Cell for the pair of vertex IDs.
    pub fn weight(&self, source_id: u64, dest_id: u64) -> Option<f64> {
        let row = self.index_of(source_id)?;
        let col = self.index_of(dest_id)?;
        self.get(row, col)
    }

    /// One row of cells.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let size = self.size();
        if row >= size {
            return None;
        }
        Some(&self.cells[row * size..(row + 1) * size])
    }

    /// All rows, in position order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact panics on 0
        self.cells.chunks_exact(self.size().max(1))
    }

    /// All cells, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.cells
    }

    /// Split into the position order and the row-major cells.
    pub fn into_parts(self) -> (Vec<u64>, Vec<f64>) {
        (self.order, self.cells)
    }
}

impl Graph {
    /// Build the dense adjacency matrix of the current graph.
    ///
    /// Fails with `OutOfMemory` if any buffer cannot be allocated; nothing is
    /// retained in that case.
    pub fn adjacency_matrix(&self) -> GraphResult<AdjacencyMatrix> {
        let size = self.vertex_count();
        let cell_count = size.checked_mul(size).ok_or(GraphError::OutOfMemory)?;

        let mut order = Vec::new();
        order.try_reserve_exact(size)?;
        let mut index: HashMap<u64, usize> = HashMap::new();
        index.try_reserve(size)?;
        for (pos, id) in self.vertex_ids().enumerate() {
            order.push(id);
            index.insert(id, pos);
        }

        let mut cells = Vec::new();
        cells.try_reserve_exact(cell_count)?;
        cells.resize(cell_count, NO_EDGE);

        for (row, vertex) in self.vertices().enumerate() {
            debug_assert_eq!(order[row], vertex.id());
            for edge in vertex.neighbors() {
                let Some(&col) = index.get(&edge.dest_id) else {
                    panic!("edge {} points at a missing vertex", edge);
                };
                cells[row * size + col] = edge.weight;
            }
        }

        log::debug!("built {}x{} adjacency matrix", size, size);
        Ok(AdjacencyMatrix { order, cells })
    }
}

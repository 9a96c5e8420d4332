//! C-compatible FFI bindings.
//!
//! Every function returns a [`Status`] code as `i32`. Null handles and null
//! out-pointers are reported as `InvalidParameters` before anything is
//! touched. A panic inside the library means a graph invariant was broken;
//! it aborts the process instead of unwinding into C.

use std::ffi::c_void;
use std::panic::{catch_unwind, UnwindSafe};
use std::ptr;

use crate::graph::Graph;
use crate::types::{GraphResult, Status};

fn guarded<F: FnOnce() -> i32 + UnwindSafe>(f: F) -> i32 {
    catch_unwind(f).unwrap_or_else(|_| {
        log::error!("panic inside graph C API, aborting");
        std::process::abort()
    })
}

fn code<T>(result: GraphResult<T>) -> i32 {
    Status::of(&result).code()
}

const INVALID: i32 = Status::InvalidParameters as i32;
const SUCCESS: i32 = Status::Success as i32;

/// Create an empty graph and store its handle in `out`.
///
/// # Safety
///
/// `out` must be null or valid for a pointer write. The handle must be
/// released with `graph_destroy`.
#[no_mangle]
pub unsafe extern "C" fn graph_init(directed: bool, out: *mut *mut c_void) -> i32 {
    guarded(|| {
        if out.is_null() {
            return INVALID;
        }
        let graph = Box::new(Graph::new(directed));
        unsafe { *out = Box::into_raw(graph) as *mut c_void };
        SUCCESS
    })
}

/// Release a graph with all its vertices and edges.
///
/// # Safety
///
/// `graph` must be null or a live handle from `graph_init`. The handle is
/// dangling afterwards.
#[no_mangle]
pub unsafe extern "C" fn graph_destroy(graph: *mut c_void) -> i32 {
    guarded(|| {
        if graph.is_null() {
            return INVALID;
        }
        let graph = unsafe { Box::from_raw(graph as *mut Graph) };
        log::debug!("destroying graph with {} vertices", graph.vertex_count());
        drop(graph);
        SUCCESS
    })
}

/// Add a vertex.
///
/// # Safety
///
/// `graph` must be null or a live handle from `graph_init`.
#[no_mangle]
pub unsafe extern "C" fn graph_add_vertex(graph: *mut c_void, id: u64) -> i32 {
    guarded(|| {
        if graph.is_null() {
            return INVALID;
        }
        let graph = unsafe { &mut *(graph as *mut Graph) };
        code(graph.add_vertex(id))
    })
}

/// Remove a vertex and every edge incident on it.
///
/// # Safety
///
/// `graph` must be null or a live handle from `graph_init`.
#[no_mangle]
pub unsafe extern "C" fn graph_remove_vertex(graph: *mut c_void, id: u64) -> i32 {
    guarded(|| {
        if graph.is_null() {
            return INVALID;
        }
        let graph = unsafe { &mut *(graph as *mut Graph) };
        code(graph.remove_vertex(id))
    })
}

/// Add an edge (and its mirror, for undirected graphs).
///
/// # Safety
///
/// `graph` must be null or a live handle from `graph_init`.
#[no_mangle]
pub unsafe extern "C" fn graph_add_edge(
    graph: *mut c_void,
    source_id: u64,
    dest_id: u64,
    weight: f64,
) -> i32 {
    guarded(|| {
        if graph.is_null() {
            return INVALID;
        }
        let graph = unsafe { &mut *(graph as *mut Graph) };
        code(graph.add_edge(source_id, dest_id, weight))
    })
}

/// Remove an edge (and its mirror, for undirected graphs).
///
/// # Safety
///
/// `graph` must be null or a live handle from `graph_init`.
#[no_mangle]
pub unsafe extern "C" fn graph_remove_edge(graph: *mut c_void, source_id: u64, dest_id: u64) -> i32 {
    guarded(|| {
        if graph.is_null() {
            return INVALID;
        }
        let graph = unsafe { &mut *(graph as *mut Graph) };
        code(graph.remove_edge(source_id, dest_id))
    })
}

/// Write the vertex count to `out`.
///
/// # Safety
///
/// `graph` must be null or a live handle; `out` must be null or valid for a
/// write.
#[no_mangle]
pub unsafe extern "C" fn graph_vertex_count(graph: *mut c_void, out: *mut usize) -> i32 {
    guarded(|| {
        if graph.is_null() || out.is_null() {
            return INVALID;
        }
        let graph = unsafe { &*(graph as *const Graph) };
        unsafe { *out = graph.vertex_count() };
        SUCCESS
    })
}

/// Write a vertex's outgoing edge count to `out`.
///
/// # Safety
///
/// `graph` must be null or a live handle; `out` must be null or valid for a
/// write.
#[no_mangle]
pub unsafe extern "C" fn graph_neighbor_count(graph: *mut c_void, id: u64, out: *mut usize) -> i32 {
    guarded(|| {
        if graph.is_null() || out.is_null() {
            return INVALID;
        }
        let graph = unsafe { &*(graph as *const Graph) };
        match graph.neighbor_count(id) {
            Ok(count) => {
                unsafe { *out = count };
                SUCCESS
            }
            Err(err) => err.status().code(),
        }
    })
}

/// Build the adjacency matrix.
///
/// On success `*out_matrix` holds `size * size` row-major weights (`-1` for
/// no edge), `*out_size` holds `size`, and, when `out_ids` is not null,
/// `*out_ids` holds the vertex ID of each row/column. Release both buffers
/// with `graph_free_adjacency_matrix`.
///
/// # Safety
///
/// `graph` must be null or a live handle. Each out-pointer must be null or
/// valid for a write.
#[no_mangle]
pub unsafe extern "C" fn graph_get_adjacency_matrix(
    graph: *mut c_void,
    out_matrix: *mut *mut f64,
    out_ids: *mut *mut u64,
    out_size: *mut usize,
) -> i32 {
    guarded(|| {
        if graph.is_null() || out_matrix.is_null() || out_size.is_null() {
            return INVALID;
        }
        let graph = unsafe { &*(graph as *const Graph) };
        let matrix = match graph.adjacency_matrix() {
            Ok(matrix) => matrix,
            Err(err) => return err.status().code(),
        };
        let size = matrix.size();
        let (order, cells) = matrix.into_parts();
        unsafe {
            *out_matrix = Box::into_raw(cells.into_boxed_slice()) as *mut f64;
            if !out_ids.is_null() {
                *out_ids = Box::into_raw(order.into_boxed_slice()) as *mut u64;
            }
            *out_size = size;
        }
        SUCCESS
    })
}

/// Release buffers returned by `graph_get_adjacency_matrix`.
///
/// # Safety
///
/// `matrix` and `ids` (which may be null) must come from the same call to
/// `graph_get_adjacency_matrix` that reported `size`, and must not be used
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn graph_free_adjacency_matrix(
    matrix: *mut f64,
    ids: *mut u64,
    size: usize,
) -> i32 {
    guarded(|| {
        if matrix.is_null() {
            return INVALID;
        }
        let Some(cells) = size.checked_mul(size) else {
            return INVALID;
        };
        unsafe {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(matrix, cells)));
            if !ids.is_null() {
                drop(Box::from_raw(ptr::slice_from_raw_parts_mut(ids, size)));
            }
        }
        SUCCESS
    })
}

/// Print the diagnostic listing to standard output.
///
/// # Safety
///
/// `graph` must be null or a live handle from `graph_init`.
#[no_mangle]
pub unsafe extern "C" fn graph_print(graph: *mut c_void) -> i32 {
    guarded(|| {
        if graph.is_null() {
            return INVALID;
        }
        let graph = unsafe { &*(graph as *const Graph) };
        if let Err(err) = graph.print() {
            log::warn!("failed to print graph: {}", err);
        }
        SUCCESS
    })
}

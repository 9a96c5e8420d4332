//! C ABI for embedding the graph store in non-Rust hosts.

pub mod c_api;

pub use c_api::*;

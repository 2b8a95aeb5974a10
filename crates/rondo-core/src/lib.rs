#![forbid(unsafe_code)]

//! Graph snapshot model and Eulerian-circuit diagnostics.
//!
//! Design goals:
//! - stateless: every call works on a fresh `(nodes, edges)` snapshot and
//!   retains nothing afterwards
//! - deterministic: adjacency buckets follow node input order, connections
//!   follow edge input order, so identical snapshots yield identical output
//! - graceful: absent collections are empty slices and dangling edges are
//!   skipped; only malformed snapshots surface as [`Error`]

pub mod adjacency;
pub mod diagnostics;
pub mod error;
pub mod model;

pub use adjacency::{Adjacency, Connection};
pub use diagnostics::{
    GraphStatus, has_eulerian_circuit, is_connected, odd_degree_nodes, status, zero_degree_nodes,
};
pub use error::{Error, Result};
pub use model::{Edge, Node, validate};

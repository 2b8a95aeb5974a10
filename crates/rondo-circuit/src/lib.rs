#![forbid(unsafe_code)]

//! Eulerian circuit construction for label-keyed multigraph snapshots.
//!
//! Given a snapshot that admits an Eulerian circuit (see
//! `rondo_core::diagnostics`), [`find_circuit`] produces one concrete closed
//! walk using Hierholzer's algorithm, deterministically: the start node is
//! the first positive-degree label in input order and ties always break
//! toward the earliest-inserted connection.

pub mod circuit;
pub mod tour;

pub use circuit::{Circuit, Traversal, find_circuit};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#![forbid(unsafe_code)]

//! `rondo` is a headless Eulerian-circuit analysis engine for interactive
//! node/edge editors.
//!
//! The hosting application owns the editable graph state and the rendering;
//! this crate takes a plain `(nodes, edges)` snapshot and answers structural
//! questions about it: node degrees, connectivity, whether the graph admits
//! an Eulerian circuit, and — when it does — one concrete circuit with a
//! per-edge traversal order suitable for path highlighting.
//!
//! Every call is a fresh, stateless computation; nothing persists between
//! invocations and inputs are never mutated.
//!
//! ```
//! use rondo::{Edge, Node, analyze};
//!
//! let nodes = vec![
//!     Node::new("1", "A"),
//!     Node::new("2", "B"),
//!     Node::new("3", "C"),
//! ];
//! let edges = vec![
//!     Edge::new("e1", "1", "2"),
//!     Edge::new("e2", "2", "3"),
//!     Edge::new("e3", "3", "1"),
//! ];
//!
//! let analysis = analyze(&nodes, &edges);
//! let cycle = analysis.cycle.expect("triangle has a circuit");
//! assert_eq!(cycle.circuit.node_path, ["A", "B", "C", "A"]);
//! ```

mod analyze;

pub use analyze::{
    Analysis, AnalysisOutcome, CycleEdge, CycleResult, GraphSummary, analyze, run_analysis,
};
pub use rondo_circuit::{Circuit, Traversal, find_circuit};
pub use rondo_core::adjacency::{Adjacency, Connection};
pub use rondo_core::diagnostics::{GraphStatus, has_eulerian_circuit, is_connected, status};
pub use rondo_core::error::{Error, Result};
pub use rondo_core::model::{Edge, Node, validate};
pub use rondo_core::{adjacency, diagnostics, error, model};

/// Labels of odd-degree nodes, in node input order.
///
/// Snapshot-level convenience over [`diagnostics::odd_degree_nodes`].
pub fn odd_degree_nodes(nodes: &[Node], edges: &[Edge]) -> Vec<String> {
    let adjacency = Adjacency::build(nodes, edges);
    diagnostics::odd_degree_nodes(&adjacency)
}

/// Labels of zero-degree nodes, in node input order.
///
/// Snapshot-level convenience over [`diagnostics::zero_degree_nodes`].
pub fn zero_degree_nodes(nodes: &[Node], edges: &[Edge]) -> Vec<String> {
    let adjacency = Adjacency::build(nodes, edges);
    diagnostics::zero_degree_nodes(&adjacency)
}

//! Structural analysis report: a human-readable summary plus the machine
//! result for the hosting editor to highlight.
//!
//! This module is pure composition over the diagnostics and the circuit
//! constructor. It formats text; emitting it anywhere (alerts, consoles,
//! panels) is the caller's job.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use rondo_circuit::{Circuit, Traversal, find_circuit};
use rondo_core::adjacency::Adjacency;
use rondo_core::diagnostics::{self, GraphStatus};
use rondo_core::error::Result;
use rondo_core::model::{Edge, Node, validate};

const PATH_SEPARATOR: &str = " → ";

/// An edge's place in the circuit: 1-based position plus the traversal
/// detail of the step that consumed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleEdge {
    pub order: usize,
    #[serde(flatten)]
    pub traversal: Traversal,
}

/// The circuit together with its derived edge-id → position view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleResult {
    pub circuit: Circuit,
    pub edge_order: IndexMap<String, CycleEdge>,
}

impl CycleResult {
    fn from_circuit(circuit: Circuit) -> Self {
        let mut edge_order = IndexMap::with_capacity(circuit.traversals.len());
        for (index, traversal) in circuit.traversals.iter().enumerate() {
            edge_order.insert(
                traversal.edge_id.clone(),
                CycleEdge {
                    order: index + 1,
                    traversal: traversal.clone(),
                },
            );
        }
        Self { circuit, edge_order }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: String,
    pub cycle: Option<CycleResult>,
}

/// Analyzes a snapshot: per-node connection listing plus the circuit
/// verdict. Deterministic — the same snapshot yields the same summary text
/// and the same circuit.
pub fn analyze(nodes: &[Node], edges: &[Edge]) -> Analysis {
    tracing::debug!(
        node_count = nodes.len(),
        edge_count = edges.len(),
        "analyzing graph snapshot"
    );

    let connections = connection_summary(nodes, edges);
    let (status_text, cycle) = cycle_status(nodes, edges);

    Analysis {
        summary: format!("{connections}\n\n{status_text}"),
        cycle,
    }
}

/// Input counts of the analyzed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
}

/// Everything a one-shot analysis produces: the report, the diagnostic
/// record, and the input counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub analysis: Analysis,
    pub status: GraphStatus,
    pub graph: GraphSummary,
}

/// Validates the snapshot, then analyzes it.
///
/// Malformed input (duplicate ids, duplicate labels, empty identifiers)
/// surfaces as a typed error; an ineligible graph does not — it comes back
/// as a normal [`AnalysisOutcome`] whose summary names the disqualifier.
pub fn run_analysis(nodes: &[Node], edges: &[Edge]) -> Result<AnalysisOutcome> {
    validate(nodes, edges)?;
    let analysis = analyze(nodes, edges);
    let status = diagnostics::status(nodes, edges);
    tracing::debug!(
        has_circuit = status.has_eulerian_circuit,
        "graph analysis complete"
    );
    Ok(AnalysisOutcome {
        analysis,
        status,
        graph: GraphSummary {
            node_count: nodes.len(),
            edge_count: edges.len(),
        },
    })
}

/// One line per node, neighbors de-duplicated and sorted lexicographically.
/// Parallel edges collapse here and only here — circuit construction still
/// sees every edge.
fn connection_summary(nodes: &[Node], edges: &[Edge]) -> String {
    let adjacency = Adjacency::build(nodes, edges);
    let mut lines = vec!["Graph connections:".to_string()];
    for (label, connections) in adjacency.iter() {
        let mut neighbors: Vec<&str> = connections
            .iter()
            .map(|connection| connection.neighbor_label.as_str())
            .collect();
        neighbors.sort_unstable();
        neighbors.dedup();
        let listed = if neighbors.is_empty() {
            "none".to_string()
        } else {
            neighbors.join(", ")
        };
        lines.push(format!("{label} is connected to: {listed}"));
    }
    lines.join("\n")
}

fn cycle_status(nodes: &[Node], edges: &[Edge]) -> (String, Option<CycleResult>) {
    if diagnostics::has_eulerian_circuit(nodes, edges) {
        let mut text = String::from("This graph contains an Eulerian circuit.");
        let mut cycle = None;
        if let Some(circuit) = find_circuit(nodes, edges) {
            let path = circuit.node_path.join(PATH_SEPARATOR);
            text.push('\n');
            text.push_str(&format!("Eulerian circuit found: {path}"));
            cycle = Some(CycleResult::from_circuit(circuit));
        }
        return (text, cycle);
    }
    (ineligible_status(nodes, edges), None)
}

/// Disqualification message. Several conditions can hold at once; only the
/// highest-priority one is reported: empty graph, then no edges, then
/// zero-degree nodes, then odd-degree nodes, then connectivity.
fn ineligible_status(nodes: &[Node], edges: &[Edge]) -> String {
    if nodes.is_empty() {
        return "The graph is empty.".to_string();
    }
    if edges.is_empty() {
        return "The graph has no edges.".to_string();
    }

    let adjacency = Adjacency::build(nodes, edges);
    let zero = diagnostics::zero_degree_nodes(&adjacency);
    if !zero.is_empty() {
        return format!("Nodes without connections: {}.", zero.join(", "));
    }
    let odd = diagnostics::odd_degree_nodes(&adjacency);
    if !odd.is_empty() {
        return format!("Nodes with odd degree: {}.", odd.join(", "));
    }
    "The graph is not connected.".to_string()
}

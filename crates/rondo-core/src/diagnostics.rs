//! Degree and connectivity diagnostics over an adjacency structure.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::adjacency::Adjacency;
use crate::model::{Edge, Node};

/// Labels of odd-degree nodes, in adjacency order.
pub fn odd_degree_nodes(adjacency: &Adjacency) -> Vec<String> {
    adjacency
        .iter()
        .filter(|(_, connections)| connections.len() % 2 != 0)
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Labels of zero-degree nodes, in adjacency order.
pub fn zero_degree_nodes(adjacency: &Adjacency) -> Vec<String> {
    adjacency
        .iter()
        .filter(|(_, connections)| connections.is_empty())
        .map(|(label, _)| label.to_string())
        .collect()
}

/// Whether every degree-positive node is reachable from the first one.
/// Isolated nodes are ignored; a graph with no degree-positive nodes is
/// vacuously connected.
pub fn is_connected(adjacency: &Adjacency) -> bool {
    let positive = adjacency
        .iter()
        .filter(|(_, connections)| !connections.is_empty())
        .count();
    let Some(start) = adjacency.first_positive_degree_label() else {
        return true;
    };

    let mut visited: FxHashSet<&str> = FxHashSet::default();
    dfs(adjacency, start, &mut visited);
    visited.len() == positive
}

fn dfs<'a>(adjacency: &'a Adjacency, label: &'a str, visited: &mut FxHashSet<&'a str>) {
    if !visited.insert(label) {
        return;
    }
    let Some(connections) = adjacency.connections(label) else {
        return;
    };
    for connection in connections {
        if !visited.contains(connection.neighbor_label.as_str()) {
            dfs(adjacency, &connection.neighbor_label, visited);
        }
    }
}

/// Whether the snapshot admits an Eulerian circuit.
///
/// Requires, in order: at least one node and one edge, no zero-degree node
/// anywhere, all degrees even, and a connected degree-positive subgraph.
///
/// The zero-degree requirement is stricter than the classical criterion,
/// which only constrains degree-positive vertices: here an isolated node
/// disqualifies the whole graph. That is a deliberate policy of this engine,
/// not an oversight.
pub fn has_eulerian_circuit(nodes: &[Node], edges: &[Edge]) -> bool {
    if nodes.is_empty() || edges.is_empty() {
        return false;
    }
    let adjacency = Adjacency::build(nodes, edges);
    eligible(&adjacency)
}

fn eligible(adjacency: &Adjacency) -> bool {
    let mut all_even = true;
    for (_, connections) in adjacency.iter() {
        if connections.is_empty() {
            return false;
        }
        all_even &= connections.len() % 2 == 0;
    }
    all_even && is_connected(adjacency)
}

/// Read-only diagnostic snapshot of a graph. Producing it has no side
/// effects; reporting it anywhere is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatus {
    pub has_eulerian_circuit: bool,
    pub odd_degree_nodes: Vec<String>,
    pub zero_degree_nodes: Vec<String>,
    pub is_connected: bool,
    pub node_count: usize,
    pub edge_count: usize,
}

pub fn status(nodes: &[Node], edges: &[Edge]) -> GraphStatus {
    let adjacency = Adjacency::build(nodes, edges);
    GraphStatus {
        has_eulerian_circuit: has_eulerian_circuit(nodes, edges),
        odd_degree_nodes: odd_degree_nodes(&adjacency),
        zero_degree_nodes: zero_degree_nodes(&adjacency),
        is_connected: is_connected(&adjacency),
        node_count: nodes.len(),
        edge_count: edges.len(),
    }
}

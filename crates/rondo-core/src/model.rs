//! Snapshot input model.
//!
//! A snapshot is an ordered `(nodes, edges)` pair handed over by the hosting
//! editor. The engine never mutates it and never keeps references to it past
//! a call. Extra fields on the wire (positions, styling) are ignored.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A graph node. `id` is the opaque identity used by edges; `label` is the
/// display name the analysis reports in. Label uniqueness is an invariant of
/// the hosting editor; [`validate`] checks it at the boundary, the rest of
/// the engine assumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
}

/// An undirected edge between two node ids. `source_id == target_id` denotes
/// a self-loop. Parallel edges between the same pair are allowed and stay
/// distinguishable by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
}

impl Node {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }
}

/// Resolves node ids to labels. On duplicate ids the last occurrence wins,
/// matching plain map insertion; [`validate`] rejects that case up front.
pub(crate) fn id_to_label_map(nodes: &[Node]) -> FxHashMap<&str, &str> {
    let mut map = FxHashMap::default();
    for node in nodes {
        map.insert(node.id.as_str(), node.label.as_str());
    }
    map
}

/// Checks basic shape assumptions on a snapshot: non-empty ids and labels,
/// unique node ids, unique node labels, unique edge ids.
///
/// Dangling edge endpoints are deliberately NOT an error here; the adjacency
/// build skips such edges silently. Empty collections are valid input.
pub fn validate(nodes: &[Node], edges: &[Edge]) -> Result<()> {
    let mut node_ids: FxHashSet<&str> = FxHashSet::default();
    let mut labels: FxHashSet<&str> = FxHashSet::default();
    for node in nodes {
        if node.id.is_empty() {
            return Err(Error::EmptyNodeId);
        }
        if node.label.is_empty() {
            return Err(Error::EmptyNodeLabel {
                id: node.id.clone(),
            });
        }
        if !node_ids.insert(node.id.as_str()) {
            return Err(Error::DuplicateNodeId {
                id: node.id.clone(),
            });
        }
        if !labels.insert(node.label.as_str()) {
            return Err(Error::DuplicateNodeLabel {
                label: node.label.clone(),
            });
        }
    }

    let mut edge_ids: FxHashSet<&str> = FxHashSet::default();
    for edge in edges {
        if edge.id.is_empty() {
            return Err(Error::EmptyEdgeId);
        }
        if !edge_ids.insert(edge.id.as_str()) {
            return Err(Error::DuplicateEdgeId {
                id: edge.id.clone(),
            });
        }
    }

    Ok(())
}

//! Label-keyed adjacency structure.
//!
//! Buckets are kept in node input order and connections in edge input order.
//! Both orders are observable: diagnostics report labels in bucket order and
//! the circuit constructor consumes connections front to back, so a given
//! snapshot always produces the same output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::model::{Edge, Node, id_to_label_map};

/// One side of an undirected edge, filed under an endpoint's label and
/// pointing at the opposite endpoint. Every resolved edge contributes two of
/// these; a self-loop contributes two under the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub neighbor_label: String,
    pub edge_id: String,
    pub source_id: String,
    pub target_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Adjacency {
    buckets: IndexMap<String, Vec<Connection>>,
}

impl Adjacency {
    /// Builds the adjacency structure for a snapshot.
    ///
    /// Every node gets a bucket (possibly empty). Edges whose endpoints do
    /// not both resolve to a known node id are skipped; they are malformed
    /// input to ignore, not a failure.
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Self {
        let mut buckets: IndexMap<String, Vec<Connection>> = IndexMap::new();
        if nodes.is_empty() {
            return Self { buckets };
        }

        for node in nodes {
            buckets.entry(node.label.clone()).or_default();
        }

        let id_to_label = id_to_label_map(nodes);
        for edge in edges {
            let (Some(&source_label), Some(&target_label)) = (
                id_to_label.get(edge.source_id.as_str()),
                id_to_label.get(edge.target_id.as_str()),
            ) else {
                continue;
            };
            push_connection(&mut buckets, source_label, target_label, edge);
            push_connection(&mut buckets, target_label, source_label, edge);
        }

        Self { buckets }
    }

    /// Node labels in input order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn connections(&self, label: &str) -> Option<&[Connection]> {
        self.buckets.get(label).map(Vec::as_slice)
    }

    /// Degree of a node: length of its connection list. Unknown labels have
    /// degree 0.
    pub fn degree(&self, label: &str) -> usize {
        self.buckets.get(label).map_or(0, Vec::len)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Connection])> {
        self.buckets
            .iter()
            .map(|(label, bucket)| (label.as_str(), bucket.as_slice()))
    }

    /// First label with a positive degree, in input order. This is the start
    /// node of circuit construction.
    pub fn first_positive_degree_label(&self) -> Option<&str> {
        self.buckets
            .iter()
            .find(|(_, bucket)| !bucket.is_empty())
            .map(|(label, _)| label.as_str())
    }
}

fn push_connection(
    buckets: &mut IndexMap<String, Vec<Connection>>,
    from: &str,
    to: &str,
    edge: &Edge,
) {
    if let Some(bucket) = buckets.get_mut(from) {
        bucket.push(Connection {
            neighbor_label: to.to_string(),
            edge_id: edge.id.clone(),
            source_id: edge.source_id.clone(),
            target_id: edge.target_id.clone(),
        });
    }
}

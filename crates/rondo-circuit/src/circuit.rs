//! Hierholzer's algorithm over a label-keyed multigraph snapshot.
//!
//! The constructor extracts a closed tour from the start node, then scans the
//! path left to right and splices in further closed tours at the first node
//! that still has unconsumed connections, staying on that node until it is
//! exhausted. Connection choice is always "first unconsumed, in bucket
//! order", which makes the produced circuit a deterministic function of the
//! snapshot ordering.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use rondo_core::adjacency::{Adjacency, Connection};
use rondo_core::diagnostics::has_eulerian_circuit;
use rondo_core::model::{Edge, Node};

use crate::tour::TourList;

/// One step of the walk: the edge traversed and the direction it was walked
/// in (`from_label` is the endpoint the step left from).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traversal {
    pub from_label: String,
    pub to_label: String,
    pub edge_id: String,
    pub source_id: String,
    pub target_id: String,
}

/// A closed walk traversing every edge exactly once.
///
/// `node_path`, `edge_path` and `traversals` are index-parallel:
/// `edge_path[i]` connects `node_path[i]` to `node_path[i + 1]`, and
/// `traversals[i]` is the detail record of that step. The path is closed
/// (`node_path.first() == node_path.last()`) and has `edge_path.len() + 1`
/// entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub node_path: Vec<String>,
    pub edge_path: Vec<String>,
    pub traversals: Vec<Traversal>,
}

impl Circuit {
    pub fn edge_count(&self) -> usize {
        self.edge_path.len()
    }

    pub fn is_closed(&self) -> bool {
        self.node_path.first() == self.node_path.last()
    }
}

/// Constructs an Eulerian circuit, or returns `None` when the snapshot does
/// not admit one (see `rondo_core::diagnostics::has_eulerian_circuit`).
///
/// Inputs are read-only; all working state is freshly allocated per call.
pub fn find_circuit(nodes: &[Node], edges: &[Edge]) -> Option<Circuit> {
    if !has_eulerian_circuit(nodes, edges) {
        return None;
    }
    let adjacency = Adjacency::build(nodes, edges);
    let start = adjacency.first_positive_degree_label()?;
    Some(hierholzer(&adjacency, start))
}

/// A path entry: the node stood on, plus the traversal that arrived there
/// (`None` only for the starting entry).
#[derive(Debug, Clone)]
struct Step {
    label: String,
    arrival: Option<Traversal>,
}

impl Step {
    fn from_traversal(traversal: Traversal) -> Self {
        Self {
            label: traversal.to_label.clone(),
            arrival: Some(traversal),
        }
    }
}

fn hierholzer<'a>(adjacency: &'a Adjacency, start: &'a str) -> Circuit {
    let mut working = WorkingGraph::new(adjacency);

    let mut tour: TourList<Step> = TourList::new();
    let head = tour.push_back(Step {
        label: start.to_string(),
        arrival: None,
    });
    let initial = find_tour(&mut working, start);
    tour.splice_after(head, initial.into_iter().map(Step::from_traversal));

    // Scan the path left to right. A node is only left behind once it has no
    // unconsumed connection; until then every sub-tour found there is
    // spliced in right after it.
    let mut cursor = Some(head);
    while let Some(position) = cursor {
        let label = tour.value(position).label.clone();
        if working.has_unconsumed(&label) {
            let sub_tour = find_tour(&mut working, &label);
            tour.splice_after(position, sub_tour.into_iter().map(Step::from_traversal));
        } else {
            cursor = tour.next_of(position);
        }
    }

    let mut node_path = Vec::with_capacity(tour.len());
    let mut edge_path = Vec::with_capacity(tour.len().saturating_sub(1));
    let mut traversals = Vec::with_capacity(tour.len().saturating_sub(1));
    for step in tour.iter() {
        node_path.push(step.label.clone());
        if let Some(traversal) = &step.arrival {
            edge_path.push(traversal.edge_id.clone());
            traversals.push(traversal.clone());
        }
    }

    debug_assert_eq!(node_path.len(), edge_path.len() + 1);
    debug_assert_eq!(node_path.first(), node_path.last());

    Circuit {
        node_path,
        edge_path,
        traversals,
    }
}

/// Walks from `start` taking the first unconsumed connection at every node
/// until the current node has none left. With all degrees even this closes
/// back at `start`.
fn find_tour<'a>(working: &mut WorkingGraph<'a>, start: &str) -> Vec<Traversal> {
    let mut steps = Vec::new();
    let mut current: &str = start;
    while let Some(connection) = working.consume(current) {
        steps.push(Traversal {
            from_label: current.to_string(),
            to_label: connection.neighbor_label.clone(),
            edge_id: connection.edge_id.clone(),
            source_id: connection.source_id.clone(),
            target_id: connection.target_id.clone(),
        });
        current = connection.neighbor_label.as_str();
    }
    steps
}

/// Mutable working view of the adjacency structure.
///
/// Consuming an edge marks its id used; the mirrored entry under the other
/// endpoint is skipped when its bucket cursor reaches it. Cursors only move
/// forward, so each entry is looked at once across the whole construction.
#[derive(Debug)]
struct WorkingGraph<'a> {
    buckets: FxHashMap<&'a str, WorkingBucket<'a>>,
    consumed: FxHashSet<&'a str>,
}

#[derive(Debug)]
struct WorkingBucket<'a> {
    connections: &'a [Connection],
    cursor: usize,
}

impl<'a> WorkingGraph<'a> {
    fn new(adjacency: &'a Adjacency) -> Self {
        let mut buckets = FxHashMap::default();
        for (label, connections) in adjacency.iter() {
            buckets.insert(
                label,
                WorkingBucket {
                    connections,
                    cursor: 0,
                },
            );
        }
        Self {
            buckets,
            consumed: FxHashSet::default(),
        }
    }

    fn has_unconsumed(&mut self, label: &str) -> bool {
        self.peek(label).is_some()
    }

    /// First unconsumed connection at `label`, advancing the bucket cursor
    /// past consumed entries. Does not consume.
    fn peek(&mut self, label: &str) -> Option<&'a Connection> {
        let bucket = self.buckets.get_mut(label)?;
        let connections = bucket.connections;
        while bucket.cursor < connections.len() {
            let connection = &connections[bucket.cursor];
            if self.consumed.contains(connection.edge_id.as_str()) {
                bucket.cursor += 1;
            } else {
                return Some(connection);
            }
        }
        None
    }

    fn consume(&mut self, label: &str) -> Option<&'a Connection> {
        let connection = self.peek(label)?;
        self.consumed.insert(connection.edge_id.as_str());
        Some(connection)
    }
}

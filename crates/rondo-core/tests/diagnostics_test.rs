use rondo_core::adjacency::Adjacency;
use rondo_core::diagnostics::{
    has_eulerian_circuit, is_connected, odd_degree_nodes, status, zero_degree_nodes,
};
use rondo_core::model::{Edge, Node};

fn triangle() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![Node::new("1", "A"), Node::new("2", "B"), Node::new("3", "C")];
    let edges = vec![
        Edge::new("e1", "1", "2"),
        Edge::new("e2", "2", "3"),
        Edge::new("e3", "3", "1"),
    ];
    (nodes, edges)
}

/// Two node-disjoint 4-cycles: all degrees even, no isolated node, but two
/// components.
fn two_squares() -> (Vec<Node>, Vec<Edge>) {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();
    for (offset, prefix) in [(0, "p"), (4, "q")] {
        for i in 0..4 {
            nodes.push(Node::new(
                format!("{prefix}{i}"),
                format!("{}{}", prefix.to_uppercase(), i),
            ));
        }
        for i in 0..4usize {
            edges.push(Edge::new(
                format!("e{}", offset + i),
                format!("{prefix}{i}"),
                format!("{prefix}{}", (i + 1) % 4),
            ));
        }
    }
    (nodes, edges)
}

#[test]
fn triangle_has_a_circuit() {
    let (nodes, edges) = triangle();
    assert!(has_eulerian_circuit(&nodes, &edges));
}

#[test]
fn empty_inputs_have_no_circuit() {
    let (nodes, _) = triangle();
    assert!(!has_eulerian_circuit(&[], &[]));
    assert!(!has_eulerian_circuit(&nodes, &[]));
    assert!(!has_eulerian_circuit(&[], &[Edge::new("e1", "1", "2")]));
}

#[test]
fn two_odd_degree_nodes_disqualify_and_are_reported() {
    let nodes = vec![Node::new("1", "A"), Node::new("2", "B"), Node::new("3", "C")];
    // A path A - B - C: the endpoints have degree 1.
    let edges = vec![Edge::new("e1", "1", "2"), Edge::new("e2", "2", "3")];

    assert!(!has_eulerian_circuit(&nodes, &edges));
    let adjacency = Adjacency::build(&nodes, &edges);
    assert_eq!(odd_degree_nodes(&adjacency), vec!["A", "C"]);
    assert!(zero_degree_nodes(&adjacency).is_empty());
}

#[test]
fn an_isolated_node_disqualifies_an_otherwise_eligible_graph() {
    let (mut nodes, edges) = triangle();
    nodes.push(Node::new("4", "D"));

    // Classical Eulerian-circuit criteria would accept this; this engine
    // deliberately rejects any graph with a zero-degree node.
    assert!(!has_eulerian_circuit(&nodes, &edges));
    let adjacency = Adjacency::build(&nodes, &edges);
    assert_eq!(zero_degree_nodes(&adjacency), vec!["D"]);
    assert!(is_connected(&adjacency));
}

#[test]
fn self_loop_counts_as_even_degree() {
    let nodes = vec![Node::new("1", "A")];
    let edges = vec![Edge::new("loop", "1", "1")];
    assert!(has_eulerian_circuit(&nodes, &edges));
}

#[test]
fn disconnected_even_degree_graph_is_ineligible() {
    let (nodes, edges) = two_squares();
    assert!(!has_eulerian_circuit(&nodes, &edges));

    let adjacency = Adjacency::build(&nodes, &edges);
    assert!(odd_degree_nodes(&adjacency).is_empty());
    assert!(zero_degree_nodes(&adjacency).is_empty());
    assert!(!is_connected(&adjacency));
}

#[test]
fn connectivity_ignores_isolated_nodes() {
    let (mut nodes, edges) = triangle();
    nodes.push(Node::new("4", "D"));
    let adjacency = Adjacency::build(&nodes, &edges);
    assert!(is_connected(&adjacency));
}

#[test]
fn graph_without_edges_is_vacuously_connected() {
    let nodes = vec![Node::new("1", "A"), Node::new("2", "B")];
    let adjacency = Adjacency::build(&nodes, &[]);
    assert!(is_connected(&adjacency));
}

#[test]
fn status_bundles_the_diagnostics() {
    let (mut nodes, edges) = triangle();
    nodes.push(Node::new("4", "D"));

    let record = status(&nodes, &edges);
    assert!(!record.has_eulerian_circuit);
    assert_eq!(record.zero_degree_nodes, vec!["D"]);
    assert!(record.odd_degree_nodes.is_empty());
    assert!(record.is_connected);
    assert_eq!(record.node_count, 4);
    assert_eq!(record.edge_count, 3);
}

#[test]
fn status_serializes_with_js_facing_field_names() {
    let (nodes, edges) = triangle();
    let value = serde_json::to_value(status(&nodes, &edges)).unwrap();
    assert_eq!(value["hasEulerianCircuit"], true);
    assert_eq!(value["nodeCount"], 3);
    assert_eq!(value["edgeCount"], 3);
    assert_eq!(value["isConnected"], true);
}

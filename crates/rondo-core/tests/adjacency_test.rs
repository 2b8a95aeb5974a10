use rondo_core::adjacency::Adjacency;
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

#[test]
fn every_edge_contributes_two_symmetric_entries() {
    let (nodes, edges) = triangle();
    let adjacency = Adjacency::build(&nodes, &edges);

    assert_eq!(adjacency.degree("A"), 2);
    assert_eq!(adjacency.degree("B"), 2);
    assert_eq!(adjacency.degree("C"), 2);

    let a = adjacency.connections("A").unwrap();
    assert_eq!(a[0].neighbor_label, "B");
    assert_eq!(a[0].edge_id, "e1");
    assert_eq!(a[1].neighbor_label, "C");
    assert_eq!(a[1].edge_id, "e3");
}

#[test]
fn buckets_follow_node_input_order() {
    let nodes = vec![Node::new("3", "Z"), Node::new("1", "A"), Node::new("2", "M")];
    let adjacency = Adjacency::build(&nodes, &[]);
    let labels: Vec<&str> = adjacency.labels().collect();
    assert_eq!(labels, vec!["Z", "A", "M"]);
}

#[test]
fn connections_follow_edge_input_order() {
    let nodes = vec![Node::new("1", "A"), Node::new("2", "B"), Node::new("3", "C")];
    let edges = vec![
        Edge::new("later", "1", "3"),
        Edge::new("earlier", "1", "2"),
    ];
    let adjacency = Adjacency::build(&nodes, &edges);
    let a = adjacency.connections("A").unwrap();
    assert_eq!(a[0].edge_id, "later");
    assert_eq!(a[1].edge_id, "earlier");
}

#[test]
fn dangling_edges_are_skipped_silently() {
    let nodes = vec![Node::new("1", "A"), Node::new("2", "B")];
    let edges = vec![
        Edge::new("ok", "1", "2"),
        Edge::new("bad-source", "missing", "2"),
        Edge::new("bad-target", "1", "missing"),
    ];
    let adjacency = Adjacency::build(&nodes, &edges);
    assert_eq!(adjacency.degree("A"), 1);
    assert_eq!(adjacency.degree("B"), 1);
}

#[test]
fn self_loop_files_two_entries_under_the_same_label() {
    let nodes = vec![Node::new("1", "A")];
    let edges = vec![Edge::new("loop", "1", "1")];
    let adjacency = Adjacency::build(&nodes, &edges);

    let a = adjacency.connections("A").unwrap();
    assert_eq!(a.len(), 2);
    assert!(a.iter().all(|c| c.edge_id == "loop" && c.neighbor_label == "A"));
    assert_eq!(adjacency.degree("A"), 2);
}

#[test]
fn parallel_edges_stay_distinguishable() {
    let nodes = vec![Node::new("1", "A"), Node::new("2", "B")];
    let edges = vec![Edge::new("e1", "1", "2"), Edge::new("e2", "2", "1")];
    let adjacency = Adjacency::build(&nodes, &edges);

    let ids: Vec<&str> = adjacency
        .connections("A")
        .unwrap()
        .iter()
        .map(|c| c.edge_id.as_str())
        .collect();
    assert_eq!(ids, vec!["e1", "e2"]);
}

#[test]
fn empty_node_list_yields_an_empty_structure() {
    let edges = vec![Edge::new("e1", "1", "2")];
    let adjacency = Adjacency::build(&[], &edges);
    assert!(adjacency.is_empty());
    assert_eq!(adjacency.len(), 0);
}

#[test]
fn nodes_without_edges_keep_an_empty_bucket() {
    let nodes = vec![Node::new("1", "A"), Node::new("2", "B")];
    let adjacency = Adjacency::build(&nodes, &[]);
    assert_eq!(adjacency.len(), 2);
    assert_eq!(adjacency.degree("A"), 0);
    assert_eq!(adjacency.connections("B").unwrap().len(), 0);
}

#[test]
fn first_positive_degree_label_respects_input_order() {
    let nodes = vec![Node::new("1", "A"), Node::new("2", "B"), Node::new("3", "C")];
    let edges = vec![Edge::new("e1", "2", "3")];
    let adjacency = Adjacency::build(&nodes, &edges);
    assert_eq!(adjacency.first_positive_degree_label(), Some("B"));
}

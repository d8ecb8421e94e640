mod common;

use std::fs;

use approx::assert_relative_eq;
use skatemap_lib::{
    build_graph, distance, load_graph, load_network, penalty, Error, RawEdge, RawNetwork, RawNode,
    TagValue,
};
use tempfile::tempdir;

fn node(id: i64, lat: f64, lng: f64) -> RawNode {
    RawNode { id, lat, lng }
}

#[test]
fn sample_network_loads() {
    let build = load_graph(&common::sample_network_path()).expect("fixture loads");

    assert_eq!(build.graph.node_count(), 8);
    assert_eq!(build.graph.edge_count(), 8);
    assert_eq!(build.skipped_edges, 1, "edge to node 99 is dropped");
    assert!(build.graph.neighbours(99).is_empty());
}

#[test]
fn weight_is_length_times_penalty() {
    let network = RawNetwork {
        nodes: vec![node(1, 40.6, -74.01), node(2, 40.6, -74.005)],
        edges: vec![RawEdge {
            u: 1,
            v: 2,
            surface: TagValue::from("cobblestone"),
            highway: TagValue::from(vec!["footway", "steps"]),
        }],
    };
    let build = build_graph(&network).unwrap();

    let expected = distance(40.6, -74.01, 40.6, -74.005) * penalty(Some("cobblestone"), Some("steps"));
    assert_relative_eq!(build.graph.edge_weight(1, 2), expected, epsilon = 1e-12);
    assert_relative_eq!(build.graph.edge_weight(2, 1), expected, epsilon = 1e-12);
}

#[test]
fn multi_valued_fixture_tags_are_normalized() {
    let build = load_graph(&common::sample_network_path()).unwrap();
    let graph = &build.graph;

    let (a, b) = (graph.node(2).unwrap(), graph.node(5).unwrap());
    let stairs = distance(a.lat, a.lng, b.lat, b.lng) * 1.30 * 10.0;
    assert_relative_eq!(graph.edge_weight(2, 5), stairs, epsilon = 1e-12);

    let (a, b) = (graph.node(4).unwrap(), graph.node(5).unwrap());
    let paving = distance(a.lat, a.lng, b.lat, b.lng) * 1.40 * 1.30;
    assert_relative_eq!(graph.edge_weight(4, 5), paving, epsilon = 1e-12);
}

#[test]
fn duplicate_nodes_keep_first_coordinates() {
    let network = RawNetwork {
        nodes: vec![node(1, 1.0, 1.0), node(1, 5.0, 5.0)],
        edges: Vec::new(),
    };
    let build = build_graph(&network).unwrap();
    let kept = build.graph.node(1).unwrap();
    assert_eq!((kept.lat, kept.lng), (1.0, 1.0));
}

#[test]
fn malformed_file_reports_network_load() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"nodes\": [ { \"id\": \"one\" } ] }").unwrap();

    match load_network(&path) {
        Err(Error::NetworkLoad { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().expect("create temp dir");
    let result = load_network(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn empty_document_builds_empty_graph() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("empty.json");
    fs::write(&path, "{}").unwrap();

    let build = load_graph(&path).unwrap();
    assert!(build.graph.is_empty());
    assert_eq!(build.skipped_edges, 0);
}

//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use skatemap_lib::{distance, Graph};

/// Path to the fixtures directory shared by every crate.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the sample street network (eight intersections around Bath Beach).
#[allow(dead_code)]
pub fn sample_network_path() -> PathBuf {
    fixtures_dir().join("sample_network.json")
}

/// Three nodes on the equator, 0.01 degrees apart, with unit weights:
/// `1(0,0) - 2(0,0.01) - 3(0,0.02)`.
#[allow(dead_code)]
pub fn equator_chain() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(1, 0.0, 0.0);
    graph.add_node(2, 0.0, 0.01);
    graph.add_node(3, 0.0, 0.02);
    graph.add_edge(1, 2, 1.0).expect("valid weight");
    graph.add_edge(2, 3, 1.0).expect("valid weight");
    graph
}

/// Equator chain plus an isolated node 4.
#[allow(dead_code)]
pub fn chain_with_island() -> Graph {
    let mut graph = equator_chain();
    graph.add_node(4, 1.0, 1.0);
    graph
}

/// Graph where the geographic heuristic overestimates.
///
/// The direct edge `1-3` carries a 1.1 penalty while the detour through `2`
/// uses the cheapest possible penalty, making the detour the true minimum.
#[allow(dead_code)]
pub fn detour_graph() -> Graph {
    let mut graph = Graph::new();
    graph.add_node(1, 0.0, 0.0);
    graph.add_node(2, 0.01, 0.01);
    graph.add_node(3, 0.0, 0.02);

    let direct = distance(0.0, 0.0, 0.0, 0.02) * 1.1;
    let first = distance(0.0, 0.0, 0.01, 0.01) * skatemap_lib::MIN_PENALTY;
    let second = distance(0.01, 0.01, 0.0, 0.02) * skatemap_lib::MIN_PENALTY;

    graph.add_edge(1, 3, direct).expect("valid weight");
    graph.add_edge(1, 2, first).expect("valid weight");
    graph.add_edge(2, 3, second).expect("valid weight");
    graph
}

/// Square grid of `size * size` nodes spaced 0.001 degrees apart, ids in
/// row-major order starting at 0, every edge weighted by its length.
#[allow(dead_code)]
pub fn grid(size: i64) -> Graph {
    let mut graph = Graph::new();
    let coord = |row: i64, col: i64| (40.6 + row as f64 * 0.001, -74.0 + col as f64 * 0.001);

    for row in 0..size {
        for col in 0..size {
            let (lat, lng) = coord(row, col);
            graph.add_node(row * size + col, lat, lng);
        }
    }
    for row in 0..size {
        for col in 0..size {
            let id = row * size + col;
            let (lat, lng) = coord(row, col);
            if col + 1 < size {
                let (nlat, nlng) = coord(row, col + 1);
                graph
                    .add_edge(id, id + 1, distance(lat, lng, nlat, nlng))
                    .expect("valid weight");
            }
            if row + 1 < size {
                let (nlat, nlng) = coord(row + 1, col);
                graph
                    .add_edge(id, id + size, distance(lat, lng, nlat, nlng))
                    .expect("valid weight");
            }
        }
    }
    graph
}

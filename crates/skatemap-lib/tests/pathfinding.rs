mod common;

use skatemap_lib::{find_route, path_cost, Error, Graph, Heuristic};

const ALL_HEURISTICS: [Heuristic; 3] = [Heuristic::Geographic, Heuristic::Admissible, Heuristic::None];

#[test]
fn chain_routes_through_middle_node() {
    let graph = common::equator_chain();
    for heuristic in ALL_HEURISTICS {
        let path = find_route(&graph, 1, 3, heuristic).expect("route exists");
        assert_eq!(path, vec![1, 2, 3], "heuristic {heuristic}");
    }
}

#[test]
fn route_is_reversible_on_undirected_graph() {
    let graph = common::equator_chain();
    let path = find_route(&graph, 3, 1, Heuristic::Geographic).expect("route exists");
    assert_eq!(path, vec![3, 2, 1]);
}

#[test]
fn isolated_node_is_unreachable() {
    let graph = common::chain_with_island();
    let error = find_route(&graph, 1, 4, Heuristic::Geographic).expect_err("4 is isolated");
    assert!(matches!(error, Error::NoRouteFound { start: 1, goal: 4 }));
}

#[test]
fn same_start_and_goal_is_single_node_path() {
    let graph = common::chain_with_island();
    assert_eq!(find_route(&graph, 4, 4, Heuristic::Geographic).unwrap(), vec![4]);
}

#[test]
fn unknown_endpoints_are_reported() {
    let graph = common::equator_chain();
    assert!(matches!(
        find_route(&graph, 9, 1, Heuristic::Geographic),
        Err(Error::UnknownNode { id: 9 })
    ));
    assert!(matches!(
        find_route(&graph, 1, 9, Heuristic::Geographic),
        Err(Error::UnknownNode { id: 9 })
    ));
}

#[test]
fn cheaper_detour_beats_shorter_hop_count() {
    let mut graph = common::equator_chain();
    // Direct 1-3 edge that costs more than going through 2.
    graph.add_edge(1, 3, 5.0).unwrap();

    let path = find_route(&graph, 1, 3, Heuristic::Geographic).unwrap();
    assert_eq!(path, vec![1, 2, 3]);
}

#[test]
fn geographic_heuristic_can_overestimate() {
    // Terrain penalties below 1.0 make straight-line distance an overestimate,
    // so the default heuristic settles for the direct edge.
    let graph = common::detour_graph();
    let path = find_route(&graph, 1, 3, Heuristic::Geographic).unwrap();
    assert_eq!(path, vec![1, 3]);
}

#[test]
fn admissible_heuristic_finds_minimal_cost() {
    let graph = common::detour_graph();
    let admissible = find_route(&graph, 1, 3, Heuristic::Admissible).unwrap();
    let dijkstra = find_route(&graph, 1, 3, Heuristic::None).unwrap();

    assert_eq!(admissible, vec![1, 2, 3]);
    assert_eq!(dijkstra, vec![1, 2, 3]);
    assert!(path_cost(&graph, &admissible) < path_cost(&graph, &[1, 3]));
}

#[test]
fn admissible_matches_dijkstra_cost_on_grid() {
    let graph = common::grid(12);
    for (start, goal) in [(0, 143), (5, 138), (11, 132), (60, 67)] {
        let admissible = find_route(&graph, start, goal, Heuristic::Admissible).unwrap();
        let dijkstra = find_route(&graph, start, goal, Heuristic::None).unwrap();
        approx::assert_relative_eq!(
            path_cost(&graph, &admissible),
            path_cost(&graph, &dijkstra),
            epsilon = 1e-9
        );
        assert_eq!(admissible.first(), Some(&start));
        assert_eq!(admissible.last(), Some(&goal));
    }
}

#[test]
fn consecutive_path_nodes_are_adjacent() {
    let graph = common::grid(8);
    let path = find_route(&graph, 0, 63, Heuristic::Geographic).unwrap();
    for pair in path.windows(2) {
        assert!(graph.edge_weight(pair[0], pair[1]).is_finite());
    }
}

#[test]
fn zero_weight_edges_are_traversable() {
    let mut graph = Graph::new();
    graph.add_node(1, 0.0, 0.0);
    graph.add_node(2, 0.0, 0.0);
    graph.add_edge(1, 2, 0.0).unwrap();

    assert_eq!(find_route(&graph, 1, 2, Heuristic::Geographic).unwrap(), vec![1, 2]);
}

#[test]
fn dangling_neighbour_is_treated_as_dead_end() {
    let mut graph = common::equator_chain();
    graph.add_edge(1, 77, 0.1).unwrap();

    let path = find_route(&graph, 1, 3, Heuristic::Geographic).unwrap();
    assert_eq!(path, vec![1, 2, 3]);
}

mod common;

use std::sync::Arc;
use std::thread;

use approx::assert_relative_eq;
use skatemap_lib::{
    distance, load_graph, Error, Graph, Heuristic, RoutingOptions, RoutingService, SnapStrategy,
};

fn initialized(graph: Graph) -> RoutingService {
    let service = RoutingService::new();
    service.initialize(graph).expect("first initialization");
    service
}

#[test]
fn equator_chain_end_to_end() {
    let service = initialized(common::equator_chain());
    let route = service.compute_route(0.0, 0.0, 0.0, 0.02).expect("route exists");

    assert_eq!(route.nodes, vec![1, 2, 3]);
    assert_eq!(route.geometry, vec![[0.0, 0.0], [0.0, 0.01], [0.0, 0.02]]);

    let hop = distance(0.0, 0.0, 0.0, 0.01);
    assert_relative_eq!(route.distance_km, 2.22, epsilon = 1e-9);
    assert_relative_eq!(route.distance_km, 2.0 * hop, epsilon = 0.005);
    assert_eq!(route.skate_time_min, 13.3);
}

#[test]
fn endpoints_are_snapped_before_search() {
    let service = initialized(common::equator_chain());
    let route = service
        .compute_route(0.0004, -0.0003, 0.0002, 0.0198)
        .expect("route exists");
    assert_eq!(route.nodes, vec![1, 2, 3]);
}

#[test]
fn uninitialized_service_rejects_every_request() {
    let service = RoutingService::new();
    for (a, b, c, d) in [
        (0.0, 0.0, 0.0, 0.0),
        (40.6, -74.0, 40.7, -73.9),
        (-10.0, 5.0, 3.0, 3.0),
        (95.0, 0.0, 0.0, 0.0),
        (0.0, 0.0, 0.0, 200.0),
        (f64::NAN, 0.0, 0.0, 0.0),
    ] {
        assert!(matches!(
            service.compute_route(a, b, c, d),
            Err(Error::NotInitialized)
        ));
    }
}

#[test]
fn second_initialize_is_rejected_and_keeps_first_graph() {
    let service = initialized(common::equator_chain());
    let error = service.initialize(Graph::new()).expect_err("already set");

    assert!(matches!(error, Error::AlreadyInitialized));
    assert_eq!(service.graph().map(Graph::node_count), Some(3));
}

#[test]
fn empty_graph_propagates() {
    let service = initialized(Graph::new());
    assert!(matches!(
        service.compute_route(0.0, 0.0, 1.0, 1.0),
        Err(Error::EmptyGraph)
    ));
}

#[test]
fn unreachable_endpoint_is_no_route() {
    let service = initialized(common::chain_with_island());
    assert!(matches!(
        service.compute_route(0.0, 0.0, 1.0, 1.0),
        Err(Error::NoRouteFound { start: 1, goal: 4 })
    ));
}

#[test]
fn both_ends_on_one_node_is_a_zero_length_route() {
    let service = initialized(common::equator_chain());
    let route = service.compute_route(0.0, 0.01, 0.0001, 0.0101).unwrap();

    assert_eq!(route.nodes, vec![2]);
    assert_eq!(route.geometry.len(), 1);
    assert_eq!(route.distance_km, 0.0);
    assert_eq!(route.skate_time_min, 0.0);
}

#[test]
fn invalid_coordinates_are_rejected() {
    let service = initialized(common::equator_chain());
    for (a, b, c, d) in [
        (91.0, 0.0, 0.0, 0.0),
        (0.0, 181.0, 0.0, 0.0),
        (0.0, 0.0, -90.5, 0.0),
        (0.0, 0.0, 0.0, f64::NAN),
    ] {
        assert!(matches!(
            service.compute_route(a, b, c, d),
            Err(Error::InvalidParameter { .. })
        ));
    }
}

#[test]
fn kd_tree_snapping_matches_linear() {
    let options = RoutingOptions {
        snap: SnapStrategy::KdTree,
        ..RoutingOptions::default()
    };
    let kd = RoutingService::with_options(options);
    kd.initialize(common::grid(10)).unwrap();
    let linear = initialized(common::grid(10));

    let a = kd.compute_route(40.6001, -73.9998, 40.6089, -73.9912).unwrap();
    let b = linear.compute_route(40.6001, -73.9998, 40.6089, -73.9912).unwrap();
    assert_eq!(a, b);
}

#[test]
fn custom_speed_changes_time_only() {
    let options = RoutingOptions {
        avg_speed_kmh: 20.0,
        ..RoutingOptions::default()
    };
    let service = RoutingService::with_options(options);
    service.initialize(common::equator_chain()).unwrap();

    let route = service.compute_route(0.0, 0.0, 0.0, 0.02).unwrap();
    assert_relative_eq!(route.distance_km, 2.22, epsilon = 1e-9);
    assert_eq!(route.skate_time_min, 6.7);
}

#[test]
fn non_positive_speed_is_invalid() {
    let options = RoutingOptions {
        avg_speed_kmh: 0.0,
        ..RoutingOptions::default()
    };
    let service = RoutingService::with_options(options);
    service.initialize(common::equator_chain()).unwrap();
    assert!(matches!(
        service.compute_route(0.0, 0.0, 0.0, 0.02),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn sample_network_prefers_smooth_streets() {
    let build = load_graph(&common::sample_network_path()).expect("fixture loads");
    let service = initialized(build.graph);

    let route = service
        .compute_route(40.6000, -74.0100, 40.6040, -74.0000)
        .expect("route exists");

    // Asphalt residential and a concrete service road beat gravel, paving
    // stones, and the stairs.
    assert_eq!(route.nodes, vec![1, 2, 3, 6]);
    assert_relative_eq!(route.distance_km, 1.29, epsilon = 1e-9);
    assert_eq!(route.skate_time_min, 7.7);
}

#[test]
fn sample_network_island_is_unreachable() {
    let build = load_graph(&common::sample_network_path()).unwrap();
    let service = initialized(build.graph);
    assert!(matches!(
        service.compute_route(40.6000, -74.0100, 40.6201, -73.9801),
        Err(Error::NoRouteFound { .. })
    ));
}

#[test]
fn admissible_service_returns_minimal_cost_route() {
    let options = RoutingOptions {
        heuristic: Heuristic::Admissible,
        ..RoutingOptions::default()
    };
    let service = RoutingService::with_options(options);
    service.initialize(common::detour_graph()).unwrap();

    let route = service.compute_route(0.0, 0.0, 0.0, 0.02).unwrap();
    assert_eq!(route.nodes, vec![1, 2, 3]);
}

#[test]
fn concurrent_requests_share_one_service() {
    let service = Arc::new(initialized(common::grid(10)));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let offset = i as f64 * 0.001;
                service
                    .compute_route(40.6, -74.0, 40.6 + offset, -73.991)
                    .expect("grid is connected")
            })
        })
        .collect();

    for handle in handles {
        let route = handle.join().expect("thread completes");
        assert!(!route.geometry.is_empty());
    }
}

#[test]
fn route_serializes_to_wire_shape() {
    let service = initialized(common::equator_chain());
    let route = service.compute_route(0.0, 0.0, 0.0, 0.02).unwrap();
    let json = serde_json::to_value(&route).unwrap();

    assert_eq!(json["distance_km"], 2.22);
    assert_eq!(json["skate_time_min"], 13.3);
    assert_eq!(json["geometry"][1][1], 0.01);
    assert!(json.get("nodes").is_none());
}

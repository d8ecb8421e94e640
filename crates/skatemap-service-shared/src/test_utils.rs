//! Test utilities for HTTP handler testing.
//!
//! Provides a state loaded from the sample network fixture, plus coordinates
//! that snap to known fixture nodes.

use std::path::PathBuf;
use std::sync::OnceLock;

use skatemap_lib::RoutingOptions;

use crate::state::AppState;

/// Path to the sample network fixture.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/sample_network.json"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Get a shared test AppState loaded from the fixture network.
///
/// # Panics
///
/// Panics if the fixture cannot be loaded. This indicates a test
/// configuration issue.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = fixture_network_path();
            AppState::load(&path, RoutingOptions::default())
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

/// Absolute path to the fixture network.
pub fn fixture_network_path() -> PathBuf {
    PathBuf::from(TEST_FIXTURE_PATH)
}

/// Coordinates of fixture nodes, as `(lat, lng)`.
pub mod fixture_points {
    /// Node 1, south-west corner of the connected block.
    pub const NODE_1: (f64, f64) = (40.6, -74.01);

    /// Node 6, reachable from node 1 via nodes 2 and 3.
    pub const NODE_6: (f64, f64) = (40.604, -74.0);

    /// Node 7, on an island with no connection to the main block.
    pub const ISLAND: (f64, f64) = (40.62, -73.98);
}

/// Generate a unique request ID for testing.
pub fn test_request_id() -> String {
    format!("test-{}", uuid::Uuid::now_v7())
}

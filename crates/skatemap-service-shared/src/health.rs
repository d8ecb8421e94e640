//! Health check handlers for liveness and readiness probes.
//!
//! `/health/live` and `/health/ready` follow the usual Kubernetes probe
//! contract. `/health` keeps the short `{status, service}` body that existing
//! deployments poll.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Service name reported by the legacy health endpoint.
pub const LEGACY_SERVICE_NAME: &str = "skate-maps-backend";

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Number of graph nodes loaded (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_loaded: Option<usize>,

    /// Number of undirected edges loaded (for readiness check).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: Some(version.to_string()),
            nodes_loaded: None,
            edges_loaded: None,
        }
    }

    /// Create a ready status with graph size information.
    pub fn ready(service: &str, version: &str, nodes: usize, edges: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: Some(version.to_string()),
            nodes_loaded: Some(nodes),
            edges_loaded: Some(edges),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: Some(version.to_string()),
            nodes_loaded: None,
            edges_loaded: None,
        }
    }

    /// The minimal body served on `/health`.
    pub fn legacy() -> Self {
        Self {
            status: "ok".to_string(),
            service: LEGACY_SERVICE_NAME.to_string(),
            version: None,
            nodes_loaded: None,
            edges_loaded: None,
        }
    }
}

/// Legacy health handler.
///
/// ```text
/// GET /health
/// {"status":"ok","service":"skate-maps-backend"}
/// ```
pub async fn health_legacy() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::legacy()))
}

/// Liveness probe handler.
///
/// Returns 200 OK if the process is running; does not inspect the graph.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 200 OK once a non-empty graph is loaded, otherwise 503.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"skatemap-service-shared","version":"0.1.0","nodes_loaded":8,"edges_loaded":8}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let Some(graph) = state.service().graph() else {
        let status = HealthStatus::not_ready(service, version, "graph not initialized");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    };

    if graph.is_empty() {
        let status = HealthStatus::not_ready(service, version, "no nodes loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, graph.node_count(), graph.edge_count());
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("test-service", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "test-service");
        assert_eq!(status.version.as_deref(), Some("1.0.0"));
        assert!(status.nodes_loaded.is_none());
    }

    #[test]
    fn test_health_status_ready() {
        let status = HealthStatus::ready("test-service", "1.0.0", 120, 140);
        assert_eq!(status.nodes_loaded, Some(120));
        assert_eq!(status.edges_loaded, Some(140));
    }

    #[test]
    fn test_health_status_not_ready() {
        let status = HealthStatus::not_ready("test-service", "1.0.0", "no nodes loaded");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no nodes"));
    }

    #[test]
    fn test_legacy_body_is_minimal() {
        let json = serde_json::to_value(HealthStatus::legacy()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "service": "skate-maps-backend"})
        );
    }
}

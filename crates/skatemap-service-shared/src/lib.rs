//! Shared infrastructure for skatemap HTTP services.
//!
//! This crate provides common functionality used by the service binaries:
//!
//! - [`AppState`]: pre-built routing service shared by every handler
//! - [`ServiceConfig`]: environment-driven configuration
//! - [`health`]: health check handlers for liveness/readiness probes
//! - [`ProblemDetails`]: structured error responses carrying an `error` message
//! - [`logging`]: structured JSON or text logging setup
//! - Request types with validation
//!
//! # Architecture
//!
//! Services follow a thin-handler pattern where all routing logic resides in
//! `skatemap-lib`. This crate provides only HTTP glue:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON                                       │
//! │  - Validate coordinates                                     │
//! │  - Call RoutingService::compute_route                       │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides a fixture-backed state for handler
//! testing. Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

mod config;
mod health;
pub mod logging;
mod problem;
mod request;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::ServiceConfig;
pub use health::{health_legacy, health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_ROUTE_NOT_FOUND, PROBLEM_SERVICE_UNAVAILABLE,
};
pub use request::{Coordinates, RouteRequest, Validate};
pub use state::{AppState, AppStateError};

/// Generate a unique, time-ordered request ID for tracing.
pub fn generate_request_id() -> String {
    format!("req-{}", uuid::Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_unique_and_prefixed() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert!(a.starts_with("req-"));
        assert_ne!(a, b);
    }
}

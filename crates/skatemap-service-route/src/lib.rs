//! Skating route planning HTTP service.
//!
//! # Endpoints
//!
//! - `POST /api/v1/route` - Compute a route between two coordinates
//! - `POST /main` - Same handler, kept for existing web clients
//! - `GET /health` - Legacy health check
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe

#![deny(warnings)]

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use skatemap_lib::Route;
use skatemap_service_shared::{
    from_lib_error, generate_request_id, health_legacy, health_live, health_ready, AppState,
    ProblemDetails, RouteRequest, Validate,
};

/// HTTP response: a route or a problem body.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Response {
    Success(Route),
    Error(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(route) => (StatusCode::OK, Json(route)).into_response(),
            Response::Error(problem) => problem.into_response(),
        }
    }
}

/// Build the service router around a loaded state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/route", post(route_handler))
        .route("/main", post(route_handler))
        .route("/health", get(health_legacy))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handle route requests on both the versioned and the legacy path.
pub async fn route_handler(
    State(state): State<AppState>,
    payload: Result<Json<RouteRequest>, JsonRejection>,
) -> Response {
    let request_id = generate_request_id();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection.body_text(), "rejected request body");
            return Response::Error(ProblemDetails::bad_request(
                "Missing or invalid start/end coordinates.",
                &request_id,
            ));
        }
    };

    info!(
        request_id = %request_id,
        start_lat = request.start.lat,
        start_lng = request.start.lng,
        end_lat = request.end.lat,
        end_lng = request.end.lng,
        "handling route request"
    );

    if let Err(problem) = request.validate(&request_id) {
        return Response::Error(*problem);
    }

    let route = match state.service().compute_route(
        request.start.lat,
        request.start.lng,
        request.end.lat,
        request.end.lng,
    ) {
        Ok(route) => route,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "route computation failed");
            return Response::Error(from_lib_error(&e, &request_id));
        }
    };

    info!(
        request_id = %request_id,
        distance_km = route.distance_km,
        skate_time_min = route.skate_time_min,
        points = route.geometry.len(),
        "route computed successfully"
    );

    Response::Success(route)
}

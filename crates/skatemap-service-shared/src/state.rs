//! Application state for HTTP services.
//!
//! The routing graph is built once at startup and published into a
//! [`RoutingService`] that every handler reads through axum's `State`.

use std::path::Path;
use std::sync::Arc;

use skatemap_lib::{load_graph, Error as LibError, Graph, RoutingOptions, RoutingService};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// The network file does not exist.
    NetworkNotFound(String),

    /// Failed to read or build the routing graph.
    NetworkLoad(LibError),

    /// The routing service rejected the graph.
    Initialize(LibError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkNotFound(path) => write!(f, "network not found: {}", path),
            Self::NetworkLoad(e) => write!(f, "failed to load network: {}", e),
            Self::Initialize(e) => write!(f, "failed to initialize routing service: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NetworkLoad(e) | Self::Initialize(e) => Some(e),
            Self::NetworkNotFound(_) => None,
        }
    }
}

impl From<LibError> for AppStateError {
    fn from(err: LibError) -> Self {
        Self::NetworkLoad(err)
    }
}

/// Shared application state for all axum handlers.
///
/// Cloning is cheap; every clone points at the same routing service.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::post, extract::State};
/// use skatemap_lib::RoutingOptions;
/// use skatemap_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let route = state.service().compute_route(40.6, -74.01, 40.61, -74.0);
///     // ... format route
/// }
///
/// let state = AppState::load("/data/network.json", RoutingOptions::default()).unwrap();
/// let app = Router::new()
///     .route("/api/v1/route", post(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    service: Arc<RoutingService>,
}

impl AppState {
    /// Build the graph from a raw network file and publish it.
    pub fn load(
        network_path: impl AsRef<Path>,
        options: RoutingOptions,
    ) -> Result<Self, AppStateError> {
        let network_path = network_path.as_ref();

        if !network_path.exists() {
            return Err(AppStateError::NetworkNotFound(
                network_path.display().to_string(),
            ));
        }

        tracing::info!(path = %network_path.display(), "loading street network");
        let build = load_graph(network_path)?;
        if build.skipped_edges > 0 {
            tracing::warn!(
                skipped = build.skipped_edges,
                "some network edges were discarded"
            );
        }

        Self::from_graph(build.graph, options)
    }

    /// Create application state from an already built graph.
    pub fn from_graph(graph: Graph, options: RoutingOptions) -> Result<Self, AppStateError> {
        let service = RoutingService::with_options(options);
        service.initialize(graph).map_err(AppStateError::Initialize)?;
        Ok(Self {
            service: Arc::new(service),
        })
    }

    /// Access the routing service.
    pub fn service(&self) -> &RoutingService {
        &self.service
    }

    /// Number of nodes in the loaded graph.
    pub fn node_count(&self) -> usize {
        self.service.graph().map_or(0, Graph::node_count)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("node_count", &self.node_count())
            .field("options", self.service.options())
            .finish()
    }
}

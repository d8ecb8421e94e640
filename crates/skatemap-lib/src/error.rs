use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the skatemap library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// A route was requested before the routing service received its graph.
    #[error("routing service not initialized; call initialize(graph) at startup")]
    NotInitialized,

    /// The routing service already holds a graph and refuses to replace it.
    #[error("routing service already initialized")]
    AlreadyInitialized,

    /// Nearest-node lookup was attempted against a graph without nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// A path or lookup referenced a node id absent from the graph.
    #[error("unknown node: {id}")]
    UnknownNode { id: NodeId },

    /// The search exhausted its frontier without reaching the goal.
    #[error("no route found between node {start} and node {goal}")]
    NoRouteFound { start: NodeId, goal: NodeId },

    /// A caller supplied an out-of-range or malformed value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Raised when a raw network file could not be parsed.
    #[error("failed to load network from {path}: {message}")]
    NetworkLoad { path: PathBuf, message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            message: message.into(),
        }
    }
}

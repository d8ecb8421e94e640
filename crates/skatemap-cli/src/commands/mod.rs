// Each module handles one CLI subcommand; main.rs parses arguments and
// dispatches here.

pub mod inspect;
pub mod route;

use std::path::Path;

use anyhow::{Context, Result};
use skatemap_lib::{load_graph, GraphBuild};

/// Load and build the routing graph, attaching the path to any failure.
pub(crate) fn load_network_graph(network: &Path) -> Result<GraphBuild> {
    load_graph(network).with_context(|| format!("failed to load network from {}", network.display()))
}

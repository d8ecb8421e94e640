//! Graph inspection command handler.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use skatemap_lib::{Error as LibError, NodeId};

use crate::commands::load_network_graph;
use crate::output::{render_node, render_overview};
use crate::OutputFormat;

/// Arguments for the inspect subcommand.
#[derive(Debug, Clone, Copy)]
pub struct InspectArgs {
    /// How many nodes and edges to list.
    pub limit: usize,
    /// Show a single node and its neighbours instead of the overview.
    pub node: Option<NodeId>,
}

/// Print a summary of the built graph, or one node's details.
pub fn handle_inspect(
    network: &Path,
    args: &InspectArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let build = load_network_graph(network)?;

    match args.node {
        Some(id) => {
            let node = build
                .graph
                .node(id)
                .copied()
                .ok_or(LibError::UnknownNode { id })?;
            render_node(&build.graph, &node, format, out)
        }
        None => render_overview(&build, args.limit, format, out),
    }
}

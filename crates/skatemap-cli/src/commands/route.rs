//! Route command handler.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use skatemap_lib::{RoutingOptions, RoutingService};

use crate::commands::load_network_graph;
use crate::output::{render_route_json, render_route_text};
use crate::{OutputFormat, Point};

/// Arguments for the route subcommand.
#[derive(Debug, Clone, Copy)]
pub struct RouteArgs {
    pub from: Point,
    pub to: Point,
}

/// Compute a route over the network file and write it to `out`.
pub fn handle_route(
    network: &Path,
    options: RoutingOptions,
    args: &RouteArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let build = load_network_graph(network)?;

    let service = RoutingService::with_options(options);
    service
        .initialize(build.graph)
        .context("failed to initialize routing service")?;

    tracing::debug!(from = %args.from, to = %args.to, heuristic = %options.heuristic, "computing route");
    let route = service
        .compute_route(args.from.lat, args.from.lng, args.to.lat, args.to.lng)
        .with_context(|| format!("could not route from {} to {}", args.from, args.to))?;

    match format {
        OutputFormat::Text => render_route_text(&route, out)?,
        OutputFormat::Json => render_route_json(&route, out)?,
    }
    Ok(())
}

//! Output formatting for routes and graph diagnostics.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use skatemap_lib::{Graph, GraphBuild, Node, NodeId, Route};

use crate::OutputFormat;

#[derive(Serialize)]
struct RouteOutput<'a> {
    distance_km: f64,
    skate_time_min: f64,
    nodes: &'a [NodeId],
    geometry: &'a [[f64; 2]],
}

#[derive(Serialize)]
struct EdgeOutput {
    source: NodeId,
    target: NodeId,
    weight: f64,
}

#[derive(Serialize)]
struct OverviewOutput<'a> {
    nodes: usize,
    edges: usize,
    skipped_edges: usize,
    sample_nodes: Vec<&'a Node>,
    sample_edges: Vec<EdgeOutput>,
}

#[derive(Serialize)]
struct NodeOutput<'a> {
    #[serde(flatten)]
    node: &'a Node,
    neighbours: Vec<EdgeOutput>,
}

/// Render a route as plain text.
pub fn render_route_text(route: &Route, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Distance: {:.2} km", route.distance_km)?;
    writeln!(out, "Skate time: {:.1} min", route.skate_time_min)?;
    let path = route
        .nodes
        .iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    writeln!(out, "Path ({} nodes): {}", route.nodes.len(), path)?;
    Ok(())
}

/// Render a route as pretty JSON, including node ids.
pub fn render_route_json(route: &Route, out: &mut impl Write) -> Result<()> {
    let output = RouteOutput {
        distance_km: route.distance_km,
        skate_time_min: route.skate_time_min,
        nodes: &route.nodes,
        geometry: &route.geometry,
    };
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

/// Each undirected edge once, smaller id first.
fn undirected_edges(graph: &Graph) -> impl Iterator<Item = EdgeOutput> + '_ {
    graph
        .edges()
        .filter(|(source, edge)| *source < edge.target)
        .map(|(source, edge)| EdgeOutput {
            source,
            target: edge.target,
            weight: edge.weight,
        })
}

/// Render graph totals plus the first `limit` nodes and edges.
pub fn render_overview(
    build: &GraphBuild,
    limit: usize,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let graph = &build.graph;
    let summary = graph.summary();
    let sample_nodes: Vec<&Node> = graph.nodes().take(limit).collect();
    let sample_edges: Vec<EdgeOutput> = undirected_edges(graph).take(limit).collect();

    if format == OutputFormat::Json {
        let output = OverviewOutput {
            nodes: summary.nodes,
            edges: summary.edges,
            skipped_edges: build.skipped_edges,
            sample_nodes,
            sample_edges,
        };
        serde_json::to_writer_pretty(&mut *out, &output)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{summary}")?;
    writeln!(out, "Skipped edges: {}", build.skipped_edges)?;

    writeln!(out, "\nFirst {} nodes:", sample_nodes.len())?;
    for node in &sample_nodes {
        writeln!(out, "  {} ({:.6}, {:.6})", node.id, node.lat, node.lng)?;
    }

    writeln!(out, "\nFirst {} edges:", sample_edges.len())?;
    for edge in &sample_edges {
        writeln!(
            out,
            "  {} -- {} weight {:.4}",
            edge.source, edge.target, edge.weight
        )?;
    }
    Ok(())
}

/// Render one node with its neighbours.
pub fn render_node(
    graph: &Graph,
    node: &Node,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let neighbours: Vec<EdgeOutput> = graph
        .neighbours(node.id)
        .iter()
        .map(|edge| EdgeOutput {
            source: node.id,
            target: edge.target,
            weight: edge.weight,
        })
        .collect();

    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, &NodeOutput { node, neighbours })?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Node {} ({:.6}, {:.6})", node.id, node.lat, node.lng)?;
    writeln!(out, "Neighbours: {}", neighbours.len())?;
    for edge in &neighbours {
        writeln!(out, "  -> {} weight {:.4}", edge.target, edge.weight)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_route() -> Route {
        Route {
            distance_km: 1.29,
            skate_time_min: 7.7,
            geometry: vec![[40.6, -74.01], [40.6, -74.005]],
            nodes: vec![1, 2],
        }
    }

    #[test]
    fn route_text_lists_path() {
        let mut buf = Vec::new();
        render_route_text(&sample_route(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Distance: 1.29 km"));
        assert!(text.contains("Skate time: 7.7 min"));
        assert!(text.contains("Path (2 nodes): 1 -> 2"));
    }

    #[test]
    fn route_json_includes_nodes() {
        let mut buf = Vec::new();
        render_route_json(&sample_route(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["nodes"], serde_json::json!([1, 2]));
        assert_eq!(value["distance_km"], serde_json::json!(1.29));
    }

    #[test]
    fn node_text_lists_neighbours() {
        let mut graph = Graph::new();
        graph.add_node(1, 0.0, 0.0);
        graph.add_node(2, 0.0, 0.01);
        graph.add_edge(1, 2, 0.5).unwrap();
        let node = *graph.node(1).unwrap();

        let mut buf = Vec::new();
        render_node(&graph, &node, OutputFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Node 1"));
        assert!(text.contains("-> 2 weight 0.5000"));
    }
}

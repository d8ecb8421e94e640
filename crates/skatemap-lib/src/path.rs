use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cost::MIN_PENALTY;
use crate::error::{Error, Result};
use crate::geometry::distance;
use crate::graph::{Graph, Node, NodeId};

/// Remaining-cost estimate used to order the A* frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Straight geographic distance to the goal.
    ///
    /// Edge weights can fall below geographic length (penalties under 1.0),
    /// so this may overestimate and the returned path is not guaranteed to
    /// be minimal-cost.
    #[default]
    Geographic,
    /// Geographic distance scaled by [`MIN_PENALTY`]. Never overestimates,
    /// so returned paths are minimal-cost.
    Admissible,
    /// No heuristic; the search degenerates to Dijkstra.
    None,
}

impl Heuristic {
    fn estimate(self, from: &Node, goal: &Node) -> f64 {
        match self {
            Heuristic::Geographic => distance(from.lat, from.lng, goal.lat, goal.lng),
            Heuristic::Admissible => {
                distance(from.lat, from.lng, goal.lat, goal.lng) * MIN_PENALTY
            }
            Heuristic::None => 0.0,
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Heuristic::Geographic => "geographic",
            Heuristic::Admissible => "admissible",
            Heuristic::None => "none",
        };
        f.write_str(value)
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "geographic" => Ok(Heuristic::Geographic),
            "admissible" => Ok(Heuristic::Admissible),
            "none" | "dijkstra" => Ok(Heuristic::None),
            other => Err(Error::invalid(format!("unknown heuristic '{other}'"))),
        }
    }
}

/// Run A* from `start` to `goal` and return the node sequence.
///
/// Equal `f` scores pop the lower node id first. Returns `[start]` when both
/// ends coincide, [`Error::UnknownNode`] when either end is missing from the
/// graph, and [`Error::NoRouteFound`] when the frontier empties.
pub fn find_route(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
    heuristic: Heuristic,
) -> Result<Vec<NodeId>> {
    graph.node(start).ok_or(Error::UnknownNode { id: start })?;
    let goal_node = graph.node(goal).ok_or(Error::UnknownNode { id: goal })?;

    if start == goal {
        return Ok(vec![start]);
    }

    let estimate = |id: NodeId| {
        graph
            .node(id)
            .map(|node| heuristic.estimate(node, goal_node))
            .unwrap_or(0.0)
    };

    let mut g_score: HashMap<NodeId, f64> = HashMap::new();
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue = BinaryHeap::new();

    g_score.insert(start, 0.0);
    queue.push(AStarEntry::new(start, 0.0, estimate(start)));

    while let Some(entry) = queue.pop() {
        let current_score = match g_score.get(&entry.node) {
            Some(score) if *score < entry.cost.0 => continue,
            Some(score) => *score,
            None => continue,
        };

        if entry.node == goal {
            return Ok(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.neighbours(entry.node) {
            let next = edge.target;
            let tentative_g = current_score + edge.weight;
            if tentative_g < *g_score.get(&next).unwrap_or(&f64::INFINITY) {
                g_score.insert(next, tentative_g);
                parents.insert(next, entry.node);
                queue.push(AStarEntry::new(next, tentative_g, estimate(next)));
            }
        }
    }

    Err(Error::NoRouteFound { start, goal })
}

/// Sum of edge weights along a path, or infinity if any hop is missing.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> f64 {
    path.windows(2)
        .map(|pair| graph.edge_weight(pair[0], pair[1]))
        .sum()
}

fn reconstruct_path(parents: &HashMap<NodeId, NodeId>, start: NodeId, goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct AStarEntry {
    node: NodeId,
    cost: FloatOrd,
    estimate: FloatOrd,
}

impl AStarEntry {
    fn new(node: NodeId, cost: f64, heuristic: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            estimate: FloatOrd(cost + heuristic),
        }
    }
}

impl Ord for AStarEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by estimate.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for AStarEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

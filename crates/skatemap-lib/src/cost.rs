//! Terrain penalties for skating.
//!
//! Edge weights are geographic length multiplied by a penalty derived from the
//! OSM `surface` and `highway` tags. Smooth surfaces and cycleways score below
//! 1.0, stairs score far above everything else.

use serde::{Deserialize, Serialize};

/// Penalty for surfaces missing from [`SURFACE_PENALTIES`].
pub const DEFAULT_SURFACE_PENALTY: f64 = 1.30;

/// Penalty for path types missing from [`PATH_TYPE_PENALTIES`].
pub const DEFAULT_PATH_TYPE_PENALTY: f64 = 1.10;

/// Surface material penalties.
pub const SURFACE_PENALTIES: &[(&str, f64)] = &[
    ("asphalt", 0.85),
    ("paved", 0.89),
    ("concrete", 1.00),
    ("paving_stones", 1.40),
    ("cobblestone", 2.00),
    ("gravel", 2.50),
    ("dirt", 3.00),
    ("sand", 5.00),
];

/// Path-type (`highway` tag) penalties.
pub const PATH_TYPE_PENALTIES: &[(&str, f64)] = &[
    ("steps", 10.00),
    ("footway", 1.20),
    ("path", 1.30),
    ("cycleway", 0.85),
    ("residential", 1.00),
    ("service", 1.10),
];

/// Smallest product any surface/path-type pair can produce.
///
/// Scaling the geographic distance by this factor gives a heuristic that never
/// overestimates the remaining cost.
pub const MIN_PENALTY: f64 = 0.85 * 0.85;

const STEPS: &str = "steps";

/// A raw tag as it arrives from map data: absent, a single value, or a list of
/// candidates merged from several source ways.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    #[default]
    Absent,
    Single(String),
    Many(Vec<String>),
}

impl TagValue {
    /// Canonical surface value: the first candidate.
    pub fn canonical_surface(&self) -> Option<&str> {
        match self {
            TagValue::Absent => None,
            TagValue::Single(value) => Some(value.as_str()),
            TagValue::Many(values) => values.first().map(String::as_str),
        }
    }

    /// Canonical path type: `steps` if any candidate is stairs, otherwise the
    /// first candidate.
    pub fn canonical_path_type(&self) -> Option<&str> {
        match self {
            TagValue::Absent => None,
            TagValue::Single(value) => Some(value.as_str()),
            TagValue::Many(values) => {
                if values.iter().any(|value| value == STEPS) {
                    Some(STEPS)
                } else {
                    values.first().map(String::as_str)
                }
            }
        }
    }
}

impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Single(value.to_string())
    }
}

impl From<Vec<&str>> for TagValue {
    fn from(values: Vec<&str>) -> Self {
        TagValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

fn lookup(table: &[(&str, f64)], key: Option<&str>, default: f64) -> f64 {
    key.and_then(|key| {
        table
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, penalty)| *penalty)
    })
    .unwrap_or(default)
}

pub fn surface_penalty(surface: Option<&str>) -> f64 {
    lookup(SURFACE_PENALTIES, surface, DEFAULT_SURFACE_PENALTY)
}

pub fn path_type_penalty(path_type: Option<&str>) -> f64 {
    lookup(PATH_TYPE_PENALTIES, path_type, DEFAULT_PATH_TYPE_PENALTY)
}

/// Combined penalty for canonical tag values.
pub fn penalty(surface: Option<&str>, path_type: Option<&str>) -> f64 {
    surface_penalty(surface) * path_type_penalty(path_type)
}

/// Combined penalty for raw (possibly multi-valued) tags.
pub fn terrain_penalty(surface: &TagValue, highway: &TagValue) -> f64 {
    penalty(surface.canonical_surface(), highway.canonical_path_type())
}

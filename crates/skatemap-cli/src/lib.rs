//! Skatemap CLI library.
//!
//! Command handlers and output formatting for the `skatemap-cli` binary.

pub mod commands;
pub mod output;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// A `LAT,LNG` pair given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LNG but got '{s}'"))?;
        let lat = lat
            .trim()
            .parse()
            .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
        let lng = lng
            .trim()
            .parse()
            .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;
        Ok(Point { lat, lng })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

//! Environment-driven service configuration.
//!
//! # Environment Variables
//!
//! - `SKATEMAP_NETWORK_PATH`: raw network JSON (default: `/data/network.json`)
//! - `SERVICE_PORT`: HTTP port (default: 8080)
//! - `SKATEMAP_AVG_SPEED_KMH`: skating speed used for time estimates (default: 10)
//! - `SKATEMAP_HEURISTIC`: `geographic` (default), `admissible` or `none`
//! - `SKATEMAP_SNAP`: `linear` (default) or `kd-tree`
//!
//! Unparseable values are logged and replaced by their defaults.

use std::path::PathBuf;
use std::str::FromStr;

use skatemap_lib::RoutingOptions;

pub const DEFAULT_NETWORK_PATH: &str = "/data/network.json";
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for an HTTP service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub network_path: PathBuf,
    pub port: u16,
    pub routing: RoutingOptions,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            network_path: PathBuf::from(DEFAULT_NETWORK_PATH),
            port: DEFAULT_PORT,
            routing: RoutingOptions::default(),
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let network_path = lookup("SKATEMAP_NETWORK_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.network_path);

        let port = parse_or(&lookup, "SERVICE_PORT", defaults.port);

        let avg_speed_kmh = parse_or(
            &lookup,
            "SKATEMAP_AVG_SPEED_KMH",
            defaults.routing.avg_speed_kmh,
        );
        let avg_speed_kmh = if avg_speed_kmh.is_finite() && avg_speed_kmh > 0.0 {
            avg_speed_kmh
        } else {
            tracing::warn!(
                value = avg_speed_kmh,
                "SKATEMAP_AVG_SPEED_KMH must be positive, using default"
            );
            defaults.routing.avg_speed_kmh
        };

        let routing = RoutingOptions {
            avg_speed_kmh,
            heuristic: parse_or(&lookup, "SKATEMAP_HEURISTIC", defaults.routing.heuristic),
            snap: parse_or(&lookup, "SKATEMAP_SNAP", defaults.routing.snap),
        };

        Self {
            network_path,
            port,
            routing,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, value = %raw, error = %e, "ignoring invalid setting");
                default
            }
        },
    }
}

//! Great-circle distance math and route length/time estimates.

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A `(lat, lng)` pair in degrees.
pub type Coordinate = (f64, f64);

/// Haversine distance in kilometres between two points given in degrees.
pub fn distance(lat_a: f64, lng_a: f64, lat_b: f64, lng_b: f64) -> f64 {
    let phi_a = lat_a.to_radians();
    let phi_b = lat_b.to_radians();
    let d_phi = (lat_b - lat_a).to_radians();
    let d_lambda = (lng_b - lng_a).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi_a.cos() * phi_b.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Map a node path to its coordinates, failing on the first unknown id.
pub fn path_to_coordinates(graph: &Graph, path: &[NodeId]) -> Result<Vec<Coordinate>> {
    path.iter()
        .map(|&id| {
            graph
                .node(id)
                .map(|node| (node.lat, node.lng))
                .ok_or(Error::UnknownNode { id })
        })
        .collect()
}

/// Geographic length of a coordinate sequence in kilometres.
///
/// This is true travel distance, independent of the terrain-weighted cost
/// used during search.
pub fn path_distance(coordinates: &[Coordinate]) -> f64 {
    coordinates
        .windows(2)
        .map(|pair| distance(pair[0].0, pair[0].1, pair[1].0, pair[1].1))
        .sum()
}

/// Travel time in minutes at `avg_speed_kmh`, rounded to one decimal.
pub fn estimate_time_minutes(coordinates: &[Coordinate], avg_speed_kmh: f64) -> Result<f64> {
    if !avg_speed_kmh.is_finite() || avg_speed_kmh <= 0.0 {
        return Err(Error::invalid(format!(
            "average speed must be a positive number of km/h, got {avg_speed_kmh}"
        )));
    }
    let hours = path_distance(coordinates) / avg_speed_kmh;
    Ok(round_to(hours * 60.0, 1))
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Check that a coordinate is finite and within WGS84 bounds.
pub fn validate_coordinate(lat: f64, lng: f64) -> Result<()> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(Error::invalid(format!(
            "coordinate ({lat}, {lng}) is not a finite number"
        )));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(Error::invalid(format!(
            "latitude {lat} is outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&lng) {
        return Err(Error::invalid(format!(
            "longitude {lng} is outside [-180, 180]"
        )));
    }
    Ok(())
}

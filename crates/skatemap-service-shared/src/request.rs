//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use skatemap_lib::geometry::validate_coordinate;
use skatemap_lib::Error as LibError;

use crate::ProblemDetails;

/// Validation trait for request types.
///
/// Implementations should validate all fields and return a `ProblemDetails`
/// error for invalid input.
pub trait Validate {
    /// Validate the request, returning an error if invalid.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Request for computing a skating route between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: Coordinates,
    pub end: Coordinates,
}

impl Coordinates {
    fn validate_named(&self, name: &str, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        validate_coordinate(self.lat, self.lng).map_err(|e| {
            let message = match e {
                LibError::InvalidParameter { message } => message,
                other => other.to_string(),
            };
            Box::new(ProblemDetails::bad_request(
                format!("The '{name}' field is invalid: {message}"),
                request_id,
            ))
        })
    }
}

impl Validate for RouteRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        self.start.validate_named("start", request_id)?;
        self.end.validate_named("end", request_id)
    }
}

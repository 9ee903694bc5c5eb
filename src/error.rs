//! Error taxonomy for the routing engine.
//!
//! Caller validation failures are the only errors the public API surfaces.
//! External-provider failures stay internal: the resolver recovers from all
//! of them with the straight-line fallback.

use std::time::Duration;

use thiserror::Error;

/// Caller-facing validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("at least 2 locations are required, got {0}")]
    TooFewLocations(usize),

    #[error("courier count {couriers} must be between 1 and {points}")]
    InvalidCourierCount { couriers: usize, points: usize },
}

/// Failures of the external routing tier. All variants are treated
/// uniformly as "no route available" by the resolver.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network error, non-success status, or malformed response body.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    /// Provider responded but found no route for the given waypoints.
    #[error("no route found for the given waypoints")]
    NoRoute,
}

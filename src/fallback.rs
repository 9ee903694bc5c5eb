//! Straight-line planner (fallback when the road provider is unavailable).
//!
//! Estimates travel time from great-circle distance and an assumed average
//! speed. Less accurate than a road provider (ignores roads) but pure
//! computation that always succeeds in O(N) / O(N²).

use rayon::prelude::*;

use crate::geo;
use crate::model::{DistanceMatrix, Location, Route, RouteSource};

/// Average road speed assumption for duration estimates.
const DEFAULT_SPEED_KMH: f64 = 40.0;

/// Local route planner backed by great-circle distance only.
#[derive(Debug, Clone)]
pub struct FallbackPlanner {
    /// Assumed average road speed in km/h.
    pub speed_kmh: f64,
}

impl Default for FallbackPlanner {
    fn default() -> Self {
        Self {
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }
}

impl FallbackPlanner {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    /// Route that chains the input stops with straight segments.
    ///
    /// Geometry is the input locations verbatim (no road snapping);
    /// duration is a coarse estimate at the assumed speed. Requires at
    /// least 2 locations, which the resolver enforces before calling.
    pub fn straight_line_route(&self, locations: &[Location]) -> Route {
        let coordinates: Vec<(f64, f64)> = locations.iter().map(|loc| (loc.lat, loc.lon)).collect();

        let total_km: f64 = locations
            .windows(2)
            .map(|pair| {
                geo::great_circle_distance_km(pair[0].lat, pair[0].lon, pair[1].lat, pair[1].lon)
            })
            .sum();

        let duration_seconds = total_km / self.speed_kmh * 3600.0;

        tracing::debug!(
            distance_km = total_km,
            duration_s = duration_seconds,
            "computed straight-line route"
        );

        Route {
            distance_meters: total_km * 1000.0,
            duration_seconds,
            waypoints: (0..locations.len()).collect(),
            coordinates,
            source: RouteSource::Fallback,
        }
    }

    /// All-pairs great-circle distances in meters. No I/O, always succeeds.
    pub fn distance_matrix(&self, locations: &[Location]) -> DistanceMatrix {
        locations
            .par_iter()
            .enumerate()
            .map(|(i, from)| {
                locations
                    .iter()
                    .enumerate()
                    .map(|(j, to)| {
                        if i == j {
                            0.0
                        } else {
                            geo::great_circle_distance_m(from.lat, from.lon, to.lat, to.lon)
                        }
                    })
                    .collect()
            })
            .collect()
    }
}

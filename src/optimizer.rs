//! Tour sequencing heuristics for delivery planning.
//!
//! Nearest-neighbor is a heuristic, not an optimizer: worst-case tours can
//! be noticeably longer than optimal. That trade is accepted here for
//! O(N²) predictability in quick delivery sequencing.

use crate::error::RoutingError;
use crate::geo;
use crate::model::{CourierRoute, Location, Route};

/// Greedy nearest-neighbor visiting order over the given stops.
///
/// Index 0 is fixed as the start; each step appends the closest unvisited
/// stop by great-circle distance. Ties go to the lowest index, so repeated
/// calls return the same tour.
pub fn greedy_nearest_neighbor(locations: &[Location]) -> Vec<usize> {
    if locations.len() <= 2 {
        return (0..locations.len()).collect();
    }

    let mut tour = Vec::with_capacity(locations.len());
    let mut current = 0;
    tour.push(current);

    let mut remaining: Vec<usize> = (1..locations.len()).collect();
    while !remaining.is_empty() {
        let here = &locations[current];
        let mut best_pos = 0;
        let mut best_dist = f64::INFINITY;
        for (pos, &candidate) in remaining.iter().enumerate() {
            let dist = geo::great_circle_distance_km(
                here.lat,
                here.lon,
                locations[candidate].lat,
                locations[candidate].lon,
            );
            if dist < best_dist {
                best_dist = dist;
                best_pos = pos;
            }
        }
        current = remaining.remove(best_pos);
        tour.push(current);
    }

    tour
}

/// Split a resolved route across couriers as contiguous, near-equal chunks.
///
/// The last chunk absorbs the remainder. Each courier's distance and
/// duration is the route total scaled by chunk share; the chunks are not
/// re-optimized sub-tours.
pub fn split_route_across_couriers(
    route: &Route,
    couriers: usize,
) -> Result<Vec<CourierRoute>, RoutingError> {
    let stops = route.waypoints.len();
    if couriers == 0 || stops < 2 || couriers > stops - 1 {
        return Err(RoutingError::InvalidCourierCount {
            couriers,
            points: stops.saturating_sub(1),
        });
    }

    let base = stops / couriers;
    let mut routes = Vec::with_capacity(couriers);
    for courier in 0..couriers {
        let start = courier * base;
        let end = if courier == couriers - 1 {
            stops
        } else {
            (courier + 1) * base
        };
        let waypoints = route.waypoints[start..end].to_vec();
        let share = waypoints.len() as f64 / stops as f64;

        routes.push(CourierRoute {
            courier_id: format!("courier_{}", courier + 1),
            waypoints,
            estimated_distance_meters: route.distance_meters * share,
            estimated_duration_seconds: route.duration_seconds * share,
        });
    }

    Ok(routes)
}

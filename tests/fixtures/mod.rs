//! Test fixtures for delivery-router.
//!
//! Real coordinate sets plus a configurable stub provider so resolver
//! behavior can be tested without a live routing backend.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use delivery_router::error::ProviderError;
use delivery_router::model::{Costing, Location, Route, RouteSource};
use delivery_router::traits::RouteProvider;

/// Two stops in central Moscow, ~740 m apart by straight line.
pub fn moscow_pair() -> Vec<Location> {
    vec![
        Location::new(1, 55.7536, 37.6201),
        Location::new(2, 55.7596, 37.6150),
    ]
}

/// One degree of longitude along the equator, ~111.19 km.
pub fn equator_pair() -> Vec<Location> {
    vec![Location::new(1, 0.0, 0.0), Location::new(2, 0.0, 1.0)]
}

/// Four stops around the Las Vegas Strip (OpenStreetMap coordinates).
pub fn strip_loop() -> Vec<Location> {
    vec![
        Location::named(1, 36.1263781, -115.1658180, "Wynn Las Vegas"),
        Location::named(2, 36.1126, -115.1767, "Bellagio"),
        Location::named(3, 36.1023654, -115.1688720, "MGM Grand"),
        Location::named(4, 36.1162, -115.1745, "Caesars Palace"),
    ]
}

/// Stub provider that answers every request with a canned road route.
pub struct RoadStub {
    pub calls: Arc<AtomicUsize>,
}

impl RoadStub {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

}

#[async_trait]
impl RouteProvider for RoadStub {
    async fn fetch_route(
        &self,
        locations: &[Location],
        _costing: &Costing,
    ) -> Result<Route, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Route {
            distance_meters: 7034.2,
            duration_seconds: 612.5,
            waypoints: (0..locations.len()).collect(),
            coordinates: locations.iter().map(|loc| (loc.lat, loc.lon)).collect(),
            source: RouteSource::External,
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Stub provider that fails every request, like an unreachable backend.
pub struct DownStub {
    pub calls: Arc<AtomicUsize>,
}

impl DownStub {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

}

#[async_trait]
impl RouteProvider for DownStub {
    async fn fetch_route(
        &self,
        _locations: &[Location],
        _costing: &Costing,
    ) -> Result<Route, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ProviderError::NoRoute)
    }

    async fn health_check(&self) -> bool {
        false
    }
}

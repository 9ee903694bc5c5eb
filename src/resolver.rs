//! Tiered route resolution: cache, then road provider, then straight line.
//!
//! The tiers commit to the first source that succeeds, so total latency is
//! bounded by the provider deadline plus a small constant. Provider
//! failures never surface to the caller; the only error this module
//! returns is the too-few-locations precondition.

use crate::cache::RouteCache;
use crate::error::RoutingError;
use crate::fallback::FallbackPlanner;
use crate::model::{Costing, DistanceMatrix, Location, Route};
use crate::traits::RouteProvider;

/// The public "get me a route" contract.
#[derive(Debug)]
pub struct RouteResolver<P> {
    provider: P,
    fallback: FallbackPlanner,
    cache: RouteCache,
}

impl<P: RouteProvider> RouteResolver<P> {
    pub fn new(provider: P) -> Self {
        Self::with_parts(provider, FallbackPlanner::default(), RouteCache::default())
    }

    pub fn with_parts(provider: P, fallback: FallbackPlanner, cache: RouteCache) -> Self {
        Self {
            provider,
            fallback,
            cache,
        }
    }

    /// Resolve a route through the given stops, cheapest tier first.
    ///
    /// Requires at least 2 locations; given that, this always returns a
    /// route. Fallback results are cached like provider results, so a
    /// known-unreachable provider is not re-probed for the same stops
    /// within this process.
    #[tracing::instrument(level = "debug", skip(self, locations), fields(stops = locations.len()))]
    pub async fn resolve(
        &self,
        locations: &[Location],
        costing: &Costing,
    ) -> Result<Route, RoutingError> {
        if locations.len() < 2 {
            return Err(RoutingError::TooFewLocations(locations.len()));
        }

        let key = RouteCache::key(locations);
        if let Some(route) = self.cache.get(&key) {
            tracing::debug!(%key, "route cache hit");
            return Ok(route);
        }

        match self.provider.fetch_route(locations, costing).await {
            Ok(route) => {
                self.cache.put(&key, route.clone());
                Ok(route)
            }
            Err(err) => {
                tracing::warn!(error = %err, "provider unavailable, using straight-line fallback");
                let route = self.fallback.straight_line_route(locations);
                self.cache.put(&key, route.clone());
                Ok(route)
            }
        }
    }

    /// All-pairs great-circle distances in meters for planning features.
    /// Local computation only; never touches the provider.
    pub fn distance_matrix(&self, locations: &[Location]) -> DistanceMatrix {
        self.fallback.distance_matrix(locations)
    }

    /// Is the external provider reachable. For operational reporting;
    /// resolution keeps working either way.
    pub async fn health_check(&self) -> bool {
        self.provider.health_check().await
    }

    pub fn cache(&self) -> &RouteCache {
        &self.cache
    }
}

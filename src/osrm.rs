//! OSRM HTTP adapter for road routes.
//!
//! Issues the outbound route request under a hard deadline so a slow
//! provider can never stall the resolver past its budget. Holds one
//! long-lived `reqwest::Client`; the connection pool is acquired when the
//! router is built and released when it is dropped.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::time::timeout;

use crate::error::ProviderError;
use crate::model::{Costing, Location, Route, RouteSource};
use crate::traits::RouteProvider;

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    /// Hard deadline for a route request. Must stay below the embedding
    /// caller's own timeout budget.
    pub route_timeout: Duration,
    /// Deadline for the liveness probe.
    pub health_timeout: Duration,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            route_timeout: Duration::from_secs(3),
            health_timeout: Duration::from_secs(2),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmRouter {
    config: OsrmConfig,
    client: reqwest::Client,
}

impl OsrmRouter {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        // No client-level timeout: the per-call deadlines below are the
        // single source of truth.
        let client = reqwest::Client::builder().build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }

    fn route_url(&self, locations: &[Location], costing: &Costing) -> String {
        // OSRM expects lon,lat pairs.
        let coords = locations
            .iter()
            .map(|loc| format!("{:.6},{:.6}", loc.lon, loc.lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries=geojson&steps=false",
            self.config.base_url,
            costing.provider_profile(),
            coords
        )
    }
}

#[async_trait]
impl RouteProvider for OsrmRouter {
    async fn fetch_route(
        &self,
        locations: &[Location],
        costing: &Costing,
    ) -> Result<Route, ProviderError> {
        let url = self.route_url(locations, costing);

        let body = timeout(self.config.route_timeout, async {
            let response = self.client.get(&url).send().await?;
            let response = response.error_for_status()?;
            response.json::<OsrmRouteResponse>().await
        })
        .await
        .map_err(|_| ProviderError::DeadlineExceeded(self.config.route_timeout))??;

        if body.code != "Ok" {
            return Err(ProviderError::NoRoute);
        }
        let road = body.routes.into_iter().next().ok_or(ProviderError::NoRoute)?;

        // GeoJSON coordinates arrive as [lon, lat]; flip to (lat, lon).
        let mut coordinates: Vec<(f64, f64)> = road
            .geometry
            .map(|geometry| {
                geometry
                    .coordinates
                    .into_iter()
                    .map(|[lon, lat]| (lat, lon))
                    .collect()
            })
            .unwrap_or_default();
        if coordinates.is_empty() {
            coordinates = locations.iter().map(|loc| (loc.lat, loc.lon)).collect();
        }

        tracing::info!(
            distance_m = road.distance,
            duration_s = road.duration,
            "road route from provider"
        );

        Ok(Route {
            distance_meters: road.distance,
            duration_seconds: road.duration,
            waypoints: (0..locations.len()).collect(),
            coordinates,
            source: RouteSource::External,
        })
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/status", self.config.base_url);
        match timeout(self.config.health_timeout, self.client.get(&url).send()).await {
            Ok(Ok(response)) => response.status().is_success(),
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "provider health probe failed");
                false
            }
            Err(_) => {
                tracing::warn!("provider health probe timed out");
                false
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
    geometry: Option<OsrmGeometry>,
}

#[derive(Debug, Deserialize)]
struct OsrmGeometry {
    #[serde(default)]
    coordinates: Vec<[f64; 2]>,
}

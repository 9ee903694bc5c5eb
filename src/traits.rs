//! Core seams for the routing engine.
//!
//! These are intentionally minimal. The resolver is generic over the
//! provider so tests (and alternative providers) can slot in without
//! touching the tiering logic.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::model::{Costing, Location, Route};

/// Source of road-accurate routes, typically a remote HTTP provider.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Fetch a road route through the given stops.
    ///
    /// Implementations own their deadline: this must return, successfully
    /// or not, within a bounded time so the caller's latency stays
    /// predictable.
    async fn fetch_route(
        &self,
        locations: &[Location],
        costing: &Costing,
    ) -> Result<Route, ProviderError>;

    /// Lightweight liveness probe with its own short deadline.
    ///
    /// Used for operational reporting only; `fetch_route` never consults
    /// it (the request attempt itself is the health signal).
    async fn health_check(&self) -> bool;
}

//! Data model for route resolution.
//!
//! These types double as the wire contract: the embedding application's
//! HTTP layer deserializes requests into `RouteRequest` and serializes
//! `Route` / `CourierRoute` back out.

use serde::{Deserialize, Serialize};

/// Caller-supplied location identifier. Opaque to the engine; accepted as
/// either a string or an integer on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationId {
    Int(i64),
    Text(String),
}

impl From<i64> for LocationId {
    fn from(id: i64) -> Self {
        LocationId::Int(id)
    }
}

impl From<i32> for LocationId {
    fn from(id: i32) -> Self {
        LocationId::Int(i64::from(id))
    }
}

impl From<&str> for LocationId {
    fn from(id: &str) -> Self {
        LocationId::Text(id.to_string())
    }
}

impl From<String> for LocationId {
    fn from(id: String) -> Self {
        LocationId::Text(id)
    }
}

/// A stop submitted to a resolution call. Owned by the request; never
/// persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Semantic tag, e.g. "waypoint". Not interpreted by the engine.
    #[serde(rename = "type", default = "default_location_kind")]
    pub kind: String,
}

fn default_location_kind() -> String {
    "waypoint".to_string()
}

impl Location {
    pub fn new(id: impl Into<LocationId>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            lat,
            lon,
            name: None,
            kind: default_location_kind(),
        }
    }

    pub fn named(id: impl Into<LocationId>, lat: f64, lon: f64, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::new(id, lat, lon)
        }
    }
}

/// Travel-mode profile interpreted by the routing provider.
///
/// Known profiles are closed variants so typos are caught early; anything
/// else is passed through to the provider verbatim via `Custom`, since the
/// profile vocabulary is ultimately provider-defined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Costing {
    #[default]
    Auto,
    Bicycle,
    Pedestrian,
    Taxi,
    Custom(String),
}

impl Costing {
    pub fn as_str(&self) -> &str {
        match self {
            Costing::Auto => "auto",
            Costing::Bicycle => "bicycle",
            Costing::Pedestrian => "pedestrian",
            Costing::Taxi => "taxi",
            Costing::Custom(profile) => profile,
        }
    }

    /// URL path segment understood by OSRM-style providers.
    pub fn provider_profile(&self) -> &str {
        match self {
            Costing::Auto | Costing::Taxi => "driving",
            Costing::Bicycle => "cycling",
            Costing::Pedestrian => "walking",
            Costing::Custom(profile) => profile,
        }
    }
}

impl From<String> for Costing {
    fn from(value: String) -> Self {
        match value.as_str() {
            "auto" => Costing::Auto,
            "bicycle" => Costing::Bicycle,
            "pedestrian" => Costing::Pedestrian,
            "taxi" => Costing::Taxi,
            _ => Costing::Custom(value),
        }
    }
}

impl From<Costing> for String {
    fn from(value: Costing) -> Self {
        match value {
            Costing::Custom(profile) => profile,
            known => known.as_str().to_string(),
        }
    }
}

/// Which tier produced a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    /// Road-accurate result from the external provider.
    External,
    /// Straight-line approximation computed locally.
    Fallback,
}

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Total distance in meters.
    pub distance_meters: f64,
    /// Estimated total duration in seconds.
    pub duration_seconds: f64,
    /// Indices into the submitted location list, in visiting order.
    pub waypoints: Vec<usize>,
    /// Path geometry as (lat, lon) pairs; at minimum the inputs themselves,
    /// at best a road-following polyline.
    pub coordinates: Vec<(f64, f64)>,
    pub source: RouteSource,
}

/// Inbound request body accepted from the embedding HTTP layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub locations: Vec<Location>,
    #[serde(default)]
    pub costing: Costing,
}

/// One courier's share of a split route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourierRoute {
    pub courier_id: String,
    pub waypoints: Vec<usize>,
    pub estimated_distance_meters: f64,
    pub estimated_duration_seconds: f64,
}

/// Square all-pairs distance matrix in meters. Symmetric, zero diagonal.
pub type DistanceMatrix = Vec<Vec<f64>>;

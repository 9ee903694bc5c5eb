//! delivery-router core
//!
//! Route resolution engine for delivery features: tiered resolution
//! (cache, then road provider, then straight-line fallback), all-pairs
//! distance matrices, and greedy tour sequencing.

pub mod cache;
pub mod error;
pub mod fallback;
pub mod geo;
pub mod model;
pub mod optimizer;
pub mod osrm;
pub mod resolver;
pub mod traits;

//! In-process route cache.
//!
//! Keys are the ordered coordinate sequence rounded to 4 decimal places
//! (~11 m of resolution), so small GPS jitter on the same stops reuses a
//! cached route instead of recomputing. Bounded LRU: once at capacity,
//! the least recently touched entry is evicted.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::{Location, Route};

/// Default number of cached routes. At a few KB per route this keeps the
/// cache in the low-megabyte range.
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug)]
struct Entry {
    route: Route,
    touched: u64,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, Entry>,
    clock: u64,
}

/// Process-wide route memo, shared by all concurrent resolution calls.
///
/// Entries are replaced wholesale, never partially updated, so
/// last-writer-wins on identical keys is safe.
#[derive(Debug)]
pub struct RouteCache {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl Default for RouteCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RouteCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            capacity: capacity.max(1),
        }
    }

    /// Cache key for an ordered list of stops.
    ///
    /// Coordinates within the 4-decimal rounding tolerance collide to the
    /// same key. Order matters: a reversed route is a different key.
    pub fn key(locations: &[Location]) -> String {
        let coords = locations
            .iter()
            .map(|loc| format!("{:.4}:{:.4}", loc.lat, loc.lon))
            .collect::<Vec<_>>()
            .join(",");
        format!("route_{}", coords)
    }

    pub fn get(&self, key: &str) -> Option<Route> {
        let mut inner = self.lock();
        inner.clock += 1;
        let clock = inner.clock;
        inner.entries.get_mut(key).map(|entry| {
            entry.touched = clock;
            entry.route.clone()
        })
    }

    pub fn put(&self, key: &str, route: Route) {
        let mut inner = self.lock();
        inner.clock += 1;
        let touched = inner.clock;
        inner.entries.insert(key.to_string(), Entry { route, touched });

        if inner.entries.len() > self.capacity {
            if let Some(oldest) = inner
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(key, _)| key.clone())
            {
                inner.entries.remove(&oldest);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned lock only means another thread panicked mid-insert;
        // the map itself is still structurally sound.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

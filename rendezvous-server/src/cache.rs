//! Caching layer for routing responses.
//!
//! The demo repeatedly asks for the same handful of routes (five
//! zones, two modes), and the public OSRM backend rate-limits, so
//! successful responses are cached briefly.
//!
//! Coordinate bucketing (about 11 m at 1e-4 degrees) bounds cache
//! cardinality while keeping near-identical start positions on the
//! same entry. Errors are never cached; a failed request must be free
//! to succeed a moment later.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{LatLon, RouteSummary, TravelMode};
use crate::osrm::{OsrmClient, RoutingError};

/// Cache key: bucketed (start, end) coordinates plus travel mode.
type RouteKey = (i64, i64, i64, i64, TravelMode);

/// Coordinate bucket size in degrees.
const BUCKET_DEGREES: f64 = 1e-4;

/// Configuration for the route cache.
#[derive(Debug, Clone)]
pub struct RouteCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for RouteCacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(120),
            max_capacity: 256,
        }
    }
}

fn bucket(degrees: f64) -> i64 {
    (degrees / BUCKET_DEGREES).round() as i64
}

fn route_key(start: LatLon, end: LatLon, mode: TravelMode) -> RouteKey {
    (
        bucket(start.lat),
        bucket(start.lon),
        bucket(end.lat),
        bucket(end.lon),
        mode,
    )
}

/// OSRM client with response caching.
pub struct CachedOsrmClient {
    client: OsrmClient,
    routes: MokaCache<RouteKey, Arc<RouteSummary>>,
}

impl CachedOsrmClient {
    /// Create a new cached client.
    pub fn new(client: OsrmClient, config: &RouteCacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, routes }
    }

    /// Request a route, using the cache if available.
    pub async fn route(
        &self,
        start: LatLon,
        end: LatLon,
        mode: TravelMode,
    ) -> Result<RouteSummary, RoutingError> {
        let key = route_key(start, end, mode);

        if let Some(cached) = self.routes.get(&key).await {
            return Ok((*cached).clone());
        }

        let summary = self.client.route(start, end, mode).await?;

        self.routes.insert(key, Arc::new(summary.clone())).await;
        Ok(summary)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &OsrmClient {
        &self.client
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.routes.invalidate_all();
    }
}

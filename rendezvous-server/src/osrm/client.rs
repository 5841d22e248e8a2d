//! OSRM HTTP client.
//!
//! Provides an async method for requesting a route from an OSRM v5
//! backend. Handles concurrency limiting and conversion to domain
//! types.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{LatLon, RouteSummary, TravelMode};

use super::convert::convert_response;
use super::error::RoutingError;
use super::types::RouteResponse;

/// Default base URL: the public OSRM demo server.
const DEFAULT_BASE_URL: &str = "https://router.project-osrm.org";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Configuration for the OSRM client.
#[derive(Debug, Clone)]
pub struct OsrmConfig {
    /// Base URL for the routing backend.
    pub base_url: String,
    /// Maximum concurrent requests.
    pub max_concurrent: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl OsrmConfig {
    /// Create a config with the default public backend.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 15,
        }
    }

    /// Set a custom base URL (self-hosted backend, or a test server).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// OSRM route service client.
///
/// Uses a semaphore to limit concurrent requests; the public demo
/// backend rate-limits aggressively.
#[derive(Debug, Clone)]
pub struct OsrmClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl OsrmClient {
    /// Create a new client with the given configuration.
    pub fn new(config: OsrmConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Request a route from `start` to `end` for the given mode.
    ///
    /// Returns the best route's summary, or a [`RoutingError`] the
    /// caller recovers from with the straight-line estimate. Note the
    /// OSRM URL takes coordinates in lon,lat order.
    pub async fn route(
        &self,
        start: LatLon,
        end: LatLon,
        mode: TravelMode,
    ) -> Result<RouteSummary, RoutingError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| RoutingError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            mode.profile(),
            start.lon,
            start.lat,
            end.lon,
            end.lat,
        );

        debug!(%start, %end, %mode, "requesting route");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("overview", "full"),
                ("geometries", "geojson"),
                ("steps", "true"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimited);
        }

        // OSRM reports "no route" as HTTP 400 with a JSON body carrying
        // the code, so parse error bodies before giving up on them.
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(parsed) = serde_json::from_str::<RouteResponse>(&body) {
                return convert_response(&parsed);
            }
            return Err(RoutingError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: RouteResponse =
            serde_json::from_str(&body).map_err(|e| RoutingError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        convert_response(&parsed)
    }
}

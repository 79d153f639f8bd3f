use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::{CurrentConditions, ForecastSample};

pub mod openweather;

/// Failure of an upstream weather fetch. Every call site handles both arms
/// explicitly; there is no silent absent-result path.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to weather provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather provider returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse weather provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Boundary to the upstream weather provider.
///
/// Calls block the request that issued them; there is no retry, caching or
/// circuit breaking by design.
#[async_trait]
pub trait WeatherGateway: Send + Sync + Debug {
    /// Current observed conditions at the given coordinates.
    async fn fetch_current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, FetchError>;

    /// Chronologically ordered 3-hour forecast samples for the coordinates.
    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastSample>, FetchError>;
}

//! Core library for the climate bulletin dashboard.
//!
//! This crate defines:
//! - Configuration handling (stations, credentials, bind address)
//! - The static monthly climatology table
//! - Climate analytics (temperature anomaly, heat-risk classification)
//! - Forecast aggregation (daily outlook + intraday chart series)
//! - The gateway to the upstream weather provider
//!
//! It is used by `bulletin-web`, but can also be reused by other binaries or
//! services.

pub mod analytics;
pub mod climatology;
pub mod config;
pub mod forecast;
pub mod gateway;
pub mod model;

pub use analytics::{AnomalyReading, RiskLevel, classify_heat_risk, compute_anomaly};
pub use config::{Settings, SettingsFile};
pub use forecast::{ForecastOutlook, aggregate_forecast};
pub use gateway::{FetchError, WeatherGateway, openweather::OpenWeatherGateway};
pub use model::{ChartPoint, CurrentConditions, DailyForecastEntry, ForecastSample, Station};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A monitored weather station. The set of stations is fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl Station {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self { name: name.into(), lat, lon }
    }
}

/// Current observed conditions at a station, fetched fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub condition: String,
    pub icon: String,
    pub observed_at: DateTime<Utc>,
}

/// One raw forecast sample from the upstream 3-hour-step payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub condition: String,
    pub icon: String,
}

/// One representative sample per calendar day, derived from the first
/// sample seen for that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Display date, e.g. "Mon, 03 Feb".
    pub date: String,
    pub temperature_c: f64,
    pub condition: String,
    pub icon: String,
    /// Time of day of the sample this entry was taken from, e.g. "12:00".
    pub time_of_day: String,
}

/// A single point of the fine-grained intraday chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Time-of-day label, e.g. "15:00".
    pub label: String,
    pub temperature_c: f64,
}

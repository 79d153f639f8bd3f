use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::model::{CurrentConditions, ForecastSample};

use super::{FetchError, WeatherGateway};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Gateway to the OpenWeather "current weather" and "5 day / 3 hour
/// forecast" endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherGateway {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherGateway {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the gateway at a different base URL; used by tests to target a
    /// mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn get_json(&self, path: &str, lat: f64, lon: f64) -> Result<String, FetchError> {
        let url = format!("{}/{path}", self.base_url);
        debug!(%url, lat, lon, "fetching from OpenWeather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

#[async_trait]
impl WeatherGateway for OpenWeatherGateway {
    async fn fetch_current(&self, lat: f64, lon: f64) -> Result<CurrentConditions, FetchError> {
        let body = self.get_json("weather", lat, lon).await?;
        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;

        let (condition, icon) = condition_and_icon(&parsed.weather);

        Ok(CurrentConditions {
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            condition,
            icon,
            observed_at: unix_to_utc(parsed.dt),
        })
    }

    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<Vec<ForecastSample>, FetchError> {
        let body = self.get_json("forecast", lat, lon).await?;
        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        let samples = parsed
            .list
            .into_iter()
            .map(|entry| {
                let (condition, icon) = condition_and_icon(&entry.weather);
                ForecastSample {
                    timestamp: unix_to_utc(entry.dt),
                    temperature_c: entry.main.temp,
                    condition,
                    icon,
                }
            })
            .collect();

        Ok(samples)
    }
}

fn condition_and_icon(weather: &[OwWeather]) -> (String, String) {
    weather.first().map_or_else(
        || ("Unknown".to_string(), "01d".to_string()),
        |w| (w.main.clone(), w.icon.clone()),
    )
}

fn unix_to_utc(ts: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multi-byte provider messages slice cleanly.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_falls_back_when_weather_array_is_empty() {
        let (condition, icon) = condition_and_icon(&[]);
        assert_eq!(condition, "Unknown");
        assert_eq!(icon, "01d");
    }

    #[test]
    fn condition_uses_first_weather_entry() {
        let weather = vec![
            OwWeather { main: "Rain".to_string(), icon: "10d".to_string() },
            OwWeather { main: "Clouds".to_string(), icon: "04d".to_string() },
        ];
        let (condition, icon) = condition_and_icon(&weather);
        assert_eq!(condition, "Rain");
        assert_eq!(icon, "10d");
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // 'é' is two bytes and straddles the 200-byte cutoff.
        let body = format!("{}é and more", "a".repeat(199));
        let truncated = truncate_body(&body);
        assert_eq!(truncated, format!("{}...", "a".repeat(199)));
    }

    #[test]
    fn unix_timestamps_convert_to_utc() {
        let dt = unix_to_utc(1_700_000_000);
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2023-11-14");
    }
}

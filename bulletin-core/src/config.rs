use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

use crate::climatology::DEFAULT_STATION;
use crate::model::Station;

/// Environment variable holding the OpenWeather API credential.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Immutable application settings, constructed once at startup and passed
/// explicitly to every component that needs them.
#[derive(Debug, Clone)]
pub struct Settings {
    /// OpenWeather API credential, read from the process environment.
    pub api_key: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// The fixed set of monitored stations.
    pub stations: Vec<Station>,
    /// Station shown when none (or an unknown one) is selected.
    pub default_station: String,
}

/// On-disk overrides. Every field is optional; missing fields keep their
/// built-in defaults.
///
/// Example TOML:
/// ```toml
/// bind_addr = "0.0.0.0:8080"
///
/// [[stations]]
/// name = "Lilongwe"
/// lat = -13.98
/// lon = 33.78
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    pub bind_addr: Option<String>,
    pub default_station: Option<String>,
    pub stations: Option<Vec<Station>>,
}

impl Settings {
    /// Built-in station set from the original deployment.
    pub fn default_stations() -> Vec<Station> {
        vec![
            Station::new("Lilongwe", -13.98, 33.78),
            Station::new("Blantyre", -15.79, 35.00),
            Station::new("Mzuzu", -11.46, 34.02),
            Station::new("Zomba", -15.38, 35.32),
        ]
    }

    /// Build settings from defaults, an optional TOML override file, and the
    /// API key taken from the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse config file: {}", path.display()))?
            }
            None => SettingsFile::default(),
        };

        let api_key = env::var(API_KEY_ENV)
            .with_context(|| format!("Missing {API_KEY_ENV} in the process environment"))?;

        Self::from_parts(api_key, file)
    }

    /// Assemble settings from an already-resolved key and override file.
    pub fn from_parts(api_key: String, file: SettingsFile) -> Result<Self> {
        let stations = file.stations.unwrap_or_else(Self::default_stations);
        if stations.is_empty() {
            bail!("Configuration must define at least one station");
        }

        let default_station = file
            .default_station
            .unwrap_or_else(|| DEFAULT_STATION.to_string());

        Ok(Self {
            api_key,
            bind_addr: file.bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            stations,
            default_station,
        })
    }

    /// The station matching `name`, or the default station if `name` is
    /// unknown. Selection is permissive by design; it never fails a request.
    pub fn station_or_default(&self, name: &str) -> &Station {
        self.stations
            .iter()
            .find(|s| s.name == name)
            .unwrap_or_else(|| self.fallback_station())
    }

    fn fallback_station(&self) -> &Station {
        self.stations
            .iter()
            .find(|s| s.name == self.default_station)
            .unwrap_or(&self.stations[0])
    }
}

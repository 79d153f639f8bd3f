//! Climate analytics: temperature anomaly against the monthly baseline and
//! heat-risk classification from a simplified heat index.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::climatology::monthly_baseline;

/// Observed temperature compared against the 30-year monthly baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReading {
    /// Signed difference, positive means warmer than the baseline.
    pub anomaly_c: f64,
    /// The baseline value the anomaly was computed against.
    pub baseline_c: f64,
}

/// Temperature anomaly for a station on a given day.
///
/// Pure function of (station, temperature, date). Unknown stations use the
/// default climatology row, so this never fails.
pub fn compute_anomaly(station: &str, current_temp_c: f64, today: NaiveDate) -> AnomalyReading {
    let baseline_c = monthly_baseline(station, today.month());
    let anomaly_c = round_one_decimal(current_temp_c - baseline_c);
    AnomalyReading { anomaly_c, baseline_c }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Ordered heat-risk categories, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Caution,
    ExtremeCaution,
    Danger,
    ExtremeDanger,
}

impl RiskLevel {
    /// Human-readable label shown on the dashboard and in the bulletin.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Caution => "Caution",
            Self::ExtremeCaution => "Extreme Caution",
            Self::Danger => "Danger",
            Self::ExtremeDanger => "Extreme Danger",
        }
    }

    /// Display severity token consumed by the presentation layer.
    pub const fn severity(self) -> &'static str {
        match self {
            Self::Safe => "low",
            Self::Caution => "moderate",
            Self::ExtremeCaution => "elevated",
            Self::Danger => "high",
            Self::ExtremeDanger => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify heat risk from temperature and relative humidity.
///
/// Uses `heat_index = temp + 0.05 * humidity`, a deliberately simplified
/// proxy rather than the meteorological Heat Index formula. Intervals are
/// lower-inclusive, upper-exclusive, with the last one open-ended. Total
/// over real-valued inputs; implausible values are not rejected.
pub fn classify_heat_risk(temp_c: f64, humidity_pct: f64) -> RiskLevel {
    let heat_index = temp_c + 0.05 * humidity_pct;

    if heat_index < 27.0 {
        RiskLevel::Safe
    } else if heat_index < 32.0 {
        RiskLevel::Caution
    } else if heat_index < 41.0 {
        RiskLevel::ExtremeCaution
    } else if heat_index < 54.0 {
        RiskLevel::Danger
    } else {
        RiskLevel::ExtremeDanger
    }
}

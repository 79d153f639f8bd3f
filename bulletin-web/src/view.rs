//! Page templates and the view models they consume.

use bulletin_core::{AnomalyReading, CurrentConditions, DailyForecastEntry, ForecastOutlook,
    RiskLevel, Station};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tera::Tera;

/// Compile the embedded page templates. Called once at startup.
pub fn templates() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![(
        "dashboard.html",
        include_str!("../templates/dashboard.html"),
    )])?;
    Ok(tera)
}

/// Everything the dashboard page needs, preformatted for display.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub city: String,
    pub cities: Vec<String>,
    pub date_display: String,
    pub temp_display: String,
    pub humidity_pct: u8,
    pub condition: String,
    pub icon: String,
    pub observed_display: String,
    pub anomaly_display: String,
    pub baseline_display: String,
    pub risk_label: String,
    pub risk_severity: String,
    pub daily: Vec<DailyView>,
    /// JSON array of time-of-day labels for the chart script.
    pub chart_labels: String,
    /// JSON array of temperatures for the chart script.
    pub chart_temps: String,
    pub map_html: String,
}

#[derive(Debug, Serialize)]
pub struct DailyView {
    pub date: String,
    pub temp_display: String,
    pub condition: String,
    pub icon: String,
    pub time_of_day: String,
}

impl DashboardView {
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        station: &Station,
        cities: Vec<String>,
        now: DateTime<Utc>,
        current: &CurrentConditions,
        anomaly: AnomalyReading,
        risk: RiskLevel,
        outlook: &ForecastOutlook,
        map_html: String,
    ) -> tera::Result<Self> {
        let labels: Vec<&str> = outlook.chart.iter().map(|p| p.label.as_str()).collect();
        let temps: Vec<f64> = outlook.chart.iter().map(|p| p.temperature_c).collect();

        Ok(Self {
            city: station.name.clone(),
            cities,
            date_display: now.format("%A, %d %B %Y").to_string(),
            temp_display: format!("{:.1}", current.temperature_c),
            humidity_pct: current.humidity_pct,
            condition: current.condition.clone(),
            icon: current.icon.clone(),
            observed_display: current.observed_at.format("%H:%M").to_string(),
            anomaly_display: format!("{:+.1}", anomaly.anomaly_c),
            baseline_display: format!("{:.1}", anomaly.baseline_c),
            risk_label: risk.label().to_string(),
            risk_severity: risk.severity().to_string(),
            daily: outlook.daily.iter().map(DailyView::from_entry).collect(),
            chart_labels: serde_json::to_string(&labels).map_err(tera::Error::json)?,
            chart_temps: serde_json::to_string(&temps).map_err(tera::Error::json)?,
            map_html,
        })
    }
}

impl DailyView {
    fn from_entry(entry: &DailyForecastEntry) -> Self {
        Self {
            date: entry.date.clone(),
            temp_display: format!("{:.1}", entry.temperature_c),
            condition: entry.condition.clone(),
            icon: entry.icon.clone(),
            time_of_day: entry.time_of_day.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulletin_core::{ChartPoint, aggregate_forecast, classify_heat_risk, compute_anomaly};
    use chrono::TimeZone;

    fn current() -> CurrentConditions {
        CurrentConditions {
            temperature_c: 26.43,
            humidity_pct: 48,
            condition: "Clouds".to_string(),
            icon: "03d".to_string(),
            observed_at: Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn templates_compile() {
        assert!(templates().is_ok());
    }

    #[test]
    fn dashboard_page_renders() {
        let tera = templates().expect("templates compile");
        let station = Station::new("Lilongwe", -13.98, 33.78);
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        let current = current();

        let anomaly = compute_anomaly(&station.name, current.temperature_c, now.date_naive());
        let risk = classify_heat_risk(current.temperature_c, f64::from(current.humidity_pct));
        let outlook = aggregate_forecast(&[]);

        let view = DashboardView::build(
            &station,
            vec!["Lilongwe".to_string(), "Zomba".to_string()],
            now,
            &current,
            anomaly,
            risk,
            &outlook,
            "<div id=\"station-map\"></div>".to_string(),
        )
        .expect("view builds");

        let ctx = tera::Context::from_serialize(&view).expect("context builds");
        let html = tera.render("dashboard.html", &ctx).expect("page renders");

        assert!(html.contains("Lilongwe"));
        assert!(html.contains("26.4"));
        assert!(html.contains("Caution"));
        assert!(html.contains("station-map"));
    }

    #[test]
    fn chart_series_serialize_as_json_arrays() {
        let outlook = ForecastOutlook {
            daily: Vec::new(),
            chart: vec![
                ChartPoint { label: "09:00".to_string(), temperature_c: 21.5 },
                ChartPoint { label: "12:00".to_string(), temperature_c: 25.0 },
            ],
        };
        let station = Station::new("Mzuzu", -11.46, 34.02);
        let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
        let current = current();
        let anomaly = compute_anomaly(&station.name, current.temperature_c, now.date_naive());
        let risk = classify_heat_risk(current.temperature_c, f64::from(current.humidity_pct));

        let view = DashboardView::build(
            &station,
            vec!["Mzuzu".to_string()],
            now,
            &current,
            anomaly,
            risk,
            &outlook,
            String::new(),
        )
        .expect("view builds");

        assert_eq!(view.chart_labels, r#"["09:00","12:00"]"#);
        assert_eq!(view.chart_temps, "[21.5,25.0]");
    }
}

//! Forecast aggregation: collapse the upstream 3-hour-step sample sequence
//! into a short daily outlook plus a fine-grained intraday chart series.

use crate::model::{ChartPoint, DailyForecastEntry, ForecastSample};

/// Maximum number of daily outlook entries.
pub const DAILY_LIMIT: usize = 5;

/// Number of raw samples feeding the intraday chart.
pub const CHART_LIMIT: usize = 8;

/// Both derived views over the raw forecast sequence.
#[derive(Debug, Clone, Default)]
pub struct ForecastOutlook {
    pub daily: Vec<DailyForecastEntry>,
    pub chart: Vec<ChartPoint>,
}

/// Reduce a chronologically ordered sample sequence to at most
/// [`DAILY_LIMIT`] one-per-day entries (first sample seen for each distinct
/// calendar date wins) and the first [`CHART_LIMIT`] samples as chart points.
///
/// The input is assumed chronological; no sorting happens here, so unsorted
/// input yields unspecified daily ordering. Empty input produces two empty
/// vectors.
pub fn aggregate_forecast(samples: &[ForecastSample]) -> ForecastOutlook {
    let mut daily: Vec<DailyForecastEntry> = Vec::with_capacity(DAILY_LIMIT);
    let mut seen_dates: Vec<String> = Vec::with_capacity(DAILY_LIMIT);

    for sample in samples {
        if daily.len() == DAILY_LIMIT {
            break;
        }
        let date_key = sample.timestamp.format("%Y-%m-%d").to_string();
        if seen_dates.contains(&date_key) {
            continue;
        }
        seen_dates.push(date_key);
        daily.push(DailyForecastEntry {
            date: sample.timestamp.format("%a, %d %b").to_string(),
            temperature_c: sample.temperature_c,
            condition: sample.condition.clone(),
            icon: sample.icon.clone(),
            time_of_day: sample.timestamp.format("%H:%M").to_string(),
        });
    }

    let chart = samples
        .iter()
        .take(CHART_LIMIT)
        .map(|sample| ChartPoint {
            label: sample.timestamp.format("%H:%M").to_string(),
            temperature_c: sample.temperature_c,
        })
        .collect();

    ForecastOutlook { daily, chart }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn sample(ts: DateTime<Utc>, temp: f64) -> ForecastSample {
        ForecastSample {
            timestamp: ts,
            temperature_c: temp,
            condition: "Clouds".to_string(),
            icon: "04d".to_string(),
        }
    }

    /// Seven consecutive days, eight 3-hour samples each, temperatures
    /// encoding (day, slot) so first-per-day picks are checkable.
    fn week_of_samples() -> Vec<ForecastSample> {
        let mut samples = Vec::new();
        for day in 0..7u32 {
            for slot in 0..8u32 {
                let ts = Utc
                    .with_ymd_and_hms(2024, 3, 4 + day, slot * 3, 0, 0)
                    .unwrap();
                samples.push(sample(ts, f64::from(day * 100 + slot)));
            }
        }
        samples
    }

    #[test]
    fn daily_keeps_first_sample_of_first_five_dates() {
        let outlook = aggregate_forecast(&week_of_samples());

        assert_eq!(outlook.daily.len(), 5);
        for (day, entry) in outlook.daily.iter().enumerate() {
            // Slot 0 of each day, i.e. midnight.
            assert_eq!(entry.temperature_c, (day * 100) as f64);
            assert_eq!(entry.time_of_day, "00:00");
        }
        assert_eq!(outlook.daily[0].date, "Mon, 04 Mar");
        assert_eq!(outlook.daily[4].date, "Fri, 08 Mar");
    }

    #[test]
    fn chart_takes_first_eight_samples_across_date_boundaries() {
        // Two samples on the first day, the rest on following days: the
        // chart ignores date boundaries entirely.
        let mut samples = Vec::new();
        for i in 0..10u32 {
            let ts = Utc
                .with_ymd_and_hms(2024, 3, 4 + i / 2, (i % 2) * 12, 0, 0)
                .unwrap();
            samples.push(sample(ts, f64::from(i)));
        }

        let outlook = aggregate_forecast(&samples);
        assert_eq!(outlook.chart.len(), 8);
        for (i, point) in outlook.chart.iter().enumerate() {
            assert_eq!(point.temperature_c, i as f64);
        }
    }

    #[test]
    fn chart_is_shorter_when_input_is_short() {
        let samples = week_of_samples().into_iter().take(3).collect::<Vec<_>>();
        let outlook = aggregate_forecast(&samples);
        assert_eq!(outlook.chart.len(), 3);
        assert_eq!(outlook.daily.len(), 1);
    }

    #[test]
    fn empty_input_yields_empty_outputs() {
        let outlook = aggregate_forecast(&[]);
        assert!(outlook.daily.is_empty());
        assert!(outlook.chart.is_empty());
    }

    #[test]
    fn fewer_than_five_distinct_dates_yields_fewer_entries() {
        let samples = week_of_samples().into_iter().take(24).collect::<Vec<_>>();
        let outlook = aggregate_forecast(&samples);
        assert_eq!(outlook.daily.len(), 3);
    }

    #[test]
    fn later_samples_of_the_same_day_are_dropped() {
        let first = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 3, 4, 18, 0, 0).unwrap();
        let outlook = aggregate_forecast(&[sample(first, 20.0), sample(later, 28.0)]);

        assert_eq!(outlook.daily.len(), 1);
        assert_eq!(outlook.daily[0].temperature_c, 20.0);
        assert_eq!(outlook.daily[0].time_of_day, "09:00");
        // The chart still carries both.
        assert_eq!(outlook.chart.len(), 2);
    }
}

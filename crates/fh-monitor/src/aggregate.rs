//! Telemetry aggregation: time-bucketed activity series and derived sums.
//!
//! All functions are pure. Bucketing always yields the requested number of
//! daily buckets, oldest first, with every day in range present; input
//! timestamps outside the window are silently dropped, and input order
//! never affects the result.

use chrono::{DateTime, Duration, Utc};

use fh_model::{MonitorSeries, MonitorSeriesPoint};

use crate::context::{NavigationTimingSnapshot, SavedCalculation};

/// Default bucket count for the trailing activity window.
pub const DEFAULT_SERIES_DAYS: usize = 7;

/// Optional title/description/unit overrides for a generated series.
#[derive(Debug, Clone, Default)]
pub struct SeriesOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
}

impl SeriesOptions {
    pub fn titled(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            unit: None,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

fn daily_points(
    now: DateTime<Utc>,
    days: usize,
    timestamps: &[DateTime<Utc>],
) -> Vec<MonitorSeriesPoint> {
    let today = now.date_naive();
    let mut counts = vec![0u64; days];
    for ts in timestamps {
        let age = (today - ts.date_naive()).num_days();
        if age >= 0 && (age as usize) < days {
            counts[days - 1 - age as usize] += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let day = today - Duration::days((days - 1 - i) as i64);
            MonitorSeriesPoint {
                label: day.format("%m-%d").to_string(),
                value: value as f64,
            }
        })
        .collect()
}

/// Bucket raw creation events into `days` consecutive daily counts ending
/// at `now` (UTC dates, oldest bucket first).
pub fn bucket_timestamps(
    now: DateTime<Utc>,
    timestamps: &[DateTime<Utc>],
    days: usize,
    options: SeriesOptions,
) -> MonitorSeries {
    MonitorSeries {
        id: "recent-events".to_string(),
        title: options.title.unwrap_or_else(|| "7-Day Activity".to_string()),
        description: Some(
            options
                .description
                .unwrap_or_else(|| "Events captured per day".to_string()),
        ),
        unit: Some(options.unit.unwrap_or_else(|| "events".to_string())),
        points: daily_points(now, days, timestamps),
    }
}

/// Same bucketing over the saved-calculation history feed.
pub fn calculation_series(
    now: DateTime<Utc>,
    calculations: &[SavedCalculation],
    days: usize,
    options: SeriesOptions,
) -> MonitorSeries {
    let timestamps: Vec<DateTime<Utc>> = calculations.iter().map(|calc| calc.created_at).collect();
    MonitorSeries {
        id: "recent-calculations".to_string(),
        title: options.title.unwrap_or_else(|| "7-Day Activity".to_string()),
        description: Some(
            options
                .description
                .unwrap_or_else(|| "Real saved calculations per day".to_string()),
        ),
        unit: Some(options.unit.unwrap_or_else(|| "runs".to_string())),
        points: daily_points(now, days, &timestamps),
    }
}

/// Three-point browser-timing series used whenever no domain-specific
/// event feed exists (guest sessions, new workspaces, untracked routes).
/// Absent timings chart as zero; the KPI layer keeps the `--` contract.
pub fn navigation_fallback_series(
    navigation: Option<&NavigationTimingSnapshot>,
    options: SeriesOptions,
) -> MonitorSeries {
    let timing = navigation.copied().unwrap_or_default();
    let points = vec![
        MonitorSeriesPoint {
            label: "TTFB".to_string(),
            value: timing.ttfb_ms.unwrap_or(0.0),
        },
        MonitorSeriesPoint {
            label: "DOM".to_string(),
            value: timing.dom_interactive_ms.unwrap_or(0.0),
        },
        MonitorSeriesPoint {
            label: "Load".to_string(),
            value: timing.load_event_ms.unwrap_or(0.0),
        },
    ];

    MonitorSeries {
        id: "runtime-navigation".to_string(),
        title: options
            .title
            .unwrap_or_else(|| "Runtime Load Profile".to_string()),
        description: Some(
            options
                .description
                .unwrap_or_else(|| "Measured in current browser session".to_string()),
        ),
        unit: Some(options.unit.unwrap_or_else(|| "ms".to_string())),
        points,
    }
}

/// Sum counts, propagating unknown: `None` if the slice is empty or any
/// element is unknown. Callers must not substitute zero for unknown when
/// the sum feeds a tone decision.
pub fn sum_counts(values: &[Option<u64>]) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let mut sum = 0u64;
    for value in values {
        sum += (*value)?;
    }
    Some(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(iso: &str) -> DateTime<Utc> {
        iso.parse().unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 12, 10, 0, 0).unwrap()
    }

    #[test]
    fn empty_input_yields_full_zeroed_window() {
        let series = bucket_timestamps(now(), &[], 7, SeriesOptions::default());
        assert_eq!(series.points.len(), 7);
        assert!(series.points.iter().all(|p| p.value == 0.0));
        assert_eq!(series.points[0].label, "02-06");
        assert_eq!(series.points[6].label, "02-12");
    }

    #[test]
    fn events_land_in_their_day_bucket() {
        let events = vec![
            at("2026-02-10T09:00:00Z"),
            at("2026-02-11T09:00:00Z"),
            at("2026-02-11T23:59:59Z"),
            at("2026-02-12T00:00:01Z"),
        ];
        let series = bucket_timestamps(now(), &events, 7, SeriesOptions::default());
        let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn out_of_window_events_are_dropped() {
        let events = vec![
            at("2026-02-01T00:00:00Z"),
            at("2026-03-01T00:00:00Z"),
            at("2026-02-12T09:00:00Z"),
        ];
        let series = bucket_timestamps(now(), &events, 7, SeriesOptions::default());
        let total: f64 = series.points.iter().map(|p| p.value).sum();
        assert_eq!(total, 1.0);
    }

    #[test]
    fn bucketing_is_order_insensitive() {
        let mut events = vec![
            at("2026-02-12T09:00:00Z"),
            at("2026-02-10T09:00:00Z"),
            at("2026-02-11T09:00:00Z"),
        ];
        let forward = bucket_timestamps(now(), &events, 7, SeriesOptions::default());
        events.reverse();
        let reversed = bucket_timestamps(now(), &events, 7, SeriesOptions::default());
        assert_eq!(forward.points, reversed.points);
    }

    #[test]
    fn navigation_series_has_fixed_shape() {
        let series = navigation_fallback_series(None, SeriesOptions::default());
        let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["TTFB", "DOM", "Load"]);
        assert!(series.points.iter().all(|p| p.value == 0.0));

        let timing = NavigationTimingSnapshot {
            ttfb_ms: Some(150.0),
            dom_interactive_ms: Some(640.0),
            load_event_ms: Some(880.0),
        };
        let series = navigation_fallback_series(Some(&timing), SeriesOptions::default());
        assert_eq!(series.points[2].value, 880.0);
    }

    #[test]
    fn sum_counts_propagates_unknown() {
        assert_eq!(sum_counts(&[Some(3), Some(2)]), Some(5));
        assert_eq!(sum_counts(&[Some(3), None, Some(5)]), None);
        assert_eq!(sum_counts(&[]), None);
        assert_eq!(sum_counts(&[Some(0), Some(0)]), Some(0));
    }
}

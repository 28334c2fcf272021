//! Formatting helpers for partially-known counts.
//!
//! This is the single normalization point for the "unknown" sentinel:
//! builders never decide presence themselves, they pass `Option` counts
//! through these helpers so that absence always renders as `--` and is
//! never confused with a measured zero.

use fh_model::{group_thousands, MonitorKpiValue, MonitorTone};

/// `Some(n)` → grouped digits, `None` → `"--"`.
pub fn format_count(value: Option<u64>) -> String {
    match value {
        Some(n) => group_thousands(n),
        None => "--".to_string(),
    }
}

/// `Some(n)` → [`MonitorKpiValue::Count`], `None` → [`MonitorKpiValue::Missing`].
pub fn kpi_count_value(value: Option<u64>) -> MonitorKpiValue {
    match value {
        Some(n) => MonitorKpiValue::Count(n),
        None => MonitorKpiValue::Missing,
    }
}

/// Millisecond display value: `Some(latency)` → `"142 ms"`, `None` → `--`.
pub fn kpi_ms_value(value: Option<i64>) -> MonitorKpiValue {
    match value {
        Some(ms) => MonitorKpiValue::text(format!("{ms} ms")),
        None => MonitorKpiValue::Missing,
    }
}

/// Round a possibly-absent millisecond reading, rejecting non-finite input.
pub fn round_ms(value: Option<f64>) -> Option<i64> {
    match value {
        Some(ms) if ms.is_finite() => Some(ms.round() as i64),
        _ => None,
    }
}

/// Trend-to-tone: improvement reads as success, regression as danger.
pub fn tone_from_trend(trend: f64) -> MonitorTone {
    if trend > 0.0 {
        MonitorTone::Success
    } else if trend < 0.0 {
        MonitorTone::Danger
    } else {
        MonitorTone::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_renders_placeholder_for_unknown() {
        assert_eq!(format_count(None), "--");
        assert_eq!(format_count(Some(0)), "0");
        assert_eq!(format_count(Some(12_500)), "12,500");
    }

    #[test]
    fn kpi_count_value_keeps_zero_and_missing_distinct() {
        assert_eq!(kpi_count_value(Some(0)), MonitorKpiValue::Count(0));
        assert_eq!(kpi_count_value(None), MonitorKpiValue::Missing);
    }

    #[test]
    fn round_ms_rejects_non_finite() {
        assert_eq!(round_ms(Some(141.6)), Some(142));
        assert_eq!(round_ms(Some(f64::NAN)), None);
        assert_eq!(round_ms(None), None);
    }

    #[test]
    fn tone_from_trend_boundaries() {
        assert_eq!(tone_from_trend(1.0), MonitorTone::Success);
        assert_eq!(tone_from_trend(-0.5), MonitorTone::Danger);
        assert_eq!(tone_from_trend(0.0), MonitorTone::Default);
    }
}

//! Tools/engineering family builder: calculators, troubleshooting,
//! reporting, and AI insight surfaces fed by the saved-calculation
//! history.
//!
//! Unauthenticated contexts short-circuit to an empty, clearly-labeled
//! state: the shared history feed is never shown to a guest.

use chrono::Datelike;

use fh_model::{MonitorDataState, MonitorDiagramItem, MonitorKpiValue, MonitorPageModel, MonitorTone};

use crate::aggregate::{
    calculation_series, navigation_fallback_series, SeriesOptions, DEFAULT_SERIES_DAYS,
};
use crate::builders::{kpi, node};
use crate::context::{MonitorBuildContext, SavedCalculation};
use crate::presentation::resolve_presentation;
use crate::route::normalize_path;
use crate::storyboard::tools_profile;
use crate::surface::tools_kpi_labels;

/// Per-route calculation key: saved runs whose key-normalized
/// `calculation_type` contains the key belong to the route.
const TOOL_CALC_KEYS: [(&str, &str); 6] = [
    ("/tools/standard-cycle", "standardcycle"),
    ("/tools/refrigerant-comparison", "refrigerantcomparison"),
    ("/tools/cascade-cycle", "cascadecycle"),
    ("/estimate-builder", "estimate"),
    ("/troubleshooting", "troubleshooting"),
    ("/ai/pattern-insights", "pattern"),
];

/// Lowercase and strip every non-alphanumeric character.
fn normalize_key(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

fn resolve_tool_calc_key(pathname: &str) -> Option<&'static str> {
    let normalized = normalize_path(pathname);
    TOOL_CALC_KEYS
        .iter()
        .find(|(path, _)| *path == normalized)
        .map(|(_, key)| *key)
}

/// Human tool-family name for the route.
fn tool_family(pathname: &str) -> String {
    let normalized = normalize_path(pathname);
    if let Some(rest) = normalized.strip_prefix("/tools/") {
        return rest.replace('-', " ");
    }
    if normalized.starts_with("/ai/") {
        return "ai insights".to_string();
    }
    if normalized.starts_with("/diy") {
        return "field calculators".to_string();
    }
    if normalized.starts_with("/estimate-builder") {
        return "estimate builder".to_string();
    }
    "operations tool".to_string()
}

pub fn build(context: &MonitorBuildContext) -> MonitorPageModel {
    let profile = tools_profile(&context.pathname);
    let presentation = resolve_presentation(&context.pathname);
    let family = tool_family(&context.pathname);
    let calc_key = resolve_tool_calc_key(&context.pathname);
    let has_calc_telemetry = context.is_authenticated;

    let filtered: Vec<&SavedCalculation> = if has_calc_telemetry {
        match calc_key {
            Some(key) => context
                .calculations
                .iter()
                .filter(|calc| normalize_key(&calc.calculation_type).contains(key))
                .collect(),
            None => context.calculations.iter().collect(),
        }
    } else {
        Vec::new()
    };

    let series = if has_calc_telemetry {
        let owned: Vec<SavedCalculation> = filtered.iter().map(|calc| (*calc).clone()).collect();
        calculation_series(
            context.now,
            &owned,
            DEFAULT_SERIES_DAYS,
            SeriesOptions::titled(profile.chart_title, profile.chart_description),
        )
    } else {
        navigation_fallback_series(
            context.navigation.as_ref(),
            SeriesOptions::titled(
                format!("{} (Runtime)", profile.chart_title),
                "Fallback: browser timings until saved-run telemetry is available",
            )
            .with_unit("ms"),
        )
    };

    // History is newest-first; the head is the latest run.
    let latest = filtered.first().copied();
    let monthly: Option<u64> = has_calc_telemetry.then(|| {
        filtered
            .iter()
            .filter(|calc| {
                calc.created_at.year() == context.now.year()
                    && calc.created_at.month() == context.now.month()
            })
            .count() as u64
    });
    let total: Option<u64> = has_calc_telemetry.then(|| filtered.len() as u64);

    let state = if context.is_loading {
        MonitorDataState::Loading
    } else {
        MonitorDataState::Ready
    };
    let labels = tools_kpi_labels(&context.pathname);

    MonitorPageModel {
        id: "tools-monitor".to_string(),
        title: profile.title.to_string(),
        subtitle: profile.subtitle.to_string(),
        state,
        source_label: Some(
            profile
                .source_label
                .map(str::to_string)
                .unwrap_or_else(|| {
                    if has_calc_telemetry {
                        "Calculation history + runtime telemetry".to_string()
                    } else {
                        "Runtime UI telemetry".to_string()
                    }
                }),
        ),
        updated_at: Some(latest.map(|calc| calc.created_at).unwrap_or(context.now)),
        empty_message: Some(
            profile
                .empty_message
                .unwrap_or("No saved tool runs yet. Execute a tool and save the output to unlock trends.")
                .to_string(),
        ),
        error_message: None,
        presentation,
        hero: labels.relabel(kpi(
            "tool-runs-total",
            "Saved Runs",
            match total {
                Some(n) => MonitorKpiValue::Count(n),
                None => MonitorKpiValue::Missing,
            },
            Some(match monthly {
                Some(n) => format!("{n} this month"),
                None => "Sign in to load saved runs".to_string(),
            }),
            if total.unwrap_or(0) > 0 {
                MonitorTone::Success
            } else {
                MonitorTone::Default
            },
        )),
        kpis: labels.relabel_all(vec![
            kpi(
                "tool-family",
                "Tool Family",
                MonitorKpiValue::text(family),
                Some("Current route context".to_string()),
                MonitorTone::Default,
            ),
            kpi(
                "tool-latest",
                "Latest Run",
                match latest {
                    Some(calc) => {
                        MonitorKpiValue::text(calc.created_at.format("%Y-%m-%d").to_string())
                    }
                    None => MonitorKpiValue::Missing,
                },
                Some(match latest {
                    Some(calc) => calc.calculation_type.clone(),
                    None if has_calc_telemetry => "No saved run yet".to_string(),
                    None => "Authentication required".to_string(),
                }),
                if latest.is_some() {
                    MonitorTone::Info
                } else {
                    MonitorTone::Default
                },
            ),
            kpi(
                "tool-role",
                "Operator Role",
                MonitorKpiValue::text(context.role_str().unwrap_or("guest")),
                Some(
                    context
                        .company_name
                        .clone()
                        .unwrap_or_else(|| "No company context".to_string()),
                ),
                MonitorTone::Default,
            ),
        ]),
        series: Some(series),
        diagram: Some(MonitorDiagramItem {
            id: "tools-context".to_string(),
            title: profile.diagram_title.to_string(),
            description: Some(profile.diagram_description.to_string()),
            nodes: vec![
                node("data-policy", "Data Policy", "Real data only", MonitorTone::Success),
                node("source", "Primary Source", "Supabase calculations", MonitorTone::Default),
                node("path", "Path", context.pathname.clone(), MonitorTone::Default),
            ],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_normalization_strips_everything_but_alphanumerics() {
        assert_eq!(normalize_key("Standard-Cycle (v2)"), "standardcyclev2");
        assert_eq!(normalize_key("refrigerant_comparison"), "refrigerantcomparison");
        assert_eq!(normalize_key(""), "");
    }

    #[test]
    fn calc_keys_resolve_on_normalized_paths() {
        assert_eq!(resolve_tool_calc_key("/tools/standard-cycle"), Some("standardcycle"));
        assert_eq!(resolve_tool_calc_key("/Tools/Standard-Cycle"), Some("standardcycle"));
        assert_eq!(resolve_tool_calc_key("/tools/iaq-wizard"), None);
    }

    #[test]
    fn tool_family_names() {
        assert_eq!(tool_family("/tools/cascade-cycle"), "cascade cycle");
        assert_eq!(tool_family("/ai/pattern-insights"), "ai insights");
        assert_eq!(tool_family("/diy-calculators"), "field calculators");
        assert_eq!(tool_family("/estimate-builder"), "estimate builder");
        assert_eq!(tool_family("/troubleshooting"), "operations tool");
    }
}

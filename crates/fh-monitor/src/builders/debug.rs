//! Debug/system family builder: internal diagnostic routes. Deliberately
//! minimal and total; absent role or company must never fail a build.

use fh_model::{MonitorDataState, MonitorDiagramItem, MonitorKpiValue, MonitorPageModel, MonitorTone};

use crate::aggregate::{navigation_fallback_series, SeriesOptions};
use crate::builders::{kpi, node};
use crate::context::MonitorBuildContext;
use crate::format::{kpi_ms_value, round_ms};
use crate::presentation::resolve_presentation;
use crate::route::format_route_name;
use crate::storyboard::debug_profile;
use crate::surface::debug_kpi_labels;

pub fn build(context: &MonitorBuildContext) -> MonitorPageModel {
    let profile = debug_profile(&context.pathname);
    let presentation = resolve_presentation(&context.pathname);
    let series = navigation_fallback_series(
        context.navigation.as_ref(),
        SeriesOptions::titled(profile.chart_title, profile.chart_description),
    );
    let render_ms = round_ms(context.route_render_ms);
    let labels = debug_kpi_labels(&context.pathname);

    let state = if context.is_loading {
        MonitorDataState::Loading
    } else {
        MonitorDataState::Ready
    };

    MonitorPageModel {
        id: "debug-monitor".to_string(),
        title: profile.title.to_string(),
        subtitle: profile.subtitle.to_string(),
        state,
        source_label: Some(
            profile
                .source_label
                .unwrap_or("Runtime diagnostics telemetry")
                .to_string(),
        ),
        updated_at: Some(context.now),
        empty_message: None,
        error_message: None,
        presentation,
        hero: labels.relabel(kpi(
            "route",
            "Debug Route",
            MonitorKpiValue::text(context.pathname.clone()),
            Some(format_route_name(&context.pathname)),
            MonitorTone::Default,
        )),
        kpis: labels.relabel_all(vec![
            kpi(
                "render-latency",
                "Route Render",
                kpi_ms_value(render_ms),
                Some("Measured in-session".to_string()),
                MonitorTone::Default,
            ),
            kpi(
                "session",
                "Session",
                MonitorKpiValue::text(if context.is_authenticated {
                    "Authenticated"
                } else {
                    "Guest"
                }),
                None,
                if context.is_authenticated {
                    MonitorTone::Success
                } else {
                    MonitorTone::Warning
                },
            ),
            kpi(
                "role",
                "Role",
                MonitorKpiValue::text(context.role_str().unwrap_or("n/a")),
                None,
                MonitorTone::Default,
            ),
        ]),
        series: Some(series),
        diagram: Some(MonitorDiagramItem {
            id: "debug-context".to_string(),
            title: profile.diagram_title.to_string(),
            description: Some(profile.diagram_description.to_string()),
            nodes: vec![
                node("surface", "Surface", format_route_name(&context.pathname), MonitorTone::Default),
                node(
                    "auth",
                    "Auth State",
                    if context.is_authenticated { "Authenticated" } else { "Public" },
                    MonitorTone::Default,
                ),
                node("captured", "Captured", context.now.format("%H:%M:%S").to_string(), MonitorTone::Default),
            ],
        }),
    }
}

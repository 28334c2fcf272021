//! Auth/onboarding family builder: session, role, and route runtime
//! signals for the access flows.

use fh_model::{MonitorDataState, MonitorDiagramItem, MonitorKpiValue, MonitorPageModel, MonitorTone};

use crate::aggregate::{navigation_fallback_series, SeriesOptions};
use crate::builders::{kpi, node};
use crate::context::MonitorBuildContext;
use crate::format::{kpi_ms_value, round_ms};
use crate::presentation::resolve_presentation;
use crate::route::format_route_name;
use crate::storyboard::auth_profile;
use crate::surface::auth_kpi_labels;

pub fn build(context: &MonitorBuildContext) -> MonitorPageModel {
    let profile = auth_profile(&context.pathname);
    let presentation = resolve_presentation(&context.pathname);
    let series = navigation_fallback_series(
        context.navigation.as_ref(),
        SeriesOptions::titled(profile.chart_title, profile.chart_description),
    );
    let render_ms = round_ms(context.route_render_ms);
    let labels = auth_kpi_labels(&context.pathname);

    let state = if context.is_loading {
        MonitorDataState::Loading
    } else {
        MonitorDataState::Ready
    };

    MonitorPageModel {
        id: "auth-monitor".to_string(),
        title: profile.title.to_string(),
        subtitle: profile.subtitle.to_string(),
        state,
        source_label: Some(profile.source_label.unwrap_or("Runtime UI telemetry").to_string()),
        updated_at: Some(context.now),
        empty_message: None,
        error_message: None,
        presentation,
        hero: labels.relabel(kpi(
            "session",
            "Session",
            MonitorKpiValue::text(if context.is_authenticated { "Active" } else { "Guest" }),
            Some("Resolved from auth context".to_string()),
            if context.is_authenticated {
                MonitorTone::Success
            } else {
                MonitorTone::Info
            },
        )),
        kpis: labels.relabel_all(vec![
            kpi(
                "role",
                "Role",
                MonitorKpiValue::text(context.role_str().unwrap_or("not assigned")),
                Some("Current app role".to_string()),
                MonitorTone::Default,
            ),
            kpi(
                "render-latency",
                "Route Render",
                kpi_ms_value(render_ms),
                Some("Measured in-session".to_string()),
                MonitorTone::Default,
            ),
            kpi(
                "route",
                "Route",
                MonitorKpiValue::text(context.pathname.clone()),
                Some(format_route_name(&context.pathname)),
                MonitorTone::Default,
            ),
        ]),
        series: Some(series),
        diagram: Some(MonitorDiagramItem {
            id: "auth-context".to_string(),
            title: profile.diagram_title.to_string(),
            description: Some(profile.diagram_description.to_string()),
            nodes: vec![
                node(
                    "company",
                    "Company Context",
                    context.company_name.clone().unwrap_or_else(|| "none".to_string()),
                    if context.company_name.is_some() {
                        MonitorTone::Success
                    } else {
                        MonitorTone::Warning
                    },
                ),
                node("role", "Role Context", context.role_str().unwrap_or("none"), MonitorTone::Default),
                node("source", "Source", "Auth + route runtime", MonitorTone::Default),
            ],
        }),
    }
}

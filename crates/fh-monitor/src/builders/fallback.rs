//! Fallback family builder: the catch-all for unmatched routes. Must
//! never fail, whatever the context looks like.

use fh_model::{MonitorDataState, MonitorDiagramItem, MonitorKpiValue, MonitorPageModel, MonitorTone};

use crate::aggregate::{navigation_fallback_series, SeriesOptions};
use crate::builders::{kpi, node};
use crate::context::MonitorBuildContext;
use crate::presentation::resolve_presentation;
use crate::route::format_route_name;

pub fn build(context: &MonitorBuildContext) -> MonitorPageModel {
    let presentation = resolve_presentation(&context.pathname);
    let state = if context.is_loading {
        MonitorDataState::Loading
    } else {
        MonitorDataState::Ready
    };

    MonitorPageModel {
        id: "fallback-monitor".to_string(),
        title: "System Monitor".to_string(),
        subtitle: "Route-level fallback instrumentation".to_string(),
        state,
        source_label: Some("Runtime route observer".to_string()),
        updated_at: Some(context.now),
        empty_message: None,
        error_message: None,
        presentation,
        hero: kpi(
            "route",
            "Route",
            MonitorKpiValue::text(context.pathname.clone()),
            None,
            MonitorTone::Default,
        ),
        kpis: vec![
            kpi(
                "auth",
                "Auth State",
                MonitorKpiValue::text(if context.is_authenticated {
                    "Authenticated"
                } else {
                    "Public"
                }),
                None,
                MonitorTone::Default,
            ),
            kpi(
                "role",
                "Role",
                MonitorKpiValue::text(context.role_str().unwrap_or("n/a")),
                None,
                MonitorTone::Default,
            ),
        ],
        series: Some(navigation_fallback_series(
            context.navigation.as_ref(),
            SeriesOptions::default(),
        )),
        diagram: Some(MonitorDiagramItem {
            id: "fallback-context".to_string(),
            title: "Fallback Context".to_string(),
            description: None,
            nodes: vec![
                node("route-name", "Surface", format_route_name(&context.pathname), MonitorTone::Default),
                node("time", "Captured", context.now.format("%H:%M:%S").to_string(), MonitorTone::Default),
            ],
        }),
    }
}

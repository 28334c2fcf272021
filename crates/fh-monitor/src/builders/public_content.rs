//! Public-content family builder: marketing and content pages measured
//! purely through browser navigation timing plus the static trust table.

use fh_model::{MonitorDataState, MonitorDiagramItem, MonitorKpiValue, MonitorPageModel, MonitorTone};

use crate::aggregate::{navigation_fallback_series, SeriesOptions};
use crate::builders::{kpi, node};
use crate::context::MonitorBuildContext;
use crate::format::{kpi_ms_value, round_ms};
use crate::presentation::resolve_presentation;
use crate::route::format_route_name;
use crate::site_metrics;
use crate::storyboard::public_profile;
use crate::surface::public_kpi_labels;

pub fn build(context: &MonitorBuildContext) -> MonitorPageModel {
    let profile = public_profile(&context.pathname);
    let presentation = resolve_presentation(&context.pathname);
    let nav = context.navigation.unwrap_or_default();

    let series = navigation_fallback_series(
        context.navigation.as_ref(),
        SeriesOptions::titled(profile.chart_title, profile.chart_description),
    );

    let ttfb = round_ms(nav.ttfb_ms);
    let dom = round_ms(nav.dom_interactive_ms);
    let load = round_ms(nav.load_event_ms);
    let has_perf_data = [ttfb, dom, load]
        .iter()
        .any(|value| value.is_some_and(|ms| ms > 0));

    let state = if context.is_loading {
        MonitorDataState::Loading
    } else if has_perf_data {
        MonitorDataState::Ready
    } else {
        MonitorDataState::Empty
    };

    let labels = public_kpi_labels(&context.pathname);
    let (active, in_progress, planned) = site_metrics::cert_counts();

    MonitorPageModel {
        id: "public-monitor".to_string(),
        title: profile.title.to_string(),
        subtitle: profile.subtitle.to_string(),
        state,
        source_label: Some(
            profile
                .source_label
                .unwrap_or(site_metrics::AS_OF_LABEL)
                .to_string(),
        ),
        updated_at: Some(context.now),
        empty_message: Some(
            profile
                .empty_message
                .unwrap_or("Runtime timings are not available yet. Refresh and interact with the page to populate metrics.")
                .to_string(),
        ),
        error_message: None,
        presentation,
        hero: labels.relabel(kpi(
            "users",
            "User Base",
            MonitorKpiValue::text(site_metrics::USER_BASE_VALUE),
            Some(site_metrics::USER_BASE_DESCRIPTION.to_string()),
            MonitorTone::Default,
        )),
        kpis: labels.relabel_all(vec![
            kpi(
                "ttfb",
                "TTFB",
                kpi_ms_value(ttfb),
                Some("Current browser measurement".to_string()),
                MonitorTone::Default,
            ),
            kpi(
                "dom-ready",
                "DOM Interactive",
                kpi_ms_value(dom),
                Some("Current browser measurement".to_string()),
                MonitorTone::Default,
            ),
            kpi(
                "load-event",
                "Load Complete",
                kpi_ms_value(load),
                Some(format_route_name(&context.pathname)),
                MonitorTone::Default,
            ),
        ]),
        series: Some(series),
        diagram: Some(MonitorDiagramItem {
            id: "trust-status".to_string(),
            title: profile.diagram_title.to_string(),
            description: Some(profile.diagram_description.to_string()),
            nodes: vec![
                node("active", "Active Controls", active.to_string(), MonitorTone::Success),
                node("progress", "In Progress", in_progress.to_string(), MonitorTone::Warning),
                node("planned", "Planned", planned.to_string(), MonitorTone::Info),
            ],
        }),
    }
}

//! Operations family builder: dashboards, dispatch, triage, fleet, jobs,
//! clients, and the remaining role workspaces.
//!
//! Specialized surfaces read the ops telemetry snapshot directly; the
//! remaining authenticated routes fall back to calculation-led KPIs with
//! surface-derived labels, and guests get a runtime-only view that never
//! touches ops telemetry.

use chrono::{DateTime, Utc};

use fh_model::{
    MonitorDataState, MonitorDiagramItem, MonitorKpiValue, MonitorPageModel, MonitorSeries,
    MonitorTone,
};

use crate::aggregate::{
    bucket_timestamps, calculation_series, navigation_fallback_series, sum_counts, SeriesOptions,
    DEFAULT_SERIES_DAYS,
};
use crate::builders::{kpi, node};
use crate::context::MonitorBuildContext;
use crate::format::{format_count, kpi_count_value, kpi_ms_value, round_ms, tone_from_trend};
use crate::presentation::resolve_presentation;
use crate::route::{format_route_name, normalize_path};
use crate::storyboard::ops_profile;
use crate::surface::ops_kpi_labels;

const MODEL_ID: &str = "ops-monitor";

fn count_is_positive(value: Option<u64>) -> bool {
    value.unwrap_or(0) > 0
}

fn latest(events: &[DateTime<Utc>]) -> Option<DateTime<Utc>> {
    events.iter().copied().max()
}

pub fn build(context: &MonitorBuildContext) -> MonitorPageModel {
    let profile = ops_profile(&context.pathname);
    let presentation = resolve_presentation(&context.pathname);
    let normalized = normalize_path(&context.pathname);

    let telemetry = context.ops_telemetry.as_ref();
    let jobs = telemetry.and_then(|t| t.jobs.as_ref());
    let clients = telemetry.and_then(|t| t.clients.as_ref());
    let triage = telemetry.and_then(|t| t.triage.as_ref());
    let team = telemetry.and_then(|t| t.team.as_ref());

    let has_jobs_telemetry = jobs.is_some_and(|j| j.has_signal());
    let has_client_telemetry = clients.is_some_and(|c| c.has_signal());
    let has_triage_telemetry = triage.is_some_and(|t| t.has_signal());

    let job_events: &[DateTime<Utc>] = jobs.map(|j| j.created_last_7d.as_slice()).unwrap_or(&[]);
    let client_events: &[DateTime<Utc>] =
        clients.map(|c| c.created_last_7d.as_slice()).unwrap_or(&[]);
    let triage_events: &[DateTime<Utc>] =
        triage.map(|t| t.created_last_7d.as_slice()).unwrap_or(&[]);

    let updated_at = latest(job_events)
        .or_else(|| latest(client_events))
        .or_else(|| latest(triage_events))
        .or(telemetry.and_then(|t| t.updated_at))
        .or_else(|| context.calculations.first().map(|calc| calc.created_at))
        .unwrap_or(context.now);

    let state = if context.is_loading {
        MonitorDataState::Loading
    } else {
        MonitorDataState::Ready
    };

    let runtime_fallback = || {
        navigation_fallback_series(
            context.navigation.as_ref(),
            SeriesOptions::titled(
                format!("{} (Runtime)", profile.chart_title),
                "Fallback: browser timings until live telemetry is available",
            )
            .with_unit("ms"),
        )
    };

    let jobs_series = || -> MonitorSeries {
        if has_jobs_telemetry {
            bucket_timestamps(
                context.now,
                job_events,
                DEFAULT_SERIES_DAYS,
                SeriesOptions::titled(profile.chart_title, "Jobs created per day (last 7 days)")
                    .with_unit("jobs"),
            )
        } else {
            runtime_fallback()
        }
    };

    let clients_series = || -> MonitorSeries {
        if has_client_telemetry {
            bucket_timestamps(
                context.now,
                client_events,
                DEFAULT_SERIES_DAYS,
                SeriesOptions::titled(profile.chart_title, "Clients created per day (last 7 days)")
                    .with_unit("clients"),
            )
        } else {
            runtime_fallback()
        }
    };

    let triage_series = || -> MonitorSeries {
        if has_triage_telemetry {
            bucket_timestamps(
                context.now,
                triage_events,
                DEFAULT_SERIES_DAYS,
                SeriesOptions::titled(profile.chart_title, "Leads captured per day (last 7 days)")
                    .with_unit("leads"),
            )
        } else {
            runtime_fallback()
        }
    };

    let open_jobs = jobs.and_then(|j| sum_counts(&[j.pending, j.en_route, j.on_site]));

    // Guests never see ops telemetry, on any operations surface: route to
    // the runtime-only branch before the specialized storyboards.
    if !context.is_authenticated {
        return build_guest(context, state, updated_at, runtime_fallback());
    }

    let base = |state: MonitorDataState| MonitorPageModel {
        id: MODEL_ID.to_string(),
        title: profile.title.to_string(),
        subtitle: profile.subtitle.to_string(),
        state,
        source_label: Some(
            profile
                .source_label
                .unwrap_or("Supabase operations telemetry")
                .to_string(),
        ),
        updated_at: Some(updated_at),
        empty_message: None,
        error_message: None,
        presentation: presentation.clone(),
        hero: kpi("placeholder", "", MonitorKpiValue::Missing, None, MonitorTone::Default),
        kpis: Vec::new(),
        series: None,
        diagram: None,
    };

    match normalized.as_str() {
        "/dashboard" => {
            let has_ops_signal =
                has_jobs_telemetry || has_client_telemetry || has_triage_telemetry;
            let inflight = jobs.and_then(|j| sum_counts(&[j.en_route, j.on_site]));
            let jobs_total = jobs.and_then(|j| j.total);

            let hero_sublabel = if has_ops_signal {
                match jobs_total {
                    Some(total) => {
                        format!("{} total jobs across the workspace", format_count(Some(total)))
                    }
                    None => "Pending + in-flight workload".to_string(),
                }
            } else {
                profile
                    .empty_message
                    .unwrap_or("No operational data yet. Run a workflow and this monitor will populate automatically.")
                    .to_string()
            };

            // The executive HUD renders immediately; values hydrate as the
            // telemetry hooks resolve.
            MonitorPageModel {
                hero: kpi(
                    "open-work",
                    "Open Workload",
                    kpi_count_value(open_jobs),
                    Some(hero_sublabel),
                    match open_jobs {
                        None => MonitorTone::Info,
                        Some(n) if n > 0 => MonitorTone::Warning,
                        Some(_) => MonitorTone::Success,
                    },
                ),
                kpis: vec![
                    kpi(
                        "dispatch-queue",
                        "Dispatch Queue",
                        kpi_count_value(jobs.and_then(|j| j.pending)),
                        Some("Awaiting dispatch".to_string()),
                        if count_is_positive(jobs.and_then(|j| j.pending)) {
                            MonitorTone::Warning
                        } else {
                            MonitorTone::Default
                        },
                    ),
                    kpi(
                        "dispatch-unassigned",
                        "Unassigned",
                        kpi_count_value(jobs.and_then(|j| j.unassigned)),
                        Some("Technician not set".to_string()),
                        if count_is_positive(jobs.and_then(|j| j.unassigned)) {
                            MonitorTone::Warning
                        } else {
                            MonitorTone::Default
                        },
                    ),
                    kpi(
                        "inflight-jobs",
                        "In Flight",
                        kpi_count_value(inflight),
                        Some("En route + on site".to_string()),
                        if count_is_positive(inflight) {
                            MonitorTone::Info
                        } else {
                            MonitorTone::Default
                        },
                    ),
                    kpi(
                        "scheduled-today",
                        "Scheduled Today",
                        kpi_count_value(jobs.and_then(|j| j.scheduled_today)),
                        Some("Start window".to_string()),
                        if jobs.and_then(|j| j.scheduled_today).unwrap_or(0) > 6 {
                            MonitorTone::Warning
                        } else {
                            MonitorTone::Default
                        },
                    ),
                    kpi(
                        "triage-new",
                        "New Leads",
                        kpi_count_value(triage.and_then(|t| t.new)),
                        Some(match triage.and_then(|t| t.total) {
                            Some(total) => {
                                format!("{} total submissions", format_count(Some(total)))
                            }
                            None => "Inbound intake".to_string(),
                        }),
                        if count_is_positive(triage.and_then(|t| t.new)) {
                            MonitorTone::Warning
                        } else {
                            MonitorTone::Default
                        },
                    ),
                    kpi(
                        "clients-total",
                        "Clients",
                        kpi_count_value(clients.and_then(|c| c.total)),
                        Some(
                            context
                                .company_name
                                .clone()
                                .unwrap_or_else(|| "Service portfolio".to_string()),
                        ),
                        if count_is_positive(clients.and_then(|c| c.total)) {
                            MonitorTone::Info
                        } else {
                            MonitorTone::Default
                        },
                    ),
                    kpi(
                        "techs",
                        "Technicians",
                        kpi_count_value(team.and_then(|t| t.technicians)),
                        Some(match team.and_then(|t| t.members) {
                            Some(members) => {
                                format!("{} total members", format_count(Some(members)))
                            }
                            None => "Team roster".to_string(),
                        }),
                        if team.and_then(|t| t.technicians).is_some() {
                            MonitorTone::Info
                        } else {
                            MonitorTone::Default
                        },
                    ),
                ],
                series: Some(jobs_series()),
                diagram: Some(MonitorDiagramItem {
                    id: "exec-context".to_string(),
                    title: profile.diagram_title.to_string(),
                    description: Some(profile.diagram_description.to_string()),
                    nodes: vec![
                        node("queued", "Queued", format_count(jobs.and_then(|j| j.pending)), MonitorTone::Warning),
                        node("en-route", "En Route", format_count(jobs.and_then(|j| j.en_route)), MonitorTone::Info),
                        node("on-site", "On Site", format_count(jobs.and_then(|j| j.on_site)), MonitorTone::Info),
                        node("done", "Completed", format_count(jobs.and_then(|j| j.completed)), MonitorTone::Success),
                        node("leads", "New Leads", format_count(triage.and_then(|t| t.new)), MonitorTone::Info),
                        node("clients", "Clients", format_count(clients.and_then(|c| c.total)), MonitorTone::Info),
                    ],
                }),
                ..base(MonitorDataState::Ready)
            }
        }

        "/dashboard/dispatch" => MonitorPageModel {
            hero: kpi(
                "dispatch-queue",
                "Dispatch Queue",
                kpi_count_value(jobs.and_then(|j| j.pending)),
                Some(match jobs.and_then(|j| j.total) {
                    Some(total) => format!("{} total jobs", format_count(Some(total))),
                    None => "Jobs telemetry not available yet".to_string(),
                }),
                if count_is_positive(jobs.and_then(|j| j.pending)) {
                    MonitorTone::Warning
                } else {
                    MonitorTone::Success
                },
            ),
            kpis: vec![
                kpi(
                    "dispatch-unassigned",
                    "Unassigned",
                    kpi_count_value(jobs.and_then(|j| j.unassigned)),
                    Some("Technician not set".to_string()),
                    if count_is_positive(jobs.and_then(|j| j.unassigned)) {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "scheduled-today",
                    "Scheduled Today",
                    kpi_count_value(jobs.and_then(|j| j.scheduled_today)),
                    Some("Scheduled start window".to_string()),
                    if jobs.and_then(|j| j.scheduled_today).unwrap_or(0) > 6 {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "techs",
                    "Technicians",
                    kpi_count_value(team.and_then(|t| t.technicians)),
                    Some(match team.and_then(|t| t.members) {
                        Some(members) => format!("{} total members", format_count(Some(members))),
                        None => "Team roster".to_string(),
                    }),
                    if team.and_then(|t| t.technicians).is_some() {
                        MonitorTone::Info
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "jobs-open",
                    "Open Jobs",
                    kpi_count_value(open_jobs),
                    Some("Pending + in flight".to_string()),
                    if count_is_positive(open_jobs) {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Success
                    },
                ),
                kpi(
                    "triage-new",
                    "New Leads",
                    kpi_count_value(triage.and_then(|t| t.new)),
                    Some(match triage.and_then(|t| t.total) {
                        Some(total) => format!("{} total submissions", format_count(Some(total))),
                        None => "Inbound intake".to_string(),
                    }),
                    if count_is_positive(triage.and_then(|t| t.new)) {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "clients-total",
                    "Clients",
                    kpi_count_value(clients.and_then(|c| c.total)),
                    Some(
                        context
                            .company_name
                            .clone()
                            .unwrap_or_else(|| "Client portfolio".to_string()),
                    ),
                    if count_is_positive(clients.and_then(|c| c.total)) {
                        MonitorTone::Info
                    } else {
                        MonitorTone::Default
                    },
                ),
            ],
            series: Some(jobs_series()),
            diagram: Some(MonitorDiagramItem {
                id: "dispatch-context".to_string(),
                title: profile.diagram_title.to_string(),
                description: Some(profile.diagram_description.to_string()),
                nodes: vec![
                    node("queued", "Queued", format_count(jobs.and_then(|j| j.pending)), MonitorTone::Warning),
                    node("en-route", "En Route", format_count(jobs.and_then(|j| j.en_route)), MonitorTone::Info),
                    node("on-site", "On Site", format_count(jobs.and_then(|j| j.on_site)), MonitorTone::Info),
                    node("done", "Completed", format_count(jobs.and_then(|j| j.completed)), MonitorTone::Success),
                ],
            }),
            ..base(state)
        },

        "/dashboard/triage" => MonitorPageModel {
            hero: kpi(
                "triage-new",
                "New Leads",
                kpi_count_value(triage.and_then(|t| t.new)),
                Some(match triage.and_then(|t| t.total) {
                    Some(total) => format!("{} total submissions", format_count(Some(total))),
                    None => "Triage telemetry not available yet".to_string(),
                }),
                if count_is_positive(triage.and_then(|t| t.new)) {
                    MonitorTone::Warning
                } else {
                    MonitorTone::Success
                },
            ),
            kpis: vec![
                kpi(
                    "triage-analyzed",
                    "Analyzed",
                    kpi_count_value(triage.and_then(|t| t.analyzed)),
                    Some("AI assessment complete".to_string()),
                    if count_is_positive(triage.and_then(|t| t.analyzed)) {
                        MonitorTone::Info
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "triage-converted",
                    "Converted",
                    kpi_count_value(triage.and_then(|t| t.converted)),
                    Some("Created jobs".to_string()),
                    if count_is_positive(triage.and_then(|t| t.converted)) {
                        MonitorTone::Success
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "triage-archived",
                    "Archived",
                    kpi_count_value(triage.and_then(|t| t.archived)),
                    Some("Deferred leads".to_string()),
                    MonitorTone::Default,
                ),
            ],
            series: Some(triage_series()),
            diagram: Some(MonitorDiagramItem {
                id: "triage-context".to_string(),
                title: profile.diagram_title.to_string(),
                description: Some(profile.diagram_description.to_string()),
                nodes: vec![
                    node("new", "New", format_count(triage.and_then(|t| t.new)), MonitorTone::Warning),
                    node("analyzed", "Analyzed", format_count(triage.and_then(|t| t.analyzed)), MonitorTone::Info),
                    node("converted", "Converted", format_count(triage.and_then(|t| t.converted)), MonitorTone::Success),
                    node("archived", "Archived", format_count(triage.and_then(|t| t.archived)), MonitorTone::Default),
                ],
            }),
            ..base(state)
        },

        "/dashboard/fleet" => MonitorPageModel {
            hero: kpi(
                "fleet-techs",
                "Technicians",
                kpi_count_value(team.and_then(|t| t.technicians)),
                Some("Rostered technicians".to_string()),
                if count_is_positive(team.and_then(|t| t.technicians)) {
                    MonitorTone::Info
                } else {
                    MonitorTone::Default
                },
            ),
            kpis: vec![
                kpi(
                    "fleet-open",
                    "Open Jobs",
                    kpi_count_value(open_jobs),
                    Some("Pending + in-flight".to_string()),
                    if count_is_positive(open_jobs) {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Success
                    },
                ),
                kpi(
                    "fleet-enroute",
                    "En Route",
                    kpi_count_value(jobs.and_then(|j| j.en_route)),
                    Some("Driving to site".to_string()),
                    if count_is_positive(jobs.and_then(|j| j.en_route)) {
                        MonitorTone::Info
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "fleet-onsite",
                    "On Site",
                    kpi_count_value(jobs.and_then(|j| j.on_site)),
                    Some("Working now".to_string()),
                    if count_is_positive(jobs.and_then(|j| j.on_site)) {
                        MonitorTone::Info
                    } else {
                        MonitorTone::Default
                    },
                ),
            ],
            series: Some(jobs_series()),
            diagram: Some(MonitorDiagramItem {
                id: "fleet-context".to_string(),
                title: profile.diagram_title.to_string(),
                description: Some(profile.diagram_description.to_string()),
                nodes: vec![
                    node("unassigned", "Unassigned", format_count(jobs.and_then(|j| j.unassigned)), MonitorTone::Warning),
                    node("assigned", "Assigned", format_count(jobs.and_then(|j| j.assigned)), MonitorTone::Info),
                    node("inflight", "In Flight", format_count(open_jobs), MonitorTone::Info),
                    node("done", "Completed", format_count(jobs.and_then(|j| j.completed)), MonitorTone::Success),
                ],
            }),
            ..base(state)
        },

        "/dashboard/jobs" => MonitorPageModel {
            hero: kpi(
                "jobs-open",
                "Open Jobs",
                kpi_count_value(open_jobs),
                Some(match jobs.and_then(|j| j.total) {
                    Some(total) => format!("{} total jobs", format_count(Some(total))),
                    None => "Jobs workspace".to_string(),
                }),
                if count_is_positive(open_jobs) {
                    MonitorTone::Warning
                } else {
                    MonitorTone::Success
                },
            ),
            kpis: vec![
                kpi(
                    "jobs-pending",
                    "Pending",
                    kpi_count_value(jobs.and_then(|j| j.pending)),
                    Some("Awaiting dispatch".to_string()),
                    if count_is_positive(jobs.and_then(|j| j.pending)) {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "jobs-today",
                    "Scheduled Today",
                    kpi_count_value(jobs.and_then(|j| j.scheduled_today)),
                    Some("Scheduled start window".to_string()),
                    if jobs.and_then(|j| j.scheduled_today).unwrap_or(0) > 6 {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "jobs-completed",
                    "Completed",
                    kpi_count_value(jobs.and_then(|j| j.completed)),
                    Some("All-time completed".to_string()),
                    if count_is_positive(jobs.and_then(|j| j.completed)) {
                        MonitorTone::Success
                    } else {
                        MonitorTone::Default
                    },
                ),
            ],
            series: Some(jobs_series()),
            diagram: Some(MonitorDiagramItem {
                id: "jobs-context".to_string(),
                title: profile.diagram_title.to_string(),
                description: Some(profile.diagram_description.to_string()),
                nodes: vec![
                    node("queued", "Queued", format_count(jobs.and_then(|j| j.pending)), MonitorTone::Warning),
                    node("en-route", "En Route", format_count(jobs.and_then(|j| j.en_route)), MonitorTone::Info),
                    node("on-site", "On Site", format_count(jobs.and_then(|j| j.on_site)), MonitorTone::Info),
                    node("done", "Completed", format_count(jobs.and_then(|j| j.completed)), MonitorTone::Success),
                ],
            }),
            ..base(state)
        },

        "/dashboard/clients" => MonitorPageModel {
            hero: kpi(
                "clients-total",
                "Clients",
                kpi_count_value(clients.and_then(|c| c.total)),
                Some(
                    context
                        .company_name
                        .clone()
                        .unwrap_or_else(|| "Client portfolio".to_string()),
                ),
                if count_is_positive(clients.and_then(|c| c.total)) {
                    MonitorTone::Info
                } else {
                    MonitorTone::Default
                },
            ),
            kpis: vec![
                kpi(
                    "clients-open-jobs",
                    "Open Jobs",
                    kpi_count_value(open_jobs),
                    Some("Service workload".to_string()),
                    if count_is_positive(open_jobs) {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Success
                    },
                ),
                kpi(
                    "clients-triage",
                    "New Leads",
                    kpi_count_value(triage.and_then(|t| t.new)),
                    Some("Inbound triage".to_string()),
                    if count_is_positive(triage.and_then(|t| t.new)) {
                        MonitorTone::Warning
                    } else {
                        MonitorTone::Default
                    },
                ),
                kpi(
                    "clients-techs",
                    "Technicians",
                    kpi_count_value(team.and_then(|t| t.technicians)),
                    Some("Available team".to_string()),
                    if count_is_positive(team.and_then(|t| t.technicians)) {
                        MonitorTone::Info
                    } else {
                        MonitorTone::Default
                    },
                ),
            ],
            series: Some(clients_series()),
            diagram: Some(MonitorDiagramItem {
                id: "clients-context".to_string(),
                title: profile.diagram_title.to_string(),
                description: Some(profile.diagram_description.to_string()),
                nodes: vec![
                    node("clients", "Clients", format_count(clients.and_then(|c| c.total)), MonitorTone::Info),
                    node("jobs", "Open Jobs", format_count(open_jobs), MonitorTone::Warning),
                    node("triage", "New Leads", format_count(triage.and_then(|t| t.new)), MonitorTone::Info),
                    node("team", "Techs", format_count(team.and_then(|t| t.technicians)), MonitorTone::Info),
                ],
            }),
            ..base(state)
        },

        // Any operations route without a specialized telemetry storyboard
        // keeps the calculation-led executive KPI set.
        _ => build_default_authenticated(context, state, updated_at),
    }
}

fn build_guest(
    context: &MonitorBuildContext,
    state: MonitorDataState,
    updated_at: DateTime<Utc>,
    runtime_series: MonitorSeries,
) -> MonitorPageModel {
    let profile = ops_profile(&context.pathname);
    let presentation = resolve_presentation(&context.pathname);
    let render_ms = round_ms(context.route_render_ms);
    let nav = context.navigation.unwrap_or_default();
    let ttfb = round_ms(nav.ttfb_ms);
    let dom = round_ms(nav.dom_interactive_ms);

    MonitorPageModel {
        id: MODEL_ID.to_string(),
        title: profile.title.to_string(),
        subtitle: profile.subtitle.to_string(),
        state,
        source_label: Some("Runtime UI telemetry".to_string()),
        updated_at: Some(updated_at),
        empty_message: None,
        error_message: None,
        presentation,
        hero: kpi(
            "session",
            "Session",
            MonitorKpiValue::text("Guest"),
            Some("Sign in to unlock operations telemetry".to_string()),
            MonitorTone::Info,
        ),
        kpis: vec![
            kpi(
                "render-latency",
                "Route Render",
                kpi_ms_value(render_ms),
                Some("Measured in-session".to_string()),
                MonitorTone::Default,
            ),
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
                Some(format_route_name(&context.pathname)),
                MonitorTone::Default,
            ),
        ],
        series: Some(runtime_series),
        diagram: Some(MonitorDiagramItem {
            id: "ops-context".to_string(),
            title: profile.diagram_title.to_string(),
            description: Some(profile.diagram_description.to_string()),
            nodes: vec![
                node("workspace", "Workspace", format_route_name(&context.pathname), MonitorTone::Info),
                node("role", "Role", context.role_str().unwrap_or("guest"), MonitorTone::Default),
                node("path", "Path", context.pathname.clone(), MonitorTone::Default),
                node("monitor", "Monitor", "Active", MonitorTone::Success),
            ],
        }),
    }
}

fn build_default_authenticated(
    context: &MonitorBuildContext,
    state: MonitorDataState,
    updated_at: DateTime<Utc>,
) -> MonitorPageModel {
    let profile = ops_profile(&context.pathname);
    let presentation = resolve_presentation(&context.pathname);
    let stats = context.dashboard_stats.as_ref();
    let revenue = context.revenue_stats.as_ref();
    let pipeline = context.pipeline_stats.as_ref();

    let series = calculation_series(
        context.now,
        &context.calculations,
        DEFAULT_SERIES_DAYS,
        SeriesOptions::titled(profile.chart_title, profile.chart_description),
    );

    let monthly = stats.map(|s| s.monthly_calculations).unwrap_or(0);
    let total = stats
        .map(|s| s.total_calculations)
        .unwrap_or(context.calculations.len() as u64);
    let remaining = match stats {
        Some(s) if s.is_unlimited => MonitorKpiValue::text("Unlimited"),
        Some(s) => match s.remaining {
            Some(n) => MonitorKpiValue::text(n.to_string()),
            None => MonitorKpiValue::Missing,
        },
        None => MonitorKpiValue::Missing,
    };

    let revenue_at_risk = revenue.map(|r| r.revenue_at_risk).unwrap_or(0.0);
    let unpaid = revenue.map(|r| r.unpaid_count).unwrap_or(0);
    let conversion = pipeline.map(|p| p.conversion_rate).unwrap_or(0.0);
    let active_leads = pipeline.map(|p| p.active_leads).unwrap_or(0);

    let labels = ops_kpi_labels(&context.pathname);

    MonitorPageModel {
        id: MODEL_ID.to_string(),
        title: profile.title.to_string(),
        subtitle: profile.subtitle.to_string(),
        state,
        source_label: Some(
            profile
                .source_label
                .unwrap_or("Supabase operations telemetry")
                .to_string(),
        ),
        updated_at: Some(updated_at),
        empty_message: None,
        error_message: None,
        presentation,
        hero: labels.relabel(kpi(
            "monthly-runs",
            "This Month",
            MonitorKpiValue::Count(monthly),
            Some(format!("{total} total saved runs")),
            MonitorTone::Default,
        )),
        kpis: labels.relabel_all(vec![
            kpi(
                "remaining-limit",
                "Plan Capacity",
                remaining,
                Some(
                    stats
                        .and_then(|s| s.plan_display_name.clone())
                        .unwrap_or_else(|| "Plan unavailable".to_string()),
                ),
                MonitorTone::Default,
            ),
            kpi(
                "revenue-risk",
                "Revenue At Risk",
                MonitorKpiValue::text(format!(
                    "${}",
                    fh_model::group_thousands(revenue_at_risk.round().max(0.0) as u64)
                )),
                Some(format!("{unpaid} unpaid invoices")),
                if revenue_at_risk > 0.0 {
                    MonitorTone::Warning
                } else {
                    MonitorTone::Default
                },
            ),
            kpi(
                "lead-conversion",
                "Lead Conversion",
                MonitorKpiValue::text(format!("{conversion}%")),
                Some(format!("{active_leads} active leads")),
                tone_from_trend(conversion - 50.0),
            ),
        ]),
        series: Some(series),
        diagram: Some(MonitorDiagramItem {
            id: "ops-context".to_string(),
            title: profile.diagram_title.to_string(),
            description: Some(profile.diagram_description.to_string()),
            nodes: vec![
                node(
                    "company",
                    "Company",
                    context
                        .company_name
                        .clone()
                        .unwrap_or_else(|| "Not selected".to_string()),
                    if context.company_name.is_some() {
                        MonitorTone::Success
                    } else {
                        MonitorTone::Warning
                    },
                ),
                node("role", "Role", context.role_str().unwrap_or("unknown"), MonitorTone::Default),
                node("workspace", "Workspace", format_route_name(&context.pathname), MonitorTone::Default),
                node(
                    "cycle-reset",
                    "Reset",
                    stats
                        .and_then(|s| s.billing_cycle_reset_label.clone())
                        .unwrap_or_else(|| "n/a".to_string()),
                    MonitorTone::Default,
                ),
            ],
        }),
    }
}

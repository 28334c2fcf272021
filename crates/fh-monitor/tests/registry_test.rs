use chrono::{DateTime, TimeZone, Utc};

use fh_model::{MonitorDataState, MonitorKpiValue, MonitorTone};
use fh_monitor::context::{
    ClientsTelemetry, DashboardStats, JobsTelemetry, MonitorBuildContext, NavigationTimingSnapshot,
    OpsTelemetrySnapshot, PipelineStats, RevenueStats, SavedCalculation, TeamTelemetry,
    TelemetryScope, TriageTelemetry, UserRole,
};
use fh_monitor::registry::build_monitor_model;

fn at(iso: &str) -> DateTime<Utc> {
    iso.parse().unwrap()
}

fn base_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 12, 10, 0, 0).unwrap()
}

fn base_context() -> MonitorBuildContext {
    MonitorBuildContext {
        pathname: "/dashboard".to_string(),
        role: Some(UserRole::Admin),
        is_authenticated: true,
        company_id: Some("company-1".to_string()),
        user_id: Some("user-1".to_string()),
        company_name: Some("Northwind HVAC".to_string()),
        now: base_now(),
        is_loading: false,
        dashboard_stats: Some(DashboardStats {
            total_calculations: 5,
            monthly_calculations: 3,
            plan_display_name: Some("Pro".to_string()),
            is_unlimited: true,
            remaining: Some(-1),
            billing_cycle_reset_label: Some("March 1".to_string()),
        }),
        revenue_stats: Some(RevenueStats {
            unpaid_count: 2,
            revenue_at_risk: 1200.0,
        }),
        pipeline_stats: Some(PipelineStats {
            active_leads: 6,
            converted_leads: 4,
            conversion_rate: 40.0,
        }),
        calculations: vec![SavedCalculation {
            id: "calc-1".to_string(),
            calculation_type: "standard-cycle".to_string(),
            created_at: at("2026-02-11T09:00:00Z"),
        }],
        ops_telemetry: Some(OpsTelemetrySnapshot {
            updated_at: Some(base_now()),
            scope: TelemetryScope {
                pathname: "/dashboard".to_string(),
                company_id: Some("company-1".to_string()),
                user_id: Some("user-1".to_string()),
            },
            jobs: Some(JobsTelemetry {
                total: Some(12),
                pending: Some(5),
                en_route: Some(2),
                on_site: Some(1),
                completed: Some(4),
                cancelled: Some(0),
                assigned: Some(7),
                unassigned: Some(3),
                scheduled_today: Some(2),
                assigned_to_me_open: Some(1),
                created_last_7d: vec![
                    at("2026-02-10T09:00:00Z"),
                    at("2026-02-11T09:00:00Z"),
                    at("2026-02-12T09:00:00Z"),
                ],
            }),
            clients: Some(ClientsTelemetry {
                total: Some(4),
                created_last_7d: vec![at("2026-02-12T09:00:00Z")],
            }),
            triage: Some(TriageTelemetry {
                total: Some(6),
                new: Some(2),
                analyzed: Some(3),
                converted: Some(1),
                archived: Some(0),
                created_last_7d: vec![at("2026-02-12T09:00:00Z")],
            }),
            team: Some(TeamTelemetry {
                members: Some(6),
                technicians: Some(2),
            }),
            errors: Vec::new(),
        }),
        navigation: Some(NavigationTimingSnapshot {
            ttfb_ms: Some(150.0),
            dom_interactive_ms: Some(640.0),
            load_event_ms: Some(880.0),
        }),
        route_render_ms: Some(44.0),
    }
}

fn guest_context() -> MonitorBuildContext {
    MonitorBuildContext {
        role: None,
        is_authenticated: false,
        company_id: None,
        user_id: None,
        company_name: None,
        calculations: Vec::new(),
        dashboard_stats: None,
        revenue_stats: None,
        pipeline_stats: None,
        ops_telemetry: None,
        ..base_context()
    }
}

// ---------------------------------------------------------------------------
// Model builders
// ---------------------------------------------------------------------------

#[test]
fn builds_dashboard_operations_model_from_ops_telemetry() {
    let model = build_monitor_model("/dashboard", base_context());

    assert_eq!(model.id, "ops-monitor");
    assert_eq!(model.state, MonitorDataState::Ready);
    assert_eq!(model.hero.id, "open-work");
    // pending(5) + en_route(2) + on_site(1)
    assert_eq!(model.hero.value, MonitorKpiValue::Count(8));
    assert_eq!(model.hero.tone, MonitorTone::Warning);
    assert_eq!(model.series.as_ref().unwrap().id, "recent-events");
}

#[test]
fn dashboard_renders_placeholders_when_ops_telemetry_is_unavailable() {
    let model = build_monitor_model(
        "/dashboard",
        MonitorBuildContext {
            ops_telemetry: None,
            ..base_context()
        },
    );

    assert_eq!(model.hero.id, "open-work");
    assert!(model.hero.value.is_missing());
    assert_eq!(model.hero.tone, MonitorTone::Info);
    // Supporting counts degrade one by one, never to a false zero.
    let queue = model.kpi("dispatch-queue").unwrap();
    assert!(queue.value.is_missing());
    assert_eq!(queue.tone, MonitorTone::Default);
}

#[test]
fn dashboard_stays_ready_while_values_hydrate() {
    let model = build_monitor_model(
        "/dashboard",
        MonitorBuildContext {
            is_loading: true,
            ..base_context()
        },
    );
    assert_eq!(model.state, MonitorDataState::Ready);

    // Other ops routes honor the loading flag.
    let model = build_monitor_model(
        "/dashboard/dispatch",
        MonitorBuildContext {
            is_loading: true,
            ..base_context()
        },
    );
    assert_eq!(model.state, MonitorDataState::Loading);
}

#[test]
fn dispatch_scenario_pins_hero_tone_and_diagram_nodes() {
    let mut context = base_context();
    if let Some(telemetry) = context.ops_telemetry.as_mut() {
        telemetry.jobs = Some(JobsTelemetry {
            pending: Some(3),
            en_route: Some(1),
            on_site: Some(0),
            completed: Some(10),
            ..JobsTelemetry::default()
        });
    }

    let model = build_monitor_model("/dashboard/dispatch", context);
    assert_eq!(model.hero.id, "dispatch-queue");
    assert_eq!(model.hero.value, MonitorKpiValue::Count(3));
    assert_eq!(model.hero.tone, MonitorTone::Warning);

    let diagram = model.diagram.unwrap();
    assert_eq!(diagram.nodes.len(), 4);
    let values: Vec<(&str, &str)> = diagram
        .nodes
        .iter()
        .map(|node| (node.id.as_str(), node.value.as_str()))
        .collect();
    assert_eq!(
        values,
        vec![("queued", "3"), ("en-route", "1"), ("on-site", "0"), ("done", "10")]
    );
}

#[test]
fn guest_on_operations_routes_never_sees_ops_telemetry() {
    // Even with a populated snapshot in the context, a guest build must
    // source from navigation timing only.
    let context = MonitorBuildContext {
        ops_telemetry: base_context().ops_telemetry,
        ..guest_context()
    };
    let model = build_monitor_model("/dashboard", context);

    assert_eq!(model.hero.id, "session");
    assert_eq!(model.hero.value, MonitorKpiValue::text("Guest"));
    assert_eq!(model.source_label.as_deref(), Some("Runtime UI telemetry"));
    let ids: Vec<&str> = model.kpis.iter().map(|kpi| kpi.id.as_str()).collect();
    assert_eq!(ids, vec!["render-latency", "ttfb", "dom-ready"]);
    assert_eq!(model.series.as_ref().unwrap().id, "runtime-navigation");
}

#[test]
fn builds_tools_model_from_live_calculation_context() {
    let model = build_monitor_model("/tools/refrigerant-comparison", base_context());

    assert_eq!(model.id, "tools-monitor");
    assert!(model.kpis.len() >= 2);
    assert_eq!(model.series.as_ref().unwrap().id, "recent-calculations");
}

#[test]
fn tools_distinguish_empty_history_from_guest() {
    // Authenticated with an empty (filtered) history: a real zero.
    let model = build_monitor_model(
        "/tools/standard-cycle",
        MonitorBuildContext {
            calculations: Vec::new(),
            ..base_context()
        },
    );
    assert_eq!(model.hero.id, "tool-runs-total");
    assert_eq!(model.hero.value, MonitorKpiValue::Count(0));

    // Unauthenticated on the same route: unknown, not zero.
    let model = build_monitor_model("/tools/standard-cycle", guest_context());
    assert!(model.hero.value.is_missing());
    assert_eq!(
        model.hero.sublabel.as_deref(),
        Some("Sign in to load saved runs")
    );
    assert_eq!(model.series.as_ref().unwrap().id, "runtime-navigation");
}

#[test]
fn tools_filter_history_by_route_calculation_key() {
    let mut context = base_context();
    context.calculations = vec![
        SavedCalculation {
            id: "calc-1".to_string(),
            calculation_type: "standard-cycle".to_string(),
            created_at: at("2026-02-11T09:00:00Z"),
        },
        SavedCalculation {
            id: "calc-2".to_string(),
            calculation_type: "Cascade Cycle".to_string(),
            created_at: at("2026-02-10T09:00:00Z"),
        },
    ];

    let model = build_monitor_model("/tools/cascade-cycle", context);
    assert_eq!(model.hero.value, MonitorKpiValue::Count(1));
    let latest = model.kpi("tool-latest").unwrap();
    assert_eq!(latest.sublabel.as_deref(), Some("Cascade Cycle"));
}

#[test]
fn builds_public_model_from_runtime_navigation_metrics() {
    let model = build_monitor_model("/pricing", guest_context());

    assert_eq!(model.id, "public-monitor");
    assert_eq!(model.state, MonitorDataState::Ready);
    let ttfb = model.kpi("ttfb").unwrap();
    assert_eq!(ttfb.value, MonitorKpiValue::text("150 ms"));
    assert_eq!(model.series.as_ref().unwrap().id, "runtime-navigation");
}

#[test]
fn public_model_is_empty_without_positive_timings() {
    let model = build_monitor_model(
        "/pricing",
        MonitorBuildContext {
            navigation: None,
            ..guest_context()
        },
    );
    assert_eq!(model.state, MonitorDataState::Empty);
    assert!(model.empty_message.is_some());
    assert!(model.kpi("ttfb").unwrap().value.is_missing());
}

#[test]
fn public_trust_diagram_counts_certifications() {
    let model = build_monitor_model("/", guest_context());
    let diagram = model.diagram.unwrap();
    assert_eq!(diagram.id, "trust-status");
    let active = diagram.nodes.iter().find(|n| n.id == "active").unwrap();
    assert_eq!(active.value, "4");
    assert_eq!(active.tone, MonitorTone::Success);
}

#[test]
fn applies_route_specific_storyboard_copy() {
    let model = build_monitor_model("/dashboard/dispatch", base_context());

    assert_eq!(model.id, "ops-monitor");
    assert_eq!(model.title, "Dispatch Coordination Board");
    assert_eq!(model.series.as_ref().unwrap().title, "Dispatch Activity Trend");
    assert_eq!(model.hero.label, "Dispatch Queue");
}

#[test]
fn applies_route_specific_public_and_tools_kpi_labels() {
    let pricing = build_monitor_model("/pricing", guest_context());
    assert_eq!(pricing.hero.id, "users");
    assert_eq!(pricing.hero.label, "Pricing Audience");

    let estimate = build_monitor_model("/estimate-builder", base_context());
    let family = estimate.kpi("tool-family").unwrap();
    assert_eq!(family.label, "Estimate Domain");
}

#[test]
fn ops_label_overrides_follow_the_surface() {
    let history = build_monitor_model("/history", base_context());
    assert_eq!(history.hero.id, "monthly-runs");
    assert_eq!(history.hero.label, "History Activity");
    assert_eq!(
        history.kpi("lead-conversion").unwrap().label,
        "History Conversion"
    );
}

#[test]
fn auth_and_debug_builders_tolerate_empty_context() {
    let model = build_monitor_model("/signin", guest_context());
    assert_eq!(model.id, "auth-monitor");
    assert_eq!(model.hero.value, MonitorKpiValue::text("Guest"));
    assert_eq!(model.kpi("role").unwrap().value, MonitorKpiValue::text("not assigned"));

    let model = build_monitor_model("/stripe-debug", guest_context());
    assert_eq!(model.id, "debug-monitor");
    assert_eq!(model.kpi("session").unwrap().tone, MonitorTone::Warning);

    let model = build_monitor_model("/completely/unknown/path", guest_context());
    assert_eq!(model.id, "fallback-monitor");
    assert_eq!(model.title, "System Monitor");
}

#[test]
fn parameterized_paths_resolve_like_their_canonical_form() {
    let by_id = build_monitor_model("/dashboard/jobs/abc123", base_context());
    let canonical = build_monitor_model("/dashboard/jobs/:id", base_context());

    assert_eq!(by_id.title, canonical.title);
    assert_eq!(by_id.title, "Job Execution Storyboard");
    assert_eq!(by_id.presentation.signature_label, canonical.presentation.signature_label);
    assert_eq!(by_id.hero.label, canonical.hero.label);
}

#[test]
fn ops_updated_at_prefers_newest_event() {
    let model = build_monitor_model("/dashboard", base_context());
    assert_eq!(model.updated_at, Some(at("2026-02-12T09:00:00Z")));

    // Without any snapshot the model still carries a timestamp.
    let model = build_monitor_model(
        "/dashboard",
        MonitorBuildContext {
            ops_telemetry: None,
            calculations: Vec::new(),
            ..base_context()
        },
    );
    assert_eq!(model.updated_at, Some(base_now()));
}

#[test]
fn default_authenticated_ops_route_uses_calculation_kpis() {
    let model = build_monitor_model("/profile", base_context());

    assert_eq!(model.hero.id, "monthly-runs");
    assert_eq!(model.hero.value, MonitorKpiValue::Count(3));
    assert_eq!(
        model.kpi("remaining-limit").unwrap().value,
        MonitorKpiValue::text("Unlimited")
    );
    let revenue = model.kpi("revenue-risk").unwrap();
    assert_eq!(revenue.value, MonitorKpiValue::text("$1,200"));
    assert_eq!(revenue.tone, MonitorTone::Warning);
    let conversion = model.kpi("lead-conversion").unwrap();
    assert_eq!(conversion.value, MonitorKpiValue::text("40%"));
    // 40% sits below the 50% break-even trend line.
    assert_eq!(conversion.tone, MonitorTone::Danger);
    assert_eq!(model.series.as_ref().unwrap().id, "recent-calculations");
}

#[test]
fn repeated_builds_are_deterministic() {
    let first = build_monitor_model("/dashboard/triage", base_context());
    let second = build_monitor_model("/dashboard/triage", base_context());
    assert_eq!(first, second);
}

//! Built-in demo context for offline runs: a small, plausible workspace
//! snapshot so every surface of the HUD renders without a data source.

use chrono::{DateTime, Duration, Utc};

use fh_monitor::context::{
    ClientsTelemetry, DashboardStats, JobsTelemetry, MonitorBuildContext, NavigationTimingSnapshot,
    OpsTelemetrySnapshot, PipelineStats, RevenueStats, SavedCalculation, TeamTelemetry,
    TelemetryScope, TriageTelemetry, UserRole,
};

pub fn demo_context(now: DateTime<Utc>) -> MonitorBuildContext {
    let days = |n: i64| now - Duration::days(n);

    MonitorBuildContext {
        pathname: "/dashboard".to_string(),
        role: Some(UserRole::Admin),
        is_authenticated: true,
        company_id: Some("demo-company".to_string()),
        user_id: Some("demo-operator".to_string()),
        company_name: Some("Northwind HVAC".to_string()),
        now,
        is_loading: false,
        dashboard_stats: Some(DashboardStats {
            total_calculations: 48,
            monthly_calculations: 9,
            plan_display_name: Some("Pro".to_string()),
            is_unlimited: true,
            remaining: Some(-1),
            billing_cycle_reset_label: Some("1st of month".to_string()),
        }),
        revenue_stats: Some(RevenueStats {
            unpaid_count: 2,
            revenue_at_risk: 1840.0,
        }),
        pipeline_stats: Some(PipelineStats {
            active_leads: 6,
            converted_leads: 4,
            conversion_rate: 40.0,
        }),
        calculations: vec![
            SavedCalculation {
                id: "calc-103".to_string(),
                calculation_type: "standard-cycle".to_string(),
                created_at: days(1),
            },
            SavedCalculation {
                id: "calc-102".to_string(),
                calculation_type: "refrigerant-comparison".to_string(),
                created_at: days(2),
            },
            SavedCalculation {
                id: "calc-101".to_string(),
                calculation_type: "cascade-cycle".to_string(),
                created_at: days(5),
            },
        ],
        ops_telemetry: Some(OpsTelemetrySnapshot {
            updated_at: Some(now),
            scope: TelemetryScope {
                pathname: "/dashboard".to_string(),
                company_id: Some("demo-company".to_string()),
                user_id: Some("demo-operator".to_string()),
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
                created_last_7d: vec![days(0), days(1), days(1), days(3), days(6)],
            }),
            clients: Some(ClientsTelemetry {
                total: Some(4),
                created_last_7d: vec![days(2)],
            }),
            triage: Some(TriageTelemetry {
                total: Some(6),
                new: Some(2),
                analyzed: Some(3),
                converted: Some(1),
                archived: Some(0),
                created_last_7d: vec![days(0), days(4)],
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

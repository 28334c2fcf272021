//! Readiness-tier and derivation tests over real built models: the HUD
//! derivations must agree with what the pipeline actually emits.

use chrono::{TimeZone, Utc};

use fh_monitor::context::{JobsTelemetry, MonitorBuildContext, OpsTelemetrySnapshot, UserRole};
use fh_monitor::registry::build_monitor_model;

// Include binary-crate modules via path for testing.
#[path = "../src/hud.rs"]
mod hud;

use hud::{queue_readiness, ReadinessTier};

fn dashboard_context(jobs: Option<JobsTelemetry>) -> MonitorBuildContext {
    let now = Utc.with_ymd_and_hms(2026, 2, 12, 10, 0, 0).unwrap();
    let mut context = MonitorBuildContext::guest("/dashboard", now);
    context.is_authenticated = true;
    context.role = Some(UserRole::Admin);
    context.ops_telemetry = Some(OpsTelemetrySnapshot {
        updated_at: Some(now),
        jobs,
        ..OpsTelemetrySnapshot::default()
    });
    context
}

fn jobs_with_open(pending: u64) -> JobsTelemetry {
    JobsTelemetry {
        pending: Some(pending),
        en_route: Some(0),
        on_site: Some(0),
        unassigned: Some(0),
        scheduled_today: Some(0),
        ..JobsTelemetry::default()
    }
}

fn tier_for(jobs: Option<JobsTelemetry>) -> ReadinessTier {
    let model = build_monitor_model("/dashboard", dashboard_context(jobs));
    queue_readiness(&model).tier
}

#[test]
fn unknown_hero_waits() {
    // No jobs telemetry at all: the open-workload hero is unknown.
    assert_eq!(tier_for(None), ReadinessTier::Waiting);
}

#[test]
fn zero_workload_is_clear() {
    assert_eq!(tier_for(Some(jobs_with_open(0))), ReadinessTier::Clear);
}

#[test]
fn busy_critical_boundary_sits_between_six_and_seven() {
    assert_eq!(tier_for(Some(jobs_with_open(1))), ReadinessTier::Busy);
    assert_eq!(tier_for(Some(jobs_with_open(6))), ReadinessTier::Busy);
    assert_eq!(tier_for(Some(jobs_with_open(7))), ReadinessTier::Critical);
}

#[test]
fn missions_track_known_and_cleared_queues() {
    let model = build_monitor_model("/dashboard", dashboard_context(Some(jobs_with_open(2))));
    let readiness = queue_readiness(&model);

    // dispatch-queue, dispatch-unassigned, scheduled-today and
    // inflight-jobs are known; triage-new has no snapshot.
    assert_eq!(readiness.missions.len(), 5);
    assert_eq!(readiness.known, 4);
    // Everything except the pending queue sits at zero.
    assert_eq!(readiness.cleared, 3);

    let triage = readiness
        .missions
        .iter()
        .find(|mission| mission.id == "triage")
        .unwrap();
    assert_eq!(triage.value, None);
}

#[test]
fn missions_are_all_unknown_without_telemetry() {
    let model = build_monitor_model("/dashboard", dashboard_context(None));
    let readiness = queue_readiness(&model);
    assert_eq!(readiness.known, 0);
    assert_eq!(readiness.cleared, 0);
}

#[test]
fn hero_split_handles_pipeline_outputs() {
    // Values exactly as the builders emit them.
    let model = build_monitor_model("/dashboard", dashboard_context(Some(jobs_with_open(8))));
    let parts = hud::split_hero_value(&model.hero.value);
    assert_eq!(parts.value, "8");
    assert_eq!(parts.unit, None);

    let model = build_monitor_model("/dashboard", dashboard_context(None));
    let parts = hud::split_hero_value(&model.hero.value);
    assert_eq!(parts.value, "--");
}

#[test]
fn exec_flow_only_appears_on_the_executive_surface() {
    let context = dashboard_context(Some(JobsTelemetry {
        pending: Some(5),
        en_route: Some(2),
        on_site: Some(1),
        completed: Some(4),
        ..JobsTelemetry::default()
    }));

    let model = build_monitor_model("/dashboard", context.clone());
    let stages = hud::exec_ops_flow(&model).unwrap();
    let values: Vec<&str> = stages.iter().map(|stage| stage.value.as_str()).collect();
    // queued, en-route, on-site, done, techs (no team snapshot → --).
    assert_eq!(values, vec!["5", "2", "1", "4", "--"]);

    // Pipeline-template surfaces never grow the flow strip.
    let model = build_monitor_model("/dashboard/dispatch", context);
    assert!(hud::exec_ops_flow(&model).is_none());
}

#[test]
fn sparkline_from_built_series_reaches_the_right_edge() {
    let model = build_monitor_model("/dashboard", dashboard_context(Some(jobs_with_open(1))));
    let series = model.series.unwrap();
    // Jobs telemetry without events still yields the 7-day window
    // (has_signal is true because counts are present).
    assert_eq!(series.points.len(), 7);
    let spark = hud::build_sparkline(&series.points).unwrap();
    assert_eq!(spark.point_count, 7);
    assert_eq!(spark.last_x, hud::SPARK_WIDTH);
}

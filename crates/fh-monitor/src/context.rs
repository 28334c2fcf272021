//! Build context: everything the pipeline consumes for one render pass.
//!
//! All snapshot fields are optional; counts inside snapshots are
//! `Option<u64>` where `None` means "unknown", never zero. The builders
//! consume them exclusively through the helpers in [`crate::format`] so
//! that absence renders uniformly as a placeholder.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Client,
    Tech,
    Manager,
    Student,
    Technician,
    Owner,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Client => "client",
            UserRole::Tech => "tech",
            UserRole::Manager => "manager",
            UserRole::Student => "student",
            UserRole::Technician => "technician",
            UserRole::Owner => "owner",
        }
    }
}

// ---------------------------------------------------------------------------
// Ops telemetry snapshot
// ---------------------------------------------------------------------------

/// Workspace scope the snapshot was collected under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetryScope {
    #[serde(default)]
    pub pathname: String,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobsTelemetry {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub pending: Option<u64>,
    #[serde(default)]
    pub en_route: Option<u64>,
    #[serde(default)]
    pub on_site: Option<u64>,
    #[serde(default)]
    pub completed: Option<u64>,
    #[serde(default)]
    pub cancelled: Option<u64>,
    #[serde(default)]
    pub assigned: Option<u64>,
    #[serde(default)]
    pub unassigned: Option<u64>,
    #[serde(default)]
    pub scheduled_today: Option<u64>,
    #[serde(default)]
    pub assigned_to_me_open: Option<u64>,
    /// Creation events inside the trailing 7-day window, oldest first.
    #[serde(default)]
    pub created_last_7d: Vec<DateTime<Utc>>,
}

impl JobsTelemetry {
    /// True when at least one count or event is present.
    pub fn has_signal(&self) -> bool {
        self.total.is_some()
            || self.pending.is_some()
            || self.en_route.is_some()
            || self.on_site.is_some()
            || self.completed.is_some()
            || self.cancelled.is_some()
            || !self.created_last_7d.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientsTelemetry {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub created_last_7d: Vec<DateTime<Utc>>,
}

impl ClientsTelemetry {
    pub fn has_signal(&self) -> bool {
        self.total.is_some() || !self.created_last_7d.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageTelemetry {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub new: Option<u64>,
    #[serde(default)]
    pub analyzed: Option<u64>,
    #[serde(default)]
    pub converted: Option<u64>,
    #[serde(default)]
    pub archived: Option<u64>,
    #[serde(default)]
    pub created_last_7d: Vec<DateTime<Utc>>,
}

impl TriageTelemetry {
    pub fn has_signal(&self) -> bool {
        self.total.is_some()
            || self.new.is_some()
            || self.analyzed.is_some()
            || self.converted.is_some()
            || self.archived.is_some()
            || !self.created_last_7d.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamTelemetry {
    #[serde(default)]
    pub members: Option<u64>,
    #[serde(default)]
    pub technicians: Option<u64>,
}

/// Per-domain operational counts plus recent creation events. Collected
/// best-effort: any domain (or any count within a domain) may be absent,
/// and collection errors ride along without failing the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpsTelemetrySnapshot {
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scope: TelemetryScope,
    #[serde(default)]
    pub jobs: Option<JobsTelemetry>,
    #[serde(default)]
    pub clients: Option<ClientsTelemetry>,
    #[serde(default)]
    pub triage: Option<TriageTelemetry>,
    #[serde(default)]
    pub team: Option<TeamTelemetry>,
    #[serde(default)]
    pub errors: Vec<String>,
}

// ---------------------------------------------------------------------------
// Collaborator snapshots
// ---------------------------------------------------------------------------

/// Browser navigation timing handed in by the hosting shell; all fields
/// nullable until the page has produced measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationTimingSnapshot {
    #[serde(default)]
    pub ttfb_ms: Option<f64>,
    #[serde(default)]
    pub dom_interactive_ms: Option<f64>,
    #[serde(default)]
    pub load_event_ms: Option<f64>,
}

/// Workspace usage stats from the billing/plan collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_calculations: u64,
    #[serde(default)]
    pub monthly_calculations: u64,
    #[serde(default)]
    pub plan_display_name: Option<String>,
    #[serde(default)]
    pub is_unlimited: bool,
    #[serde(default)]
    pub remaining: Option<i64>,
    #[serde(default)]
    pub billing_cycle_reset_label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueStats {
    #[serde(default)]
    pub unpaid_count: u64,
    #[serde(default)]
    pub revenue_at_risk: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStats {
    #[serde(default)]
    pub active_leads: u64,
    #[serde(default)]
    pub converted_leads: u64,
    #[serde(default)]
    pub conversion_rate: f64,
}

/// One saved calculator run from the shared history feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: String,
    pub calculation_type: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// MonitorBuildContext
// ---------------------------------------------------------------------------

/// Input for one model build. Constructed per render and discarded; every
/// optional field may be absent and the pipeline must degrade gracefully,
/// never panicking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorBuildContext {
    pub pathname: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub company_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    pub now: DateTime<Utc>,
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub dashboard_stats: Option<DashboardStats>,
    #[serde(default)]
    pub revenue_stats: Option<RevenueStats>,
    #[serde(default)]
    pub pipeline_stats: Option<PipelineStats>,
    #[serde(default)]
    pub calculations: Vec<SavedCalculation>,
    #[serde(default)]
    pub ops_telemetry: Option<OpsTelemetrySnapshot>,
    #[serde(default)]
    pub navigation: Option<NavigationTimingSnapshot>,
    #[serde(default)]
    pub route_render_ms: Option<f64>,
}

impl MonitorBuildContext {
    /// Minimal context for a guest render on `pathname` at `now`.
    pub fn guest(pathname: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            pathname: pathname.into(),
            role: None,
            is_authenticated: false,
            company_id: None,
            user_id: None,
            company_name: None,
            now,
            is_loading: false,
            dashboard_stats: None,
            revenue_stats: None,
            pipeline_stats: None,
            calculations: Vec::new(),
            ops_telemetry: None,
            navigation: None,
            route_render_ms: None,
        }
    }

    pub fn role_str(&self) -> Option<&'static str> {
        self.role.map(|role| role.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobs_signal_requires_any_count_or_event() {
        let mut jobs = JobsTelemetry::default();
        assert!(!jobs.has_signal());

        jobs.pending = Some(0);
        assert!(jobs.has_signal());

        let mut jobs = JobsTelemetry::default();
        jobs.created_last_7d.push(Utc::now());
        assert!(jobs.has_signal());
    }

    #[test]
    fn context_deserializes_with_missing_optionals() {
        let ctx: MonitorBuildContext = serde_json::from_str(
            r#"{"pathname": "/dashboard", "now": "2026-02-12T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(ctx.pathname, "/dashboard");
        assert!(!ctx.is_authenticated);
        assert!(ctx.ops_telemetry.is_none());
        assert!(ctx.calculations.is_empty());
    }
}

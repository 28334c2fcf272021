//! Surface-name overrides and per-family KPI label profiles.
//!
//! A "surface" is the short human name for a route (`/dashboard/dispatch`
//! → "Dispatch"). Each family carries an override table for routes whose
//! derived name reads poorly, and a KPI label profile that rewrites
//! generic KPI labels into surface-specific ones. Label substitution never
//! alters a KPI's id or tone, only its display label.

use fh_model::MonitorKpiItem;

use crate::route::{normalize_path, resolve_route_surface};

// ---------------------------------------------------------------------------
// Surface override tables (keyed by normalized path)
// ---------------------------------------------------------------------------

pub const OPS_SURFACE_OVERRIDES: [(&str, &str); 17] = [
    ("/dashboard", "Executive"),
    ("/dashboard/dispatch", "Dispatch"),
    ("/dashboard/triage", "Triage"),
    ("/dashboard/fleet", "Fleet"),
    ("/dashboard/jobs", "Jobs"),
    ("/dashboard/jobs/:id", "Job Detail"),
    ("/dashboard/projects", "Projects"),
    ("/dashboard/clients", "Clients"),
    ("/dashboard/clients/:id", "Client Detail"),
    ("/portal", "Portal"),
    ("/track-job/:id", "Job Tracking"),
    ("/tech", "Field"),
    ("/tech/jobs/:id", "Field Job"),
    ("/history", "History"),
    ("/profile", "Profile"),
    ("/settings/company", "Company"),
    ("/settings/team", "Team"),
];

pub const TOOLS_SURFACE_OVERRIDES: [(&str, &str); 5] = [
    ("/advanced-reporting", "Reporting"),
    ("/troubleshooting", "Diagnostics"),
    ("/diy-calculators", "DIY"),
    ("/estimate-builder", "Estimate"),
    ("/ai/pattern-insights", "AI Insights"),
];

pub const PUBLIC_SURFACE_OVERRIDES: [(&str, &str); 4] = [
    ("/", "Landing"),
    ("/a2l-resources", "A2L"),
    ("/connect-provider", "Connect"),
    ("/help-center", "Help Center"),
];

pub const AUTH_SURFACE_OVERRIDES: [(&str, &str); 8] = [
    ("/signin", "Sign-In"),
    ("/signup", "Sign-Up"),
    ("/select-company", "Company Select"),
    ("/join-company", "Company Join"),
    ("/invite/:slug", "Invite"),
    ("/create-company", "Company Create"),
    ("/invite-team", "Team Invite"),
    ("/callback/:provider", "Callback"),
];

pub const DEBUG_SURFACE_OVERRIDES: [(&str, &str); 2] = [
    ("/stripe-debug", "Stripe"),
    ("/agent-sandbox", "Agent"),
];

/// Override lookup on the normalized path, falling back to the derived
/// surface name.
pub fn resolve_surface_with_overrides(pathname: &str, overrides: &[(&str, &str)]) -> String {
    let normalized = normalize_path(pathname);
    overrides
        .iter()
        .find(|(path, _)| *path == normalized)
        .map(|(_, surface)| (*surface).to_string())
        .unwrap_or_else(|| resolve_route_surface(pathname))
}

// ---------------------------------------------------------------------------
// KPI label profiles
// ---------------------------------------------------------------------------

/// KPI-id → display-label overrides for one route.
#[derive(Debug, Clone, Default)]
pub struct KpiLabelProfile {
    entries: Vec<(&'static str, String)>,
}

impl KpiLabelProfile {
    fn new(entries: Vec<(&'static str, String)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(kpi_id, _)| *kpi_id == id)
            .map(|(_, label)| label.as_str())
    }

    /// Apply the profile to one KPI, rewriting only the label.
    pub fn relabel(&self, mut item: MonitorKpiItem) -> MonitorKpiItem {
        if let Some(label) = self.get(&item.id) {
            item.label = label.to_string();
        }
        item
    }

    pub fn relabel_all(&self, items: Vec<MonitorKpiItem>) -> Vec<MonitorKpiItem> {
        items.into_iter().map(|item| self.relabel(item)).collect()
    }
}

pub fn ops_kpi_labels(pathname: &str) -> KpiLabelProfile {
    let surface = resolve_surface_with_overrides(pathname, &OPS_SURFACE_OVERRIDES);
    KpiLabelProfile::new(vec![
        ("monthly-runs", format!("{surface} Activity")),
        ("remaining-limit", format!("{surface} Capacity")),
        ("revenue-risk", format!("{surface} Exposure")),
        ("lead-conversion", format!("{surface} Conversion")),
    ])
}

pub fn tools_kpi_labels(pathname: &str) -> KpiLabelProfile {
    let surface = resolve_surface_with_overrides(pathname, &TOOLS_SURFACE_OVERRIDES);
    KpiLabelProfile::new(vec![
        ("tool-family", format!("{surface} Domain")),
        ("tool-runs-total", format!("{surface} Runs")),
        ("tool-latest", format!("Latest {surface} Run")),
        ("tool-role", format!("{surface} Operator")),
    ])
}

pub fn public_kpi_labels(pathname: &str) -> KpiLabelProfile {
    let surface = resolve_surface_with_overrides(pathname, &PUBLIC_SURFACE_OVERRIDES);
    KpiLabelProfile::new(vec![
        ("users", format!("{surface} Audience")),
        ("ttfb", format!("{surface} TTFB")),
        ("dom-ready", format!("{surface} DOM")),
        ("load-event", format!("{surface} Load")),
    ])
}

pub fn auth_kpi_labels(pathname: &str) -> KpiLabelProfile {
    let surface = resolve_surface_with_overrides(pathname, &AUTH_SURFACE_OVERRIDES);
    KpiLabelProfile::new(vec![
        ("session", format!("{surface} Session")),
        ("role", format!("{surface} Role")),
        ("render-latency", format!("{surface} Render")),
        ("route", format!("{surface} Route")),
    ])
}

pub fn debug_kpi_labels(pathname: &str) -> KpiLabelProfile {
    let surface = resolve_surface_with_overrides(pathname, &DEBUG_SURFACE_OVERRIDES);
    KpiLabelProfile::new(vec![
        ("route", format!("{surface} Route")),
        ("render-latency", format!("{surface} Render")),
        ("session", format!("{surface} Session")),
        ("role", format!("{surface} Role")),
    ])
}

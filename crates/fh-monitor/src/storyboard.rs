//! Storyboard profiles: the static copy bundle (titles, chart/diagram
//! descriptions, source labels, empty-state copy) for each route.
//!
//! Tables are constant, keyed by normalized path, and always resolve to a
//! fully-populated profile: unknown routes get the family default, so
//! renderers never see a missing title or description.

use crate::route::normalize_path;
use crate::site_metrics::AS_OF_LABEL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryboardProfile {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub chart_title: &'static str,
    pub chart_description: &'static str,
    pub diagram_title: &'static str,
    pub diagram_description: &'static str,
    pub source_label: Option<&'static str>,
    pub empty_message: Option<&'static str>,
}

const fn ops_story(
    title: &'static str,
    subtitle: &'static str,
    chart_title: &'static str,
    diagram_title: &'static str,
) -> StoryboardProfile {
    StoryboardProfile {
        title,
        subtitle,
        chart_title,
        chart_description: "Real activity trend derived from saved workflows and operational events.",
        diagram_title,
        diagram_description: "Live operating context showing workspace scope, actor, and reset cadence.",
        source_label: Some("Supabase operations telemetry"),
        empty_message: Some(
            "No operational data yet. Run a workflow and this monitor will populate automatically.",
        ),
    }
}

const fn tools_story(
    title: &'static str,
    subtitle: &'static str,
    chart_title: &'static str,
    diagram_title: &'static str,
) -> StoryboardProfile {
    StoryboardProfile {
        title,
        subtitle,
        chart_title,
        chart_description: "Recent engineering activity from real saved runs in this workspace.",
        diagram_title,
        diagram_description: "Execution context and data lineage for this engineering surface.",
        source_label: Some("Calculation history + runtime telemetry"),
        empty_message: Some(
            "No saved tool runs yet. Execute a tool and save the output to unlock trends.",
        ),
    }
}

const fn public_story(
    title: &'static str,
    subtitle: &'static str,
    chart_title: &'static str,
    diagram_title: &'static str,
) -> StoryboardProfile {
    StoryboardProfile {
        title,
        subtitle,
        chart_title,
        chart_description: "Runtime loading profile from the active browser session for this page.",
        diagram_title,
        diagram_description: AS_OF_LABEL,
        source_label: Some(AS_OF_LABEL),
        empty_message: Some(
            "Runtime timings are not available yet. Refresh and interact with the page to populate metrics.",
        ),
    }
}

const fn auth_story(
    title: &'static str,
    subtitle: &'static str,
    chart_title: &'static str,
    diagram_title: &'static str,
) -> StoryboardProfile {
    StoryboardProfile {
        title,
        subtitle,
        chart_title,
        chart_description: "Live route timing for the active access or onboarding flow.",
        diagram_title,
        diagram_description: "Role, company, and route context captured from authenticated runtime state.",
        source_label: Some("Runtime UI telemetry"),
        empty_message: None,
    }
}

const fn debug_story(
    title: &'static str,
    subtitle: &'static str,
    chart_title: &'static str,
    diagram_title: &'static str,
) -> StoryboardProfile {
    StoryboardProfile {
        title,
        subtitle,
        chart_title,
        chart_description: "Diagnostic timing profile from active runtime instrumentation.",
        diagram_title,
        diagram_description: "Debug route execution context for operator and environment validation.",
        source_label: Some("Runtime diagnostics telemetry"),
        empty_message: None,
    }
}

// ---------------------------------------------------------------------------
// Family defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_OPS_PROFILE: StoryboardProfile = ops_story(
    "Operations Monitor",
    "Dispatch, revenue, and throughput visibility",
    "Operations Throughput Trend",
    "Live Operations Context",
);

pub const DEFAULT_TOOLS_PROFILE: StoryboardProfile = tools_story(
    "Engineering Monitor",
    "Tool usage, recency, and execution context",
    "Engineering Run Trend",
    "Tool Execution Context",
);

pub const DEFAULT_PUBLIC_PROFILE: StoryboardProfile = public_story(
    "Experience Monitor",
    "Public experience quality and trust signals",
    "Runtime Load Profile",
    "Trust and Standards",
);

pub const DEFAULT_AUTH_PROFILE: StoryboardProfile = auth_story(
    "Access Flow Monitor",
    "Authentication and onboarding health",
    "Access Runtime Profile",
    "Access Context Tile",
);

pub const DEFAULT_DEBUG_PROFILE: StoryboardProfile = debug_story(
    "System Diagnostic Monitor",
    "Internal diagnostics and runtime instrumentation view",
    "Diagnostic Runtime Profile",
    "Diagnostic Context Tile",
);

// ---------------------------------------------------------------------------
// Route tables (keyed by normalized path)
// ---------------------------------------------------------------------------

const OPS_PROFILES: [(&str, StoryboardProfile); 17] = [
    (
        "/dashboard",
        ops_story(
            "Executive Operations Board",
            "Command view for throughput, exposure, and operating posture",
            "Executive Throughput Trend",
            "Executive Context",
        ),
    ),
    (
        "/dashboard/dispatch",
        ops_story(
            "Dispatch Coordination Board",
            "Routing and dispatch cadence for active service operations",
            "Dispatch Activity Trend",
            "Dispatch Context Chain",
        ),
    ),
    (
        "/dashboard/triage",
        ops_story(
            "Triage Intake Command",
            "Lead intake and triage progression visibility",
            "Triage Intake Trend",
            "Triage Flow Context",
        ),
    ),
    (
        "/dashboard/fleet",
        ops_story(
            "Fleet Readiness Grid",
            "Readiness and field execution posture for fleet operations",
            "Fleet Activity Trend",
            "Fleet Operations Context",
        ),
    ),
    (
        "/dashboard/jobs",
        ops_story(
            "Job Pipeline Console",
            "Workload and service lifecycle overview",
            "Job Pipeline Trend",
            "Job Workflow Context",
        ),
    ),
    (
        "/dashboard/jobs/:id",
        ops_story(
            "Job Execution Storyboard",
            "Detailed execution telemetry for the active job",
            "Job Execution Trend",
            "Job Detail Context",
        ),
    ),
    (
        "/dashboard/projects",
        ops_story(
            "Project Delivery Matrix",
            "Program-level delivery posture and execution rhythm",
            "Project Delivery Trend",
            "Project Delivery Context",
        ),
    ),
    (
        "/dashboard/clients",
        ops_story(
            "Client Service Portfolio",
            "Service coverage and account health overview",
            "Client Portfolio Trend",
            "Client Service Context",
        ),
    ),
    (
        "/dashboard/clients/:id",
        ops_story(
            "Client Account Storyboard",
            "Account-specific operating context and service continuity",
            "Account Activity Trend",
            "Account Context Tile",
        ),
    ),
    (
        "/portal",
        ops_story(
            "Client Portal Brief",
            "Service transparency and lifecycle visibility for client users",
            "Portal Service Trend",
            "Portal Context Tile",
        ),
    ),
    (
        "/track-job/:id",
        ops_story(
            "Job Tracking Journey",
            "Real-time progress narrative for the tracked service request",
            "Tracking Progress Trend",
            "Tracking Context Chain",
        ),
    ),
    (
        "/tech",
        ops_story(
            "Technician Field Board",
            "Field execution pulse for active technician workload",
            "Field Activity Trend",
            "Field Context Tile",
        ),
    ),
    (
        "/tech/jobs/:id",
        ops_story(
            "Field Job Runbook",
            "In-flight technician execution context for this job",
            "Field Job Trend",
            "Field Job Context",
        ),
    ),
    (
        "/history",
        ops_story(
            "Service History Timeline",
            "Historical service signal and execution continuity",
            "History Activity Trend",
            "History Context Chain",
        ),
    ),
    (
        "/profile",
        ops_story(
            "Operator Profile Snapshot",
            "Identity, role, and operating footprint overview",
            "Profile Activity Trend",
            "Profile Context Tile",
        ),
    ),
    (
        "/settings/company",
        ops_story(
            "Company Configuration Brief",
            "Organization configuration posture and operational impact",
            "Configuration Activity Trend",
            "Company Configuration Context",
        ),
    ),
    (
        "/settings/team",
        ops_story(
            "Team Operations Roster",
            "Team structure and role coverage visibility",
            "Team Activity Trend",
            "Team Context Tile",
        ),
    ),
];

const TOOLS_PROFILES: [(&str, StoryboardProfile); 13] = [
    (
        "/advanced-reporting",
        tools_story(
            "Advanced Reporting Lab",
            "Narrative analytics for advanced operational reporting",
            "Reporting Run Trend",
            "Reporting Context Tile",
        ),
    ),
    (
        "/troubleshooting",
        tools_story(
            "Troubleshooting Decision Map",
            "Guided diagnostic workflow with execution telemetry",
            "Troubleshooting Trend",
            "Troubleshooting Context",
        ),
    ),
    (
        "/diy-calculators",
        tools_story(
            "DIY Calculator Toolkit",
            "Self-serve calculator workflow and adoption signal",
            "DIY Usage Trend",
            "DIY Context Tile",
        ),
    ),
    (
        "/estimate-builder",
        tools_story(
            "Estimate Builder Blueprint",
            "Estimate generation pipeline and revision activity",
            "Estimate Build Trend",
            "Estimate Context Tile",
        ),
    ),
    (
        "/tools/standard-cycle",
        tools_story(
            "Standard Cycle Analyzer",
            "Standard-cycle engineering workflow and output cadence",
            "Standard Cycle Trend",
            "Cycle Context Tile",
        ),
    ),
    (
        "/tools/refrigerant-comparison",
        tools_story(
            "Refrigerant Comparison Studio",
            "Comparative refrigerant analysis activity and context",
            "Comparison Trend",
            "Comparison Context Tile",
        ),
    ),
    (
        "/tools/cascade-cycle",
        tools_story(
            "Cascade Cycle Simulator",
            "Cascade-cycle run activity and engineering context",
            "Cascade Activity Trend",
            "Cascade Context Tile",
        ),
    ),
    (
        "/tools/refrigerant-report",
        tools_story(
            "Refrigerant Reporting Desk",
            "Compliance report generation activity and readiness context",
            "Report Generation Trend",
            "Report Context Tile",
        ),
    ),
    (
        "/tools/refrigerant-inventory",
        tools_story(
            "Refrigerant Inventory Ledger",
            "Inventory workflow activity and data quality context",
            "Inventory Activity Trend",
            "Inventory Context Tile",
        ),
    ),
    (
        "/tools/leak-rate-calculator",
        tools_story(
            "Leak Rate Analysis Panel",
            "Leak-rate computation activity and compliance context",
            "Leak Rate Trend",
            "Leak Analysis Context",
        ),
    ),
    (
        "/tools/warranty-scanner",
        tools_story(
            "Warranty Scanner Console",
            "Warranty scan throughput and confidence context",
            "Warranty Scan Trend",
            "Warranty Context Tile",
        ),
    ),
    (
        "/tools/iaq-wizard",
        tools_story(
            "IAQ Wizard Briefing",
            "Indoor air quality workflow activity and decision context",
            "IAQ Workflow Trend",
            "IAQ Context Tile",
        ),
    ),
    (
        "/ai/pattern-insights",
        tools_story(
            "AI Pattern Insight Studio",
            "Pattern analysis activity and interpretive context",
            "Pattern Insight Trend",
            "AI Insight Context",
        ),
    ),
];

const PUBLIC_PROFILES: [(&str, StoryboardProfile); 18] = [
    (
        "/",
        public_story(
            "Landing Experience Storyboard",
            "Top-of-funnel experience performance and trust signal",
            "Landing Runtime Profile",
            "Landing Trust Layer",
        ),
    ),
    (
        "/triage",
        public_story(
            "Public Triage Intake Snapshot",
            "Intake experience quality for unauthenticated triage flows",
            "Triage Runtime Profile",
            "Triage Trust Layer",
        ),
    ),
    (
        "/a2l-resources",
        public_story(
            "A2L Resource Brief",
            "Reference experience performance for A2L educational content",
            "A2L Runtime Profile",
            "A2L Trust Layer",
        ),
    ),
    (
        "/features",
        public_story(
            "Feature Value Narrative",
            "Feature discovery experience and clarity signal",
            "Feature Runtime Profile",
            "Feature Trust Layer",
        ),
    ),
    (
        "/pricing",
        public_story(
            "Pricing Clarity Dashboard",
            "Pricing comprehension performance and trust posture",
            "Pricing Runtime Profile",
            "Pricing Trust Layer",
        ),
    ),
    (
        "/about",
        public_story(
            "Company Story Overview",
            "Brand trust and company-story reading experience",
            "About Runtime Profile",
            "About Trust Layer",
        ),
    ),
    (
        "/blog",
        public_story(
            "Industry Insights Feed",
            "Editorial browsing experience and engagement-readiness signal",
            "Blog Runtime Profile",
            "Blog Trust Layer",
        ),
    ),
    (
        "/blog/:slug",
        public_story(
            "Article Experience Detail",
            "Single-article readability and load quality signal",
            "Article Runtime Profile",
            "Article Trust Layer",
        ),
    ),
    (
        "/stories",
        public_story(
            "Web Story Showcase",
            "Short-form story consumption performance signal",
            "Story Runtime Profile",
            "Story Trust Layer",
        ),
    ),
    (
        "/podcasts",
        public_story(
            "Podcast Program Monitor",
            "Podcast discovery and playback-readiness experience",
            "Podcast Runtime Profile",
            "Podcast Trust Layer",
        ),
    ),
    (
        "/contact",
        public_story(
            "Contact Funnel Snapshot",
            "Contact pathway performance and form readiness",
            "Contact Runtime Profile",
            "Contact Trust Layer",
        ),
    ),
    (
        "/documentation",
        public_story(
            "Documentation Usability Monitor",
            "Documentation discoverability and reading quality",
            "Documentation Runtime Profile",
            "Documentation Trust Layer",
        ),
    ),
    (
        "/help",
        public_story(
            "Support Experience Monitor",
            "Help content usability and support-entry performance",
            "Support Runtime Profile",
            "Support Trust Layer",
        ),
    ),
    (
        "/help-center",
        public_story(
            "Support Center Monitor",
            "Support center interaction quality and clarity signal",
            "Help Center Runtime Profile",
            "Help Center Trust Layer",
        ),
    ),
    (
        "/privacy",
        public_story(
            "Privacy Policy Readability",
            "Policy reading performance and legal trust signal",
            "Privacy Runtime Profile",
            "Privacy Trust Layer",
        ),
    ),
    (
        "/terms",
        public_story(
            "Terms Governance Brief",
            "Terms readability and governance communication quality",
            "Terms Runtime Profile",
            "Terms Trust Layer",
        ),
    ),
    (
        "/connect-provider",
        public_story(
            "Provider Connection Readiness",
            "Provider-connect onboarding performance and confidence signal",
            "Connection Runtime Profile",
            "Connection Trust Layer",
        ),
    ),
    (
        "/career",
        public_story(
            "Career Pathway Monitor",
            "Career page exploration quality and candidate confidence signal",
            "Career Runtime Profile",
            "Career Trust Layer",
        ),
    ),
];

const AUTH_PROFILES: [(&str, StoryboardProfile); 8] = [
    (
        "/signin",
        auth_story(
            "Sign-In Conversion Monitor",
            "Authentication entry reliability and latency signal",
            "Sign-In Runtime Profile",
            "Sign-In Context Tile",
        ),
    ),
    (
        "/signup",
        auth_story(
            "Sign-Up Conversion Monitor",
            "Account creation reliability and onboarding timing",
            "Sign-Up Runtime Profile",
            "Sign-Up Context Tile",
        ),
    ),
    (
        "/select-company",
        auth_story(
            "Company Selection Flow",
            "Company context assignment flow and runtime health",
            "Selection Runtime Profile",
            "Selection Context Tile",
        ),
    ),
    (
        "/join-company",
        auth_story(
            "Company Join Flow",
            "Company join experience and route reliability",
            "Join Runtime Profile",
            "Join Context Tile",
        ),
    ),
    (
        "/invite/:slug",
        auth_story(
            "Invitation Acceptance Flow",
            "Invite acceptance experience and onboarding continuity",
            "Invite Runtime Profile",
            "Invite Context Tile",
        ),
    ),
    (
        "/create-company",
        auth_story(
            "Company Creation Flow",
            "Company creation reliability and progression timing",
            "Creation Runtime Profile",
            "Creation Context Tile",
        ),
    ),
    (
        "/invite-team",
        auth_story(
            "Team Invite Flow",
            "Team invite delivery flow and runtime confidence",
            "Team Invite Runtime Profile",
            "Team Invite Context Tile",
        ),
    ),
    (
        "/callback/:provider",
        auth_story(
            "Provider Callback Health",
            "OAuth callback reliability and access continuation",
            "Callback Runtime Profile",
            "Callback Context Tile",
        ),
    ),
];

const DEBUG_PROFILES: [(&str, StoryboardProfile); 2] = [
    (
        "/stripe-debug",
        debug_story(
            "Stripe Diagnostic Panel",
            "Billing integration diagnostics and callback visibility",
            "Stripe Diagnostic Trend",
            "Stripe Diagnostic Context",
        ),
    ),
    (
        "/agent-sandbox",
        debug_story(
            "Agent Sandbox Telemetry",
            "Agent behavior testing and runtime instrumentation view",
            "Sandbox Runtime Trend",
            "Sandbox Diagnostic Context",
        ),
    ),
];

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

fn lookup<'a>(
    pathname: &str,
    table: &'a [(&str, StoryboardProfile)],
    fallback: &'a StoryboardProfile,
) -> &'a StoryboardProfile {
    let normalized = normalize_path(pathname);
    table
        .iter()
        .find(|(path, _)| *path == normalized)
        .map(|(_, profile)| profile)
        .unwrap_or(fallback)
}

pub fn ops_profile(pathname: &str) -> &'static StoryboardProfile {
    lookup(pathname, &OPS_PROFILES, &DEFAULT_OPS_PROFILE)
}

pub fn tools_profile(pathname: &str) -> &'static StoryboardProfile {
    lookup(pathname, &TOOLS_PROFILES, &DEFAULT_TOOLS_PROFILE)
}

pub fn public_profile(pathname: &str) -> &'static StoryboardProfile {
    lookup(pathname, &PUBLIC_PROFILES, &DEFAULT_PUBLIC_PROFILE)
}

pub fn auth_profile(pathname: &str) -> &'static StoryboardProfile {
    lookup(pathname, &AUTH_PROFILES, &DEFAULT_AUTH_PROFILE)
}

pub fn debug_profile(pathname: &str) -> &'static StoryboardProfile {
    lookup(pathname, &DEBUG_PROFILES, &DEFAULT_DEBUG_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_get_specific_copy() {
        assert_eq!(ops_profile("/dashboard/dispatch").title, "Dispatch Coordination Board");
        assert_eq!(tools_profile("/tools/standard-cycle").title, "Standard Cycle Analyzer");
        assert_eq!(public_profile("/pricing").chart_title, "Pricing Runtime Profile");
    }

    #[test]
    fn parameterized_routes_resolve_through_normalization() {
        assert_eq!(ops_profile("/dashboard/jobs/abc123").title, "Job Execution Storyboard");
        assert_eq!(ops_profile("/dashboard/jobs/:id").title, "Job Execution Storyboard");
        assert_eq!(auth_profile("/invite/team-42").title, "Invitation Acceptance Flow");
        assert_eq!(public_profile("/blog/why-a2l").title, "Article Experience Detail");
    }

    #[test]
    fn unknown_routes_fall_back_to_family_default() {
        let profile = ops_profile("/dashboard/unmapped");
        assert_eq!(profile, &DEFAULT_OPS_PROFILE);
        assert_eq!(profile.title, "Operations Monitor");
        assert!(profile.source_label.is_some());
        assert!(profile.empty_message.is_some());
    }
}

//! Presentation resolution: the visual theme descriptor for a route.
//!
//! Family defaults are computed first, then an explicit per-route override
//! record is applied field by field. An override that only sets `accent`
//! must never reset `template`; the merge is nullish, not a replace.

use fh_model::{
    MonitorAccent, MonitorIconKey, MonitorLayoutTemplate, MonitorPattern, MonitorPresentation,
};

use crate::route::{classify, normalize_path, resolve_route_surface, RouteFamily};
use crate::surface::{
    resolve_surface_with_overrides, AUTH_SURFACE_OVERRIDES, DEBUG_SURFACE_OVERRIDES,
    OPS_SURFACE_OVERRIDES, PUBLIC_SURFACE_OVERRIDES, TOOLS_SURFACE_OVERRIDES,
};

// ---------------------------------------------------------------------------
// Per-route overrides
// ---------------------------------------------------------------------------

/// Partial presentation record; only populated fields are applied.
#[derive(Debug, Clone, Copy)]
pub struct PresentationOverride {
    pub template: Option<MonitorLayoutTemplate>,
    pub accent: Option<MonitorAccent>,
    pub pattern: Option<MonitorPattern>,
    pub icon: Option<MonitorIconKey>,
    pub signature_label: Option<&'static str>,
    pub mode_label: Option<&'static str>,
    pub default_expanded: Option<bool>,
}

const NO_OVERRIDE: PresentationOverride = PresentationOverride {
    template: None,
    accent: None,
    pattern: None,
    icon: None,
    signature_label: None,
    mode_label: None,
    default_expanded: None,
};

const ROUTE_PRESENTATION_OVERRIDES: [(&str, PresentationOverride); 12] = [
    (
        "/dashboard",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Executive),
            accent: Some(MonitorAccent::Cyan),
            pattern: Some(MonitorPattern::Grid),
            icon: Some(MonitorIconKey::Gauge),
            signature_label: Some("Executive Operations"),
            mode_label: Some("SYSTEM"),
            default_expanded: Some(false),
        },
    ),
    (
        "/dashboard/dispatch",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Pipeline),
            accent: Some(MonitorAccent::Amber),
            pattern: Some(MonitorPattern::Pipeline),
            icon: Some(MonitorIconKey::Route),
            signature_label: Some("Dispatch Command"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/dashboard/triage",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Pipeline),
            accent: Some(MonitorAccent::Violet),
            pattern: Some(MonitorPattern::Pipeline),
            icon: Some(MonitorIconKey::Siren),
            signature_label: Some("Triage Command"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/dashboard/jobs",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Pipeline),
            accent: Some(MonitorAccent::Blue),
            pattern: Some(MonitorPattern::Pipeline),
            icon: Some(MonitorIconKey::Briefcase),
            signature_label: Some("Jobs Console"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/dashboard/clients",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Network),
            accent: Some(MonitorAccent::Emerald),
            pattern: Some(MonitorPattern::Circuit),
            icon: Some(MonitorIconKey::Users),
            signature_label: Some("Client Network"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/dashboard/fleet",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Network),
            accent: Some(MonitorAccent::Cyan),
            pattern: Some(MonitorPattern::Circuit),
            icon: Some(MonitorIconKey::Truck),
            signature_label: Some("Fleet Telemetry"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/dashboard/projects",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Network),
            accent: Some(MonitorAccent::Orange),
            pattern: Some(MonitorPattern::Circuit),
            icon: Some(MonitorIconKey::Layers),
            signature_label: Some("Projects Atlas"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/portal",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Network),
            accent: Some(MonitorAccent::Emerald),
            pattern: Some(MonitorPattern::Grid),
            icon: Some(MonitorIconKey::ShieldCheck),
            signature_label: Some("Client Portal"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/tech",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Pipeline),
            accent: Some(MonitorAccent::Amber),
            pattern: Some(MonitorPattern::Grid),
            icon: Some(MonitorIconKey::HardHat),
            signature_label: Some("Field Command"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/track-job/:id",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Pipeline),
            accent: Some(MonitorAccent::Cyan),
            pattern: Some(MonitorPattern::Radar),
            icon: Some(MonitorIconKey::MapPin),
            signature_label: Some("Job Tracker"),
            mode_label: Some("WORK"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/settings/company",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Executive),
            accent: Some(MonitorAccent::Slate),
            pattern: Some(MonitorPattern::Grid),
            icon: Some(MonitorIconKey::Settings),
            signature_label: Some("Company Settings"),
            mode_label: Some("SYSTEM"),
            ..NO_OVERRIDE
        },
    ),
    (
        "/settings/team",
        PresentationOverride {
            template: Some(MonitorLayoutTemplate::Executive),
            accent: Some(MonitorAccent::Slate),
            pattern: Some(MonitorPattern::Grid),
            icon: Some(MonitorIconKey::Settings),
            signature_label: Some("Team Settings"),
            mode_label: Some("SYSTEM"),
            ..NO_OVERRIDE
        },
    ),
];

// ---------------------------------------------------------------------------
// Family defaults
// ---------------------------------------------------------------------------

fn family_defaults(pathname: &str, family: RouteFamily) -> MonitorPresentation {
    let normalized = normalize_path(pathname);
    let fallback_surface = resolve_route_surface(pathname);

    let (template, accent, pattern, icon, mode_label, signature_label) = match family {
        RouteFamily::Operations => (
            MonitorLayoutTemplate::Pipeline,
            MonitorAccent::Cyan,
            MonitorPattern::Grid,
            MonitorIconKey::Activity,
            "WORK",
            format!(
                "{} Console",
                resolve_surface_with_overrides(pathname, &OPS_SURFACE_OVERRIDES)
            ),
        ),
        RouteFamily::ToolsEngineering => (
            MonitorLayoutTemplate::Tool,
            MonitorAccent::Violet,
            MonitorPattern::Circuit,
            MonitorIconKey::Sparkles,
            "TOOLS",
            format!(
                "{} Module",
                resolve_surface_with_overrides(pathname, &TOOLS_SURFACE_OVERRIDES)
            ),
        ),
        RouteFamily::PublicContent => (
            MonitorLayoutTemplate::Public,
            MonitorAccent::Blue,
            MonitorPattern::Constellation,
            MonitorIconKey::Sparkles,
            "PUBLIC",
            format!(
                "{} Brief",
                resolve_surface_with_overrides(pathname, &PUBLIC_SURFACE_OVERRIDES)
            ),
        ),
        RouteFamily::AuthOnboarding => (
            MonitorLayoutTemplate::Auth,
            MonitorAccent::Slate,
            MonitorPattern::Radar,
            MonitorIconKey::ShieldCheck,
            "AUTH",
            format!(
                "{} Access",
                resolve_surface_with_overrides(pathname, &AUTH_SURFACE_OVERRIDES)
            ),
        ),
        RouteFamily::DebugSystem => (
            MonitorLayoutTemplate::Executive,
            MonitorAccent::Orange,
            MonitorPattern::Grid,
            MonitorIconKey::Activity,
            "DEBUG",
            format!(
                "{} Sandbox",
                resolve_surface_with_overrides(pathname, &DEBUG_SURFACE_OVERRIDES)
            ),
        ),
        RouteFamily::Fallback => (
            MonitorLayoutTemplate::Executive,
            MonitorAccent::Slate,
            MonitorPattern::Grid,
            MonitorIconKey::Activity,
            "SYSTEM",
            if normalized == "/" {
                "Landing Brief".to_string()
            } else {
                format!("{fallback_surface} Monitor")
            },
        ),
    };

    MonitorPresentation {
        template,
        accent,
        pattern,
        icon,
        signature_label,
        mode_label: mode_label.to_string(),
        default_expanded: false,
    }
}

fn merge(defaults: MonitorPresentation, ovr: &PresentationOverride) -> MonitorPresentation {
    MonitorPresentation {
        template: ovr.template.unwrap_or(defaults.template),
        accent: ovr.accent.unwrap_or(defaults.accent),
        pattern: ovr.pattern.unwrap_or(defaults.pattern),
        icon: ovr.icon.unwrap_or(defaults.icon),
        signature_label: ovr
            .signature_label
            .map(str::to_string)
            .unwrap_or(defaults.signature_label),
        mode_label: ovr
            .mode_label
            .map(str::to_string)
            .unwrap_or(defaults.mode_label),
        default_expanded: ovr.default_expanded.unwrap_or(defaults.default_expanded),
    }
}

/// Resolve the visual theme for a route: family defaults merged with the
/// explicit per-route override record, if any.
pub fn resolve_presentation(pathname: &str) -> MonitorPresentation {
    let family = classify(pathname);
    let defaults = family_defaults(pathname, family);
    let normalized = normalize_path(pathname);
    match ROUTE_PRESENTATION_OVERRIDES
        .iter()
        .find(|(path, _)| *path == normalized)
    {
        Some((_, ovr)) => merge(defaults, ovr),
        None => defaults,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_visibility_surfaces_use_their_overrides() {
        let triage = resolve_presentation("/dashboard/triage");
        assert_eq!(triage.template, MonitorLayoutTemplate::Pipeline);
        assert_eq!(triage.accent, MonitorAccent::Violet);
        assert_eq!(triage.pattern, MonitorPattern::Pipeline);
        assert_eq!(triage.icon, MonitorIconKey::Siren);
        assert_eq!(triage.signature_label, "Triage Command");
        assert_eq!(triage.mode_label, "WORK");
    }

    #[test]
    fn unknown_routes_get_fallback_defaults() {
        let fallback = resolve_presentation("/__unknown_surface__");
        assert_eq!(fallback.template, MonitorLayoutTemplate::Executive);
        assert_eq!(fallback.accent, MonitorAccent::Slate);
        assert_eq!(fallback.pattern, MonitorPattern::Grid);
        assert!(fallback.signature_label.contains("Monitor"));
        assert!(!fallback.default_expanded);
    }

    #[test]
    fn root_path_uses_landing_brief_signature() {
        let root = resolve_presentation("/");
        assert_eq!(root.signature_label, "Landing Brief");
        assert_eq!(root.mode_label, "PUBLIC");
    }

    #[test]
    fn parameterized_route_matches_canonical_override() {
        let tracked = resolve_presentation("/track-job/abc123");
        assert_eq!(tracked.signature_label, "Job Tracker");
        assert_eq!(tracked.icon, MonitorIconKey::MapPin);
    }

    #[test]
    fn family_default_signature_labels() {
        assert_eq!(
            resolve_presentation("/dashboard/dispatch").signature_label,
            "Dispatch Command"
        );
        // No override entry: family default with surface override table.
        assert_eq!(resolve_presentation("/history").signature_label, "History Console");
        assert_eq!(
            resolve_presentation("/tools/standard-cycle").signature_label,
            "Standard Cycle Module"
        );
        assert_eq!(resolve_presentation("/signin").signature_label, "Sign-In Access");
    }

    #[test]
    fn merge_applies_only_populated_fields() {
        let defaults = family_defaults("/dashboard/dispatch", RouteFamily::Operations);
        let partial = PresentationOverride {
            accent: Some(MonitorAccent::Orange),
            ..NO_OVERRIDE
        };
        let merged = merge(defaults.clone(), &partial);
        assert_eq!(merged.accent, MonitorAccent::Orange);
        assert_eq!(merged.template, defaults.template);
        assert_eq!(merged.signature_label, defaults.signature_label);
        assert_eq!(merged.mode_label, defaults.mode_label);
    }
}

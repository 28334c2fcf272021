//! Route classification and path normalization.
//!
//! Routes are grouped into a closed set of behavioral families. The
//! family table is ordered and the first match wins; the fallback family
//! matches everything, so classification never fails.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RouteFamily
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteFamily {
    AuthOnboarding,
    Operations,
    ToolsEngineering,
    PublicContent,
    DebugSystem,
    Fallback,
}

/// Classification order. First match wins; `Fallback` must stay last.
pub const FAMILY_ORDER: [RouteFamily; 6] = [
    RouteFamily::AuthOnboarding,
    RouteFamily::Operations,
    RouteFamily::ToolsEngineering,
    RouteFamily::PublicContent,
    RouteFamily::DebugSystem,
    RouteFamily::Fallback,
];

impl RouteFamily {
    pub fn id(&self) -> &'static str {
        match self {
            RouteFamily::AuthOnboarding => "auth-onboarding",
            RouteFamily::Operations => "operations",
            RouteFamily::ToolsEngineering => "tools-engineering",
            RouteFamily::PublicContent => "public-content",
            RouteFamily::DebugSystem => "debug-system",
            RouteFamily::Fallback => "fallback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteFamily::AuthOnboarding => "Auth and Onboarding",
            RouteFamily::Operations => "Operations and Role Workspaces",
            RouteFamily::ToolsEngineering => "Tools and Engineering",
            RouteFamily::PublicContent => "Public, Marketing, and Content",
            RouteFamily::DebugSystem => "Debug and Sandbox",
            RouteFamily::Fallback => "System Fallback",
        }
    }

    /// Whether this family claims `path` (already lowercased).
    fn matches(&self, path: &str) -> bool {
        match self {
            RouteFamily::AuthOnboarding => {
                matches_exact(
                    path,
                    &[
                        "/signin",
                        "/signup",
                        "/select-company",
                        "/join-company",
                        "/create-company",
                        "/invite-team",
                    ],
                ) || path.starts_with("/invite/")
                    || path.starts_with("/callback/")
            }
            RouteFamily::Operations => {
                matches_head(path, "/dashboard")
                    || matches_head(path, "/tech")
                    || matches_head(path, "/track-job")
                    || matches_head(path, "/settings")
                    || matches_exact(path, &["/portal", "/history", "/profile", "/career"])
            }
            RouteFamily::ToolsEngineering => {
                matches_head(path, "/tools")
                    || matches_exact(
                        path,
                        &[
                            "/troubleshooting",
                            "/diy-calculators",
                            "/advanced-reporting",
                            "/estimate-builder",
                            "/ai/pattern-insights",
                        ],
                    )
            }
            RouteFamily::PublicContent => {
                matches_head(path, "/blog")
                    || matches_exact(
                        path,
                        &[
                            "/",
                            "/triage",
                            "/a2l-resources",
                            "/features",
                            "/pricing",
                            "/about",
                            "/stories",
                            "/podcasts",
                            "/contact",
                            "/documentation",
                            "/help",
                            "/help-center",
                            "/privacy",
                            "/terms",
                            "/connect-provider",
                        ],
                    )
            }
            RouteFamily::DebugSystem => {
                matches_exact(path, &["/stripe-debug", "/agent-sandbox"])
            }
            RouteFamily::Fallback => true,
        }
    }
}

fn matches_exact(path: &str, heads: &[&str]) -> bool {
    heads.iter().any(|head| path == *head)
}

/// `head` itself or any sub-route under it (`/dashboard`, `/dashboard/jobs`).
fn matches_head(path: &str, head: &str) -> bool {
    path == head || (path.len() > head.len() && path.as_bytes()[head.len()] == b'/' && path.starts_with(head))
}

/// Classify a raw pathname into its route family. Never fails: anything
/// unmatched lands in [`RouteFamily::Fallback`].
pub fn classify(pathname: &str) -> RouteFamily {
    let lower = pathname.to_ascii_lowercase();
    let family = FAMILY_ORDER
        .into_iter()
        .find(|family| family.matches(&lower))
        .unwrap_or(RouteFamily::Fallback);
    tracing::debug!(pathname, family = family.id(), "classified monitor route");
    family
}

// ---------------------------------------------------------------------------
// Path normalization
// ---------------------------------------------------------------------------

/// Parameterized route shapes, rewritten to their canonical `:param` form
/// before any path-keyed lookup. Every lookup site (profiles, presentation
/// overrides, KPI label overrides) goes through this; mixing raw and
/// normalized paths is a correctness bug.
const PARAM_SHAPES: [(&str, &str); 7] = [
    ("/blog/", "/blog/:slug"),
    ("/callback/", "/callback/:provider"),
    ("/invite/", "/invite/:slug"),
    ("/track-job/", "/track-job/:id"),
    ("/tech/jobs/", "/tech/jobs/:id"),
    ("/dashboard/jobs/", "/dashboard/jobs/:id"),
    ("/dashboard/clients/", "/dashboard/clients/:id"),
];

pub fn normalize_path(pathname: &str) -> String {
    let lower = pathname.to_ascii_lowercase();
    for (prefix, canonical) in PARAM_SHAPES {
        if let Some(rest) = lower.strip_prefix(prefix) {
            if !rest.is_empty() && !rest.contains('/') {
                return (*canonical).to_string();
            }
        }
    }
    lower
}

// ---------------------------------------------------------------------------
// Surface naming
// ---------------------------------------------------------------------------

/// `"track-job"` → `"Track Job"`, `":id"` → `"Id"`.
pub fn to_title_words(value: &str) -> String {
    let cleaned = value.trim_start_matches(':').replace(['-', '_'], " ");
    let mut out = String::with_capacity(cleaned.len());
    let mut at_word_start = true;
    for ch in cleaned.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = !ch.is_alphanumeric();
    }
    out
}

/// Human-readable name for a raw pathname's last segment.
pub fn format_route_name(pathname: &str) -> String {
    if pathname == "/" {
        return "Landing".to_string();
    }
    let last = pathname.split('/').filter(|seg| !seg.is_empty()).next_back();
    to_title_words(last.unwrap_or("Overview"))
}

/// Surface name for a route: the last non-parameter segment of the
/// normalized path, title-cased.
pub fn resolve_route_surface(pathname: &str) -> String {
    let normalized = normalize_path(pathname);
    if normalized == "/" {
        return "Landing".to_string();
    }

    let segments: Vec<&str> = normalized.split('/').filter(|seg| !seg.is_empty()).collect();
    let surface = match segments.as_slice() {
        [] => "Overview",
        [.., parent, last] if last.starts_with(':') => parent,
        [.., last] => last,
    };
    to_title_words(surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_routes() {
        assert_eq!(classify("/signin"), RouteFamily::AuthOnboarding);
        assert_eq!(classify("/invite/abc123"), RouteFamily::AuthOnboarding);
        assert_eq!(classify("/callback/google"), RouteFamily::AuthOnboarding);
    }

    #[test]
    fn classifies_operations_routes() {
        assert_eq!(classify("/dashboard"), RouteFamily::Operations);
        assert_eq!(classify("/dashboard/jobs/123"), RouteFamily::Operations);
        assert_eq!(classify("/portal"), RouteFamily::Operations);
        assert_eq!(classify("/settings/team"), RouteFamily::Operations);
        assert_eq!(classify("/career"), RouteFamily::Operations);
    }

    #[test]
    fn classifies_tools_routes() {
        assert_eq!(classify("/tools/standard-cycle"), RouteFamily::ToolsEngineering);
        assert_eq!(classify("/advanced-reporting"), RouteFamily::ToolsEngineering);
        assert_eq!(classify("/ai/pattern-insights"), RouteFamily::ToolsEngineering);
    }

    #[test]
    fn classifies_public_routes() {
        assert_eq!(classify("/"), RouteFamily::PublicContent);
        assert_eq!(classify("/pricing"), RouteFamily::PublicContent);
        assert_eq!(classify("/blog/my-post"), RouteFamily::PublicContent);
    }

    #[test]
    fn classifies_debug_and_fallback() {
        assert_eq!(classify("/stripe-debug"), RouteFamily::DebugSystem);
        assert_eq!(classify("/__unknown_surface__"), RouteFamily::Fallback);
        assert_eq!(classify(""), RouteFamily::Fallback);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("/Dashboard/Jobs"), RouteFamily::Operations);
        assert_eq!(classify("/SIGNIN"), RouteFamily::AuthOnboarding);
    }

    #[test]
    fn prefix_families_do_not_claim_lookalike_heads() {
        // "/tooling" must not match the "/tools" head.
        assert_eq!(classify("/tooling"), RouteFamily::Fallback);
        assert_eq!(classify("/dashboards"), RouteFamily::Fallback);
    }

    #[test]
    fn normalizes_parameterized_shapes() {
        assert_eq!(normalize_path("/dashboard/jobs/abc123"), "/dashboard/jobs/:id");
        assert_eq!(normalize_path("/dashboard/clients/42"), "/dashboard/clients/:id");
        assert_eq!(normalize_path("/tech/jobs/J-9"), "/tech/jobs/:id");
        assert_eq!(normalize_path("/track-job/xyz"), "/track-job/:id");
        assert_eq!(normalize_path("/blog/why-a2l"), "/blog/:slug");
        assert_eq!(normalize_path("/invite/team-42"), "/invite/:slug");
        assert_eq!(normalize_path("/callback/google"), "/callback/:provider");
    }

    #[test]
    fn normalization_leaves_static_paths_lowercased() {
        assert_eq!(normalize_path("/Dashboard/Jobs"), "/dashboard/jobs");
        assert_eq!(normalize_path("/blog"), "/blog");
        // Deeper nesting is not a known parameterized shape.
        assert_eq!(normalize_path("/blog/a/b"), "/blog/a/b");
    }

    #[test]
    fn surface_names_skip_parameter_segments() {
        assert_eq!(resolve_route_surface("/dashboard/jobs/abc"), "Jobs");
        assert_eq!(resolve_route_surface("/dashboard/dispatch"), "Dispatch");
        assert_eq!(resolve_route_surface("/"), "Landing");
        assert_eq!(resolve_route_surface("/track-job/55"), "Track Job");
    }

    #[test]
    fn title_words() {
        assert_eq!(to_title_words("standard-cycle"), "Standard Cycle");
        assert_eq!(to_title_words(":id"), "Id");
        assert_eq!(to_title_words("help_center"), "Help Center");
    }

    #[test]
    fn format_route_name_uses_last_segment() {
        assert_eq!(format_route_name("/"), "Landing");
        assert_eq!(format_route_name("/dashboard/dispatch"), "Dispatch");
        assert_eq!(format_route_name("/dashboard/jobs/abc"), "Abc");
    }
}

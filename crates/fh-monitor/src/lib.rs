//! Monitor model build pipeline for fieldhud.
//!
//! Converts an application route plus heterogeneous, partially-available
//! telemetry (job/client/triage counts, saved-calculation history, browser
//! navigation timing, auth/session state) into a single normalized
//! [`fh_model::MonitorPageModel`].
//!
//! Everything in this crate is synchronous, side-effect free and total
//! over its input domain: absent telemetry degrades to explicit `--`
//! placeholders, unknown routes resolve to the mandatory fallback family,
//! and no function here panics on partial input. Collaborators pre-fetch
//! all data and hand it in as plain values through
//! [`context::MonitorBuildContext`].
//!
//! The only public entry point external callers should use is
//! [`registry::build_monitor_model`]; the resolvers underneath are
//! exported for the shell and for tests.

pub mod aggregate;
pub mod builders;
pub mod context;
pub mod format;
pub mod presentation;
pub mod registry;
pub mod route;
pub mod site_metrics;
pub mod storyboard;
pub mod surface;

//! Model compiler: the single public entry point for external callers.
//!
//! Classification runs exactly once per build; the matched family's
//! builder receives the full context. Sub-resolvers are internal details
//! of the pipeline.

use fh_model::MonitorPageModel;

use crate::builders;
use crate::context::MonitorBuildContext;
use crate::route::{classify, RouteFamily};

/// Resolve the route family for a pathname. Exposed for consumers that
/// only need classification (e.g. deciding whether to collect ops
/// telemetry at all).
pub fn resolve_route_family(pathname: &str) -> RouteFamily {
    classify(pathname)
}

/// Build the monitor page model for `pathname`. The context's own
/// `pathname` field is overwritten so that every downstream lookup sees
/// the same value.
pub fn build_monitor_model(pathname: &str, mut context: MonitorBuildContext) -> MonitorPageModel {
    context.pathname = pathname.to_string();
    let family = classify(pathname);
    builders::build(family, &context)
}

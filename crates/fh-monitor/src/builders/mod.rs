//! Per-family model builders.
//!
//! One module per route family, each a pure function from
//! [`MonitorBuildContext`](crate::context::MonitorBuildContext) to
//! [`MonitorPageModel`]. Dispatch is a closed match over
//! [`RouteFamily`](crate::route::RouteFamily); there is no open
//! registration mechanism.

use fh_model::{MonitorDiagramNode, MonitorKpiItem, MonitorKpiValue, MonitorPageModel, MonitorTone};

use crate::context::MonitorBuildContext;
use crate::route::RouteFamily;

pub mod auth;
pub mod debug;
pub mod fallback;
pub mod ops;
pub mod public_content;
pub mod tools;

/// Build the page model for an already-classified route family.
pub fn build(family: RouteFamily, context: &MonitorBuildContext) -> MonitorPageModel {
    match family {
        RouteFamily::AuthOnboarding => auth::build(context),
        RouteFamily::Operations => ops::build(context),
        RouteFamily::ToolsEngineering => tools::build(context),
        RouteFamily::PublicContent => public_content::build(context),
        RouteFamily::DebugSystem => debug::build(context),
        RouteFamily::Fallback => fallback::build(context),
    }
}

pub(crate) fn kpi(
    id: &'static str,
    label: impl Into<String>,
    value: MonitorKpiValue,
    sublabel: Option<String>,
    tone: MonitorTone,
) -> MonitorKpiItem {
    MonitorKpiItem {
        id: id.to_string(),
        label: label.into(),
        value,
        sublabel,
        trend: None,
        tone,
    }
}

pub(crate) fn node(
    id: &'static str,
    label: &'static str,
    value: impl Into<String>,
    tone: MonitorTone,
) -> MonitorDiagramNode {
    MonitorDiagramNode {
        id: id.to_string(),
        label: label.to_string(),
        value: value.into(),
        tone,
    }
}

//! Shared monitor model types for fieldhud.
//!
//! This crate defines the render-ready page model the monitor pipeline
//! produces and the presentation shell consumes. Everything here is plain
//! data: models are rebuilt from scratch on every render pass and never
//! mutated in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MonitorDataState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorDataState {
    Ready,
    Loading,
    Empty,
    Error,
}

// ---------------------------------------------------------------------------
// MonitorTone
// ---------------------------------------------------------------------------

/// Status-severity classification attached to a KPI or diagram node.
/// Encodes status coloring semantics, not arbitrary style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorTone {
    #[default]
    Default,
    Success,
    Warning,
    Danger,
    Info,
}

impl MonitorTone {
    /// Short status word shown next to tone-colored values.
    pub fn label(&self) -> &'static str {
        match self {
            MonitorTone::Default => "Baseline",
            MonitorTone::Success => "Optimal",
            MonitorTone::Warning => "Attention",
            MonitorTone::Danger => "Risk",
            MonitorTone::Info => "Signal",
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation descriptor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorLayoutTemplate {
    Executive,
    Pipeline,
    Network,
    Tool,
    Auth,
    Public,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorAccent {
    Cyan,
    Blue,
    Amber,
    Emerald,
    Violet,
    Orange,
    Slate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorPattern {
    Grid,
    Radar,
    Circuit,
    Pipeline,
    Constellation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorIconKey {
    Activity,
    Gauge,
    Route,
    Siren,
    Briefcase,
    Users,
    Truck,
    Layers,
    ShieldCheck,
    HardHat,
    MapPin,
    Settings,
    Sparkles,
}

impl MonitorIconKey {
    /// Single-character glyph for terminal rendering.
    pub fn glyph(&self) -> &'static str {
        match self {
            MonitorIconKey::Activity => "~",
            MonitorIconKey::Gauge => "◉",
            MonitorIconKey::Route => "»",
            MonitorIconKey::Siren => "!",
            MonitorIconKey::Briefcase => "▣",
            MonitorIconKey::Users => "&",
            MonitorIconKey::Truck => "⇒",
            MonitorIconKey::Layers => "≡",
            MonitorIconKey::ShieldCheck => "✓",
            MonitorIconKey::HardHat => "^",
            MonitorIconKey::MapPin => "◎",
            MonitorIconKey::Settings => "*",
            MonitorIconKey::Sparkles => "+",
        }
    }
}

/// Visual theme for a route, independent of its data. Resolved once per
/// build from family defaults merged with per-route overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorPresentation {
    pub template: MonitorLayoutTemplate,
    pub accent: MonitorAccent,
    pub pattern: MonitorPattern,
    pub icon: MonitorIconKey,
    pub signature_label: String,
    pub mode_label: String,
    #[serde(default)]
    pub default_expanded: bool,
}

// ---------------------------------------------------------------------------
// KPI items
// ---------------------------------------------------------------------------

/// A KPI display value. `Missing` is the explicit "unknown" sentinel:
/// telemetry absence must never be indistinguishable from a measured zero,
/// so it renders as `--` rather than `0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonitorKpiValue {
    Count(u64),
    Text(String),
    Missing,
}

impl MonitorKpiValue {
    pub fn text(value: impl Into<String>) -> Self {
        MonitorKpiValue::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, MonitorKpiValue::Missing)
    }
}

impl std::fmt::Display for MonitorKpiValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorKpiValue::Count(n) => f.write_str(&group_thousands(*n)),
            MonitorKpiValue::Text(s) => f.write_str(s),
            MonitorKpiValue::Missing => f.write_str("--"),
        }
    }
}

/// Format a count with `,` thousands separators (`1234567` → `"1,234,567"`).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorKpiItem {
    pub id: String,
    pub label: String,
    pub value: MonitorKpiValue,
    #[serde(default)]
    pub sublabel: Option<String>,
    #[serde(default)]
    pub trend: Option<f64>,
    #[serde(default)]
    pub tone: MonitorTone,
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Ordered, time-bucketed counts. Points are always chronological and the
/// bucket count is fixed per call regardless of how sparse the input was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSeries {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub points: Vec<MonitorSeriesPoint>,
}

// ---------------------------------------------------------------------------
// Diagram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorDiagramNode {
    pub id: String,
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub tone: MonitorTone,
}

/// A small fixed-cardinality set of named counters for contextual display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorDiagramItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub nodes: Vec<MonitorDiagramNode>,
}

// ---------------------------------------------------------------------------
// MonitorPageModel
// ---------------------------------------------------------------------------

/// The pipeline's output and the presentation shell's input.
///
/// `hero` is the primary metric, carried as its own field rather than by
/// position in `kpis`; `kpis` holds the supporting metrics only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorPageModel {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub state: MonitorDataState,
    #[serde(default)]
    pub source_label: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub empty_message: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub presentation: MonitorPresentation,
    pub hero: MonitorKpiItem,
    pub kpis: Vec<MonitorKpiItem>,
    #[serde(default)]
    pub series: Option<MonitorSeries>,
    #[serde(default)]
    pub diagram: Option<MonitorDiagramItem>,
}

impl MonitorPageModel {
    /// Hero followed by the supporting KPIs, in display order.
    pub fn all_kpis(&self) -> impl Iterator<Item = &MonitorKpiItem> {
        std::iter::once(&self.hero).chain(self.kpis.iter())
    }

    /// Look up a KPI (hero included) by id.
    pub fn kpi(&self, id: &str) -> Option<&MonitorKpiItem> {
        self.all_kpis().find(|kpi| kpi.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn kpi_value_display() {
        assert_eq!(MonitorKpiValue::Count(1200).to_string(), "1,200");
        assert_eq!(MonitorKpiValue::text("42%").to_string(), "42%");
        assert_eq!(MonitorKpiValue::Missing.to_string(), "--");
    }

    #[test]
    fn kpi_value_serializes_untagged() {
        assert_eq!(
            serde_json::to_string(&MonitorKpiValue::Count(3)).unwrap(),
            "3"
        );
        assert_eq!(
            serde_json::to_string(&MonitorKpiValue::text("Guest")).unwrap(),
            "\"Guest\""
        );
        assert_eq!(
            serde_json::to_string(&MonitorKpiValue::Missing).unwrap(),
            "null"
        );
        let back: MonitorKpiValue = serde_json::from_str("null").unwrap();
        assert!(back.is_missing());
    }

    #[test]
    fn tone_labels_are_stable() {
        assert_eq!(MonitorTone::Default.label(), "Baseline");
        assert_eq!(MonitorTone::Danger.label(), "Risk");
    }
}

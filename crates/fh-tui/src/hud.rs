//! Pure HUD derivations over a built page model.
//!
//! Non-trivial numeric/geometric computation only -- no rendering. The
//! widgets consume these models; tests pin the exact boundaries.

use fh_model::{
    MonitorKpiItem, MonitorKpiValue, MonitorLayoutTemplate, MonitorPageModel, MonitorSeriesPoint,
    MonitorTone,
};

// ---------------------------------------------------------------------------
// Hero value decomposition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroValueParts {
    pub prefix: String,
    pub value: String,
    pub unit: Option<String>,
}

fn is_numberish(ch: char) -> bool {
    ch.is_ascii_digit() || ch == ',' || ch == '.'
}

fn split_currency(raw: &str) -> Option<HeroValueParts> {
    let rest = raw.strip_prefix('$')?;
    let number_end = rest.find(|ch: char| !is_numberish(ch)).unwrap_or(rest.len());
    if number_end == 0 {
        return None;
    }
    let tail = rest[number_end..].trim();
    Some(HeroValueParts {
        prefix: "$".to_string(),
        value: rest[..number_end].to_string(),
        unit: (!tail.is_empty()).then(|| tail.to_string()),
    })
}

fn split_percent(raw: &str) -> Option<HeroValueParts> {
    let body = raw.strip_suffix('%')?;
    let digits = body.strip_prefix('-').unwrap_or(body);
    if digits.is_empty() || !digits.chars().all(is_numberish) {
        return None;
    }
    Some(HeroValueParts {
        prefix: String::new(),
        value: body.to_string(),
        unit: Some("%".to_string()),
    })
}

fn split_number_unit(raw: &str) -> Option<HeroValueParts> {
    let body = raw.strip_prefix('-').unwrap_or(raw);
    let number_end = body.find(|ch: char| !is_numberish(ch))?;
    if number_end == 0 {
        return None;
    }
    let tail = &body[number_end..];
    let unit = tail.trim_start();
    if unit.is_empty()
        || !unit.chars().all(|ch| ch.is_ascii_alphabetic())
        || !tail[..tail.len() - unit.len()].chars().all(char::is_whitespace)
    {
        return None;
    }
    let sign = if raw.starts_with('-') { "-" } else { "" };
    Some(HeroValueParts {
        prefix: String::new(),
        value: format!("{sign}{}", &body[..number_end]),
        unit: Some(unit.to_string()),
    })
}

/// Decompose a formatted display value into prefix/value/unit via three
/// ordered parse rules: currency-prefixed, percent-suffixed, generic
/// unit-suffixed. Anything else passes through opaque; empty input
/// renders as the placeholder.
pub fn split_hero_value(value: &MonitorKpiValue) -> HeroValueParts {
    let raw = value.to_string().trim().to_string();
    if raw.is_empty() {
        return HeroValueParts {
            prefix: String::new(),
            value: "--".to_string(),
            unit: None,
        };
    }

    split_currency(&raw)
        .or_else(|| split_percent(&raw))
        .or_else(|| split_number_unit(&raw))
        .unwrap_or(HeroValueParts {
            prefix: String::new(),
            value: raw,
            unit: None,
        })
}

// ---------------------------------------------------------------------------
// Sparkline geometry
// ---------------------------------------------------------------------------

/// Sparkline viewbox dimensions.
pub const SPARK_WIDTH: f64 = 100.0;
pub const SPARK_HEIGHT: f64 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SparklineModel {
    pub d: String,
    pub last_x: f64,
    pub last_y: f64,
    pub last_value: f64,
    pub prev_value: f64,
    pub delta: f64,
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub point_count: usize,
}

/// Map series points into path geometry inside the fixed viewbox.
///
/// Returns `None` for fewer than two points; callers omit the sparkline
/// entirely rather than drawing a degenerate single-point line. A flat
/// series keeps a span of 1 so the mapping never divides by zero.
pub fn build_sparkline(points: &[MonitorSeriesPoint]) -> Option<SparklineModel> {
    if points.len() < 2 {
        return None;
    }

    let values: Vec<f64> = points.iter().map(|point| point.value).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if max - min == 0.0 { 1.0 } else { max - min };
    let point_count = values.len();
    let sum: f64 = values.iter().sum();
    let last_value = values[point_count - 1];
    let prev_value = values[point_count - 2];

    let coords: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = (idx as f64 / (point_count - 1) as f64) * SPARK_WIDTH;
            let y = (1.0 - (value - min) / span) * SPARK_HEIGHT;
            (x, y)
        })
        .collect();

    let d = coords
        .iter()
        .enumerate()
        .map(|(idx, (x, y))| {
            format!("{} {:.2} {:.2}", if idx == 0 { "M" } else { "L" }, x, y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let (last_x, last_y) = coords[coords.len() - 1];

    Some(SparklineModel {
        d,
        last_x,
        last_y,
        last_value,
        prev_value,
        delta: last_value - prev_value,
        min,
        max,
        sum,
        point_count,
    })
}

// ---------------------------------------------------------------------------
// Queue-health readiness
// ---------------------------------------------------------------------------

/// Mission KPI ids checked by the readiness bar: `(id, label, kpi_id)`.
pub const MISSIONS: [(&str, &str, &str); 5] = [
    ("dispatch", "Dispatch Queue", "dispatch-queue"),
    ("unassigned", "Unassigned", "dispatch-unassigned"),
    ("triage", "New Leads", "triage-new"),
    ("scheduled", "Scheduled Today", "scheduled-today"),
    ("inflight", "In Flight", "inflight-jobs"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessTier {
    Waiting,
    Clear,
    Busy,
    Critical,
}

impl ReadinessTier {
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessTier::Waiting => "WAITING",
            ReadinessTier::Clear => "CLEAR",
            ReadinessTier::Busy => "BUSY",
            ReadinessTier::Critical => "CRITICAL",
        }
    }

    pub fn tone(&self) -> MonitorTone {
        match self {
            ReadinessTier::Waiting => MonitorTone::Info,
            ReadinessTier::Clear => MonitorTone::Success,
            ReadinessTier::Busy => MonitorTone::Warning,
            ReadinessTier::Critical => MonitorTone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissionStatus {
    pub id: &'static str,
    pub label: &'static str,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessModel {
    pub tier: ReadinessTier,
    pub missions: Vec<MissionStatus>,
    /// Missions with a known (numeric) count.
    pub known: usize,
    /// Known missions sitting at exactly zero.
    pub cleared: usize,
}

/// Parse a display value back into a plain number. `--`, free text and
/// empty values are unknown, never zero.
pub fn to_nullable_number(value: &MonitorKpiValue) -> Option<f64> {
    match value {
        MonitorKpiValue::Count(n) => Some(*n as f64),
        MonitorKpiValue::Missing => None,
        MonitorKpiValue::Text(text) => {
            let raw = text.trim();
            if raw.is_empty() || raw == "--" {
                return None;
            }
            let cleaned = raw.replace(',', "");
            let digits = cleaned.strip_prefix('-').unwrap_or(&cleaned);
            let mut dots = 0usize;
            for ch in digits.chars() {
                match ch {
                    '0'..='9' => {}
                    '.' => dots += 1,
                    _ => return None,
                }
            }
            if digits.is_empty() || digits == "." || dots > 1 {
                return None;
            }
            cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
        }
    }
}

/// Classify overall queue health from the hero workload plus the fixed
/// mission KPI set. Boundaries are constants: unknown hero waits, zero is
/// clear, up to six is busy, seven or more is critical.
pub fn queue_readiness(model: &MonitorPageModel) -> ReadinessModel {
    let hero_workload = to_nullable_number(&model.hero.value);

    let missions: Vec<MissionStatus> = MISSIONS
        .iter()
        .map(|&(id, label, kpi_id)| MissionStatus {
            id,
            label,
            value: model.kpi(kpi_id).and_then(|kpi| to_nullable_number(&kpi.value)),
        })
        .collect();

    let known = missions.iter().filter(|m| m.value.is_some()).count();
    let cleared = missions.iter().filter(|m| m.value == Some(0.0)).count();

    let tier = match hero_workload {
        None => ReadinessTier::Waiting,
        Some(n) if n <= 0.0 => ReadinessTier::Clear,
        Some(n) if n <= 6.0 => ReadinessTier::Busy,
        Some(_) => ReadinessTier::Critical,
    };

    ReadinessModel {
        tier,
        missions,
        known,
        cleared,
    }
}

// ---------------------------------------------------------------------------
// Metric glyphs and exec ops flow
// ---------------------------------------------------------------------------

/// Terminal glyph for a KPI, resolved from its id first and its tone as a
/// fallback.
pub fn metric_glyph(kpi: &MonitorKpiItem) -> &'static str {
    let id = kpi.id.to_ascii_lowercase();
    let id_has = |needles: &[&str]| needles.iter().any(|needle| id.contains(needle));

    if id_has(&["open-work", "jobs", "workload", "dispatch"]) {
        return "▣";
    }
    if id_has(&["lead", "triage"]) {
        return "~";
    }
    if id.contains("client") {
        return "&";
    }
    if id.contains("tech") {
        return "^";
    }
    if id_has(&["ttfb", "dom", "load", "render"]) {
        return "◔";
    }
    if id.contains("revenue") || kpi.value.to_string().trim().starts_with('$') {
        return "$";
    }
    if id_has(&["role", "session", "operator"]) {
        return "@";
    }
    if id_has(&["route", "path"]) {
        return "»";
    }

    match kpi.tone {
        MonitorTone::Success => "+",
        MonitorTone::Warning => "!",
        MonitorTone::Danger => "x",
        MonitorTone::Info => "i",
        MonitorTone::Default => "~",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FlowStage {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub tone: MonitorTone,
}

/// Stage strip for the executive surface: queued → en-route → on-site →
/// done, plus the technician roster. Only produced for executive-template
/// models that actually carry a job-stage diagram.
pub fn exec_ops_flow(model: &MonitorPageModel) -> Option<Vec<FlowStage>> {
    if model.presentation.template != MonitorLayoutTemplate::Executive {
        return None;
    }
    let nodes = model.diagram.as_ref()?.nodes.as_slice();
    let find = |id: &str| nodes.iter().find(|node| node.id == id);
    find("queued")?;

    let mut stages: Vec<FlowStage> = [
        ("queued", "Queued"),
        ("en-route", "En Route"),
        ("on-site", "On Site"),
        ("done", "Done"),
    ]
    .into_iter()
    .map(|(id, label)| match find(id) {
        Some(node) => FlowStage {
            id,
            label,
            value: node.value.clone(),
            tone: node.tone,
        },
        None => FlowStage {
            id,
            label,
            value: "--".to_string(),
            tone: MonitorTone::Default,
        },
    })
    .collect();

    stages.push(FlowStage {
        id: "techs",
        label: "Techs",
        value: model
            .kpi("techs")
            .map(|kpi| kpi.value.to_string())
            .unwrap_or_else(|| "--".to_string()),
        tone: MonitorTone::Info,
    });

    Some(stages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: f64) -> MonitorSeriesPoint {
        MonitorSeriesPoint {
            label: String::new(),
            value,
        }
    }

    #[test]
    fn splits_currency_values() {
        let parts = split_hero_value(&MonitorKpiValue::text("$1,234"));
        assert_eq!(parts.prefix, "$");
        assert_eq!(parts.value, "1,234");
        assert_eq!(parts.unit, None);
    }

    #[test]
    fn splits_percent_values() {
        let parts = split_hero_value(&MonitorKpiValue::text("42%"));
        assert_eq!(parts.prefix, "");
        assert_eq!(parts.value, "42");
        assert_eq!(parts.unit.as_deref(), Some("%"));
    }

    #[test]
    fn splits_unit_suffixed_values() {
        let parts = split_hero_value(&MonitorKpiValue::text("15 ms"));
        assert_eq!(parts.value, "15");
        assert_eq!(parts.unit.as_deref(), Some("ms"));

        let parts = split_hero_value(&MonitorKpiValue::text("880ms"));
        assert_eq!(parts.value, "880");
        assert_eq!(parts.unit.as_deref(), Some("ms"));
    }

    #[test]
    fn placeholder_and_opaque_values_pass_through() {
        let parts = split_hero_value(&MonitorKpiValue::Missing);
        assert_eq!(parts.prefix, "");
        assert_eq!(parts.value, "--");
        assert_eq!(parts.unit, None);

        let parts = split_hero_value(&MonitorKpiValue::text("Guest"));
        assert_eq!(parts.value, "Guest");
        assert_eq!(parts.unit, None);
    }

    #[test]
    fn counts_format_with_separators_before_splitting() {
        let parts = split_hero_value(&MonitorKpiValue::Count(1_200));
        assert_eq!(parts.value, "1,200");
    }

    #[test]
    fn sparkline_requires_two_points() {
        assert!(build_sparkline(&[]).is_none());
        assert!(build_sparkline(&[point(5.0)]).is_none());
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let spark = build_sparkline(&[point(1.0), point(1.0)]).unwrap();
        assert_eq!(spark.min, 1.0);
        assert_eq!(spark.max, 1.0);
        assert!(spark.last_y.is_finite());
        // With span forced to 1 a flat series hugs the bottom edge.
        assert_eq!(spark.last_y, SPARK_HEIGHT);
        assert_eq!(spark.delta, 0.0);
    }

    #[test]
    fn sparkline_geometry_spans_the_viewbox() {
        let spark = build_sparkline(&[point(0.0), point(2.0), point(1.0), point(4.0)]).unwrap();
        assert_eq!(spark.point_count, 4);
        assert_eq!(spark.last_x, SPARK_WIDTH);
        // Max value maps to the top edge.
        assert_eq!(spark.last_y, 0.0);
        assert_eq!(spark.delta, 3.0);
        assert_eq!(spark.sum, 7.0);
        assert!(spark.d.starts_with("M 0.00 "));
        assert!(spark.d.contains("L 100.00 0.00"));
    }

    #[test]
    fn metric_glyphs_resolve_by_id_then_tone() {
        let kpi = |id: &str, tone: MonitorTone| MonitorKpiItem {
            id: id.to_string(),
            label: String::new(),
            value: MonitorKpiValue::Count(1),
            sublabel: None,
            trend: None,
            tone,
        };
        assert_eq!(metric_glyph(&kpi("open-work", MonitorTone::Default)), "▣");
        assert_eq!(metric_glyph(&kpi("triage-new", MonitorTone::Default)), "~");
        assert_eq!(metric_glyph(&kpi("ttfb", MonitorTone::Default)), "◔");
        assert_eq!(metric_glyph(&kpi("session", MonitorTone::Default)), "@");
        assert_eq!(metric_glyph(&kpi("something-else", MonitorTone::Danger)), "x");

        let dollar = MonitorKpiItem {
            id: "misc".to_string(),
            label: String::new(),
            value: MonitorKpiValue::text("$1,200"),
            sublabel: None,
            trend: None,
            tone: MonitorTone::Default,
        };
        assert_eq!(metric_glyph(&dollar), "$");
    }

    #[test]
    fn nullable_number_parsing() {
        assert_eq!(to_nullable_number(&MonitorKpiValue::Count(8)), Some(8.0));
        assert_eq!(to_nullable_number(&MonitorKpiValue::Missing), None);
        assert_eq!(to_nullable_number(&MonitorKpiValue::text("--")), None);
        assert_eq!(to_nullable_number(&MonitorKpiValue::text("1,234")), Some(1234.0));
        assert_eq!(to_nullable_number(&MonitorKpiValue::text("-3.5")), Some(-3.5));
        assert_eq!(to_nullable_number(&MonitorKpiValue::text("15 ms")), None);
        assert_eq!(to_nullable_number(&MonitorKpiValue::text("")), None);
    }
}

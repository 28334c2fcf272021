use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use fh_model::{MonitorKpiItem, MonitorPageModel};

use crate::hud::{metric_glyph, split_hero_value, SparklineModel};
use crate::widgets::tone_color;

/// Hero card plus supporting KPI cards in one row (four in compact
/// density, seven when expanded).
pub fn render(
    frame: &mut Frame,
    area: Rect,
    model: &MonitorPageModel,
    spark: Option<&SparklineModel>,
    expanded: bool,
) {
    let supporting = model.kpis.len().min(if expanded { 7 } else { 4 });
    let mut constraints = vec![Constraint::Percentage(28)];
    let rest = 72 / supporting.max(1) as u16;
    for _ in 0..supporting {
        constraints.push(Constraint::Percentage(rest));
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    render_hero_card(frame, cols[0], model, spark);
    for (i, kpi) in model.kpis.iter().take(supporting).enumerate() {
        render_kpi_card(frame, cols[i + 1], kpi);
    }
}

fn render_hero_card(
    frame: &mut Frame,
    area: Rect,
    model: &MonitorPageModel,
    spark: Option<&SparklineModel>,
) {
    let hero = &model.hero;
    let color = tone_color(hero.tone);
    let parts = split_hero_value(&hero.value);

    let mut value_spans = vec![
        Span::styled(parts.prefix, Style::default().fg(color)),
        Span::styled(
            parts.value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(unit) = parts.unit {
        value_spans.push(Span::styled(format!(" {unit}"), Style::default().fg(color)));
    }
    if let Some(spark) = spark {
        let (arrow, delta) = if spark.delta > 0.0 {
            ("▲", format!("+{}", spark.delta))
        } else if spark.delta < 0.0 {
            ("▼", format!("{}", spark.delta))
        } else {
            ("·", "0".to_string())
        };
        value_spans.push(Span::raw("  "));
        value_spans.push(Span::styled(
            format!("{arrow} {delta}"),
            Style::default().fg(tone_color(hero.tone)),
        ));
    }

    let mut lines = vec![Line::from(value_spans)];
    if let Some(sublabel) = &hero.sublabel {
        lines.push(Line::from(Span::styled(
            sublabel.clone(),
            Style::default().fg(ratatui::style::Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        hero.tone.label(),
        Style::default().fg(color),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} {} ", metric_glyph(hero), hero.label))
        .border_style(Style::default().fg(color));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_kpi_card(frame: &mut Frame, area: Rect, kpi: &MonitorKpiItem) {
    let color = tone_color(kpi.tone);
    let mut lines = vec![Line::from(Span::styled(
        kpi.value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(sublabel) = &kpi.sublabel {
        lines.push(Line::from(Span::styled(
            sublabel.clone(),
            Style::default().fg(ratatui::style::Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} {} ", metric_glyph(kpi), kpi.label))
        .border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Left),
        area,
    );
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Sparkline};
use ratatui::Frame;

use fh_model::MonitorSeries;

use crate::hud::SparklineModel;

/// Series panel: bucket bars plus the derived min/max/delta strip.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    series: Option<&MonitorSeries>,
    spark: Option<&SparklineModel>,
    accent: Color,
) {
    let title = series.map(|s| s.title.as_str()).unwrap_or("Trend");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(series) = series else {
        frame.render_widget(
            Paragraph::new("No series for this surface."),
            inner,
        );
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // bars
            Constraint::Length(1), // labels
            Constraint::Length(1), // derived strip
        ])
        .split(inner);

    let data: Vec<u64> = series
        .points
        .iter()
        .map(|point| point.value.max(0.0).round() as u64)
        .collect();
    frame.render_widget(
        Sparkline::default()
            .data(&data)
            .style(Style::default().fg(accent)),
        rows[0],
    );

    let labels = series
        .points
        .iter()
        .map(|point| point.label.clone())
        .collect::<Vec<_>>()
        .join("  ");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            labels,
            Style::default().fg(Color::DarkGray),
        ))),
        rows[1],
    );

    let derived = match spark {
        Some(spark) => format!(
            "min {}  max {}  last {}  Δ {:+}  ({} {})",
            spark.min,
            spark.max,
            spark.last_value,
            spark.delta,
            spark.sum,
            series.unit.as_deref().unwrap_or("points"),
        ),
        None => "Not enough points for a trend line.".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            derived,
            Style::default().fg(Color::Gray),
        ))),
        rows[2],
    );
}

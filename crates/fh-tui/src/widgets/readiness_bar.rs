use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::hud::{FlowStage, ReadinessModel};
use crate::widgets::tone_color;

/// Queue-health strip: tier badge, one segment per mission, the
/// cleared/known counter, and (on executive surfaces) the ops-flow stage
/// line.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    readiness: &ReadinessModel,
    flow: Option<&[FlowStage]>,
) {
    let tier_color = tone_color(readiness.tier.tone());

    let mut segments: Vec<Span> = vec![
        Span::raw("Queue Health  "),
        Span::styled(
            readiness.tier.label(),
            Style::default().fg(tier_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];
    for mission in &readiness.missions {
        let (glyph, color) = match mission.value {
            None => ("░", Color::DarkGray),
            Some(count) if count == 0.0 => ("█", Color::Green),
            Some(_) => ("█", Color::Yellow),
        };
        segments.push(Span::styled(format!("{glyph}{glyph} "), Style::default().fg(color)));
    }

    let counter = if readiness.known == 0 {
        "--  Waiting for signals".to_string()
    } else {
        format!("{}/{}  queues clear", readiness.cleared, readiness.known)
    };

    let mut lines = vec![
        Line::from(segments),
        Line::from(Span::styled(counter, Style::default().fg(Color::Gray))),
    ];

    if let Some(stages) = flow {
        let mut spans: Vec<Span> = vec![Span::raw("Ops Flow  ")];
        for (i, stage) in stages.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" → ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                format!("{} {}", stage.value, stage.label),
                Style::default().fg(tone_color(stage.tone)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(tier_color));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use fh_model::MonitorDataState;

use crate::app::App;
use crate::hud::{build_sparkline, exec_ops_flow, queue_readiness};
use crate::widgets::{accent_color, diagram_panel, kpi_cards, readiness_bar, trend_chart};

pub fn render(frame: &mut Frame, app: &App) {
    let model = &app.model;
    let accent = accent_color(model.presentation.accent);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // header
            Constraint::Length(5), // KPI cards
            Constraint::Min(8),    // chart + diagram
            Constraint::Length(5), // readiness + ops flow
            Constraint::Length(1), // key help
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app, accent);

    let spark = model
        .series
        .as_ref()
        .and_then(|series| build_sparkline(&series.points));
    kpi_cards::render(frame, chunks[1], model, spark.as_ref(), app.expanded);

    match model.state {
        MonitorDataState::Empty => render_notice(
            frame,
            chunks[2],
            model.empty_message.as_deref().unwrap_or("No data yet."),
            Color::DarkGray,
        ),
        MonitorDataState::Error => render_notice(
            frame,
            chunks[2],
            model.error_message.as_deref().unwrap_or("Monitor error."),
            Color::Red,
        ),
        _ => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[2]);
            trend_chart::render(frame, cols[0], model.series.as_ref(), spark.as_ref(), accent);
            diagram_panel::render(frame, cols[1], model.diagram.as_ref());
        }
    }

    let flow = exec_ops_flow(model);
    readiness_bar::render(frame, chunks[3], &queue_readiness(model), flow.as_deref());
    render_key_help(frame, chunks[4]);

    if app.show_help {
        render_help_modal(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, accent: Color) {
    let model = &app.model;
    let presentation = &model.presentation;

    let state_label = match model.state {
        MonitorDataState::Ready => ("READY", Color::Green),
        MonitorDataState::Loading => ("LOADING", Color::Yellow),
        MonitorDataState::Empty => ("EMPTY", Color::DarkGray),
        MonitorDataState::Error => ("ERROR", Color::Red),
    };

    let mut title_line = vec![
        Span::styled(
            format!("{} ", presentation.icon.glyph()),
            Style::default().fg(accent),
        ),
        Span::styled(
            model.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", presentation.mode_label),
            Style::default().fg(accent),
        ),
        Span::raw("  "),
        Span::styled(state_label.0, Style::default().fg(state_label.1)),
    ];
    if let Some(updated) = model.updated_at {
        title_line.push(Span::styled(
            format!("  updated {}", updated.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut lines = vec![Line::from(title_line), Line::from(model.subtitle.clone())];
    if let Some(source) = &model.source_label {
        lines.push(Line::from(Span::styled(
            format!("src: {source}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " {}  ·  {} ",
            presentation.signature_label,
            app.route()
        ))
        .border_style(Style::default().fg(accent));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_notice(frame: &mut Frame, area: Rect, message: &str, color: Color) {
    let block = Block::default().borders(Borders::ALL).border_style(Style::default().fg(color));
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .block(block),
        area,
    );
}

fn render_key_help(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " ←/→ route   r refresh   e density   ? help   q quit",
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn render_help_modal(frame: &mut Frame) {
    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("fieldhud monitor"),
        Line::from(""),
        Line::from("←/h, →/l, Tab   cycle the route table"),
        Line::from("r               rebuild the model now"),
        Line::from("e               toggle compact/expanded density"),
        Line::from("?               toggle this help"),
        Line::from("q, Esc          quit"),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help ")),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use fh_model::MonitorDiagramItem;

use crate::widgets::tone_color;

/// Context diagram: the fixed set of named counters for this surface.
pub fn render(frame: &mut Frame, area: Rect, diagram: Option<&MonitorDiagramItem>) {
    let title = diagram.map(|d| d.title.as_str()).unwrap_or("Context");
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "));

    let Some(diagram) = diagram else {
        frame.render_widget(block, area);
        return;
    };

    let items: Vec<ListItem> = diagram
        .nodes
        .iter()
        .map(|node| {
            let color = tone_color(node.tone);
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>10} ", node.value),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(node.label.clone()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

use ratatui::style::Color;

use fh_model::{MonitorAccent, MonitorTone};

pub mod diagram_panel;
pub mod kpi_cards;
pub mod readiness_bar;
pub mod trend_chart;

pub fn tone_color(tone: MonitorTone) -> Color {
    match tone {
        MonitorTone::Default => Color::Gray,
        MonitorTone::Success => Color::Green,
        MonitorTone::Warning => Color::Yellow,
        MonitorTone::Danger => Color::Red,
        MonitorTone::Info => Color::Cyan,
    }
}

pub fn accent_color(accent: MonitorAccent) -> Color {
    match accent {
        MonitorAccent::Cyan => Color::Cyan,
        MonitorAccent::Blue => Color::Blue,
        MonitorAccent::Amber => Color::Yellow,
        MonitorAccent::Emerald => Color::Green,
        MonitorAccent::Violet => Color::Magenta,
        MonitorAccent::Orange => Color::LightRed,
        MonitorAccent::Slate => Color::DarkGray,
    }
}

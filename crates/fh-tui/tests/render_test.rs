//! Render tests: draw the HUD for every route in the table into a test
//! backend and verify the expected surfaces appear.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use chrono::Utc;

// Include binary-crate modules via path for testing.
#[path = "../src/app.rs"]
mod app;
#[path = "../src/demo.rs"]
mod demo;
#[path = "../src/hud.rs"]
mod hud;
#[path = "../src/ui.rs"]
mod ui;
#[path = "../src/widgets/mod.rs"]
mod widgets;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn demo_app(route: &str) -> app::App {
    app::App::new(demo::demo_context(Utc::now()), route, false)
}

fn render_to_string(app: &app::App) -> String {
    let backend = TestBackend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut lines = Vec::new();
    for y in area.y..area.y + area.height {
        let mut line = String::new();
        for x in area.x..area.x + area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        lines.push(line);
    }
    lines.join("\n")
}

#[test]
fn dashboard_renders_executive_surface() {
    let output = render_to_string(&demo_app("/dashboard"));
    assert!(output.contains("Executive Operations Board"));
    assert!(output.contains("Open Workload"));
    assert!(output.contains("Queue Health"));
    assert!(output.contains("BUSY") || output.contains("CRITICAL") || output.contains("CLEAR"));
}

#[test]
fn every_route_in_the_table_renders() {
    for route in app::ROUTES {
        let app = demo_app(route);
        let output = render_to_string(&app);
        assert!(
            output.contains(app.model.title.as_str()),
            "missing title for {route}: {}",
            app.model.title
        );
    }
}

#[test]
fn tools_route_renders_run_kpis() {
    let output = render_to_string(&demo_app("/tools/standard-cycle"));
    assert!(output.contains("Standard Cycle Analyzer"));
    assert!(output.contains("Cycle Runs"));
}

#[test]
fn fallback_route_renders_system_monitor() {
    let output = render_to_string(&demo_app("/uncharted/surface"));
    assert!(output.contains("System Monitor"));
    assert!(output.contains("WAITING"));
}

#[test]
fn help_modal_toggles() {
    let mut app = demo_app("/dashboard");
    app.on_key(key(KeyCode::Char('?')));
    let output = render_to_string(&app);
    assert!(output.contains("cycle the route table"));
}

#[test]
fn route_cycling_renders_next_surface() {
    let mut app = demo_app("/dashboard");
    app.on_key(key(KeyCode::Right));
    let output = render_to_string(&app);
    assert!(output.contains("Dispatch Coordination Board"));
}

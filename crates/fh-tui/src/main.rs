mod app;
mod demo;
mod hud;
mod settings;
mod ui;
mod widgets;

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use chrono::Utc;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use fh_monitor::context::MonitorBuildContext;
use fh_monitor::registry::build_monitor_model;

use crate::app::App;
use crate::settings::SettingsManager;

fn main() -> Result<()> {
    // Parse CLI args (simple, no clap dependency).
    let args: Vec<String> = std::env::args().collect();
    let headless = args.iter().any(|a| a == "--headless");
    let json_logs = args.iter().any(|a| a == "--json-logs");
    let arg_value = |flag: &str| {
        args.iter()
            .position(|a| a == flag)
            .and_then(|i| args.get(i + 1))
            .cloned()
    };
    let context_path = arg_value("--context").map(PathBuf::from);
    let route_arg = arg_value("--route");

    let log_format = if json_logs {
        fh_telemetry::logging::LogFormat::Json
    } else {
        fh_telemetry::logging::LogFormat::Human
    };
    fh_telemetry::logging::init("fh-tui", "warn", log_format);

    let settings = SettingsManager::default_path().load_or_default();
    let route = route_arg.unwrap_or_else(|| settings.default_route.clone());

    let context = match &context_path {
        Some(path) => load_context(path)
            .with_context(|| format!("loading context snapshot {}", path.display()))?,
        None => demo::demo_context(Utc::now()),
    };

    if headless {
        return run_headless(&route, context);
    }

    // Set up panic hook to restore terminal on panic.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let result = run(&route, context, context_path, settings.refresh_secs, settings.expanded());

    restore_terminal()?;
    result
}

fn load_context(path: &Path) -> Result<MonitorBuildContext> {
    let text = std::fs::read_to_string(path)?;
    let context: MonitorBuildContext = serde_json::from_str(&text)?;
    Ok(context)
}

/// Spawn the background context-file reload thread, returns a receiver.
fn spawn_refresh(
    path: Option<PathBuf>,
    refresh_secs: u64,
) -> Option<flume::Receiver<MonitorBuildContext>> {
    let path = path?;
    let (tx, rx) = flume::unbounded::<MonitorBuildContext>();
    std::thread::spawn(move || loop {
        std::thread::sleep(Duration::from_secs(refresh_secs));
        match load_context(&path) {
            Ok(context) => {
                if tx.send(context).is_err() {
                    break;
                }
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "context reload failed");
            }
        }
    });
    Some(rx)
}

/// Run the interactive HUD with the standard crossterm backend.
fn run(
    route: &str,
    context: MonitorBuildContext,
    context_path: Option<PathBuf>,
    refresh_secs: u64,
    expanded: bool,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(context, route, expanded);
    let data_rx = spawn_refresh(context_path, refresh_secs);

    loop {
        if let Some(ref rx) = data_rx {
            while let Ok(context) = rx.try_recv() {
                app.apply_context(context);
            }
        }

        terminal.draw(|frame| {
            ui::render(frame, &app);
        })?;

        if ct_event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = ct_event::read()? {
                app.on_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Headless mode: build the model for one route and print it as JSON.
/// No terminal rendering -- for scripting and automation.
///
/// Usage: `fh-tui --headless --route /dashboard [--context snapshot.json]`
fn run_headless(route: &str, context: MonitorBuildContext) -> Result<()> {
    let model = build_monitor_model(route, context);
    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen)?;
    Ok(())
}

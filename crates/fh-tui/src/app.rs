use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

use fh_model::MonitorPageModel;
use fh_monitor::context::MonitorBuildContext;
use fh_monitor::registry::build_monitor_model;

/// Route table the HUD cycles through; every family is represented,
/// including a deliberately unknown path for the fallback surface.
pub const ROUTES: &[&str] = &[
    "/dashboard",
    "/dashboard/dispatch",
    "/dashboard/triage",
    "/dashboard/fleet",
    "/dashboard/jobs",
    "/dashboard/clients",
    "/tech",
    "/portal",
    "/history",
    "/profile",
    "/settings/team",
    "/tools/standard-cycle",
    "/tools/refrigerant-comparison",
    "/tools/cascade-cycle",
    "/estimate-builder",
    "/troubleshooting",
    "/ai/pattern-insights",
    "/",
    "/pricing",
    "/blog/field-notes",
    "/signin",
    "/invite/demo-team",
    "/stripe-debug",
    "/uncharted/surface",
];

pub struct App {
    pub selected: usize,
    /// Sticky density preference from settings; per-route presentation can
    /// raise (never lower) the effective density on arrival.
    pub default_expanded: bool,
    pub expanded: bool,
    pub show_help: bool,
    pub should_quit: bool,
    pub context: MonitorBuildContext,
    pub model: MonitorPageModel,
}

impl App {
    pub fn new(context: MonitorBuildContext, default_route: &str, expanded: bool) -> Self {
        let selected = ROUTES
            .iter()
            .position(|route| *route == default_route)
            .unwrap_or(0);
        let model = build_monitor_model(ROUTES[selected], context.clone());
        Self {
            selected,
            default_expanded: expanded,
            expanded: expanded || model.presentation.default_expanded,
            show_help: false,
            should_quit: false,
            context,
            model,
        }
    }

    pub fn route(&self) -> &'static str {
        ROUTES[self.selected]
    }

    /// Rebuild the model from scratch for the current route. The whole
    /// model is disposable; nothing is patched in place.
    pub fn rebuild(&mut self) {
        self.context.now = Utc::now();
        self.model = build_monitor_model(self.route(), self.context.clone());
    }

    fn enter_route(&mut self) {
        self.rebuild();
        self.expanded = self.default_expanded || self.model.presentation.default_expanded;
    }

    /// Swap in a freshly-loaded context snapshot (file refresh thread).
    pub fn apply_context(&mut self, context: MonitorBuildContext) {
        self.context = context;
        self.rebuild();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if self.show_help {
            match key.code {
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = (self.selected + ROUTES.len() - 1) % ROUTES.len();
                self.enter_route();
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.selected = (self.selected + 1) % ROUTES.len();
                self.enter_route();
            }
            KeyCode::Char('e') => self.expanded = !self.expanded,
            KeyCode::Char('r') => self.rebuild(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_context;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn route_cycling_wraps_and_rebuilds() {
        let mut app = App::new(demo_context(Utc::now()), "/dashboard", false);
        assert_eq!(app.route(), "/dashboard");
        assert_eq!(app.model.id, "ops-monitor");

        app.on_key(key(KeyCode::Left));
        assert_eq!(app.route(), "/uncharted/surface");
        assert_eq!(app.model.id, "fallback-monitor");

        app.on_key(key(KeyCode::Right));
        assert_eq!(app.route(), "/dashboard");
    }

    #[test]
    fn unknown_default_route_falls_back_to_first_entry() {
        let app = App::new(demo_context(Utc::now()), "/not-a-route", false);
        assert_eq!(app.route(), "/dashboard");
    }

    #[test]
    fn help_modal_swallows_navigation() {
        let mut app = App::new(demo_context(Utc::now()), "/dashboard", false);
        app.on_key(key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.on_key(key(KeyCode::Right));
        assert_eq!(app.route(), "/dashboard");
        app.on_key(key(KeyCode::Esc));
        assert!(!app.show_help);
    }
}

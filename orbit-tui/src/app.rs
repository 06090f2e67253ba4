use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};

use orbit_core::{
    Catalog, FlowSelector, OrbitConfig, PlaybackController, PlaybackEngine, PlaybackSnapshot,
    TickOutcome,
};

use crate::events::{Action, EventHandler, ScrollDirection};
use crate::theme::{Theme, ThemeLoader, ThemeManager};
use crate::ui::layout::MainLayout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Network,
    Flow,
    Simulation,
    Help,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Network, View::Flow, View::Simulation]
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Network => "Network",
            View::Flow => "Flow",
            View::Simulation => "Simulation",
            View::Help => "Help",
        }
    }

    pub fn next(&self) -> View {
        let views = View::all();
        let idx = views.iter().position(|v| v == self).unwrap_or(0);
        views[(idx + 1) % views.len()]
    }

    pub fn prev(&self) -> View {
        let views = View::all();
        let idx = views.iter().position(|v| v == self).unwrap_or(0);
        if idx == 0 {
            views[views.len() - 1]
        } else {
            views[idx - 1]
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub current_view: View,
    pub previous_view: View,
    pub theme_manager: ThemeManager,
    pub theme_loader: ThemeLoader,
    pub controller: PlaybackController,
    pub flow: FlowSelector,
    pub status_message: Option<String>,
    pub event_handler: EventHandler,
    pub refresh_interval: Duration,
    pub mouse_enabled: bool,
    started_at: Instant,
}

impl App {
    pub fn new(config: &OrbitConfig) -> Result<Self> {
        let catalog = Catalog::load_or_builtin(config.playback.catalog_path.as_deref())
            .context("Failed to load scenario catalog")?;
        Self::from_parts(config, Arc::new(catalog), ThemeLoader::new())
    }

    fn from_parts(
        config: &OrbitConfig,
        catalog: Arc<Catalog>,
        theme_loader: ThemeLoader,
    ) -> Result<Self> {
        let engine = match config.playback.default_scenario.as_deref() {
            Some(id) => PlaybackEngine::with_scenario(catalog, id)?,
            None => PlaybackEngine::new(catalog),
        };
        let controller = PlaybackController::new(engine, config.tick_interval());

        let theme_manager = theme_loader.initialize_theme_manager(&config.tui.theme);
        let theme_name = theme_manager.current_theme_name();

        Ok(Self {
            should_quit: false,
            current_view: View::Network,
            previous_view: View::Network,
            status_message: Some(format!(
                "Welcome to Orbit! Theme: {}. Press Space to run, '?' for help.",
                theme_name
            )),
            theme_manager,
            theme_loader,
            controller,
            flow: FlowSelector::new(),
            event_handler: EventHandler::new(),
            refresh_interval: config.refresh_rate(),
            mouse_enabled: config.tui.mouse_enabled,
            started_at: Instant::now(),
        })
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        if self.mouse_enabled {
            crossterm::execute!(io::stdout(), crossterm::event::EnableMouseCapture)?;
        }

        loop {
            self.tick(Instant::now());

            terminal.draw(|frame| {
                MainLayout::render(frame, self);
            })?;

            if event::poll(self.poll_timeout(Instant::now()))? {
                let evt = event::read()?;
                self.handle_event(evt);
            }

            if self.should_quit {
                break;
            }
        }

        if self.mouse_enabled {
            crossterm::execute!(io::stdout(), crossterm::event::DisableMouseCapture)?;
        }

        Ok(())
    }

    /// Wakes for whichever comes first: the next redraw or the next playback step.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.controller.time_until_tick(now) {
            Some(until_tick) => until_tick.min(self.refresh_interval),
            None => self.refresh_interval,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(TickOutcome::Finished) = self.controller.poll(now) {
            let snapshot = self.controller.snapshot();
            self.status_message = Some(format!(
                "{} complete: {} hand-offs",
                snapshot.scenario_label, snapshot.total
            ));
        }
    }

    fn handle_event(&mut self, event: Event) {
        if let Some(action) = self.event_handler.handle_event(event) {
            self.execute_action(action);
        }
    }

    pub fn execute_action(&mut self, action: Action) {
        self.apply(action, Instant::now());
    }

    fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextView => self.switch_view(self.current_view.next()),
            Action::PrevView => self.switch_view(self.current_view.prev()),
            Action::GoToView(idx) => {
                if let Some(view) = View::all().get(idx) {
                    self.switch_view(*view);
                }
            }
            Action::Back => self.handle_back(),
            Action::Help => self.toggle_help(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Run => self.run_playback(now),
            Action::Pause => {
                if self.controller.pause() {
                    self.status_message = Some(format!(
                        "Paused at step {}",
                        self.controller.engine().cursor()
                    ));
                }
            }
            Action::Reset => {
                if self.controller.reset() {
                    self.status_message = Some("Playback reset".to_string());
                }
            }
            Action::NextScenario => self.cycle_scenario(1),
            Action::PrevScenario => self.cycle_scenario(-1),
            Action::NextStep => self.flow.next(),
            Action::PrevStep => self.flow.prev(),
            Action::SelectStep(number) => {
                self.flow.select(number);
            }
            Action::MouseScroll { direction } => match (self.current_view, direction) {
                (View::Flow, ScrollDirection::Up) => self.flow.prev(),
                (View::Flow, ScrollDirection::Down) => self.flow.next(),
                (View::Simulation, ScrollDirection::Up) => self.cycle_scenario(-1),
                (View::Simulation, ScrollDirection::Down) => self.cycle_scenario(1),
                _ => {}
            },
            Action::Resize { .. } => {}
        }
    }

    fn switch_view(&mut self, view: View) {
        self.current_view = view;
    }

    fn toggle_help(&mut self) {
        if self.current_view == View::Help {
            self.current_view = self.previous_view;
        } else {
            self.previous_view = self.current_view;
            self.current_view = View::Help;
        }
    }

    fn handle_back(&mut self) {
        match self.current_view {
            View::Help => self.current_view = self.previous_view,
            _ => self.should_quit = true,
        }
    }

    fn run_playback(&mut self, now: Instant) {
        if self.controller.run(now) {
            let snapshot = self.controller.snapshot();
            self.status_message = Some(format!(
                "Running {} ({}/{})",
                snapshot.scenario_label, snapshot.cursor, snapshot.total
            ));
        } else {
            self.status_message = Some("Already running. Press 'p' to pause.".to_string());
        }
    }

    fn cycle_scenario(&mut self, offset: isize) {
        let catalog = Arc::clone(self.controller.engine().catalog());
        let ids = catalog.scenario_ids();
        let current = catalog
            .scenario_index(&self.controller.engine().state().scenario_id)
            .unwrap_or(0);

        let len = ids.len() as isize;
        let next = (current as isize + offset).rem_euclid(len) as usize;

        match self.controller.select_scenario(ids[next]) {
            Ok(()) => {
                let label = &self.controller.engine().scenario().label;
                self.status_message = Some(format!("Scenario: {}", label));
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
    }

    fn toggle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        let theme_name = self.theme_manager.current_theme_name();
        if let Err(e) = self.theme_loader.save_theme_name(theme_name) {
            tracing::warn!("Failed to save theme preference: {}", e);
        }
        self.status_message = Some(format!("Theme changed to: {}", theme_name));
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.theme_manager.current_theme()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.controller.snapshot()
    }

    pub fn catalog(&self) -> &Catalog {
        self.controller.engine().catalog()
    }

    /// Run is offered only while playback is stopped.
    pub fn can_run(&self) -> bool {
        !self.controller.engine().is_running()
    }

    /// Milliseconds since start, drives the orbit animation.
    pub fn animation_millis(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::PlaybackPhase;
    use tempfile::TempDir;

    const PERIOD: Duration = Duration::from_millis(1100);

    fn test_app(temp_dir: &TempDir) -> App {
        let config = OrbitConfig::default();
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let loader = ThemeLoader::with_path(temp_dir.path().join("theme.toml"));
        App::from_parts(&config, catalog, loader).unwrap()
    }

    #[test]
    fn test_view_cycle_skips_help() {
        assert_eq!(View::Network.next(), View::Flow);
        assert_eq!(View::Simulation.next(), View::Network);
        assert_eq!(View::Network.prev(), View::Simulation);
        assert_eq!(View::Help.next(), View::Flow);
    }

    #[test]
    fn test_starts_idle_on_first_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let app = test_app(&temp_dir);

        let snapshot = app.snapshot();
        assert_eq!(snapshot.scenario_id, "travel-site");
        assert_eq!(snapshot.phase, PlaybackPhase::Idle);
        assert_eq!(app.current_view, View::Network);
        assert_eq!(app.flow.active(), FlowSelector::DEFAULT_STEP);
        assert!(app.can_run());
    }

    #[test]
    fn test_default_scenario_from_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = OrbitConfig::default();
        config.playback.default_scenario = Some("research-report".to_string());
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let loader = ThemeLoader::with_path(temp_dir.path().join("theme.toml"));

        let app = App::from_parts(&config, catalog, loader).unwrap();
        assert_eq!(app.snapshot().scenario_id, "research-report");
    }

    #[test]
    fn test_unknown_default_scenario_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = OrbitConfig::default();
        config.playback.default_scenario = Some("nope".to_string());
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let loader = ThemeLoader::with_path(temp_dir.path().join("theme.toml"));

        assert!(App::from_parts(&config, catalog, loader).is_err());
    }

    #[test]
    fn test_run_then_ticks_reveal_steps() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        let start = Instant::now();

        app.apply(Action::Run, start);
        assert!(!app.can_run());

        app.tick(start + PERIOD / 2);
        assert_eq!(app.snapshot().cursor, 0);

        app.tick(start + PERIOD);
        assert_eq!(app.snapshot().cursor, 1);

        app.apply(Action::Run, start + PERIOD);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Already running. Press 'p' to pause.")
        );
    }

    #[test]
    fn test_completion_sets_status_and_reenables_run() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        let start = Instant::now();

        app.apply(Action::Run, start);
        for i in 1..=6 {
            app.tick(start + PERIOD * i);
        }

        let snapshot = app.snapshot();
        assert_eq!(snapshot.cursor, 6);
        assert_eq!(snapshot.phase, PlaybackPhase::Completed);
        assert!(app.can_run());
        assert_eq!(
            app.status_message.as_deref(),
            Some("Build a modern travel booking website complete: 6 hand-offs")
        );
        assert_eq!(app.poll_timeout(start + PERIOD * 7), app.refresh_interval);
    }

    #[test]
    fn test_pause_and_reset() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        let start = Instant::now();

        app.apply(Action::Run, start);
        app.tick(start + PERIOD);
        app.apply(Action::Pause, start + PERIOD);
        assert_eq!(app.status_message.as_deref(), Some("Paused at step 1"));
        assert_eq!(app.snapshot().phase, PlaybackPhase::Paused);

        app.tick(start + PERIOD * 3);
        assert_eq!(app.snapshot().cursor, 1);

        app.apply(Action::Reset, start + PERIOD * 3);
        assert_eq!(app.snapshot().phase, PlaybackPhase::Idle);
        assert_eq!(app.status_message.as_deref(), Some("Playback reset"));
    }

    #[test]
    fn test_scenario_cycling_wraps_and_resets() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        let start = Instant::now();

        app.apply(Action::Run, start);
        app.tick(start + PERIOD);

        app.apply(Action::NextScenario, start + PERIOD);
        let snapshot = app.snapshot();
        assert_eq!(snapshot.scenario_id, "research-report");
        assert_eq!(snapshot.cursor, 0);
        assert!(!snapshot.running);

        app.apply(Action::PrevScenario, start + PERIOD);
        app.apply(Action::PrevScenario, start + PERIOD);
        assert_eq!(app.snapshot().scenario_id, "food-delivery");
    }

    #[test]
    fn test_poll_timeout_tracks_next_tick() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);
        let start = Instant::now();

        assert_eq!(app.poll_timeout(start), app.refresh_interval);

        app.apply(Action::Run, start);
        assert_eq!(
            app.poll_timeout(start + PERIOD - Duration::from_millis(30)),
            Duration::from_millis(30)
        );
    }

    #[test]
    fn test_help_toggles_back_to_previous_view() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);

        app.execute_action(Action::GoToView(2));
        app.execute_action(Action::Help);
        assert_eq!(app.current_view, View::Help);

        app.execute_action(Action::Back);
        assert_eq!(app.current_view, View::Simulation);
        assert!(!app.should_quit);

        app.execute_action(Action::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn test_flow_steps_and_scroll() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);

        app.execute_action(Action::NextStep);
        assert_eq!(app.flow.active(), 3);

        app.execute_action(Action::GoToView(1));
        app.execute_action(Action::MouseScroll {
            direction: ScrollDirection::Up,
        });
        assert_eq!(app.flow.active(), 2);

        app.execute_action(Action::SelectStep(6));
        assert_eq!(app.flow.active_step().title, "Deliver");
        app.execute_action(Action::SelectStep(9));
        assert_eq!(app.flow.active(), 6);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = test_app(&temp_dir);

        assert_eq!(app.current_theme().name(), "Orbit Light");
        app.execute_action(Action::ToggleTheme);
        assert_eq!(app.current_theme().name(), "Orbit Dark");

        let reloaded = ThemeLoader::with_path(temp_dir.path().join("theme.toml"))
            .initialize_theme_manager("Orbit Light");
        assert_eq!(reloaded.current_theme_name(), "Orbit Dark");
    }
}

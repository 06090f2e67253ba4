use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{OrbitError, OrbitResult};
use crate::models::{
    LogEntry, PlaybackEventKind, PlaybackPhase, PlaybackSnapshot, PlaybackState, PlaybackUpdate,
    Scenario,
};

pub type PlaybackObserver = Arc<dyn Fn(&PlaybackUpdate) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor moved by one and playback continues.
    Advanced,
    /// The cursor reached the end of the scenario and playback stopped.
    Finished,
    /// Not running; nothing changed.
    Ignored,
}

/// Owns the playback state for one session.
///
/// The engine is purely synchronous and has no notion of time. Timing is
/// supplied from outside through [`PlaybackEngine::tick`], either by a
/// [`Cadence`](super::Cadence) polled from a UI loop or by the async
/// [`PlaybackDriver`](super::PlaybackDriver).
pub struct PlaybackEngine {
    catalog: Arc<Catalog>,
    scenario_index: usize,
    state: PlaybackState,
    session_id: Uuid,
    observers: Vec<PlaybackObserver>,
}

impl PlaybackEngine {
    /// Creates an engine with the first catalog scenario selected.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = PlaybackState::new(catalog.first_scenario().id.clone());
        let session_id = Uuid::new_v4();
        debug!(session_id = %session_id, scenario = %state.scenario_id, "Created playback engine");

        Self {
            catalog,
            scenario_index: 0,
            state,
            session_id,
            observers: Vec::new(),
        }
    }

    /// Creates an engine with `scenario_id` selected instead of the first scenario.
    pub fn with_scenario(catalog: Arc<Catalog>, scenario_id: &str) -> OrbitResult<Self> {
        let scenario_index = catalog
            .scenario_index(scenario_id)
            .ok_or_else(|| OrbitError::UnknownScenario(scenario_id.to_string()))?;

        let mut engine = Self::new(catalog);
        engine.scenario_index = scenario_index;
        engine.state = PlaybackState::new(scenario_id);
        Ok(engine)
    }

    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&PlaybackUpdate) + Send + Sync + 'static,
    {
        self.observers.push(Arc::new(observer));
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn scenario(&self) -> &Scenario {
        &self.catalog.scenarios()[self.scenario_index]
    }

    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn phase(&self) -> PlaybackPhase {
        PlaybackPhase::derive(self.state.cursor, self.scenario().len(), self.state.running)
    }

    /// Selects a scenario and returns to Idle. Unknown ids leave the state untouched.
    pub fn select_scenario(&mut self, scenario_id: &str) -> OrbitResult<()> {
        let Some(index) = self.catalog.scenario_index(scenario_id) else {
            let err = OrbitError::UnknownScenario(scenario_id.to_string());
            warn!(session_id = %self.session_id, error_code = err.error_code(), "{}", err);
            return Err(err);
        };

        self.scenario_index = index;
        self.state = PlaybackState::new(scenario_id);

        info!(session_id = %self.session_id, scenario = %scenario_id, "Scenario selected");
        self.emit(PlaybackEventKind::ScenarioSelected);
        Ok(())
    }

    /// Starts or resumes playback. Returns false when already running.
    ///
    /// A completed scenario is rewound to the beginning first.
    pub fn run(&mut self) -> bool {
        if self.state.running {
            return false;
        }

        let restarted = self.state.cursor >= self.scenario().len();
        if restarted {
            self.state.cursor = 0;
        }
        self.state.running = true;

        info!(
            session_id = %self.session_id,
            scenario = %self.state.scenario_id,
            cursor = self.state.cursor,
            restarted,
            "Playback started"
        );
        self.emit(PlaybackEventKind::Started { restarted });
        true
    }

    /// Stops playback, keeping the cursor. Returns false when not running.
    pub fn pause(&mut self) -> bool {
        if !self.state.running {
            return false;
        }

        self.state.running = false;
        info!(session_id = %self.session_id, cursor = self.state.cursor, "Playback paused");
        self.emit(PlaybackEventKind::Paused);
        true
    }

    /// Rewinds to Idle. Returns false when already Idle.
    pub fn reset(&mut self) -> bool {
        if self.state.cursor == 0 && !self.state.running {
            return false;
        }

        self.state.cursor = 0;
        self.state.running = false;
        info!(session_id = %self.session_id, "Playback reset");
        self.emit(PlaybackEventKind::Reset);
        true
    }

    /// Reveals exactly one more hand-off while running.
    pub fn tick(&mut self) -> TickOutcome {
        let total = self.scenario().len();
        if !self.state.running || self.state.cursor >= total {
            return TickOutcome::Ignored;
        }

        self.state.cursor += 1;
        let step = self.state.cursor;
        debug!(session_id = %self.session_id, step, total, "Playback tick");

        let entry = LogEntry {
            step,
            event: self.scenario().steps[step - 1].clone(),
        };
        self.emit(PlaybackEventKind::Advanced { entry });

        if step == total {
            self.state.running = false;
            info!(
                session_id = %self.session_id,
                scenario = %self.state.scenario_id,
                "Playback completed"
            );
            self.emit(PlaybackEventKind::Completed);
            return TickOutcome::Finished;
        }

        TickOutcome::Advanced
    }

    /// The revealed prefix of the scenario, numbered from 1.
    pub fn visible_log(&self) -> Vec<LogEntry> {
        self.scenario()
            .steps
            .iter()
            .take(self.state.cursor)
            .enumerate()
            .map(|(i, event)| LogEntry {
                step: i + 1,
                event: event.clone(),
            })
            .collect()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        let scenario = self.scenario();
        PlaybackSnapshot {
            session_id: self.session_id,
            scenario_id: scenario.id.clone(),
            scenario_label: scenario.label.clone(),
            cursor: self.state.cursor,
            total: scenario.len(),
            running: self.state.running,
            phase: self.phase(),
            log: self.visible_log(),
        }
    }

    fn emit(&self, kind: PlaybackEventKind) {
        if self.observers.is_empty() {
            return;
        }

        let update = PlaybackUpdate::new(kind, self.snapshot());
        for observer in &self.observers {
            observer(&update);
        }
    }
}

impl std::fmt::Debug for PlaybackEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackEngine")
            .field("session_id", &self.session_id)
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::scenario::HandoffEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPhase {
    Idle,
    Running,
    Paused,
    Completed,
}

impl PlaybackPhase {
    pub fn derive(cursor: usize, total: usize, running: bool) -> Self {
        if running {
            PlaybackPhase::Running
        } else if cursor >= total {
            PlaybackPhase::Completed
        } else if cursor == 0 {
            PlaybackPhase::Idle
        } else {
            PlaybackPhase::Paused
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlaybackPhase::Idle => "Idle",
            PlaybackPhase::Running => "Running",
            PlaybackPhase::Paused => "Paused",
            PlaybackPhase::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for PlaybackPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A revealed hand-off with its 1-based step number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub step: usize,
    pub event: HandoffEvent,
}

/// The raw, mutable playback state owned by an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackState {
    pub scenario_id: String,
    pub cursor: usize,
    pub running: bool,
}

impl PlaybackState {
    pub fn new(scenario_id: impl Into<String>) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            cursor: 0,
            running: false,
        }
    }
}

/// Read model handed to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub session_id: Uuid,
    pub scenario_id: String,
    pub scenario_label: String,
    pub cursor: usize,
    pub total: usize,
    pub running: bool,
    pub phase: PlaybackPhase,
    pub log: Vec<LogEntry>,
}

impl PlaybackSnapshot {
    pub fn progress(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.cursor as f64 / self.total as f64
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.log.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaybackEventKind {
    ScenarioSelected,
    Started { restarted: bool },
    Paused,
    Reset,
    Advanced { entry: LogEntry },
    Completed,
}

impl PlaybackEventKind {
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackEventKind::ScenarioSelected => "scenario_selected",
            PlaybackEventKind::Started { .. } => "started",
            PlaybackEventKind::Paused => "paused",
            PlaybackEventKind::Reset => "reset",
            PlaybackEventKind::Advanced { .. } => "advanced",
            PlaybackEventKind::Completed => "completed",
        }
    }
}

/// Delivered to subscribers after every state change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackUpdate {
    pub kind: PlaybackEventKind,
    pub snapshot: PlaybackSnapshot,
    pub timestamp: DateTime<Utc>,
}

impl PlaybackUpdate {
    pub fn new(kind: PlaybackEventKind, snapshot: PlaybackSnapshot) -> Self {
        Self {
            kind,
            snapshot,
            timestamp: Utc::now(),
        }
    }
}

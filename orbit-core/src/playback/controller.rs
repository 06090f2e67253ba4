use std::time::{Duration, Instant};

use crate::error::OrbitResult;
use crate::models::PlaybackSnapshot;

use super::cadence::Cadence;
use super::engine::{PlaybackEngine, TickOutcome};

/// A playback engine paired with a single cadence, for front-ends that
/// drive time by polling.
#[derive(Debug)]
pub struct PlaybackController {
    engine: PlaybackEngine,
    cadence: Cadence,
}

impl PlaybackController {
    pub fn new(engine: PlaybackEngine, period: Duration) -> Self {
        Self {
            engine,
            cadence: Cadence::new(period),
        }
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.engine.snapshot()
    }

    pub fn is_ticking(&self) -> bool {
        self.cadence.is_armed()
    }

    pub fn select_scenario(&mut self, scenario_id: &str) -> OrbitResult<()> {
        self.engine.select_scenario(scenario_id)?;
        self.cadence.cancel();
        Ok(())
    }

    pub fn run(&mut self, now: Instant) -> bool {
        if !self.engine.run() {
            return false;
        }
        self.cadence.arm(now);
        true
    }

    pub fn pause(&mut self) -> bool {
        self.cadence.cancel();
        self.engine.pause()
    }

    pub fn reset(&mut self) -> bool {
        self.cadence.cancel();
        self.engine.reset()
    }

    /// Ticks the engine if a period has elapsed since the last tick.
    pub fn poll(&mut self, now: Instant) -> Option<TickOutcome> {
        if !self.cadence.fire(now) {
            return None;
        }

        let outcome = self.engine.tick();
        if outcome != TickOutcome::Advanced {
            self.cadence.cancel();
        }
        Some(outcome)
    }

    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.cadence.time_until(now)
    }
}

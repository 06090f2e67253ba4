use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};
use tracing::debug;

use crate::error::OrbitResult;
use crate::models::{PlaybackSnapshot, PlaybackUpdate};

use super::engine::{PlaybackEngine, TickOutcome};

/// Drives a [`PlaybackEngine`] from a tokio interval task.
///
/// At most one ticker task exists at a time. Every transport operation that
/// stops or restarts playback aborts the current task first. Observers are
/// invoked while the engine lock is held and must not call back into the
/// driver.
///
/// Aborting only lands at the task's next await, so each task also carries the
/// generation it was armed with. Transport calls bump the generation while
/// holding the engine lock, and a task that wakes up stale exits without ticking.
pub struct PlaybackDriver {
    engine: Arc<Mutex<PlaybackEngine>>,
    generation: Arc<AtomicU64>,
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl PlaybackDriver {
    pub fn new(engine: PlaybackEngine, period: Duration) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            generation: Arc::new(AtomicU64::new(0)),
            period,
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub async fn subscribe<F>(&self, observer: F)
    where
        F: Fn(&PlaybackUpdate) + Send + Sync + 'static,
    {
        self.engine.lock().await.subscribe(observer);
    }

    pub async fn snapshot(&self) -> PlaybackSnapshot {
        self.engine.lock().await.snapshot()
    }

    pub fn is_ticking(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub async fn select_scenario(&mut self, scenario_id: &str) -> OrbitResult<()> {
        let mut engine = self.engine.lock().await;
        engine.select_scenario(scenario_id)?;
        cancel_ticker(&mut self.task, &self.generation);
        Ok(())
    }

    pub async fn run(&mut self) -> bool {
        {
            let mut engine = self.engine.lock().await;
            if !engine.run() {
                return false;
            }
            cancel_ticker(&mut self.task, &self.generation);
        }

        self.spawn_ticker();
        true
    }

    pub async fn pause(&mut self) -> bool {
        let mut engine = self.engine.lock().await;
        let paused = engine.pause();
        cancel_ticker(&mut self.task, &self.generation);
        paused
    }

    pub async fn reset(&mut self) -> bool {
        let mut engine = self.engine.lock().await;
        let reset = engine.reset();
        cancel_ticker(&mut self.task, &self.generation);
        reset
    }

    /// Waits for the current ticker task to end, which happens when the
    /// scenario completes. Returns immediately when nothing is ticking.
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.take() {
            // A cancelled task is as finished as a completed one.
            let _ = task.await;
        }
    }

    fn spawn_ticker(&mut self) {
        let engine = Arc::clone(&self.engine);
        let generation = Arc::clone(&self.generation);
        let armed = generation.load(Ordering::SeqCst);
        let period = self.period;

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let mut engine = engine.lock().await;
                if generation.load(Ordering::SeqCst) != armed {
                    debug!(armed, "Stale playback ticker exiting");
                    break;
                }
                let outcome = engine.tick();
                if outcome != TickOutcome::Advanced {
                    debug!(?outcome, "Playback ticker stopping");
                    break;
                }
            }
        }));
    }
}

/// Invalidates the running ticker, then aborts it. Callers hold the engine lock.
fn cancel_ticker(task: &mut Option<JoinHandle<()>>, generation: &AtomicU64) {
    generation.fetch_add(1, Ordering::SeqCst);
    if let Some(task) = task.take() {
        task.abort();
    }
}

impl Drop for PlaybackDriver {
    fn drop(&mut self) {
        cancel_ticker(&mut self.task, &self.generation);
    }
}

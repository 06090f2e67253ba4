mod cadence;
mod controller;
mod driver;
mod engine;

pub use cadence::{Cadence, DEFAULT_TICK_INTERVAL};
pub use controller::PlaybackController;
pub use driver::PlaybackDriver;
pub use engine::{PlaybackEngine, PlaybackObserver, TickOutcome};

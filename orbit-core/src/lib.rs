pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod playback;
pub mod showcase;

pub use catalog::{Catalog, CatalogFile, CatalogFormat};
pub use config::{
    get_config_dir, DisplayConfig, LoggingConfig, OrbitConfig, PlaybackConfig, TuiConfig,
};
pub use error::{CliErrorDisplay, OrbitError, OrbitResult};
pub use models::{
    Agent, AgentColor, HandoffEvent, LogEntry, PlaybackEventKind, PlaybackPhase, PlaybackSnapshot,
    PlaybackState, PlaybackUpdate, Scenario,
};
pub use playback::{
    Cadence, PlaybackController, PlaybackDriver, PlaybackEngine, PlaybackObserver, TickOutcome,
    DEFAULT_TICK_INTERVAL,
};
pub use showcase::{orbit_layout, orbit_phase, FlowSelector, FlowStep, OrbitSlot, FLOW_STEPS};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

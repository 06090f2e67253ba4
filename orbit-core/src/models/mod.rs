mod agent;
mod playback;
mod scenario;

pub use agent::{Agent, AgentColor};
pub use playback::{
    LogEntry, PlaybackEventKind, PlaybackPhase, PlaybackSnapshot, PlaybackState, PlaybackUpdate,
};
pub use scenario::{HandoffEvent, Scenario};

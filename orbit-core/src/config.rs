use config::{Config as ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::error::{OrbitError, OrbitResult};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrbitConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub playback: PlaybackConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive string. Unset means each binary picks its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default)]
    pub json_format: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,

    #[serde(default)]
    pub default_scenario: Option<String>,

    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_true")]
    pub color: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiConfig {
    #[serde(default = "default_refresh_rate")]
    pub refresh_rate_ms: u64,

    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default)]
    pub mouse_enabled: bool,
}

fn default_tick_interval() -> u64 {
    1100
}

fn default_true() -> bool {
    true
}

fn default_refresh_rate() -> u64 {
    100
}

fn default_theme() -> String {
    "Orbit Light".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            json_format: false,
        }
    }
}

impl LoggingConfig {
    /// Builds the subscriber filter from `level`, or from `fallback` when no level is set.
    pub fn env_filter(&self, fallback: &str) -> EnvFilter {
        let directives = self.level.as_deref().unwrap_or(fallback);
        EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(fallback))
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
            default_scenario: None,
            catalog_path: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate(),
            theme: default_theme(),
            mouse_enabled: false,
        }
    }
}

impl OrbitConfig {
    pub fn load() -> OrbitResult<Self> {
        Self::load_from_paths(get_config_paths())
    }

    pub fn load_from_paths(paths: Vec<PathBuf>) -> OrbitResult<Self> {
        load_dotenv_files();

        let mut builder = ConfigBuilder::builder();

        for path in paths {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("ORBIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut orbit_config: OrbitConfig = builder.build()?.try_deserialize()?;

        if let Ok(level) = std::env::var("ORBIT_LOG_LEVEL") {
            orbit_config.logging.level = Some(level);
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            orbit_config.logging.level = Some(level);
        }

        if let Ok(interval) = std::env::var("ORBIT_TICK_INTERVAL_MS") {
            orbit_config.playback.tick_interval_ms =
                interval
                    .parse()
                    .map_err(|_| OrbitError::InvalidConfigValue {
                        key: "ORBIT_TICK_INTERVAL_MS".to_string(),
                        message: format!("'{}' is not a whole number of milliseconds", interval),
                    })?;
        }

        orbit_config.validate()?;

        Ok(orbit_config)
    }

    pub fn validate(&self) -> OrbitResult<()> {
        if self.playback.tick_interval_ms == 0 {
            return Err(OrbitError::InvalidConfigValue {
                key: "playback.tick_interval_ms".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.tui.refresh_rate_ms == 0 {
            return Err(OrbitError::InvalidConfigValue {
                key: "tui.refresh_rate_ms".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if let Some(level) = &self.logging.level {
            EnvFilter::try_new(level).map_err(|e| OrbitError::InvalidConfigValue {
                key: "logging.level".to_string(),
                message: format!("Invalid log filter '{}': {}", level, e),
            })?;
        }

        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.playback.tick_interval_ms)
    }

    pub fn refresh_rate(&self) -> Duration {
        Duration::from_millis(self.tui.refresh_rate_ms)
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join("config").join("default.toml"));
        paths.push(cwd.join("config").join("local.toml"));
        paths.push(cwd.join("orbit.toml"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".orbit").join("config.toml"));
    }

    paths
}

fn load_dotenv_files() {
    let mut paths = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".env"));
        paths.push(cwd.join(".env.local"));
    }

    if let Some(config_dir) = get_config_dir() {
        paths.push(config_dir.join(".env"));
    }

    for path in paths {
        if path.exists() {
            let _ = dotenvy::from_path(&path);
        }
    }
}

pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("orbit"))
}

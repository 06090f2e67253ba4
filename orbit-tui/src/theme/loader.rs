use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::ThemeManager;

/// Persisted theme preference. Only the name is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

fn default_theme_name() -> String {
    "Orbit Light".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
        }
    }
}

pub struct ThemeLoader {
    config_path: PathBuf,
}

impl ThemeLoader {
    pub fn new() -> Self {
        let config_path = Self::default_config_path();
        Self { config_path }
    }

    pub fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    fn default_config_path() -> PathBuf {
        orbit_core::get_config_dir()
            .unwrap_or_else(|| PathBuf::from(".").join("orbit"))
            .join("theme.toml")
    }

    /// `None` when no preference has been saved yet.
    pub fn load(&self) -> Result<Option<ThemeConfig>> {
        if !self.config_path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read theme config from {:?}", self.config_path))?;

        toml::from_str(&contents)
            .map(Some)
            .with_context(|| format!("Failed to parse theme config from {:?}", self.config_path))
    }

    pub fn save(&self, config: &ThemeConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            toml::to_string_pretty(config).context("Failed to serialize theme config")?;

        fs::write(&self.config_path, contents)
            .with_context(|| format!("Failed to write theme config to {:?}", self.config_path))?;

        Ok(())
    }

    pub fn save_theme_name(&self, theme_name: &str) -> Result<()> {
        let config = ThemeConfig {
            theme: theme_name.to_string(),
        };
        self.save(&config)
    }

    /// A saved preference wins over `fallback`, which usually comes from `tui.theme`.
    pub fn initialize_theme_manager(&self, fallback: &str) -> ThemeManager {
        let mut manager = ThemeManager::new();

        let theme_name = match self.load() {
            Ok(Some(config)) => config.theme,
            Ok(None) => fallback.to_string(),
            Err(e) => {
                tracing::warn!("Ignoring saved theme: {e:#}");
                fallback.to_string()
            }
        };

        if !manager.set_theme_by_name(&theme_name) {
            tracing::warn!(
                "Theme '{}' not found, using default '{}'",
                theme_name,
                manager.current_theme().name()
            );
        }

        manager
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ThemeConfig::default();
        assert_eq!(config.theme, "Orbit Light");
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ThemeLoader::with_path(temp_dir.path().join("nonexistent.toml"));

        assert!(loader.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("orbit").join("theme.toml");
        let loader = ThemeLoader::with_path(config_path.clone());

        loader.save_theme_name("Orbit Light").unwrap();

        assert!(config_path.exists());
        assert_eq!(loader.load().unwrap().unwrap().theme, "Orbit Light");
    }

    #[test]
    fn test_saved_theme_beats_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ThemeLoader::with_path(temp_dir.path().join("theme.toml"));

        loader.save_theme_name("Orbit Dark").unwrap();
        let manager = loader.initialize_theme_manager("Orbit Light");

        assert_eq!(manager.current_theme_name(), "Orbit Dark");
    }

    #[test]
    fn test_fallback_used_without_saved_theme() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ThemeLoader::with_path(temp_dir.path().join("theme.toml"));

        let manager = loader.initialize_theme_manager("Orbit Dark");
        assert_eq!(manager.current_theme_name(), "Orbit Dark");
    }

    #[test]
    fn test_unknown_theme_keeps_default() {
        let temp_dir = TempDir::new().unwrap();
        let loader = ThemeLoader::with_path(temp_dir.path().join("theme.toml"));

        loader.save_theme_name("Tokyo Night").unwrap();
        let manager = loader.initialize_theme_manager("Orbit Dark");

        assert_eq!(manager.current_theme_name(), "Orbit Light");
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("theme.toml");
        fs::write(&config_path, "theme = [").unwrap();
        let loader = ThemeLoader::with_path(config_path);

        assert!(loader.load().is_err());
        let manager = loader.initialize_theme_manager("Orbit Dark");
        assert_eq!(manager.current_theme_name(), "Orbit Dark");
    }
}

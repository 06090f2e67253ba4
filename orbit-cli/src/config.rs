use orbit_core::{Catalog, OrbitConfig, OrbitResult};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Effective settings for one CLI invocation: the loaded [`OrbitConfig`]
/// plus any `--catalog` override from the command line.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub core: OrbitConfig,
    pub catalog_override: Option<PathBuf>,
}

impl CliConfig {
    pub fn load(catalog_override: Option<PathBuf>) -> OrbitResult<Self> {
        let core = OrbitConfig::load()?;

        if !core.display.color {
            colored::control::set_override(false);
        }

        Ok(Self {
            core,
            catalog_override,
        })
    }

    /// `--catalog` wins over `playback.catalog_path`.
    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_override
            .as_deref()
            .or(self.core.playback.catalog_path.as_deref())
    }

    pub fn load_catalog(&self) -> OrbitResult<Catalog> {
        Catalog::load_or_builtin(self.catalog_path())
    }

    pub fn tick_interval(&self) -> Duration {
        self.core.tick_interval()
    }

    pub fn default_scenario(&self) -> Option<&str> {
        self.core.playback.default_scenario.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_override_wins() {
        let mut core = OrbitConfig::default();
        core.playback.catalog_path = Some(PathBuf::from("from-config.yaml"));

        let config = CliConfig {
            core: core.clone(),
            catalog_override: Some(PathBuf::from("from-flag.yaml")),
        };
        assert_eq!(config.catalog_path(), Some(Path::new("from-flag.yaml")));

        let config = CliConfig {
            core,
            catalog_override: None,
        };
        assert_eq!(config.catalog_path(), Some(Path::new("from-config.yaml")));
    }

    #[test]
    fn test_builtin_catalog_without_paths() {
        let config = CliConfig {
            core: OrbitConfig::default(),
            catalog_override: None,
        };
        assert!(config.catalog_path().is_none());
        assert_eq!(config.load_catalog().unwrap().scenarios().len(), 3);
        assert_eq!(config.tick_interval(), Duration::from_millis(1100));
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{builtin, Catalog};
use crate::error::{OrbitError, OrbitResult};
use crate::models::{Agent, Scenario};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Toml,
    Json,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> OrbitResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "yaml" | "yml" => Ok(CatalogFormat::Yaml),
            "toml" => Ok(CatalogFormat::Toml),
            "json" => Ok(CatalogFormat::Json),
            "" => Err(OrbitError::UnsupportedCatalogFormat(
                path.display().to_string(),
            )),
            other => Err(OrbitError::UnsupportedCatalogFormat(format!(".{}", other))),
        }
    }
}

/// On-disk shape of a catalog override. `agents` falls back to the
/// built-in roster when omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agents: Option<Vec<Agent>>,
    pub scenarios: Vec<Scenario>,
}

impl CatalogFile {
    pub fn parse(content: &str, format: CatalogFormat, origin: &str) -> OrbitResult<Self> {
        let parse_err = |message: String| OrbitError::CatalogParse {
            path: origin.to_string(),
            message,
        };

        match format {
            CatalogFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_err(e.to_string()))
            }
            CatalogFormat::Toml => toml::from_str(content).map_err(|e| parse_err(e.to_string())),
            CatalogFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_err(e.to_string()))
            }
        }
    }

    pub fn into_catalog(self) -> OrbitResult<Catalog> {
        let agents = self.agents.unwrap_or_else(builtin::agents);
        Catalog::new(agents, self.scenarios)
    }
}

impl Catalog {
    pub fn load_from_file(path: &Path) -> OrbitResult<Self> {
        let format = CatalogFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            OrbitError::IoError(format!("Failed to read catalog {}: {}", path.display(), e))
        })?;

        let catalog = CatalogFile::parse(&content, format, &path.display().to_string())?
            .into_catalog()?;

        info!(
            path = %path.display(),
            scenarios = catalog.scenarios().len(),
            "Loaded catalog override"
        );
        Ok(catalog)
    }

    /// Loads `path` when given, otherwise the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> OrbitResult<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::builtin(),
        }
    }
}

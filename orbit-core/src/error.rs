//! Error types for the Orbit core library.
//!
//! Catalog problems are load-time configuration errors and are fatal for the
//! process that hit them. The only error a user can trigger at runtime is
//! selecting a scenario that is not in the catalog.
//!
//! # Error Codes Reference
//!
//! | Code Range | Category | Description |
//! |------------|----------|-------------|
//! | E1001-E1099 | Catalog | Dangling references, duplicates, malformed catalog files |
//! | E2001-E2099 | Config | Config file and validation errors |
//! | E3001-E3099 | Playback | Transport errors raised by the playback engine |
//! | E9001-E9099 | General | IO and serialization errors |

use std::fmt;
use thiserror::Error;
use tracing::{debug, error};

/// The main error type for the Orbit core library.
#[derive(Debug, Error)]
pub enum OrbitError {
    // ========================================================================
    // Catalog Errors (E1001-E1099)
    // ========================================================================
    /// A hand-off event names an agent that is not registered
    #[error("[E1001] Scenario '{scenario}' step {step} references unknown agent '{agent}'")]
    UnknownAgentReference {
        scenario: String,
        step: usize,
        agent: String,
    },

    /// Two catalog entries share an identifier
    #[error("[E1002] Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A scenario has no hand-off events
    #[error("[E1003] Scenario '{0}' has no hand-off events")]
    EmptyScenario(String),

    /// The catalog defines no scenarios at all
    #[error("[E1004] Catalog defines no scenarios")]
    EmptyCatalog,

    /// An agent color is not a `#rrggbb` string
    #[error("[E1005] Invalid color '{value}': {message}")]
    InvalidColor { value: String, message: String },

    /// Catalog file extension is not one we can parse
    #[error("[E1006] Unsupported catalog format: {0}")]
    UnsupportedCatalogFormat(String),

    /// Catalog file could not be parsed
    #[error("[E1007] Failed to parse catalog {path}: {message}")]
    CatalogParse { path: String, message: String },

    // ========================================================================
    // Configuration Errors (E2001-E2099)
    // ========================================================================
    /// Configuration error (generic)
    #[error("[E2001] Configuration error: {0}")]
    Config(String),

    /// Invalid configuration value
    #[error("[E2002] Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    // ========================================================================
    // Playback Errors (E3001-E3099)
    // ========================================================================
    /// Scenario id is not in the catalog
    #[error("[E3001] Unknown scenario: {0}")]
    UnknownScenario(String),

    // ========================================================================
    // General Errors (E9001-E9099)
    // ========================================================================
    /// IO error
    #[error("[E9002] IO error: {0}")]
    IoError(String),

    /// Serialization/deserialization error
    #[error("[E9003] Serialization error: {0}")]
    SerializationError(String),
}

/// Result type alias for Orbit operations.
pub type OrbitResult<T> = Result<T, OrbitError>;

impl From<std::io::Error> for OrbitError {
    fn from(err: std::io::Error) -> Self {
        OrbitError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for OrbitError {
    fn from(err: serde_json::Error) -> Self {
        OrbitError::SerializationError(err.to_string())
    }
}

impl From<config::ConfigError> for OrbitError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => OrbitError::InvalidConfigValue {
                key,
                message: "missing value".to_string(),
            },
            other => OrbitError::Config(other.to_string()),
        }
    }
}

// ============================================================================
// Error categorization helpers
// ============================================================================

impl OrbitError {
    /// Returns true if this error came from building or loading a catalog.
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            OrbitError::UnknownAgentReference { .. }
                | OrbitError::DuplicateId { .. }
                | OrbitError::EmptyScenario(_)
                | OrbitError::EmptyCatalog
                | OrbitError::InvalidColor { .. }
                | OrbitError::UnsupportedCatalogFormat(_)
                | OrbitError::CatalogParse { .. }
        )
    }

    /// Returns true if this error is related to configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            OrbitError::Config(_) | OrbitError::InvalidConfigValue { .. }
        )
    }

    /// Returns true for errors a user can cause at runtime.
    pub fn is_user_error(&self) -> bool {
        matches!(self, OrbitError::UnknownScenario(_))
    }

    /// Returns an error code suitable for logging or external reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            OrbitError::UnknownAgentReference { .. } => "E1001",
            OrbitError::DuplicateId { .. } => "E1002",
            OrbitError::EmptyScenario(_) => "E1003",
            OrbitError::EmptyCatalog => "E1004",
            OrbitError::InvalidColor { .. } => "E1005",
            OrbitError::UnsupportedCatalogFormat(_) => "E1006",
            OrbitError::CatalogParse { .. } => "E1007",
            OrbitError::Config(_) => "E2001",
            OrbitError::InvalidConfigValue { .. } => "E2002",
            OrbitError::UnknownScenario(_) => "E3001",
            OrbitError::IoError(_) => "E9002",
            OrbitError::SerializationError(_) => "E9003",
        }
    }

    /// Returns a user-friendly suggestion for how to resolve this error.
    pub fn user_suggestion(&self) -> Option<&'static str> {
        match self {
            OrbitError::UnknownScenario(_) => {
                Some("Run 'orbit scenarios list' to see available scenario ids")
            }
            OrbitError::UnknownAgentReference { .. } => {
                Some("Add the agent to the catalog's 'agents' list or fix the step's from/to id")
            }
            OrbitError::UnsupportedCatalogFormat(_) => {
                Some("Use a .yaml, .yml, .toml or .json catalog file")
            }
            OrbitError::InvalidColor { .. } => Some("Colors are written as #rrggbb, e.g. #7c3aed"),
            OrbitError::InvalidConfigValue { .. } => {
                Some("Check orbit.toml or the ORBIT__* environment variables")
            }
            _ => None,
        }
    }

    /// Log this error with appropriate severity level.
    ///
    /// User and config mistakes are already shown to whoever caused them, so
    /// they only surface at debug.
    pub fn log(&self) {
        let code = self.error_code();
        let suggestion = self.user_suggestion();

        if self.is_user_error() || self.is_config_error() {
            debug!(
                error_code = %code,
                suggestion = suggestion,
                "Rejected request: {}",
                self
            );
        } else {
            error!(
                error_code = %code,
                suggestion = suggestion,
                "Error occurred: {}",
                self
            );
        }
    }
}

// ============================================================================
// User-friendly error formatting for CLI
// ============================================================================

/// Format an error for CLI display with its suggestion.
pub struct CliErrorDisplay<'a> {
    error: &'a OrbitError,
    show_suggestion: bool,
}

impl<'a> CliErrorDisplay<'a> {
    pub fn new(error: &'a OrbitError) -> Self {
        Self {
            error,
            show_suggestion: true,
        }
    }

    pub fn without_suggestion(mut self) -> Self {
        self.show_suggestion = false;
        self
    }
}

impl<'a> fmt::Display for CliErrorDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Main error message (already includes code)
        writeln!(f, "{}", self.error)?;

        if self.show_suggestion {
            if let Some(suggestion) = self.error.user_suggestion() {
                writeln!(f)?;
                writeln!(f, "  Suggestion: {}", suggestion)?;
            }
        }

        Ok(())
    }
}

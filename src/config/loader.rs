//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading workplace
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};

use super::types::{AppSettings, EngineConfig, ShiftPattern, WorkplaceConfig};

/// Loads and provides access to workplace configuration.
///
/// The configuration file has three top-level sections, all optional:
/// ```text
/// settings:     # limit_income, fiscal_start
/// workplaces:   # workplace id -> WorkplaceConfig
/// patterns:     # pattern name -> ShiftPattern
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_pay_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/workplaces.yaml").unwrap();
/// let cafe = loader.workplace("cafe");
/// println!("Cafe configured: {}", cafe.is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or mistyped fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text. `origin` is used in error messages.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        let config = config.normalize();
        debug!(
            origin,
            workplaces = config.workplaces.len(),
            patterns = config.patterns.len(),
            "Loaded workplace configuration"
        );

        Ok(Self { config })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the application settings.
    pub fn settings(&self) -> &AppSettings {
        &self.config.settings
    }

    /// Looks up a workplace by identifier.
    ///
    /// A missing workplace is not an error: callers pass the `None` on to the
    /// resolvers, which fall back to their documented defaults.
    pub fn workplace(&self, id: &str) -> Option<&WorkplaceConfig> {
        let workplace = self.config.workplaces.get(id);
        if workplace.is_none() {
            warn!(workplace_id = id, "No configuration for workplace, using defaults");
        }
        workplace
    }

    /// Looks up a shift pattern by name.
    pub fn get_pattern(&self, name: &str) -> Option<&ShiftPattern> {
        self.config.patterns.get(name)
    }

    /// Returns the identifiers of all configured workplaces, sorted.
    pub fn workplace_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.config.workplaces.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CompensationDefaults, EngineConfig, SchedulingSettings};

/// Loads and provides access to engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the scheduling settings and compensation defaults.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── scheduling.yaml    # Generator options
/// └── compensation.yaml  # Pay-calculation defaults
/// ```
///
/// # Example
///
/// ```no_run
/// use roster_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Minimum staffing: {}", loader.scheduling().min_staffing);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let scheduling_path = path.join("scheduling.yaml");
        let scheduling = Self::load_yaml::<SchedulingSettings>(&scheduling_path)?;

        let compensation_path = path.join("compensation.yaml");
        let compensation = Self::load_yaml::<CompensationDefaults>(&compensation_path)?;

        Ok(Self {
            config: EngineConfig {
                scheduling,
                compensation,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the scheduling settings.
    pub fn scheduling(&self) -> &SchedulingSettings {
        &self.config.scheduling
    }

    /// Returns the compensation defaults.
    pub fn compensation(&self) -> &CompensationDefaults {
        &self.config.compensation
    }
}

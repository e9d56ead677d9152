// ABOUTME: Environment configuration for the sandbox process
// ABOUTME: Storage location, history depth, logging and sensitivity settings with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::logging::LoggingConfig;
use physio_core::constants::service_names;
use physio_core::constants::storage::{HISTORY_LIMIT_CEILING, HISTORY_MAX};
use physio_intelligence::config::{ConfigError, SensitivityConfig};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Directory holding the persisted document
pub const STORAGE_DIR_ENV: &str = "PHYSIO_STORAGE_DIR";

/// Undo depth
pub const HISTORY_LIMIT_ENV: &str = "PHYSIO_HISTORY_LIMIT";

/// Process configuration
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Directory of the file storage backend
    pub storage_dir: PathBuf,
    /// Maximum number of undo entries
    pub history_limit: usize,
    /// Logging setup
    pub logging: LoggingConfig,
    /// Sensitivity ranking
    pub sensitivity: SensitivityConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            history_limit: HISTORY_MAX,
            logging: LoggingConfig::default(),
            sensitivity: SensitivityConfig::default(),
        }
    }
}

/// `<platform data dir>/physio-sandbox`, or the working directory when the platform has none
fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(service_names::PHYSIO_SANDBOX)
}

impl SandboxConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable does not parse or a value is out of range
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage_dir = match env::var(STORAGE_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            Ok(_) | Err(env::VarError::NotPresent) => default_storage_dir(),
            Err(e) => return Err(e.into()),
        };

        let history_limit = match env::var(HISTORY_LIMIT_ENV) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {HISTORY_LIMIT_ENV}")))?,
            Err(env::VarError::NotPresent) => HISTORY_MAX,
            Err(e) => return Err(e.into()),
        };

        let config = Self {
            storage_dir,
            history_limit,
            logging: LoggingConfig::from_env(),
            sensitivity: SensitivityConfig::load()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the history limit is outside `1..=10000` or the
    /// sensitivity configuration is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=HISTORY_LIMIT_CEILING).contains(&self.history_limit) {
            return Err(ConfigError::ValueOutOfRange(
                "history_limit must be between 1 and 10000",
            ));
        }
        self.sensitivity.validate()
    }

    /// One-line summary for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "storage_dir={} history_limit={} top_n={} log_level={}",
            self.storage_dir.display(),
            self.history_limit,
            self.sensitivity.top_n,
            self.logging.level
        )
    }

    /// Log the loaded configuration
    pub fn log_summary(&self) {
        info!(config = %self.summary(), "Configuration loaded");
    }
}

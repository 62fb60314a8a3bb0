//! Configuration schema definitions.
//!
//! This module defines the configuration structure for localpath: the log
//! level of the bundled logger and whether entry classification reports
//! directory junctions.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::entry::{EntryClassifier, NativeFileSystem};
use crate::error::{Error, Result};
use crate::logging::{LogLevel, Logger};
use crate::path::LocalPath;

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to the built-in defaults
/// when the configuration is applied.
///
/// # Examples
///
/// ```
/// use localpath::{Config, LogLevel};
///
/// let config = Config::from_yaml_str("log_level: verbose\ndetect_junctions: false\n").unwrap();
/// assert_eq!(config.log_level, Some(LogLevel::Verbose));
/// assert!(!config.classifier().detects_junctions());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Verbosity of the bundled stderr logger.
    pub log_level: Option<LogLevel>,

    /// Report directory junctions as such during entry classification.
    pub detect_junctions: Option<bool>,
}

impl Config {
    /// Parse a configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the YAML is malformed or contains
    /// unknown fields.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load(path: &LocalPath) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_string(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;
        log::debug!("loaded configuration from {path}");
        Self::from_yaml_str(&contents)
    }

    /// Build the entry classifier this configuration describes.
    #[must_use]
    pub fn classifier(&self) -> EntryClassifier<NativeFileSystem> {
        EntryClassifier::new(NativeFileSystem)
            .with_junction_detection(self.detect_junctions.unwrap_or(true))
    }

    /// Build the logger this configuration describes.
    #[must_use]
    pub fn logger(&self) -> Logger {
        self.log_level.map(Logger::new).unwrap_or_default()
    }
}

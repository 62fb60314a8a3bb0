//! Environment variable handling for configuration overrides.
//!
//! This module provides support for LOCALPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};
use std::env;

/// Environment variable toggling junction detection.
pub const DETECT_JUNCTIONS_ENV: &str = "LOCALPATH_DETECT_JUNCTIONS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use localpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the LOCALPATH_* environment variables and applies them with
    /// higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(LOG_MODE_ENV) {
            config.log_level = Some(LogLevel::parse(&val).map_err(|message| {
                Error::Validation {
                    field: LOG_MODE_ENV.into(),
                    message,
                }
            })?);
        }

        if let Ok(val) = env::var(DETECT_JUNCTIONS_ENV) {
            config.detect_junctions = Some(Self::parse_bool(DETECT_JUNCTIONS_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from an environment variable.
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

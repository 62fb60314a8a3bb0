//! Configuration system for localpath.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files
//! - Environment variable overrides
//!
//! # Configuration Precedence
//!
//! Configuration is merged from the following sources (highest to lowest):
//!
//! 1. Environment variables (`LOCALPATH_LOG_MODE`, `LOCALPATH_DETECT_JUNCTIONS`)
//! 2. The YAML file passed to [`Config::load`]
//! 3. Built-in defaults (normal logging, junction detection on)
//!
//! # Examples
//!
//! ```no_run
//! use localpath::config::{Config, EnvironmentConfig};
//! use localpath::LocalPath;
//!
//! let mut config = Config::load(&LocalPath::new("localpath.yaml")).unwrap();
//! EnvironmentConfig::apply_overrides(&mut config).unwrap();
//!
//! config.logger().install().unwrap();
//! let classifier = config.classifier();
//! let kind = classifier.classify(".").unwrap();
//! ```

mod environment;
mod schema;

pub use environment::{EnvironmentConfig, DETECT_JUNCTIONS_ENV};
pub use schema::Config;

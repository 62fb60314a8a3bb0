#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(missing_docs))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # localpath
//!
//! Normalized local file-system paths.
//!
//! This library provides value types for paths on the local machine that are
//! normalized once, on construction, and a small classifier that reports what
//! kind of entry a path currently names.
//!
//! ## Core Types
//!
//! - [`LocalPath`]: any normalized path, relative or absolute
//! - [`AbsolutePath`]: a normalized path that is known to be absolute
//! - [`PathRelationship`]: how two paths relate in the hierarchy
//! - [`EntryKind`] and [`EntryClassifier`]: file, directory, symlink or junction
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`Config`]: YAML and environment configuration
//!
//! ## Examples
//!
//! ```
//! use localpath::{AbsolutePath, LocalPath};
//!
//! let rel = LocalPath::new("src//./lib.rs");
//! assert!(!rel.is_absolute());
//! assert_eq!(rel.file_name(), "lib.rs");
//!
//! // Relative paths are rejected where an absolute path is required
//! assert!(AbsolutePath::new("src").is_err());
//!
//! let cwd = AbsolutePath::current_dir().unwrap();
//! let file = cwd.join(&rel);
//! assert_eq!(file.relative_to(&cwd), rel);
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::Config;
pub use entry::{EntryClassifier, EntryKind, FileSystem, NativeFileSystem};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{AbsolutePath, LocalPath, PathRelationship, PathStyle};

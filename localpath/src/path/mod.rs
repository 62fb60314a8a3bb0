//! Normalized path values.
//!
//! This module provides the two path types of the crate and the string-level
//! rules they are built on.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Every path value is stored in normalized form, computed once on
//! construction:
//! - separators are unified to the platform separator (`\` on Windows)
//! - repeated separators collapse into one
//! - `.` segments are dropped, while `..` segments are kept
//! - trailing separators are removed, except for a bare root
//! - an empty input becomes `.`
//!
//! Normalization is purely textual. It never consults the file system, never
//! expands `~` and never follows symlinks.
//!
//! ## Local and absolute paths
//!
//! - [`LocalPath`] is any normalized path, relative or absolute.
//! - [`AbsolutePath`] is a `LocalPath` that is known to be absolute; the
//!   check happens once, at construction.
//!
//! Joining onto an absolute path keeps it absolute, and an absolute path can
//! always be used where a local path is expected.
//!
//! # Examples
//!
//! ```
//! use localpath::{AbsolutePath, LocalPath};
//!
//! # #[cfg(unix)]
//! # {
//! let base = AbsolutePath::new("/srv/app/").unwrap();
//! let config = base.join("conf/./app.yaml");
//! assert_eq!(config.as_str(), "/srv/app/conf/app.yaml");
//!
//! let rel = config.relative_to(&base);
//! assert_eq!(rel, LocalPath::new("conf/app.yaml"));
//! # }
//! ```
//!
//! # Path Relationships
//!
//! The module also provides functionality to determine relationships between
//! paths:
//!
//! ```
//! use localpath::{LocalPath, PathRelationship};
//!
//! let parent = LocalPath::new("/home/user");
//! let child = LocalPath::new("/home/user/project");
//!
//! let rel = PathRelationship::between(&parent, &child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

mod absolute;
mod local;
pub mod normalize;
pub mod relationship;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use absolute::AbsolutePath;
pub use local::LocalPath;
pub use normalize::{normalize, PathStyle};
pub use relationship::PathRelationship;

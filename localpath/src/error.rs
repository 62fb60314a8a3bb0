//! Error types for the localpath library.
//!
//! Normalization and the structural path operations never fail. Errors come
//! from three places only: constructing an [`AbsolutePath`] from input that is
//! not absolute, lexical resolution that would climb above a root, and the
//! file-system queries behind entry classification.
//!
//! [`AbsolutePath`]: crate::path::AbsolutePath

use thiserror::Error;

/// Result type alias for operations that may fail with a localpath error.
///
/// # Examples
///
/// ```
/// use localpath::{AbsolutePath, Result};
///
/// fn workspace_root() -> Result<AbsolutePath> {
///     AbsolutePath::new("/srv/workspace")
/// }
/// # #[cfg(unix)]
/// # assert!(workspace_root().is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the localpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A value was rejected where an absolute path was required.
    #[error("invalid argument '{value}': {reason}")]
    InvalidArgument {
        /// The rejected input, as supplied by the caller.
        value: String,
        /// The reason the input was rejected.
        reason: String,
    },

    /// A path could not be processed.
    #[error("invalid path {path}: {reason}")]
    InvalidPath {
        /// The offending path.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// Permission denied while querying the file system.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path that could not be accessed.
        path: String,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error is a rejected argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::AbsolutePath;
    ///
    /// let err = AbsolutePath::new("relative/path").unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::Error;
    ///
    /// let err = Error::PermissionDenied { path: "/restricted".to_string() };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Map an I/O failure on `path` to the matching error variant.
    pub(crate) fn from_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_string(),
            },
            _ => Self::Io(err),
        }
    }
}

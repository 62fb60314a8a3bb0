//! The `AbsolutePath` value type.

use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::{EntryClassifier, EntryKind, FileSystem};
use crate::error::{Error, Result};
use crate::path::local::LocalPath;

/// A normalized path that is absolute by construction.
///
/// An `AbsolutePath` can only be built from input that normalizes to an
/// absolute path, so code holding one never needs to re-check. Converting to
/// [`LocalPath`] is free and infallible; converting from a string or a
/// `LocalPath` can fail with [`Error::InvalidArgument`].
///
/// # Examples
///
/// ```
/// use localpath::{AbsolutePath, LocalPath};
///
/// # #[cfg(unix)]
/// # {
/// let root = AbsolutePath::new("/srv//app/").unwrap();
/// assert_eq!(root.as_str(), "/srv/app");
///
/// let config = root.join("etc/config.yaml");
/// assert_eq!(config.file_name(), "config.yaml");
///
/// let local: LocalPath = config.into();
/// assert!(local.is_absolute());
/// # }
/// assert!(AbsolutePath::new("relative/dir").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AbsolutePath {
    inner: LocalPath,
}

impl AbsolutePath {
    /// Normalize `raw` and check that it is absolute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] naming `raw` if the normalized path
    /// is not absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::AbsolutePath;
    ///
    /// # #[cfg(unix)]
    /// assert!(AbsolutePath::new("/a/b").unwrap().is_absolute());
    /// # #[cfg(windows)]
    /// assert!(AbsolutePath::new(r"C:\a\b").unwrap().is_absolute());
    ///
    /// let err = AbsolutePath::new("a/b").unwrap_err();
    /// assert!(err.is_invalid_argument());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();
        Self::from_local(LocalPath::new(raw)).map_err(|_| {
            log::debug!("rejecting non-absolute path {raw:?}");
            Error::InvalidArgument {
                value: raw.to_string(),
                reason: "path must be absolute".to_string(),
            }
        })
    }

    /// Check that an existing `LocalPath` is absolute.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `path` is not absolute.
    pub fn from_local(path: LocalPath) -> Result<Self> {
        if !path.is_absolute() {
            return Err(Error::InvalidArgument {
                value: path.into_string(),
                reason: "path must be absolute".to_string(),
            });
        }
        Ok(Self { inner: path })
    }

    /// Wrap a `LocalPath` known to be absolute.
    fn from_local_unchecked(path: LocalPath) -> Self {
        debug_assert!(path.is_absolute(), "{path} is not absolute");
        Self { inner: path }
    }

    /// The current working directory of the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read or is not
    /// valid UTF-8.
    pub fn current_dir() -> Result<Self> {
        let cwd = env::current_dir()?;
        let cwd = cwd.to_str().ok_or_else(|| Error::InvalidPath {
            path: cwd.to_string_lossy().into_owned(),
            reason: "path contains invalid UTF-8".to_string(),
        })?;
        Self::new(cwd)
    }

    /// The current user's home directory.
    ///
    /// Returns `None` if it cannot be determined, is not valid UTF-8, or is
    /// not absolute.
    #[must_use]
    pub fn home_dir() -> Option<Self> {
        let home = home::home_dir()?;
        Self::new(home.to_str()?).ok()
    }

    /// The normalized path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// The path as a standard library [`Path`].
    #[must_use]
    pub fn as_path(&self) -> &Path {
        self.inner.as_path()
    }

    /// Borrow the underlying `LocalPath`.
    #[must_use]
    pub fn as_local(&self) -> &LocalPath {
        &self.inner
    }

    /// Convert into the underlying `LocalPath`.
    #[must_use]
    pub fn into_local(self) -> LocalPath {
        self.inner
    }

    /// Always `true`; provided for symmetry with [`LocalPath::is_absolute`].
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        true
    }

    /// The containing directory, or `None` for a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::AbsolutePath;
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let path = AbsolutePath::new("/var/log").unwrap();
    /// assert_eq!(path.parent().unwrap().as_str(), "/var");
    /// assert!(AbsolutePath::new("/").unwrap().parent().is_none());
    /// # }
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.inner.parent().map(Self::from_local_unchecked)
    }

    /// The last component; empty for a root.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.inner.file_name()
    }

    /// Iterate over the components after the root.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.inner.components()
    }

    /// Textual prefix test; see [`LocalPath::starts_with`].
    #[must_use]
    pub fn starts_with(&self, other: &LocalPath) -> bool {
        self.inner.starts_with(other)
    }

    /// Component-aligned ancestry test; see [`LocalPath::is_prefix_of`].
    #[must_use]
    pub fn is_prefix_of(&self, other: &LocalPath) -> bool {
        self.inner.is_prefix_of(other)
    }

    /// Append `other`; an absolute `other` replaces this path.
    ///
    /// The result is absolute in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::{AbsolutePath, LocalPath};
    ///
    /// # #[cfg(unix)]
    /// # {
    /// let base = AbsolutePath::new("/a/b").unwrap();
    /// assert_eq!(base.join(LocalPath::new("c")).as_str(), "/a/b/c");
    /// assert_eq!(base.join("/x").as_str(), "/x");
    /// # }
    /// ```
    #[must_use]
    pub fn join(&self, other: impl AsRef<str>) -> AbsolutePath {
        Self::from_local_unchecked(self.inner.join(other))
    }

    /// The relative path leading from `base` to this path.
    ///
    /// See [`LocalPath::relative_to`].
    #[must_use]
    pub fn relative_to(&self, base: &AbsolutePath) -> LocalPath {
        self.inner.relative_to(&base.inner)
    }

    /// Lexically fold `..` segments; see [`LocalPath::resolve_parent_refs`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if a `..` would climb above the root.
    pub fn resolve_parent_refs(&self) -> Result<AbsolutePath> {
        self.inner
            .resolve_parent_refs()
            .map(Self::from_local_unchecked)
    }

    /// Classify what this path names on the native file system.
    ///
    /// # Errors
    ///
    /// Returns an error if the file system cannot be queried.
    pub fn read_kind(&self) -> Result<Option<EntryKind>> {
        self.inner.read_kind()
    }

    /// Classify this path with a specific classifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier's file system reports one.
    pub fn read_kind_with<F: FileSystem>(
        &self,
        classifier: &EntryClassifier<F>,
    ) -> Result<Option<EntryKind>> {
        self.inner.read_kind_with(classifier)
    }
}

impl fmt::Display for AbsolutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl AsRef<str> for AbsolutePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<Path> for AbsolutePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl AsRef<LocalPath> for AbsolutePath {
    fn as_ref(&self) -> &LocalPath {
        &self.inner
    }
}

impl TryFrom<&str> for AbsolutePath {
    type Error = Error;

    fn try_from(raw: &str) -> Result<Self> {
        Self::new(raw)
    }
}

impl TryFrom<String> for AbsolutePath {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(raw)
    }
}

impl TryFrom<LocalPath> for AbsolutePath {
    type Error = Error;

    fn try_from(path: LocalPath) -> Result<Self> {
        Self::from_local(path)
    }
}

impl FromStr for AbsolutePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<AbsolutePath> for String {
    fn from(path: AbsolutePath) -> Self {
        path.inner.into_string()
    }
}

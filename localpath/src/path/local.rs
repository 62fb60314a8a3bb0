//! The `LocalPath` value type.

use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::{EntryClassifier, EntryKind, FileSystem, NativeFileSystem};
use crate::error::Result;
use crate::path::absolute::AbsolutePath;
use crate::path::normalize::{PathStyle, CURRENT_DIR};

/// A normalized file-system path that may be relative or absolute.
///
/// Construction always normalizes (see [`PathStyle::normalize`]), so two
/// `LocalPath` values are equal exactly when their normalized strings are
/// equal. Comparison is case-sensitive on every platform.
///
/// # Examples
///
/// ```
/// use localpath::LocalPath;
///
/// let path = LocalPath::new("src//./path/");
/// assert_eq!(path, LocalPath::new("src/path"));
/// assert!(!path.is_absolute());
/// assert_eq!(path.file_name(), "path");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocalPath {
    value: String,
}

impl LocalPath {
    /// Create a path from any string, normalizing it.
    ///
    /// Never fails; the empty string becomes `"."`.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// assert_eq!(LocalPath::new("").as_str(), ".");
    /// assert_eq!(LocalPath::new("a/./b").as_str(), LocalPath::new("a/b").as_str());
    /// ```
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            value: PathStyle::NATIVE.normalize(raw.as_ref()),
        }
    }

    /// The path representing the current directory, `"."`.
    #[must_use]
    pub fn current_dir_marker() -> Self {
        Self {
            value: CURRENT_DIR.to_string(),
        }
    }

    /// Wrap a string that is already in normal form.
    pub(crate) fn from_normalized(value: String) -> Self {
        debug_assert_eq!(PathStyle::NATIVE.normalize(&value), value);
        Self { value }
    }

    /// The normalized path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The path as a standard library [`Path`] for file-system calls.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.value)
    }

    /// Convert into the normalized `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }

    /// Whether the path is absolute.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// # #[cfg(unix)]
    /// assert!(LocalPath::new("/etc/hosts").is_absolute());
    /// assert!(!LocalPath::new("etc/hosts").is_absolute());
    /// ```
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        PathStyle::NATIVE.is_absolute(&self.value)
    }

    /// Whether the path starts from a root.
    ///
    /// Identical to [`is_absolute`](Self::is_absolute) except on Windows,
    /// where `C:foo` and `\foo` are rooted without being absolute.
    #[must_use]
    pub fn is_rooted(&self) -> bool {
        PathStyle::NATIVE.is_rooted(&self.value)
    }

    /// The directory containing this path, if any.
    ///
    /// Roots, `"."` and bare file names have no parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// let path = LocalPath::new("a/b/c");
    /// assert_eq!(path.parent(), Some(LocalPath::new("a/b")));
    /// assert_eq!(LocalPath::new("c").parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        PathStyle::NATIVE.parent(&self.value).map(Self::new)
    }

    /// The last component, extension included; empty for roots and `"."`.
    #[must_use]
    pub fn file_name(&self) -> &str {
        PathStyle::NATIVE.file_name(&self.value)
    }

    /// Iterate over the components after the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// let path = LocalPath::new("a/../b");
    /// assert_eq!(path.components().collect::<Vec<_>>(), vec!["a", "..", "b"]);
    /// ```
    pub fn components(&self) -> impl Iterator<Item = &str> {
        let (_, rest) = PathStyle::NATIVE.split_root(&self.value);
        PathStyle::NATIVE.segments(rest)
    }

    /// Textual prefix test on the normalized strings.
    ///
    /// This is not an ancestry check: `/foo2` starts with `/foo`. Use
    /// [`is_prefix_of`](Self::is_prefix_of) to ask whether one path contains
    /// another.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// let foo = LocalPath::new("/foo");
    /// let foo2 = LocalPath::new("/foo2");
    /// assert!(foo2.starts_with(&foo));
    /// assert!(!foo.is_prefix_of(&foo2));
    /// ```
    #[must_use]
    pub fn starts_with(&self, other: &LocalPath) -> bool {
        self.value.starts_with(&other.value)
    }

    /// Whether this path is `other` or one of its ancestors.
    ///
    /// The match is aligned on components: the character of `other` right
    /// after this path must be a separator, unless this path is a root.
    ///
    /// A bare root such as `/` or `C:\` is therefore a prefix of every path
    /// under it, even though `/` has no separator-terminated component of its
    /// own to match. `PathRelationship` inherits this, so a root contains
    /// everything beneath it.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// let project = LocalPath::new("/home/user/project");
    /// assert!(project.is_prefix_of(&LocalPath::new("/home/user/project/src")));
    /// assert!(project.is_prefix_of(&project));
    /// assert!(!project.is_prefix_of(&LocalPath::new("/home/user/project2")));
    /// assert!(LocalPath::new("/").is_prefix_of(&project));
    /// ```
    #[must_use]
    pub fn is_prefix_of(&self, other: &LocalPath) -> bool {
        PathStyle::NATIVE.is_prefix_of(&self.value, &other.value)
    }

    /// The relative path leading from `base` to this path.
    ///
    /// Equal paths give `"."`. Shared leading components are dropped and a
    /// `..` is emitted for each remaining component of `base`. Existing `..`
    /// segments in either path are resolved lexically first, so a base of
    /// `/a/b/..` behaves like `/a`. When the two paths do not share a root,
    /// or that resolution fails, there is no relative form and this path is
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// let target = LocalPath::new("/srv/app/logs");
    /// let base = LocalPath::new("/srv/data");
    /// assert_eq!(target.relative_to(&base), LocalPath::new("../app/logs"));
    /// assert_eq!(base.relative_to(&base).as_str(), ".");
    /// ```
    #[must_use]
    pub fn relative_to(&self, base: &LocalPath) -> LocalPath {
        Self::new(PathStyle::NATIVE.relative_path(&self.value, &base.value))
    }

    /// Append `other` to this path.
    ///
    /// If `other` is absolute it replaces this path entirely, whether this
    /// path is absolute or not. Otherwise the result is the normalized
    /// concatenation. `..` segments are kept; see
    /// [`resolve_parent_refs`](Self::resolve_parent_refs).
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// let base = LocalPath::new("/a/b");
    /// # #[cfg(unix)]
    /// # {
    /// assert_eq!(base.join("c").as_str(), "/a/b/c");
    /// assert_eq!(base.join("/etc").as_str(), "/etc");
    /// # }
    /// ```
    #[must_use]
    pub fn join(&self, other: impl AsRef<str>) -> LocalPath {
        let other = other.as_ref();
        if PathStyle::NATIVE.is_absolute(other) {
            log::trace!("absolute {other} replaces join base {}", self.value);
        }
        Self::from_normalized(PathStyle::NATIVE.join(&self.value, other))
    }

    /// Lexically fold `..` segments into the components before them.
    ///
    /// No file-system access happens, so a `..` following a symlink is
    /// resolved against the link's name rather than its target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`](crate::Error::InvalidPath) if a `..`
    /// would climb above the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::LocalPath;
    ///
    /// let path = LocalPath::new("a/b/../c");
    /// assert_eq!(path.resolve_parent_refs().unwrap(), LocalPath::new("a/c"));
    /// ```
    pub fn resolve_parent_refs(&self) -> Result<LocalPath> {
        PathStyle::NATIVE
            .resolve_parent_refs(&self.value)
            .map(Self::from_normalized)
    }

    /// Classify what this path currently names on the native file system.
    ///
    /// Returns `Ok(None)` when nothing exists at the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file system cannot be queried, e.g. because
    /// permission is denied.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use localpath::{EntryKind, LocalPath};
    ///
    /// let kind = LocalPath::new("/etc").read_kind().unwrap();
    /// assert_eq!(kind, Some(EntryKind::Directory));
    /// ```
    pub fn read_kind(&self) -> Result<Option<EntryKind>> {
        EntryClassifier::new(NativeFileSystem).classify(&self.value)
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
        classifier.classify(&self.value)
    }
}

impl fmt::Display for LocalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for LocalPath {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl AsRef<Path> for LocalPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl From<&str> for LocalPath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for LocalPath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<LocalPath> for String {
    fn from(path: LocalPath) -> Self {
        path.value
    }
}

impl FromStr for LocalPath {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

// The wrapped string is already normalized, so these copy it as is.

impl From<AbsolutePath> for LocalPath {
    fn from(path: AbsolutePath) -> Self {
        path.into_local()
    }
}

impl From<&AbsolutePath> for LocalPath {
    fn from(path: &AbsolutePath) -> Self {
        path.as_local().clone()
    }
}

//! Classification of file-system entries.
//!
//! The path types never touch the file system themselves. Asking what a path
//! currently names goes through the [`FileSystem`] trait, whose answers
//! [`EntryClassifier`] maps onto an [`EntryKind`]:
//!
//! 1. nothing exists at the path: `None`
//! 2. it exists and is not a directory: [`EntryKind::File`]
//! 3. junction support and the entry is a junction: [`EntryKind::Junction`]
//! 4. the entry is a symlink / reparse point: [`EntryKind::Symlink`]
//! 5. otherwise: [`EntryKind::Directory`]
//!
//! Existence and the directory check follow links, so a symlink to a file is
//! reported as a file and a dangling symlink as absent.
//!
//! Platform differences live entirely in [`NativeFileSystem`].

mod native;

use std::fmt;
use std::io;

use crate::error::{Error, Result};

pub use native::NativeFileSystem;

/// What a path currently names on the file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A regular file, or anything else that is not a directory.
    File,
    /// A plain directory.
    Directory,
    /// A symbolic link (reparse point) to a directory.
    Symlink,
    /// A Windows directory junction.
    Junction,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Directory => write!(f, "directory"),
            Self::Symlink => write!(f, "symlink"),
            Self::Junction => write!(f, "junction"),
        }
    }
}

/// The file-system queries entry classification is built on.
///
/// Every query takes a normalized path string. "Not found" is an answer
/// (`Ok(false)`), not an error; errors are reserved for queries that could
/// not be answered.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Whether a file or directory exists at `path`, following links.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined.
    fn exists(&self, path: &str) -> io::Result<bool>;

    /// Whether `path` is a directory, following links.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry's metadata cannot be read.
    fn is_directory(&self, path: &str) -> io::Result<bool>;

    /// Whether the entry at `path` itself is a symlink or reparse point.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry's metadata cannot be read.
    fn is_symlink(&self, path: &str) -> io::Result<bool>;

    /// Whether the entry at `path` is a directory junction.
    ///
    /// Always `false` where junctions do not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry's metadata cannot be read.
    fn is_junction(&self, path: &str) -> io::Result<bool>;

    /// Whether this file system has directory junctions at all.
    fn supports_junctions(&self) -> bool;
}

/// Maps [`FileSystem`] answers onto an [`EntryKind`].
///
/// # Examples
///
/// ```no_run
/// use localpath::{EntryClassifier, EntryKind, NativeFileSystem};
///
/// let classifier = EntryClassifier::new(NativeFileSystem);
/// assert_eq!(classifier.classify("/tmp").unwrap(), Some(EntryKind::Directory));
/// assert_eq!(classifier.classify("/does/not/exist").unwrap(), None);
/// ```
#[derive(Debug, Clone)]
pub struct EntryClassifier<F = NativeFileSystem> {
    fs: F,
    detect_junctions: bool,
}

impl Default for EntryClassifier<NativeFileSystem> {
    fn default() -> Self {
        Self::new(NativeFileSystem)
    }
}

impl<F: FileSystem> EntryClassifier<F> {
    /// Create a classifier over `fs` with junction detection enabled.
    #[must_use]
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            detect_junctions: true,
        }
    }

    /// Configure whether junctions are reported as [`EntryKind::Junction`].
    ///
    /// When disabled, junctions fall through to the symlink check.
    #[must_use]
    pub fn with_junction_detection(mut self, detect: bool) -> Self {
        self.detect_junctions = detect;
        self
    }

    /// Whether junctions will be reported as such.
    #[must_use]
    pub fn detects_junctions(&self) -> bool {
        self.detect_junctions && self.fs.supports_junctions()
    }

    /// The underlying file system.
    #[must_use]
    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Classify the entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PermissionDenied`] or [`Error::Io`] if one of the
    /// underlying queries fails. Absence is reported as `Ok(None)`.
    pub fn classify(&self, path: &str) -> Result<Option<EntryKind>> {
        let kind = self.classify_inner(path).map_err(|e| {
            log::debug!("classifying {path} failed: {e}");
            Error::from_io(path, e)
        })?;
        log::trace!(
            "{path} classified as {}",
            kind.map_or_else(|| "absent".to_string(), |k| k.to_string())
        );
        Ok(kind)
    }

    fn classify_inner(&self, path: &str) -> io::Result<Option<EntryKind>> {
        if !self.fs.exists(path)? {
            return Ok(None);
        }
        if !self.fs.is_directory(path)? {
            return Ok(Some(EntryKind::File));
        }
        if self.detects_junctions() && self.fs.is_junction(path)? {
            return Ok(Some(EntryKind::Junction));
        }
        if self.fs.is_symlink(path)? {
            return Ok(Some(EntryKind::Symlink));
        }
        Ok(Some(EntryKind::Directory))
    }
}

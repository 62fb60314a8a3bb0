//! Common test utilities for integration tests.
//!
//! This module provides helpers for building real file-system fixtures in a
//! temporary directory and addressing them with the localpath types.

use std::fs;

use localpath::AbsolutePath;
use tempfile::TempDir;

/// A temporary directory addressed as an [`AbsolutePath`].
///
/// The directory is removed when the fixture is dropped.
#[allow(dead_code)]
pub struct Fixture {
    _dir: TempDir,
    root: AbsolutePath,
}

#[allow(dead_code)]
impl Fixture {
    /// Creates an empty fixture directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = AbsolutePath::new(dir.path().to_str().expect("utf-8 temp dir"))
            .expect("temp dir is absolute");
        Self { _dir: dir, root }
    }

    /// The fixture root.
    pub fn root(&self) -> &AbsolutePath {
        &self.root
    }

    /// Creates a file with some contents at `relative` and returns its path.
    pub fn file(&self, relative: &str) -> AbsolutePath {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(&parent).expect("create parent directories");
        }
        fs::write(&path, "contents").expect("write file");
        path
    }

    /// Creates a directory (and its parents) at `relative`.
    pub fn dir(&self, relative: &str) -> AbsolutePath {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).expect("create directory");
        path
    }

    /// Creates a symlink at `relative` pointing at `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &AbsolutePath, relative: &str) -> AbsolutePath {
        let link = self.root.join(relative);
        std::os::unix::fs::symlink(target, &link).expect("create symlink");
        link
    }
}

//! The platform file system, via `std::fs`.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use super::FileSystem;

/// [`FileSystem`] backed by the operating system.
///
/// On Unix there are no junctions and a symlink is whatever
/// `symlink_metadata` reports as one. On Windows every reparse point counts
/// as a symlink, and a reparse point tagged as a mount point is a junction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeFileSystem;

/// Treat "not found" as a negative answer rather than a failure.
fn absent_as_false(result: io::Result<bool>) -> io::Result<bool> {
    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        other => other,
    }
}

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &str) -> io::Result<bool> {
        Path::new(path).try_exists()
    }

    fn is_directory(&self, path: &str) -> io::Result<bool> {
        absent_as_false(fs::metadata(path).map(|m| m.is_dir()))
    }

    #[cfg(not(windows))]
    fn is_symlink(&self, path: &str) -> io::Result<bool> {
        absent_as_false(fs::symlink_metadata(path).map(|m| m.file_type().is_symlink()))
    }

    #[cfg(windows)]
    fn is_symlink(&self, path: &str) -> io::Result<bool> {
        use std::os::windows::fs::MetadataExt;

        const FILE_ATTRIBUTE_REPARSE_POINT: u32 = 0x400;
        absent_as_false(
            fs::symlink_metadata(path)
                .map(|m| m.file_attributes() & FILE_ATTRIBUTE_REPARSE_POINT != 0),
        )
    }

    #[cfg(not(windows))]
    fn is_junction(&self, _path: &str) -> io::Result<bool> {
        Ok(false)
    }

    // std reports junctions as directory symlinks, so the reparse tag decides.
    #[cfg(windows)]
    fn is_junction(&self, path: &str) -> io::Result<bool> {
        if !self.is_symlink(path)? {
            return Ok(false);
        }
        absent_as_false(junction::exists(path))
    }

    fn supports_junctions(&self) -> bool {
        cfg!(windows)
    }
}

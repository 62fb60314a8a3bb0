//! Path normalization and the string-level path rules.
//!
//! Normalization converts a path string to its canonical textual form by:
//! - Collapsing runs of separators into one
//! - Removing `.` segments
//! - Rewriting every separator to the style's canonical separator
//! - Preserving the root (leading separator, drive, UNC or device prefix)
//!
//! It never resolves `..` and never touches the file system. The empty string
//! and any relative path with no remaining segments normalize to `"."`; a
//! string made only of separators normalizes to the root.
//!
//! Every rule is parameterized by a [`PathStyle`] so that both the POSIX and
//! the Windows rules can be exercised on any host. The path types in this
//! crate always use [`PathStyle::NATIVE`].

use std::iter;

use crate::error::{Error, Result};

/// Marker for the current directory; the normal form of an empty path.
pub const CURRENT_DIR: &str = ".";

/// Parent directory segment. Normalization leaves it in place.
pub const PARENT_DIR: &str = "..";

/// The set of path rules in effect.
///
/// # Examples
///
/// ```
/// use localpath::path::PathStyle;
///
/// assert_eq!(PathStyle::Posix.normalize("/a//./b/"), "/a/b");
/// assert_eq!(PathStyle::Windows.normalize("c:/a//./b/"), r"c:\a\b");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathStyle {
    /// `/` is the only separator; a leading `/` is the root.
    Posix,
    /// `\` and `/` are separators, `\` is canonical; drive letters, UNC and
    /// device prefixes form the root.
    Windows,
}

/// Root of a path, borrowing from the string it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Root<'a> {
    None,
    /// Leading separator only.
    Dir,
    /// `C:` with no separator after it.
    Drive(&'a str),
    /// `C:\`
    DriveDir(&'a str),
    /// `\\server\`
    Unc(&'a str),
    /// `\\?\volume\` or `\\.\volume\`; the volume may be empty.
    Device(&'a str, &'a str),
}

impl Root<'_> {
    fn is_rooted(self) -> bool {
        !matches!(self, Self::None)
    }

    fn is_absolute(self, style: PathStyle) -> bool {
        match self {
            Self::Dir => style == PathStyle::Posix,
            Self::DriveDir(_) | Self::Unc(_) | Self::Device(..) => true,
            Self::None | Self::Drive(_) => false,
        }
    }

    fn write(self, out: &mut String, sep: char) {
        match self {
            Self::None => {}
            Self::Dir => out.push(sep),
            Self::Drive(drive) => out.push_str(drive),
            Self::DriveDir(drive) => {
                out.push_str(drive);
                out.push(sep);
            }
            Self::Unc(server) => {
                out.extend([sep, sep]);
                out.push_str(server);
                out.push(sep);
            }
            Self::Device(marker, volume) => {
                out.extend([sep, sep]);
                out.push_str(marker);
                out.push(sep);
                if !volume.is_empty() {
                    out.push_str(volume);
                    out.push(sep);
                }
            }
        }
    }
}

/// A scanned path: its root and the remainder after the root's separators.
///
/// `rest` is always a suffix of the scanned string.
struct Scan<'a> {
    root: Root<'a>,
    rest: &'a str,
}

impl PathStyle {
    /// The style of the platform this crate was built for.
    #[cfg(windows)]
    pub const NATIVE: Self = Self::Windows;

    /// The style of the platform this crate was built for.
    #[cfg(not(windows))]
    pub const NATIVE: Self = Self::Posix;

    /// The canonical separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// The canonical separator as a string slice.
    #[must_use]
    pub const fn separator_str(self) -> &'static str {
        match self {
            Self::Posix => "/",
            Self::Windows => "\\",
        }
    }

    /// Whether `c` separates path segments in this style.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::path::PathStyle;
    ///
    /// assert!(PathStyle::Windows.is_separator('/'));
    /// assert!(!PathStyle::Posix.is_separator('\\'));
    /// ```
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Normalize `raw` to its canonical textual form.
    ///
    /// Total, pure and idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::path::PathStyle;
    ///
    /// let style = PathStyle::Posix;
    /// assert_eq!(style.normalize("a/./b//c/"), "a/b/c");
    /// assert_eq!(style.normalize("/a/../b"), "/a/../b");
    /// assert_eq!(style.normalize(""), ".");
    /// assert_eq!(style.normalize("///"), "/");
    /// ```
    #[must_use]
    pub fn normalize(self, raw: &str) -> String {
        let Scan { root, rest } = self.scan(raw);
        let sep = self.separator();

        let mut out = String::with_capacity(raw.len().max(1));
        root.write(&mut out, sep);

        let mut needs_separator = false;
        for segment in self.segments(rest) {
            if needs_separator {
                out.push(sep);
            } else if !root.is_rooted() {
                self.guard_drive_lookalike(&mut out, segment);
            }
            out.push_str(segment);
            needs_separator = true;
        }

        if out.is_empty() {
            out.push_str(CURRENT_DIR);
        }
        out
    }

    /// Whether `path` starts from a root (separator, drive or device prefix).
    #[must_use]
    pub fn is_rooted(self, path: &str) -> bool {
        self.scan(path).root.is_rooted()
    }

    /// Whether `path` is absolute.
    ///
    /// On POSIX this is the same as [`is_rooted`](Self::is_rooted). On Windows
    /// a rooted path must also name its drive, server or device: `C:foo` and
    /// `\foo` are rooted but depend on the current drive or directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::path::PathStyle;
    ///
    /// assert!(PathStyle::Posix.is_absolute("/etc"));
    /// assert!(PathStyle::Windows.is_absolute(r"C:\Windows"));
    /// assert!(!PathStyle::Windows.is_absolute("C:"));
    /// assert!(!PathStyle::Windows.is_absolute(r"\Windows"));
    /// ```
    #[must_use]
    pub fn is_absolute(self, path: &str) -> bool {
        self.scan(path).root.is_absolute(self)
    }

    /// Split `path` into its root and the remainder.
    ///
    /// For a normalized path the root is returned in canonical form and the
    /// remainder carries no leading separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Posix.split_root("/usr/lib"), ("/", "usr/lib"));
    /// assert_eq!(PathStyle::Posix.split_root("usr/lib"), ("", "usr/lib"));
    /// assert_eq!(
    ///     PathStyle::Windows.split_root(r"\\server\share\x"),
    ///     (r"\\server\", r"share\x")
    /// );
    /// ```
    #[must_use]
    pub fn split_root(self, path: &str) -> (&str, &str) {
        let rest = self.scan(path).rest;
        path.split_at(path.len() - rest.len())
    }

    /// Directory portion of a normalized path, if it has one.
    ///
    /// A root, the current-directory marker and a bare file name have no
    /// parent.
    #[must_use]
    pub fn parent(self, path: &str) -> Option<&str> {
        let (root, rest) = self.split_root(path);
        if rest.is_empty() || rest == CURRENT_DIR {
            return None;
        }
        match rest.rfind(|c| self.is_separator(c)) {
            Some(index) => Some(&path[..root.len() + index]),
            None if !root.is_empty() => Some(root),
            None => None,
        }
    }

    /// Last segment of a normalized path; empty for roots and `"."`.
    #[must_use]
    pub fn file_name(self, path: &str) -> &str {
        let (_, rest) = self.split_root(path);
        if rest == CURRENT_DIR {
            return "";
        }
        rest.rsplit(|c| self.is_separator(c)).next().unwrap_or("")
    }

    /// Join two normalized paths; an absolute `other` replaces `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::path::PathStyle;
    ///
    /// let style = PathStyle::Posix;
    /// assert_eq!(style.join("/a/b", "c"), "/a/b/c");
    /// assert_eq!(style.join("/a/b", "/x"), "/x");
    /// assert_eq!(style.join(".", "c"), "c");
    /// ```
    #[must_use]
    pub fn join(self, base: &str, other: &str) -> String {
        let other = self.normalize(other);
        if self.is_absolute(&other) {
            return other;
        }

        let (root, rest) = self.split_root(base);
        let mut joined = String::with_capacity(base.len() + other.len() + 1);
        if rest == CURRENT_DIR {
            joined.push_str(root);
        } else {
            joined.push_str(base);
            if !rest.is_empty() {
                joined.push(self.separator());
            }
        }
        joined.push_str(&other);
        self.normalize(&joined)
    }

    /// Whether normalized `prefix` is a component-aligned ancestor of
    /// normalized `path`, or equal to it.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::path::PathStyle;
    ///
    /// let style = PathStyle::Posix;
    /// assert!(style.is_prefix_of("/foo", "/foo/bar"));
    /// assert!(style.is_prefix_of("/", "/foo"));
    /// assert!(!style.is_prefix_of("/foo", "/foo2"));
    /// ```
    #[must_use]
    pub fn is_prefix_of(self, prefix: &str, path: &str) -> bool {
        let Some(tail) = path.strip_prefix(prefix) else {
            return false;
        };
        if tail.is_empty() || tail.starts_with(|c| self.is_separator(c)) {
            return true;
        }
        let (root, rest) = self.split_root(prefix);
        !root.is_empty() && rest.is_empty()
    }

    /// Relative path leading from normalized `base` to normalized `target`.
    ///
    /// Both paths have their `..` segments resolved lexically before they
    /// are compared. Paths with different roots have no relative form, and
    /// neither does a target whose base climbs through leading `..` segments
    /// it does not share. In those cases `target` is returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::path::PathStyle;
    ///
    /// let style = PathStyle::Posix;
    /// assert_eq!(style.relative_path("/a/b/c", "/a"), "b/c");
    /// assert_eq!(style.relative_path("/a/x", "/a/b/c"), "../../x");
    /// assert_eq!(style.relative_path("/a/c", "/a/b/.."), "c");
    /// assert_eq!(style.relative_path("/a", "/a"), ".");
    /// assert_eq!(style.relative_path("a", "/a"), "a");
    /// ```
    #[must_use]
    pub fn relative_path(self, target: &str, base: &str) -> String {
        if self.split_root(target).0 != self.split_root(base).0 {
            return target.to_string();
        }
        let (Ok(resolved_target), Ok(resolved_base)) =
            (self.resolve_parent_refs(target), self.resolve_parent_refs(base))
        else {
            return target.to_string();
        };

        let target_segments: Vec<&str> = self
            .segments(self.split_root(&resolved_target).1)
            .collect();
        let base_segments: Vec<&str> = self.segments(self.split_root(&resolved_base).1).collect();
        let shared = target_segments
            .iter()
            .zip(&base_segments)
            .take_while(|(t, b)| t == b)
            .count();

        // Climbing out of an unnamed parent cannot be undone by name.
        if base_segments[shared..].contains(&PARENT_DIR) {
            return target.to_string();
        }

        let parts: Vec<&str> = iter::repeat(PARENT_DIR)
            .take(base_segments.len() - shared)
            .chain(target_segments[shared..].iter().copied())
            .collect();

        let mut out = String::new();
        if let Some(first) = parts.first() {
            self.guard_drive_lookalike(&mut out, first);
        }
        out.push_str(&parts.join(self.separator_str()));
        if out.is_empty() {
            out.push_str(CURRENT_DIR);
        }
        out
    }

    /// Resolve `..` segments lexically, without consulting the file system.
    ///
    /// A `..` removes the segment before it. Leading `..` segments of a
    /// relative path are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a `..` would climb above the root of a rooted
    /// path.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::path::PathStyle;
    ///
    /// let style = PathStyle::Posix;
    /// assert_eq!(style.resolve_parent_refs("/a/b/../c").unwrap(), "/a/c");
    /// assert_eq!(style.resolve_parent_refs("../a/..").unwrap(), "..");
    /// assert!(style.resolve_parent_refs("/a/../..").is_err());
    /// ```
    pub fn resolve_parent_refs(self, path: &str) -> Result<String> {
        let Scan { root, rest } = self.scan(path);
        let mut stack: Vec<&str> = Vec::new();

        for segment in self.segments(rest) {
            if segment != PARENT_DIR {
                stack.push(segment);
                continue;
            }
            match stack.last() {
                Some(&last) if last != PARENT_DIR => {
                    stack.pop();
                }
                _ if root.is_rooted() => {
                    return Err(Error::InvalidPath {
                        path: path.to_string(),
                        reason: "'..' climbs above the root".to_string(),
                    });
                }
                _ => stack.push(PARENT_DIR),
            }
        }

        let mut out = String::with_capacity(path.len());
        root.write(&mut out, self.separator());
        if let (false, Some(first)) = (root.is_rooted(), stack.first()) {
            self.guard_drive_lookalike(&mut out, first);
        }
        out.push_str(&stack.join(self.separator_str()));
        if out.is_empty() {
            out.push_str(CURRENT_DIR);
        }
        Ok(out)
    }

    /// Non-empty segments of a path remainder, `.` excluded.
    pub(crate) fn segments(self, rest: &str) -> impl Iterator<Item = &str> {
        rest.split(move |c| self.is_separator(c))
            .filter(|segment| !segment.is_empty() && *segment != CURRENT_DIR)
    }

    /// Keep a leading relative segment such as `C:` from reading as a drive.
    fn guard_drive_lookalike(self, out: &mut String, first_segment: &str) {
        let bytes = first_segment.as_bytes();
        if self == Self::Windows
            && bytes.len() >= 2
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
        {
            out.push_str(CURRENT_DIR);
            out.push(self.separator());
        }
    }

    fn trim_separators(self, s: &str) -> &str {
        s.trim_start_matches(|c| self.is_separator(c))
    }

    /// First segment of `s` and what follows it, separators trimmed.
    fn next_segment(self, s: &str) -> (&str, &str) {
        let s = self.trim_separators(s);
        match s.find(|c| self.is_separator(c)) {
            Some(index) => (&s[..index], self.trim_separators(&s[index..])),
            None => (s, ""),
        }
    }

    fn scan(self, s: &str) -> Scan<'_> {
        match self {
            Self::Posix => match s.strip_prefix('/') {
                Some(after) => Scan {
                    root: Root::Dir,
                    rest: self.trim_separators(after),
                },
                None => Scan {
                    root: Root::None,
                    rest: s,
                },
            },
            Self::Windows => self.scan_windows(s),
        }
    }

    fn scan_windows(self, s: &str) -> Scan<'_> {
        let bytes = s.as_bytes();
        let is_sep = |b: u8| b == b'/' || b == b'\\';

        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            let (drive, after) = s.split_at(2);
            let rest = self.trim_separators(after);
            let root = if rest.len() < after.len() {
                Root::DriveDir(drive)
            } else {
                Root::Drive(drive)
            };
            return Scan { root, rest };
        }

        if bytes.len() >= 2 && is_sep(bytes[0]) && is_sep(bytes[1]) {
            let (first, after) = self.next_segment(&s[2..]);
            return match first {
                // Nothing but separators.
                "" => Scan {
                    root: Root::Dir,
                    rest: "",
                },
                "?" | "." => {
                    let (volume, rest) = self.next_segment(after);
                    Scan {
                        root: Root::Device(first, volume),
                        rest,
                    }
                }
                server => Scan {
                    root: Root::Unc(server),
                    rest: after,
                },
            };
        }

        if bytes.first().is_some_and(|&b| is_sep(b)) {
            return Scan {
                root: Root::Dir,
                rest: self.trim_separators(s),
            };
        }

        Scan {
            root: Root::None,
            rest: s,
        }
    }
}

/// Normalize `raw` with the native style.
///
/// # Examples
///
/// ```
/// use localpath::path::normalize::normalize;
///
/// # #[cfg(unix)]
/// assert_eq!(normalize("/srv//data/./logs/"), "/srv/data/logs");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    PathStyle::NATIVE.normalize(raw)
}

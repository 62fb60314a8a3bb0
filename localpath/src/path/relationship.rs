//! Path relationship checking.
//!
//! This module determines how two paths relate in the directory hierarchy,
//! using the component-aligned [`LocalPath::is_prefix_of`] check. Purely
//! textual prefixes such as `/foo` and `/foo2` are unrelated.

use crate::path::local::LocalPath;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use localpath::{LocalPath, PathRelationship};
///
/// let parent = LocalPath::new("/home/user");
/// let child = LocalPath::new("/home/user/project");
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are equal after normalization.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::{LocalPath, PathRelationship};
    ///
    /// let a = LocalPath::new("/a");
    /// let ab = LocalPath::new("/a/b");
    /// let a2 = LocalPath::new("/a2");
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &a2), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &LocalPath, path2: &LocalPath) -> Self {
        if path1 == path2 {
            Self::Same
        } else if path1.is_prefix_of(path2) {
            Self::Ancestor
        } else if path2.is_prefix_of(path1) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Returns `true` for `Ancestor`, `Descendant` or `Same`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if `path` is inside `directory` or is `directory` itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use localpath::{LocalPath, PathRelationship};
    ///
    /// let dir = LocalPath::new("/home/user");
    /// let file = LocalPath::new("/home/user/file.txt");
    ///
    /// assert!(PathRelationship::is_within(&file, &dir));
    /// assert!(PathRelationship::is_within(&dir, &dir));
    /// ```
    #[must_use]
    pub fn is_within(path: &LocalPath, directory: &LocalPath) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Check if `path` contains `other` or is `other` itself.
    #[must_use]
    pub fn contains(path: &LocalPath, other: &LocalPath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &LocalPath, path2: &LocalPath) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn between(a: &str, b: &str) -> PathRelationship {
        PathRelationship::between(&LocalPath::new(a), &LocalPath::new(b))
    }

    #[test]
    fn test_relationship_ancestor() {
        assert_eq!(between("a", "a/b"), PathRelationship::Ancestor);
        assert_eq!(between("a/b", "a/b/c/d"), PathRelationship::Ancestor);
    }

    #[test]
    fn test_relationship_descendant() {
        assert_eq!(between("a/b", "a"), PathRelationship::Descendant);
        assert_eq!(between("a/b/c/d", "a/b"), PathRelationship::Descendant);
    }

    #[test]
    fn test_relationship_same_after_normalization() {
        assert_eq!(between("a/b/", "a//b"), PathRelationship::Same);
        assert_eq!(between("./a", "a"), PathRelationship::Same);
    }

    #[test]
    fn test_relationship_unrelated() {
        assert_eq!(between("a", "b"), PathRelationship::Unrelated);
        assert_eq!(between("a/b", "a/c"), PathRelationship::Unrelated);
    }

    #[test]
    fn test_textual_prefix_is_unrelated() {
        assert_eq!(between("foo", "foo2"), PathRelationship::Unrelated);
        assert_eq!(between("foo2", "foo"), PathRelationship::Unrelated);
    }

    #[test]
    #[cfg(unix)]
    fn test_root_is_ancestor_of_everything_absolute() {
        assert_eq!(between("/", "/a/b"), PathRelationship::Ancestor);
        assert_eq!(between("/a", "/"), PathRelationship::Descendant);
    }

    #[test]
    fn test_is_hierarchical() {
        assert!(PathRelationship::Ancestor.is_hierarchical());
        assert!(PathRelationship::Descendant.is_hierarchical());
        assert!(PathRelationship::Same.is_hierarchical());
        assert!(!PathRelationship::Unrelated.is_hierarchical());
    }

    #[test]
    fn test_is_within_and_contains() {
        let dir = LocalPath::new("a");
        let file = LocalPath::new("a/b");
        let other = LocalPath::new("ab");
        assert!(PathRelationship::is_within(&file, &dir));
        assert!(PathRelationship::contains(&dir, &file));
        assert!(!PathRelationship::is_within(&dir, &file));
        assert!(!PathRelationship::contains(&dir, &other));
    }

    #[test]
    fn test_description() {
        let a = LocalPath::new("a");
        let b = LocalPath::new("a/b");
        let desc = PathRelationship::Ancestor.description(&a, &b);
        assert!(desc.contains("ancestor"));
        assert!(desc.contains(a.as_str()));
        assert!(desc.contains(b.as_str()));

        let desc = PathRelationship::Unrelated.description(&a, &b);
        assert!(desc.contains("unrelated"));
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-z0-9_-]{1,6}", 1..=5).prop_map(|parts| parts.join("/"))
        }

        proptest! {
            /// A path is always the same as itself
            #[test]
            fn relationship_reflexive(s in path_strategy()) {
                let path = LocalPath::new(&s);
                prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
            }

            /// If A is ancestor of B, then B is descendant of A
            #[test]
            fn relationship_symmetric(s1 in path_strategy(), s2 in path_strategy()) {
                let p1 = LocalPath::new(&s1);
                let p2 = LocalPath::new(&s2);
                let rel1 = PathRelationship::between(&p1, &p2);
                let rel2 = PathRelationship::between(&p2, &p1);

                let symmetric = matches!(
                    (rel1, rel2),
                    (PathRelationship::Ancestor, PathRelationship::Descendant)
                        | (PathRelationship::Descendant, PathRelationship::Ancestor)
                        | (PathRelationship::Same, PathRelationship::Same)
                        | (PathRelationship::Unrelated, PathRelationship::Unrelated)
                );
                prop_assert!(symmetric, "Invalid relationship symmetry: {:?} vs {:?}", rel1, rel2);
            }

            /// Joining a relative path always yields a descendant
            #[test]
            fn join_yields_descendant(s1 in path_strategy(), s2 in path_strategy()) {
                let base = LocalPath::new(&s1);
                let child = base.join(&s2);
                prop_assert_eq!(
                    PathRelationship::between(&base, &child),
                    PathRelationship::Ancestor
                );
            }
        }
    }
}

//! Property-based tests for the path types.
//!
//! Note: The normalize module already has property tests for the string
//! rules. This module focuses on the behaviour of `LocalPath` and
//! `AbsolutePath` built on top of them.

use super::{AbsolutePath, LocalPath, PathRelationship, PathStyle};
use proptest::prelude::*;

// Strategy for generating path-like strings
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,12}"
}

fn relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

// Relative paths with noise: `.` segments, doubled and trailing separators.
fn messy_relative_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => component_strategy(),
            1 => Just(".".to_string()),
            1 => Just(String::new()),
        ],
        0..8,
    )
    .prop_map(|parts| parts.join("/"))
    .prop_filter("leading empty segment makes the path rooted", |s| {
        !s.starts_with('/')
    })
}

fn absolute_strategy() -> impl Strategy<Value = AbsolutePath> {
    let root = AbsolutePath::current_dir().expect("current directory is available");
    prop::collection::vec(component_strategy(), 0..6)
        .prop_map(move |parts| root.join(parts.join("/")))
}

// Absolute paths that keep `..` segments, never climbing above the start.
fn absolute_with_parent_refs_strategy() -> impl Strategy<Value = AbsolutePath> {
    let root = AbsolutePath::current_dir().expect("current directory is available");
    let step = prop_oneof![
        3 => component_strategy(),
        1 => Just(String::from("..")),
    ];
    prop::collection::vec(step, 0..8).prop_map(move |steps| {
        let mut depth = 0usize;
        let mut parts = Vec::new();
        for step in steps {
            if step == ".." {
                if depth == 0 {
                    continue;
                }
                depth -= 1;
            } else {
                depth += 1;
            }
            parts.push(step);
        }
        root.join(parts.join("/"))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Constructing from an already-normalized value changes nothing
    #[test]
    fn construction_idempotent(raw in messy_relative_strategy()) {
        let once = LocalPath::new(&raw);
        let twice = LocalPath::new(once.as_str());
        prop_assert_eq!(once, twice);
    }

    // Equality is equality of normalized text
    #[test]
    fn equality_matches_normalized_text(a in messy_relative_strategy(), b in messy_relative_strategy()) {
        let pa = LocalPath::new(&a);
        let pb = LocalPath::new(&b);
        prop_assert_eq!(pa == pb, pa.as_str() == pb.as_str());
    }

    // Stored text never carries a trailing separator or a foreign separator
    #[test]
    fn stored_form_is_clean(raw in messy_relative_strategy()) {
        let path = LocalPath::new(&raw);
        let s = path.as_str();
        prop_assert!(!s.is_empty());
        prop_assert!(!s.ends_with(PathStyle::NATIVE.separator()));
        if PathStyle::NATIVE == PathStyle::Windows {
            prop_assert!(!s.contains('/'));
        }
    }

    // An absolute operand replaces the base entirely
    #[test]
    fn join_absolute_operand_wins(base in relative_strategy(), target in absolute_strategy()) {
        let joined = LocalPath::new(&base).join(target.as_str());
        prop_assert_eq!(joined, LocalPath::from(target));
    }

    // Joining onto an absolute path stays absolute
    #[test]
    fn join_preserves_absoluteness(base in absolute_strategy(), rel in messy_relative_strategy()) {
        let joined = base.join(&rel);
        prop_assert!(joined.as_local().is_absolute());
        prop_assert!(base.is_prefix_of(joined.as_local()));
    }

    // base.join(target.relative_to(base)) leads back to target
    #[test]
    fn relative_to_round_trip(
        target in absolute_strategy(),
        base in prop_oneof![absolute_strategy(), absolute_with_parent_refs_strategy()],
    ) {
        let rel = target.relative_to(&base);
        prop_assert!(!rel.is_absolute());
        let back = base.join(rel.as_str()).resolve_parent_refs().unwrap();
        prop_assert_eq!(back, target);
    }

    // `..` in either operand is resolved before the relative path is built
    #[test]
    fn relative_to_matches_resolved_operands(
        target in absolute_with_parent_refs_strategy(),
        base in absolute_with_parent_refs_strategy(),
    ) {
        let resolved_target = target.resolve_parent_refs().unwrap();
        let resolved_base = base.resolve_parent_refs().unwrap();
        prop_assert_eq!(target.relative_to(&base), resolved_target.relative_to(&resolved_base));
    }

    // Every path is a prefix of itself
    #[test]
    fn is_prefix_of_reflexive(raw in messy_relative_strategy()) {
        let path = LocalPath::new(&raw);
        prop_assert!(path.is_prefix_of(&path));
    }

    // Component-aligned prefixes are also textual prefixes
    #[test]
    fn is_prefix_of_implies_starts_with(a in relative_strategy(), b in relative_strategy()) {
        let pa = LocalPath::new(&a);
        let pb = LocalPath::new(&b);
        if pa.is_prefix_of(&pb) {
            prop_assert!(pb.starts_with(&pa));
        }
    }

    // Converting to an absolute path and back is lossless
    #[test]
    fn absolute_local_conversion_round_trip(path in absolute_strategy()) {
        let local = LocalPath::from(path.clone());
        let back = AbsolutePath::try_from(local).unwrap();
        prop_assert_eq!(back, path);
    }

    // Relative paths are rejected as absolute paths
    #[test]
    fn relative_rejected_as_absolute(raw in relative_strategy()) {
        prop_assert!(AbsolutePath::new(&raw).is_err());
    }

    // Relationship agrees with ancestry through join
    #[test]
    fn relationship_through_join(base in absolute_strategy(), rel in relative_strategy()) {
        let child = base.join(&rel);
        prop_assert_eq!(
            PathRelationship::between(base.as_local(), child.as_local()),
            PathRelationship::Ancestor
        );
        prop_assert_eq!(
            PathRelationship::between(child.as_local(), base.as_local()),
            PathRelationship::Descendant
        );
    }
}

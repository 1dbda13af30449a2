//! Property-based tests for path handling.
//!
//! Note: The normalize module already has quick property tests. This module
//! runs many more cases over arbitrary input.

use super::home::HomeMap;
use super::normalize::normalize;
use super::types::CanonicalPath;
use crate::error::Error;
use proptest::prelude::*;

fn cwd() -> CanonicalPath {
    CanonicalPath::new("/srv/work").unwrap()
}

fn homes() -> HomeMap {
    HomeMap::new()
        .with_current_user("alice", "/home/alice")
        .with_user("root", "/root")
}

fn canonical_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_ ~.-]{1,12}", 0..8).prop_map(|parts| {
        let parts: Vec<_> = parts
            .into_iter()
            .filter(|part| part != "." && part != "..")
            .collect();
        format!("/{}", parts.join("/"))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Arbitrary input either normalizes to a canonical path or names an unknown user
    #[test]
    fn arbitrary_input_is_canonical_or_unknown_user(raw in "\\PC{0,40}") {
        match normalize(&raw, &cwd(), &homes()) {
            Ok(path) => prop_assert!(CanonicalPath::new(path.as_str()).is_ok()),
            Err(e) => {
                prop_assert!(raw.starts_with('~'));
                prop_assert!(matches!(e, Error::UserNotFound { .. }));
            }
        }
    }

    // Canonical paths are fixed points of normalization
    #[test]
    fn canonical_paths_are_fixed_points(raw in canonical_strategy()) {
        let canonical = CanonicalPath::new(raw.as_str()).unwrap();
        let normalized = normalize(&raw, &cwd(), &homes()).unwrap();
        prop_assert_eq!(normalized, canonical);
    }

    // A relative path resolves the same as the cwd-prefixed absolute path
    #[test]
    fn relative_matches_cwd_prefixed(rel in "[a-z./]{1,30}") {
        prop_assume!(!rel.starts_with('/'));
        let relative = normalize(&rel, &cwd(), &homes()).unwrap();
        let absolute = normalize(&format!("{}/{rel}", cwd()), &cwd(), &homes()).unwrap();
        prop_assert_eq!(relative, absolute);
    }

    // Characters other than '/' are never rewritten
    #[test]
    fn plain_segments_pass_through(segment in "[^/~.][^/]{0,15}") {
        let normalized = normalize(&format!("/{segment}"), &cwd(), &homes()).unwrap();
        prop_assert_eq!(normalized.as_str(), format!("/{segment}"));
    }
}

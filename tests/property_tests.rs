use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use treediff::reconcile::reconcile;
use treediff::scanner::{DirectoryIndex, FileEntry};
use treediff::utils::{content_fingerprint, legacy_fingerprint};

fn index(root: &str, paths: &[String]) -> DirectoryIndex {
    DirectoryIndex::new(
        PathBuf::from(root),
        paths.iter().map(|p| FileEntry::new(p)).collect(),
    )
}

/// Straightforward modular restatement of the legacy algorithm
fn legacy_reference(content: &str) -> i32 {
    let mut acc: u64 = 0;
    for unit in content.encode_utf16() {
        acc = (acc * 31 + u64::from(unit)) % (1u64 << 32);
    }
    acc as u32 as i32
}

proptest! {
    #[test]
    fn test_reconcile_partitions_a(
        a in prop::collection::hash_set("[a-c]{1,2}(/[a-c]{1,2})?\\.(lua|tbl)", 0..30),
        b in prop::collection::hash_set("[a-c]{1,2}(/[a-c]{1,2})?\\.(lua|tbl)", 0..30),
    ) {
        let a: Vec<String> = a.into_iter().collect();
        let b: Vec<String> = b.into_iter().collect();
        let result = reconcile(&index("dirA", &a), &index("dirB", &b));

        let missing: HashSet<&str> = result.missing_in_b.iter().map(FileEntry::as_str).collect();
        let present: HashSet<&str> = result.present_in_both.iter().map(FileEntry::as_str).collect();
        let all_a: HashSet<&str> = a.iter().map(String::as_str).collect();
        let all_b: HashSet<&str> = b.iter().map(String::as_str).collect();

        // Invariant: disjoint, and together exactly A
        prop_assert!(missing.is_disjoint(&present));
        let union: HashSet<&str> = missing.union(&present).copied().collect();
        prop_assert_eq!(union, all_a);

        // Every present path is in B, every missing path is not
        prop_assert!(present.iter().all(|p| all_b.contains(p)));
        prop_assert!(missing.iter().all(|p| !all_b.contains(p)));
    }

    #[test]
    fn test_reconcile_preserves_a_order(
        a in prop::collection::vec("[a-d]\\.lua", 0..20),
        b in prop::collection::vec("[a-d]\\.lua", 0..5),
    ) {
        let result = reconcile(&index("dirA", &a), &index("dirB", &b));
        let b_set: HashSet<&str> = b.iter().map(String::as_str).collect();

        let expected_present: Vec<&str> =
            a.iter().map(String::as_str).filter(|p| b_set.contains(p)).collect();
        let actual_present: Vec<&str> =
            result.present_in_both.iter().map(FileEntry::as_str).collect();
        prop_assert_eq!(actual_present, expected_present);
    }

    #[test]
    fn test_legacy_fingerprint_matches_modular_definition(content in ".*") {
        prop_assert_eq!(legacy_fingerprint(&content), legacy_reference(&content));
    }

    #[test]
    fn test_fingerprints_deterministic(content in ".*") {
        prop_assert_eq!(legacy_fingerprint(&content), legacy_fingerprint(&content.clone()));
        prop_assert_eq!(content_fingerprint(&content), content_fingerprint(&content.clone()));
    }
}

#[test]
fn test_empty_content_fingerprint_is_zero() {
    assert_eq!(legacy_fingerprint(""), 0);
}

//! Property-based tests for path validation and the provisioning invariants.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::BTreeMap;
use std::path::Path;

use proptest::prelude::*;

use scaffold_cli::application::services::provision::apply;
use scaffold_cli::domain::{ContentMap, RelPath};

use crate::mocks::{MemFs, Node, RecordingReporter};

const ROOT: &str = "/tmp/proj";

/// One or more `[a-z0-9_.-]` segments that are never `.` or `..`.
fn rel_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-][a-z0-9_.-]{0,7}", 1..4).prop_map(|segs| segs.join("/"))
}

/// Paths chosen so that none is a strict prefix-directory of another, which
/// would make one entry's file block another entry's parent directory.
fn disjoint_entries() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    prop::collection::vec((rel_path(), prop::collection::vec(any::<u8>(), 0..32)), 0..8)
        .prop_map(|entries| {
            let mut kept: Vec<(String, Vec<u8>)> = Vec::new();
            for (path, content) in entries {
                let clashes = kept.iter().any(|(k, _)| {
                    path.starts_with(&format!("{k}/")) || k.starts_with(&format!("{path}/"))
                });
                if !clashes {
                    kept.push((path, content));
                }
            }
            kept
        })
}

proptest! {
    /// Any path containing a `..` segment is rejected.
    #[test]
    fn prop_traversal_rejected(prefix in rel_path(), suffix in rel_path()) {
        let candidate = format!("{prefix}/../{suffix}");
        prop_assert!(RelPath::new(&candidate).is_err(), "accepted {candidate}");
    }

    /// Any valid path resolves to somewhere under the root.
    #[test]
    fn prop_valid_paths_stay_under_root(path in rel_path()) {
        let rel = RelPath::new(&path).unwrap();
        prop_assert!(rel.resolve(Path::new(ROOT)).starts_with(ROOT));
    }

    /// Completeness and report accuracy: every key lands with its exact bytes,
    /// and the report lists each key once, in map order.
    #[test]
    fn prop_apply_is_complete_and_reports_in_order(entries in disjoint_entries()) {
        let map = ContentMap::from_pairs(entries).unwrap();
        let fs = MemFs::new();

        let report = apply(&fs, Path::new(ROOT), &map, &RecordingReporter::default()).unwrap();

        let expected: Vec<&str> = map.iter().map(|e| e.path.as_str()).collect();
        prop_assert_eq!(report.paths().collect::<Vec<_>>(), expected);
        for entry in &map {
            let target = format!("{ROOT}/{}", entry.path);
            prop_assert_eq!(fs.file(&target), Some(entry.content.clone()));
        }
    }

    /// Non-interference: pre-existing files outside the map keep their bytes.
    #[test]
    fn prop_apply_never_touches_unlisted_files(
        entries in disjoint_entries(),
        bystander in prop::collection::vec(any::<u8>(), 0..32),
    ) {
        let map = ContentMap::from_pairs(entries).unwrap();
        let fs = MemFs::new().with_file("/tmp/proj/zz-bystander/keep.bin", &bystander);

        apply(&fs, Path::new(ROOT), &map, &RecordingReporter::default()).unwrap();

        prop_assert_eq!(fs.file("/tmp/proj/zz-bystander/keep.bin"), Some(bystander));
    }

    /// Idempotence: a second apply leaves the tree exactly as the first did.
    #[test]
    fn prop_apply_twice_same_tree(entries in disjoint_entries()) {
        let map = ContentMap::from_pairs(entries).unwrap();
        let fs = MemFs::new();

        apply(&fs, Path::new(ROOT), &map, &RecordingReporter::default()).unwrap();
        let first: BTreeMap<_, Node> = fs.snapshot();
        apply(&fs, Path::new(ROOT), &map, &RecordingReporter::default()).unwrap();

        prop_assert_eq!(fs.snapshot(), first);
    }
}

#![allow(dead_code)]

use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(32);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Relative file paths, at most two directories deep, with distinct names.
pub fn arb_tree(max_files: usize) -> impl Strategy<Value = Vec<String>> {
    let segment = "[a-z0-9]{1,6}";
    let file = (
        prop::collection::vec(segment, 0..3),
        segment,
        prop::sample::select(vec!["bmp", "txt", "jpg"]),
    )
        .prop_map(|(dirs, stem, ext)| {
            let mut parts: Vec<String> = dirs.into_iter().map(|d| format!("d{}", d)).collect();
            parts.push(format!("f{}.{}", stem, ext));
            parts.join("/")
        });
    prop::collection::btree_set(file, 1..max_files).prop_map(|set| set.into_iter().collect())
}

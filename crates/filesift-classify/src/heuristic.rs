//! Name- and size-based heuristic rules.

use filesift_core::{ClassificationResult, FileMeta};

/// Files above this size classify as `large-file`.
const LARGE_FILE_BYTES: u64 = 100 * 1024 * 1024;

/// Apply the ordered heuristic rules to a file's metadata.
///
/// First match wins; at most one heuristic result per file:
///
/// 1. Name contains `readme` or `license` (case-insensitive).
/// 2. Size above 100 MiB.
/// 3. Empty file.
pub fn apply_heuristics(meta: &FileMeta) -> Option<ClassificationResult> {
    let name = meta.name.to_lowercase();
    if name.contains("readme") || name.contains("license") {
        return Some(ClassificationResult::matched(
            "document",
            Some("readme"),
            0.8,
            "Filename suggests documentation",
        ));
    }
    if meta.size > LARGE_FILE_BYTES {
        return Some(ClassificationResult::matched(
            "large-file",
            None,
            0.6,
            "File is very large (>100MB)",
        ));
    }
    if meta.size == 0 {
        return Some(ClassificationResult::matched(
            "empty",
            None,
            0.9,
            "File is empty",
        ));
    }
    None
}

//! Concurrent classification of one batch.

use filesift_classify::FileClassifier;
use filesift_core::{ClassifiedFile, ScanError};
use filesift_scan::FileEntry;

/// Classify every file in `chunk` concurrently and join the results
/// in original order.
///
/// One blocking task per chunk member, so in-flight header reads are
/// bounded by the chunk size. Each member resolves independently: a
/// failed file yields its own `Err` and never aborts its siblings.
/// Joining in original order keeps downstream logs deterministic.
pub(crate) async fn classify_batch(
    classifier: FileClassifier,
    chunk: &[FileEntry],
) -> Vec<Result<ClassifiedFile, ScanError>> {
    let handles: Vec<_> = chunk
        .iter()
        .cloned()
        .map(|entry| tokio::task::spawn_blocking(move || classifier.classify(&entry)))
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(result) => results.push(result),
            // A panicked classification task counts as that file failing.
            Err(join_err) => results.push(Err(ScanError::Other {
                message: format!("classification task failed: {join_err}"),
            })),
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn test_batch_results_in_original_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.png"), [0x89, 0x50, 0x4E, 0x47]).unwrap();
        fs::write(temp.path().join("b.txt"), "text").unwrap();
        fs::write(temp.path().join("c.zip"), [0x50, 0x4B, 0x03, 0x04]).unwrap();

        let chunk = vec![
            FileEntry::new(temp.path().join("a.png"), "a.png"),
            FileEntry::new(temp.path().join("b.txt"), "b.txt"),
            FileEntry::new(temp.path().join("c.zip"), "c.zip"),
        ];

        let results = classify_batch(FileClassifier::new(), &chunk).await;
        assert_eq!(results.len(), 3);

        let rels: Vec<String> = results
            .iter()
            .map(|r| r.as_ref().unwrap().meta.rel.to_string())
            .collect();
        assert_eq!(rels, vec!["a.png", "b.txt", "c.zip"]);
    }

    #[tokio::test]
    async fn test_one_failure_does_not_abort_siblings() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("ok.png"), [0x89, 0x50, 0x4E, 0x47]).unwrap();

        let chunk = vec![
            FileEntry::new(temp.path().join("missing.bin"), "missing.bin"),
            FileEntry::new(temp.path().join("ok.png"), "ok.png"),
        ];

        let results = classify_batch(FileClassifier::new(), &chunk).await;
        assert!(results[0].is_err());
        let ok = results[1].as_ref().unwrap();
        assert_eq!(ok.classification.category, "image");
    }
}

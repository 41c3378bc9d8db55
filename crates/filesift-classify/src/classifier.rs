//! The cascading file classifier.

use tracing::trace;

use filesift_core::{
    ByteSource, ClassificationResult, ClassifiedFile, FileMeta, HEADER_LEN, ScanError,
};

use crate::extension::lookup_extension;
use crate::heuristic::apply_heuristics;
use crate::signature::detect_signature;

/// Produces exactly one [`ClassificationResult`] per file by running
/// all three detectors and keeping the highest-confidence candidate.
///
/// The cascade is exhaustive on purpose: a later, lower-priority
/// detector can still register a higher confidence for an edge case.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileClassifier;

impl FileClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify a single file.
    ///
    /// Reads up to [`HEADER_LEN`] bytes from the file's start; an I/O
    /// failure there (or on metadata) propagates to the caller, which
    /// marks the file failed rather than classified. No side effects
    /// beyond the header read; deterministic for identical content
    /// and metadata.
    pub fn classify(&self, source: &impl ByteSource) -> Result<ClassifiedFile, ScanError> {
        let header = source.read_header(HEADER_LEN)?;
        let meta = FileMeta::new(
            source.name(),
            source.media_type(),
            source.size()?,
            source.modified()?,
            source.rel(),
        );

        let candidates = [
            detect_signature(&header),
            lookup_extension(&meta.ext_lower),
            apply_heuristics(&meta),
        ];

        // Max-by-confidence with first-wins ties, in cascade order.
        let mut best = ClassificationResult::unknown();
        for candidate in candidates.into_iter().flatten() {
            if candidate.confidence > best.confidence {
                best = candidate;
            }
        }

        trace!(
            rel = meta.rel.as_str(),
            category = best.category.as_str(),
            confidence = best.confidence,
            "classified file"
        );

        Ok(ClassifiedFile {
            meta,
            classification: best,
        })
    }
}

//! Classification outcome types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::meta::FileMeta;

/// Sentinel category for files no rule matched.
pub const CATEGORY_UNKNOWN: &str = "unknown";

/// The outcome of classifying a single file.
///
/// Immutable once produced. The emitted result for a file is the single
/// candidate with the strictly greatest confidence among all candidates
/// generated for that file; ties are won by whichever candidate comes
/// first in cascade order (signature, extension, heuristic).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Semantic category. Never empty; `"unknown"` when no rule matched.
    pub category: CompactString,

    /// Finer-grained category, when a rule provides one.
    pub subcategory: Option<CompactString>,

    /// Confidence in `[0, 1]`. Exactly 0 for the unknown sentinel.
    pub confidence: f64,

    /// Ordered human-readable justifications. At least one entry
    /// when the category is not `"unknown"`.
    pub reasons: Vec<String>,
}

impl ClassificationResult {
    /// Build a result for a matched rule.
    pub fn matched(
        category: impl Into<CompactString>,
        subcategory: Option<&str>,
        confidence: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.map(CompactString::from),
            confidence,
            reasons: vec![reason.into()],
        }
    }

    /// The sentinel produced when every detector declined.
    pub fn unknown() -> Self {
        Self {
            category: CATEGORY_UNKNOWN.into(),
            subcategory: None,
            confidence: 0.0,
            reasons: vec!["No rules matched".to_string()],
        }
    }

    /// Whether this is the unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        self.category == CATEGORY_UNKNOWN
    }
}

/// A file's metadata paired with its classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedFile {
    /// Metadata derived from the byte source.
    pub meta: FileMeta,

    /// Winning classification for this file.
    pub classification: ClassificationResult,
}

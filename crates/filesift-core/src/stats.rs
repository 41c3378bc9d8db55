//! Aggregate statistics for a single classification run.

use compact_str::CompactString;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Counters accumulated over one run.
///
/// Created at run start, folded batch-by-batch, snapshotted to the
/// caller after every batch, and returned with the terminal state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Files discovered during scanning.
    pub total: u64,

    /// Files whose classification completed without error.
    pub classified: u64,

    /// Results with confidence above 0.8, independent of the
    /// min-confidence filter.
    pub high_confidence: u64,

    /// Tally per category, counting only results that cleared the
    /// run's min-confidence threshold with a known category.
    pub categories: IndexMap<CompactString, u64>,
}

impl RunStats {
    /// Create empty stats for a new run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct categories tallied.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Files discovered but not (yet) counted as classified.
    pub fn unresolved(&self) -> u64 {
        self.total.saturating_sub(self.classified)
    }
}

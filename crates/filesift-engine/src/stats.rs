//! Folding classification outcomes into run statistics.

use filesift_core::{ClassifiedFile, HIGH_CONFIDENCE, RunStats};

/// Whether a result's category was tallied or filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    /// Category counted; the file logs as classified.
    Counted,
    /// Unknown category or confidence below the run's threshold;
    /// the file logs as unclassified.
    BelowThreshold,
}

/// Owns one run's [`RunStats`] and applies the folding rules.
///
/// Mutated only between batches by the single coordinating task, so
/// no synchronization is needed.
#[derive(Debug)]
pub struct StatsAggregator {
    stats: RunStats,
    min_confidence: f64,
}

impl StatsAggregator {
    /// Create an aggregator for a run with the given threshold.
    pub fn new(min_confidence: f64) -> Self {
        Self {
            stats: RunStats::new(),
            min_confidence,
        }
    }

    /// Record the number of files discovered by scanning.
    pub fn set_total(&mut self, total: u64) {
        self.stats.total = total;
    }

    /// Fold one successfully classified file into the stats.
    ///
    /// Always counts the file as classified. The category tally and
    /// the high-confidence counter only move for known categories at
    /// or above the threshold.
    pub fn record(&mut self, file: &ClassifiedFile) -> Tally {
        self.stats.classified += 1;

        let result = &file.classification;
        if !result.is_unknown() && result.confidence >= self.min_confidence {
            *self
                .stats
                .categories
                .entry(result.category.clone())
                .or_insert(0) += 1;
            if result.confidence > HIGH_CONFIDENCE {
                self.stats.high_confidence += 1;
            }
            Tally::Counted
        } else {
            Tally::BelowThreshold
        }
    }

    /// Point-in-time copy of the stats.
    pub fn snapshot(&self) -> RunStats {
        self.stats.clone()
    }

    /// Consume the aggregator, yielding the final stats.
    pub fn into_stats(self) -> RunStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use std::time::SystemTime;

    use filesift_core::{ClassificationResult, FileMeta};

    use super::*;

    fn classified(category: &str, confidence: f64) -> ClassifiedFile {
        let meta = FileMeta::new("f.bin", None, 1, SystemTime::UNIX_EPOCH, "f.bin");
        let classification = if category == "unknown" {
            ClassificationResult::unknown()
        } else {
            ClassificationResult::matched(category, None, confidence, "test rule")
        };
        ClassifiedFile {
            meta,
            classification,
        }
    }

    #[test]
    fn test_counted_above_threshold() {
        let mut agg = StatsAggregator::new(0.6);
        assert_eq!(agg.record(&classified("image", 0.95)), Tally::Counted);

        let stats = agg.into_stats();
        assert_eq!(stats.classified, 1);
        assert_eq!(stats.categories.get("image"), Some(&1));
        assert_eq!(stats.high_confidence, 1);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut agg = StatsAggregator::new(0.6);
        assert_eq!(agg.record(&classified("large-file", 0.6)), Tally::Counted);
        // At threshold but not above 0.8: no high-confidence bump.
        assert_eq!(agg.snapshot().high_confidence, 0);
    }

    #[test]
    fn test_below_threshold_still_counts_classified() {
        let mut agg = StatsAggregator::new(0.7);
        assert_eq!(
            agg.record(&classified("large-file", 0.6)),
            Tally::BelowThreshold
        );

        let stats = agg.into_stats();
        assert_eq!(stats.classified, 1);
        assert!(stats.categories.is_empty());
    }

    #[test]
    fn test_unknown_never_tallied() {
        let mut agg = StatsAggregator::new(0.0);
        assert_eq!(agg.record(&classified("unknown", 0.0)), Tally::BelowThreshold);
        assert!(agg.snapshot().categories.is_empty());
        assert_eq!(agg.snapshot().classified, 1);
    }

    #[test]
    fn test_high_confidence_boundary_is_exclusive() {
        let mut agg = StatsAggregator::new(0.0);
        agg.record(&classified("document", 0.8));
        assert_eq!(agg.snapshot().high_confidence, 0);
        agg.record(&classified("image", 0.81));
        assert_eq!(agg.snapshot().high_confidence, 1);
    }
}

//! Run events and terminal states.

use std::fmt;

use filesift_core::{RunStats, ScanError};

/// Severity of a run log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Normal progress, including above-threshold classifications.
    Info,
    /// Unclassified or below-threshold files; stopped runs.
    Warn,
    /// Per-file read failures and run-level failures.
    Error,
    /// Successful run completion.
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Success => "success",
        };
        f.write_str(s)
    }
}

/// Incremental observation of a running classification.
#[derive(Debug, Clone)]
pub enum RunEvent {
    /// A human-readable log line.
    Log {
        message: String,
        severity: Severity,
    },
    /// A point-in-time snapshot of the run's statistics, published
    /// after scanning and after every batch.
    Stats(RunStats),
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// All batches processed without cancellation.
    Completed,
    /// Cancellation was observed; the run stopped at a checkpoint.
    Stopped,
    /// An unrecoverable error outside per-file classification.
    Failed(ScanError),
}

impl RunOutcome {
    /// Whether the run ended in failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed(_))
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Completed => f.write_str("completed"),
            RunOutcome::Stopped => f.write_str("stopped"),
            RunOutcome::Failed(err) => write!(f, "failed: {err}"),
        }
    }
}

/// Terminal state plus the final statistics of a run.
#[derive(Debug)]
pub struct RunReport {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Final statistics snapshot.
    pub stats: RunStats,
}

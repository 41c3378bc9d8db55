//! Top-level run coordination.

use std::path::PathBuf;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use filesift_classify::FileClassifier;
use filesift_core::{ByteSource, RunOptions, ScanError};
use filesift_scan::{DirectoryWalker, FileEntry};

use crate::batch::classify_batch;
use crate::event::{RunEvent, RunOutcome, RunReport, Severity};
use crate::stats::{StatsAggregator, Tally};

/// Coordinates one classification run: discovery, batched
/// classification, statistics, and the event stream.
///
/// A single manager task drives the state machine; only per-batch
/// classification fans out to blocking tasks. Events are best-effort:
/// a dropped receiver never aborts the run.
pub struct ClassificationManager {
    classifier: FileClassifier,
    events: mpsc::Sender<RunEvent>,
}

impl ClassificationManager {
    /// Create a manager that reports over the given channel.
    pub fn new(events: mpsc::Sender<RunEvent>) -> Self {
        Self {
            classifier: FileClassifier::new(),
            events,
        }
    }

    /// Execute a full run over `root`.
    ///
    /// Always returns a report; discovery failures surface as
    /// [`RunOutcome::Failed`], cancellation as [`RunOutcome::Stopped`].
    /// Per-file failures are logged and recovered, never fatal.
    pub async fn run(
        &self,
        root: PathBuf,
        options: &RunOptions,
        cancel: &CancellationToken,
    ) -> RunReport {
        let mut aggregator = StatsAggregator::new(options.min_confidence);

        // Scanning
        self.log(Severity::Info, "Scanning directory to collect all files...")
            .await;

        let walker = match DirectoryWalker::new(root) {
            Ok(walker) => walker,
            Err(err) => return self.failed(aggregator, err).await,
        };

        let mut files: Vec<FileEntry> = Vec::new();
        if cancel.is_cancelled() {
            return self.stopped(aggregator, "file collection").await;
        }
        for item in walker {
            match item {
                Ok(entry) => files.push(entry),
                Err(err) => return self.failed(aggregator, err).await,
            }
            if cancel.is_cancelled() {
                return self.stopped(aggregator, "file collection").await;
            }
        }

        aggregator.set_total(files.len() as u64);
        self.publish_stats(&aggregator).await;
        debug!(total = files.len(), "scan complete");

        if !options.enabled {
            self.log(
                Severity::Info,
                format!(
                    "Found {} files. Classification is disabled; skipping processing.",
                    files.len()
                ),
            )
            .await;
            return self.completed(aggregator).await;
        }

        self.log(
            Severity::Info,
            format!(
                "Found {} files. Starting classification in batches of {}.",
                files.len(),
                options.batch_size
            ),
        )
        .await;

        // Processing
        for chunk in files.chunks(options.batch_size) {
            if cancel.is_cancelled() {
                return self.stopped(aggregator, "processing").await;
            }

            let results = classify_batch(self.classifier, chunk).await;

            for (entry, result) in chunk.iter().zip(results) {
                match result {
                    Ok(file) => {
                        let result = &file.classification;
                        match aggregator.record(&file) {
                            Tally::Counted => {
                                self.log(
                                    Severity::Info,
                                    format!(
                                        "[{}] {} (Confidence: {}%)",
                                        result.category.to_uppercase(),
                                        file.meta.rel,
                                        (result.confidence * 100.0).round() as u32
                                    ),
                                )
                                .await;
                            }
                            Tally::BelowThreshold => {
                                self.log(
                                    Severity::Warn,
                                    format!("[UNCLASSIFIED] {}", file.meta.rel),
                                )
                                .await;
                            }
                        }
                    }
                    Err(err) => {
                        self.log(
                            Severity::Error,
                            format!("Failed to classify {}: {err}", entry.rel()),
                        )
                        .await;
                    }
                }
            }

            self.publish_stats(&aggregator).await;
        }

        self.completed(aggregator).await
    }

    async fn completed(&self, aggregator: StatsAggregator) -> RunReport {
        self.log(Severity::Success, "Run completed.").await;
        RunReport {
            outcome: RunOutcome::Completed,
            stats: aggregator.into_stats(),
        }
    }

    async fn stopped(&self, aggregator: StatsAggregator, phase: &str) -> RunReport {
        self.log(Severity::Warn, format!("Job stopped during {phase}."))
            .await;
        RunReport {
            outcome: RunOutcome::Stopped,
            stats: aggregator.into_stats(),
        }
    }

    async fn failed(&self, aggregator: StatsAggregator, err: ScanError) -> RunReport {
        self.log(Severity::Error, format!("Run failed: {err}")).await;
        RunReport {
            outcome: RunOutcome::Failed(err),
            stats: aggregator.into_stats(),
        }
    }

    async fn log(&self, severity: Severity, message: impl Into<String>) {
        let _ = self
            .events
            .send(RunEvent::Log {
                message: message.into(),
                severity,
            })
            .await;
    }

    async fn publish_stats(&self, aggregator: &StatsAggregator) {
        let _ = self
            .events
            .send(RunEvent::Stats(aggregator.snapshot()))
            .await;
    }
}

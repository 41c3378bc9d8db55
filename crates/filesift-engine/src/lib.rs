//! Batched classification run engine for filesift.
//!
//! Drives the run state machine `Scanning -> Processing ->
//! {Completed | Stopped | Failed}`: drains the directory walker into a
//! file list, classifies it in fixed-size batches with bounded
//! concurrency, folds results into run statistics, and reports
//! progress over a channel.
//!
//! Cancellation is cooperative: the token is polled while scanning and
//! at batch boundaries, so an in-flight batch always finishes before
//! the run stops.
//!
//! # Example
//!
//! ```rust,no_run
//! use filesift_core::RunOptions;
//! use filesift_engine::{ClassificationManager, RUN_CHANNEL_SIZE, RunEvent};
//! use tokio::sync::mpsc;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() {
//! let (tx, mut rx) = mpsc::channel(RUN_CHANNEL_SIZE);
//! let manager = ClassificationManager::new(tx);
//!
//! tokio::spawn(async move {
//!     while let Some(event) = rx.recv().await {
//!         if let RunEvent::Log { message, .. } = event {
//!             eprintln!("{message}");
//!         }
//!     }
//! });
//!
//! let report = manager
//!     .run("/path/to/scan".into(), &RunOptions::default(), &CancellationToken::new())
//!     .await;
//! println!("{} files classified", report.stats.classified);
//! # }
//! ```

mod batch;
mod event;
mod manager;
mod stats;

pub use event::{RunEvent, RunOutcome, RunReport, Severity};
pub use manager::ClassificationManager;
pub use stats::{StatsAggregator, Tally};

// Re-export core types for convenience
pub use filesift_core::{ClassifiedFile, RunOptions, RunStats, ScanError};

/// Default channel buffer size for run event updates.
pub const RUN_CHANNEL_SIZE: usize = 100;

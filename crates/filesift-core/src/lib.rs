//! Core types and traits for filesift.
//!
//! This crate provides the fundamental data structures shared across
//! the filesift ecosystem: file metadata, classification results, run
//! statistics, run options, and the byte-source abstraction.

mod error;
mod meta;
mod options;
mod result;
mod source;
mod stats;

pub use error::ScanError;
pub use meta::{FileMeta, split_name};
pub use options::{RunOptions, RunOptionsBuilder};
pub use result::{CATEGORY_UNKNOWN, ClassificationResult, ClassifiedFile};
pub use source::ByteSource;
pub use stats::RunStats;

/// Number of leading bytes read for signature detection.
///
/// At least as long as the longest registered signature prefix.
pub const HEADER_LEN: usize = 16;

/// Results with confidence strictly above this count as high-confidence.
pub const HIGH_CONFIDENCE: f64 = 0.8;

//! Cascading file classifier for filesift.
//!
//! Three independent detectors each get a chance at every file:
//!
//! - **Signature detection** - match leading bytes against known
//!   binary signatures (PNG, JPEG, PDF, ...)
//! - **Extension lookup** - case-insensitive table of known extensions
//! - **Heuristics** - name patterns and size rules
//!
//! The cascade is exhaustive, not short-circuiting: all three detectors
//! run and the highest-confidence candidate wins. When every detector
//! declines, the file is classified with the `unknown` sentinel at
//! confidence 0.
//!
//! # Example
//!
//! ```rust,ignore
//! use filesift_classify::FileClassifier;
//! use filesift_scan::FileEntry;
//!
//! let entry = FileEntry::new("/data/photo.png", "photo.png");
//! let classified = FileClassifier::new().classify(&entry)?;
//!
//! println!("{} -> {}", classified.meta.rel, classified.classification.category);
//! ```

mod classifier;
mod extension;
mod heuristic;
mod signature;

pub use classifier::FileClassifier;
pub use extension::lookup_extension;
pub use heuristic::apply_heuristics;
pub use signature::{SIGNATURE_CONFIDENCE, detect_signature};

// Re-export core types for convenience
pub use filesift_core::{
    ByteSource, CATEGORY_UNKNOWN, ClassificationResult, ClassifiedFile, FileMeta, HEADER_LEN,
    ScanError,
};

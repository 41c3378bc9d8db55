//! Directory discovery engine for filesift.
//!
//! Provides a lazy, depth-first [`DirectoryWalker`] over a root
//! directory and the filesystem-backed [`FileEntry`] byte source that
//! classification consumes.
//!
//! The walker is a plain iterator backed by an explicit stack of
//! directories pending expansion, so a consumer can stop pulling at
//! any point (cooperative cancellation between entries) without deep
//! call stacks on wide trees and without leaking anything.
//!
//! # Example
//!
//! ```rust,no_run
//! use filesift_scan::{ByteSource, DirectoryWalker};
//!
//! let walker = DirectoryWalker::new("/path/to/scan").unwrap();
//! for entry in walker {
//!     let entry = entry.unwrap();
//!     println!("{}", entry.rel());
//! }
//! ```

mod entry;
mod walker;

pub use entry::FileEntry;
pub use walker::DirectoryWalker;

// Re-export core types for convenience
pub use filesift_core::{ByteSource, ScanError};

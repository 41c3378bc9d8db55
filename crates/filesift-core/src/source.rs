//! Byte-source abstraction over the host's file access.

use std::time::SystemTime;

use crate::error::ScanError;

/// Read-only access to a single file's bytes and metadata.
///
/// The core never touches the filesystem directly; whatever grants
/// access to a tree (mounted paths, sandbox handles) implements this.
/// `filesift-scan` provides the `std::fs` implementation; tests use
/// in-memory sources.
pub trait ByteSource {
    /// File name, without any directory components.
    fn name(&self) -> &str;

    /// Path relative to the scan root, segments joined with `/`.
    fn rel(&self) -> &str;

    /// Size in bytes.
    fn size(&self) -> Result<u64, ScanError>;

    /// Last modification time.
    fn modified(&self) -> Result<SystemTime, ScanError>;

    /// Declared media type, if the host knows one.
    fn media_type(&self) -> Option<&str> {
        None
    }

    /// Read up to `max_len` leading bytes. Shorter files return
    /// everything they have; the result is never padded.
    fn read_header(&self, max_len: usize) -> Result<Vec<u8>, ScanError>;
}

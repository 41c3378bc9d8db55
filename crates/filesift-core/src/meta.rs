//! Per-file metadata derived from a byte source.

use std::time::SystemTime;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Immutable metadata for a single file, built once per classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileMeta {
    /// File name (not full path).
    pub name: CompactString,

    /// Name without the final extension.
    pub stem: CompactString,

    /// Raw extension text, original case, without the dot. Empty if none.
    pub ext: CompactString,

    /// Lowercased extension, used for table lookups.
    pub ext_lower: CompactString,

    /// Declared media type, or `"unknown"` when the source declares none.
    pub media_type: CompactString,

    /// Size in bytes.
    pub size: u64,

    /// Last modification time.
    pub modified: SystemTime,

    /// Path relative to the scan root, segments joined with `/`.
    pub rel: CompactString,
}

/// Split a file name into `(stem, ext)` at the final dot.
///
/// A name without a dot (or ending in one) has an empty extension.
/// A leading dot alone does not start an extension: `".gitignore"`
/// splits the same way the original-platform `lastIndexOf` split does,
/// as `("", "gitignore")`.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], &name[idx + 1..]),
        None => (name, ""),
    }
}

impl FileMeta {
    /// Build metadata from the raw facts a byte source reports.
    pub fn new(
        name: &str,
        media_type: Option<&str>,
        size: u64,
        modified: SystemTime,
        rel: &str,
    ) -> Self {
        let (stem, ext) = split_name(name);
        Self {
            name: name.into(),
            stem: stem.into(),
            ext: ext.into(),
            ext_lower: CompactString::from(ext.to_lowercase()),
            media_type: media_type.unwrap_or("unknown").into(),
            size,
            modified,
            rel: rel.into(),
        }
    }
}

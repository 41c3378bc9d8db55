//! Filesystem-backed file entries.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use compact_str::CompactString;

use filesift_core::{ByteSource, ScanError};

/// A file discovered by the walker: an absolute path plus its path
/// relative to the scan root. Produced once, never mutated.
#[derive(Debug, Clone)]
pub struct FileEntry {
    path: PathBuf,
    rel: CompactString,
    name: CompactString,
}

impl FileEntry {
    /// Create an entry from an absolute path and its relative path.
    pub fn new(path: impl Into<PathBuf>, rel: impl Into<CompactString>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| CompactString::new(n.to_string_lossy()))
            .unwrap_or_default();
        Self {
            path,
            rel: rel.into(),
            name,
        }
    }

    /// Absolute path of this file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn rel(&self) -> &str {
        &self.rel
    }

    fn size(&self) -> Result<u64, ScanError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| ScanError::io(&self.path, e))?;
        Ok(metadata.len())
    }

    fn modified(&self) -> Result<SystemTime, ScanError> {
        let metadata = std::fs::metadata(&self.path).map_err(|e| ScanError::io(&self.path, e))?;
        metadata.modified().map_err(|e| ScanError::io(&self.path, e))
    }

    fn read_header(&self, max_len: usize) -> Result<Vec<u8>, ScanError> {
        let file = File::open(&self.path).map_err(|e| ScanError::io(&self.path, e))?;
        let mut header = Vec::with_capacity(max_len);
        file.take(max_len as u64)
            .read_to_end(&mut header)
            .map_err(|e| ScanError::io(&self.path, e))?;
        Ok(header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_header_bounded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("data.bin");
        fs::write(&path, vec![0xAB; 64]).unwrap();

        let entry = FileEntry::new(&path, "data.bin");
        let header = entry.read_header(16).unwrap();
        assert_eq!(header.len(), 16);
        assert!(header.iter().all(|&b| b == 0xAB));
    }

    #[test]
    fn test_read_header_short_file_not_padded() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tiny");
        fs::write(&path, b"abc").unwrap();

        let entry = FileEntry::new(&path, "tiny");
        assert_eq!(entry.read_header(16).unwrap(), b"abc");
        assert_eq!(entry.size().unwrap(), 3);
    }

    #[test]
    fn test_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let entry = FileEntry::new(temp.path().join("gone"), "gone");
        assert!(matches!(
            entry.read_header(16),
            Err(ScanError::NotFound { .. })
        ));
    }
}

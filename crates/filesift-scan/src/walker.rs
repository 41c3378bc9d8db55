//! Stack-based depth-first directory traversal.

use std::collections::VecDeque;
use std::path::PathBuf;

use compact_str::CompactString;
use tracing::debug;

use filesift_core::ScanError;

use crate::entry::FileEntry;

/// Lazy depth-first walk over every file under a root directory.
///
/// Yields `Result<FileEntry, ScanError>`; an `Err` item means a
/// subtree could not be enumerated and discovery cannot continue.
/// Sibling order is whatever the underlying directory listing yields.
/// Symlinks are not followed. Dropping the walker early is always safe.
pub struct DirectoryWalker {
    /// Directories pending expansion, with their relative-path prefix.
    stack: Vec<(PathBuf, CompactString)>,
    /// Files from the most recently expanded directory.
    queued: VecDeque<FileEntry>,
}

impl DirectoryWalker {
    /// Create a walker rooted at `root`.
    ///
    /// Fails if the root does not exist or is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let root = root.into();
        let metadata = std::fs::metadata(&root).map_err(|e| ScanError::io(&root, e))?;
        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory { path: root });
        }
        Ok(Self {
            stack: vec![(root, CompactString::default())],
            queued: VecDeque::new(),
        })
    }

    /// Expand one directory: queue its files, push its subdirectories.
    fn expand(&mut self, dir: PathBuf, prefix: CompactString) -> Result<(), ScanError> {
        let entries = std::fs::read_dir(&dir).map_err(|e| ScanError::io(&dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| ScanError::io(&dir, e))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let rel = if prefix.is_empty() {
                CompactString::from(name.as_str())
            } else {
                CompactString::from(format!("{prefix}/{name}"))
            };

            let file_type = entry.file_type().map_err(|e| ScanError::io(entry.path(), e))?;
            if file_type.is_dir() {
                self.stack.push((entry.path(), rel));
            } else if file_type.is_file() {
                self.queued.push_back(FileEntry::new(entry.path(), rel));
            } else {
                // Symlinks and special files are not classified.
                debug!(path = %entry.path().display(), "skipping non-regular entry");
            }
        }
        Ok(())
    }
}

impl Iterator for DirectoryWalker {
    type Item = Result<FileEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.queued.pop_front() {
                return Some(Ok(entry));
            }
            let (dir, prefix) = self.stack.pop()?;
            if let Err(err) = self.expand(dir, prefix) {
                return Some(Err(err));
            }
        }
    }
}

use std::time::SystemTime;

use filesift_classify::{ByteSource, FileClassifier, SIGNATURE_CONFIDENCE, ScanError};

/// In-memory byte source for exercising the cascade without a filesystem.
struct MemorySource {
    name: String,
    rel: String,
    bytes: Vec<u8>,
    media_type: Option<String>,
    fail_header: bool,
}

impl MemorySource {
    fn new(name: &str, bytes: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            rel: name.to_string(),
            bytes: bytes.to_vec(),
            media_type: None,
            fail_header: false,
        }
    }

    fn failing(name: &str) -> Self {
        Self {
            fail_header: true,
            ..Self::new(name, b"")
        }
    }
}

impl ByteSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn rel(&self) -> &str {
        &self.rel
    }

    fn size(&self) -> Result<u64, ScanError> {
        Ok(self.bytes.len() as u64)
    }

    fn modified(&self) -> Result<SystemTime, ScanError> {
        Ok(SystemTime::UNIX_EPOCH)
    }

    fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    fn read_header(&self, max_len: usize) -> Result<Vec<u8>, ScanError> {
        if self.fail_header {
            return Err(ScanError::io(
                &self.rel,
                std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "unreadable"),
            ));
        }
        Ok(self.bytes[..self.bytes.len().min(max_len)].to_vec())
    }
}

#[test]
fn signature_beats_unregistered_extension() {
    // PNG magic bytes under a .dat name: the signature wins outright.
    let source = MemorySource::new("capture.dat", &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]);
    let classified = FileClassifier::new().classify(&source).unwrap();

    assert_eq!(classified.classification.category, "image");
    assert_eq!(classified.classification.subcategory.as_deref(), Some("png"));
    assert_eq!(classified.classification.confidence, SIGNATURE_CONFIDENCE);
}

#[test]
fn signature_beats_registered_extension() {
    // A zip archive misnamed as .jpg: 0.98 signature > 0.95 extension.
    let source = MemorySource::new("photo.jpg", &[0x50, 0x4B, 0x03, 0x04, 0x14, 0x00]);
    let classified = FileClassifier::new().classify(&source).unwrap();

    assert_eq!(classified.classification.category, "archive");
    assert_eq!(classified.classification.subcategory.as_deref(), Some("zip"));
}

#[test]
fn extension_lookup_is_case_insensitive() {
    let upper = FileClassifier::new()
        .classify(&MemorySource::new("photo.JPG", b"not a real jpeg"))
        .unwrap();
    let lower = FileClassifier::new()
        .classify(&MemorySource::new("photo.jpg", b"not a real jpeg"))
        .unwrap();

    assert_eq!(
        upper.classification.category,
        lower.classification.category
    );
    assert_eq!(
        upper.classification.confidence,
        lower.classification.confidence
    );
    // Only the raw extension field preserves the original case.
    assert_eq!(upper.meta.ext, "JPG");
    assert_eq!(lower.meta.ext, "jpg");
    assert_eq!(upper.meta.ext_lower, lower.meta.ext_lower);
}

#[test]
fn empty_file_without_extension_is_empty_category() {
    let source = MemorySource::new("placeholder", b"");
    let classified = FileClassifier::new().classify(&source).unwrap();

    assert_eq!(classified.classification.category, "empty");
    assert_eq!(classified.classification.confidence, 0.9);
}

#[test]
fn unmatched_file_gets_unknown_sentinel() {
    let source = MemorySource::new("notes.txt", b"plain text content");
    let classified = FileClassifier::new().classify(&source).unwrap();

    assert!(classified.classification.is_unknown());
    assert_eq!(classified.classification.confidence, 0.0);
    assert_eq!(
        classified.classification.reasons,
        vec!["No rules matched".to_string()]
    );
}

#[test]
fn result_confidence_is_cascade_maximum() {
    // README.md: heuristic says 0.8, extension table says 0.8 for .md.
    // The tie goes to the earlier cascade stage (extension), but the
    // winning confidence must equal the maximum either way.
    let source = MemorySource::new("README.md", b"# project");
    let classified = FileClassifier::new().classify(&source).unwrap();

    assert_eq!(classified.classification.category, "document");
    assert_eq!(classified.classification.confidence, 0.8);
    assert_eq!(
        classified.classification.subcategory.as_deref(),
        Some("markdown"),
        "tie must be won by the earlier cascade stage"
    );
}

#[test]
fn header_read_failure_propagates() {
    let source = MemorySource::failing("broken.bin");
    let result = FileClassifier::new().classify(&source);
    assert!(result.is_err());
}

#[test]
fn declared_media_type_is_carried_through() {
    let mut source = MemorySource::new("notes.txt", b"text");
    source.media_type = Some("text/plain".to_string());
    let classified = FileClassifier::new().classify(&source).unwrap();
    assert_eq!(classified.meta.media_type, "text/plain");

    let classified = FileClassifier::new()
        .classify(&MemorySource::new("notes.txt", b"text"))
        .unwrap();
    assert_eq!(classified.meta.media_type, "unknown");
}

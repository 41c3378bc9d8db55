//! Binary signature detection from leading file bytes.

use filesift_core::ClassificationResult;

/// Confidence assigned to any signature match.
pub const SIGNATURE_CONFIDENCE: f64 = 0.98;

/// A known binary signature.
struct SignatureRule {
    prefix: &'static [u8],
    category: &'static str,
    subcategory: &'static str,
}

/// Fixed ordered signature table; first match wins.
const SIGNATURES: &[SignatureRule] = &[
    SignatureRule {
        prefix: &[0x89, 0x50, 0x4E, 0x47],
        category: "image",
        subcategory: "png",
    },
    SignatureRule {
        prefix: &[0xFF, 0xD8, 0xFF],
        category: "image",
        subcategory: "jpeg",
    },
    SignatureRule {
        prefix: &[0x47, 0x49, 0x46, 0x38],
        category: "image",
        subcategory: "gif",
    },
    SignatureRule {
        prefix: &[0x25, 0x50, 0x44, 0x46],
        category: "document",
        subcategory: "pdf",
    },
    SignatureRule {
        prefix: &[0x50, 0x4B, 0x03, 0x04],
        category: "archive",
        subcategory: "zip",
    },
];

/// Match the leading bytes of a file against the signature table.
///
/// A header shorter than a rule's prefix never matches that rule.
/// Pure function of the header bytes.
pub fn detect_signature(header: &[u8]) -> Option<ClassificationResult> {
    SIGNATURES
        .iter()
        .find(|rule| header.starts_with(rule.prefix))
        .map(|rule| {
            ClassificationResult::matched(
                rule.category,
                Some(rule.subcategory),
                SIGNATURE_CONFIDENCE,
                format!("Magic bytes match for {}", rule.subcategory),
            )
        })
}

//! Extension-table classification.

use filesift_core::ClassificationResult;

/// A registered extension rule.
struct ExtensionRule {
    ext: &'static str,
    category: &'static str,
    subcategory: Option<&'static str>,
    confidence: f64,
}

const fn rule(
    ext: &'static str,
    category: &'static str,
    subcategory: Option<&'static str>,
    confidence: f64,
) -> ExtensionRule {
    ExtensionRule {
        ext,
        category,
        subcategory,
        confidence,
    }
}

/// Fixed extension table. Confidences are static per entry: images
/// highest, office/data formats next, markup and web formats lower.
const EXTENSIONS: &[ExtensionRule] = &[
    // Documents
    rule("pdf", "document", Some("pdf"), 0.9),
    rule("doc", "document", Some("word"), 0.9),
    rule("docx", "document", Some("word"), 0.9),
    rule("ppt", "document", Some("powerpoint"), 0.9),
    rule("pptx", "document", Some("powerpoint"), 0.9),
    rule("md", "document", Some("markdown"), 0.8),
    // Data
    rule("csv", "data", Some("spreadsheet"), 0.9),
    rule("xlsx", "data", Some("spreadsheet"), 0.9),
    rule("json", "data", Some("structured"), 0.9),
    rule("xml", "data", Some("structured"), 0.9),
    // Code
    rule("js", "code", Some("javascript"), 0.9),
    rule("ts", "code", Some("typescript"), 0.9),
    rule("py", "code", Some("python"), 0.9),
    rule("html", "code", Some("web"), 0.8),
    // Images
    rule("jpg", "image", Some("photo"), 0.95),
    rule("jpeg", "image", Some("photo"), 0.95),
    rule("png", "image", Some("graphics"), 0.95),
    rule("gif", "image", Some("graphics"), 0.95),
    rule("svg", "image", Some("vector"), 0.9),
    // Media
    rule("mp4", "video", None, 0.95),
    rule("mov", "video", None, 0.95),
    rule("mp3", "audio", None, 0.95),
    rule("wav", "audio", None, 0.95),
    // Archives
    rule("zip", "archive", None, 0.9),
    rule("rar", "archive", None, 0.9),
];

/// Look up a lowercased extension in the rule table.
///
/// Returns `None` for an empty or unregistered extension. The reason
/// string records the matched extension literally.
pub fn lookup_extension(ext_lower: &str) -> Option<ClassificationResult> {
    if ext_lower.is_empty() {
        return None;
    }
    EXTENSIONS.iter().find(|r| r.ext == ext_lower).map(|r| {
        ClassificationResult::matched(
            r.category,
            r.subcategory,
            r.confidence,
            format!("File extension is .{ext_lower}"),
        )
    })
}

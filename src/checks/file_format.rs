use crate::types::{CheckResult, Issue};

const NAME: &str = "File Format & Encoding";

const MAX_SIZE_MB: f64 = 5.0;
const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt", "rtf"];

fn failed(details: String, issue: Issue) -> CheckResult {
    CheckResult::new(NAME, 0, false, details, vec![issue])
}

/// The one check driven by raw bytes rather than extracted text: size limit,
/// accepted extension, and magic-byte verification for PDF/DOCX so mislabeled
/// or corrupted uploads are rejected before they reach a text extractor.
/// Failures are policy rejections, not errors; they score 0 and still feed
/// the aggregate mean.
pub fn check(buffer: &[u8], file_name: &str, _mime_type: &str) -> CheckResult {
    let extension = file_name
        .rsplit('.')
        .next()
        .filter(|ext| !ext.is_empty() && *ext != file_name)
        .map(str::to_lowercase);
    let size_mb = buffer.len() as f64 / (1024.0 * 1024.0);

    if size_mb > MAX_SIZE_MB {
        return failed(
            format!("File is {size_mb:.1}MB - exceeds 5MB limit."),
            Issue::critical(
                format!("File size ({size_mb:.1}MB) exceeds the 5MB limit."),
                "Reduce file size by compressing images or saving in a different format.",
            ),
        );
    }

    let extension = match extension {
        Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => ext,
        other => {
            let shown = other.unwrap_or_else(|| "unknown".to_string());
            return failed(
                format!("Unsupported format: .{shown}"),
                Issue::critical(
                    format!("Unsupported file format: .{shown}."),
                    "Upload your resume as PDF, DOCX, DOC, TXT, or RTF.",
                ),
            );
        }
    };

    let is_pdf = buffer.starts_with(b"%PDF");
    let is_zip = buffer.starts_with(b"PK\x03\x04");

    if extension == "pdf" && !is_pdf {
        return failed(
            "File extension is .pdf but file content does not match PDF format.".to_string(),
            Issue::critical(
                "Corrupted or invalid PDF file.",
                "Re-save your resume as a valid PDF file.",
            ),
        );
    }
    if extension == "docx" && !is_zip {
        return failed(
            "File extension is .docx but file content does not match DOCX format.".to_string(),
            Issue::critical(
                "Corrupted or invalid DOCX file.",
                "Re-save your resume as a valid DOCX file.",
            ),
        );
    }

    let score = match extension.as_str() {
        "pdf" => 100,
        "docx" => 95,
        _ => 80,
    };

    let details = format!(
        "Valid {} file ({size_mb:.1}MB).{}",
        extension.to_uppercase(),
        if extension == "pdf" {
            " PDF is the most ATS-compatible format."
        } else {
            ""
        }
    );

    let issues = if extension != "pdf" && extension != "docx" {
        vec![Issue::info(
            format!("Your resume is in .{extension} format."),
            "For best ATS compatibility, consider saving as PDF or DOCX.",
        )]
    } else {
        Vec::new()
    };

    CheckResult::new(NAME, score, true, details, issues)
}

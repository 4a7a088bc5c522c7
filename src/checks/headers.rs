use crate::text::similarity::{similarity, FUZZY_THRESHOLD};
use crate::types::{CheckResult, Issue};

/// Section titles ATS parsers reliably understand, including common synonyms.
const RECOGNIZED_HEADERS: &[&str] = &[
    "professional summary",
    "summary",
    "profile",
    "objective",
    "experience",
    "work experience",
    "professional experience",
    "employment",
    "education",
    "academic background",
    "skills",
    "technical skills",
    "core competencies",
    "competencies",
    "projects",
    "personal projects",
    "key projects",
    "certifications",
    "certificates",
    "licenses",
    "publications",
    "patents",
    "awards",
    "honors",
    "volunteer",
    "volunteering",
    "interests",
    "activities",
    "references",
];

const ESSENTIAL_SECTIONS: &[&str] = &["experience", "education", "skills"];

/// A header candidate is a short standalone line: fully upper-case, or short
/// with no sentence punctuation.
fn is_potential_header(line: &str) -> bool {
    let len = line.chars().count();
    if len == 0 || len > 60 {
        return false;
    }
    if line == line.to_uppercase() && len > 2 {
        return true;
    }
    len < 40 && !line.contains('.') && !line.contains(',')
}

fn is_recognized(normalized: &str) -> bool {
    RECOGNIZED_HEADERS.iter().any(|h| {
        normalized == *h
            || normalized.starts_with(h)
            || similarity(normalized, h) >= FUZZY_THRESHOLD
    })
}

/// Walks every line, classifies header candidates against the recognized
/// list (exact, prefix, or fuzzy), and verifies the three essential sections
/// are present among the detected headers.
pub fn check(text: &str) -> CheckResult {
    let mut issues = Vec::new();
    let mut unrecognized: u32 = 0;
    // (original line, normalized form) for every recognized header.
    let mut detected: Vec<(String, String)> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if !is_potential_header(trimmed) {
            continue;
        }
        let normalized: String = trimmed
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect::<String>()
            .trim()
            .to_string();

        if is_recognized(&normalized) {
            detected.push((trimmed.to_string(), normalized));
        } else {
            unrecognized += 1;
            issues.push(Issue::warning(
                format!("Unrecognized header: \"{trimmed}\""),
                "ATS systems may not parse this correctly. Consider renaming to a \
                 standard header like \"Experience\", \"Education\", or \"Skills\".",
            ));
        }
    }

    // Only recognized headers can satisfy an essential section, but the
    // containment is loose within them ("Work Experience" counts for
    // experience); the fuzzy fallback covers typo'd headers.
    for section in ESSENTIAL_SECTIONS {
        let found = detected.iter().any(|(original, normalized)| {
            original.to_lowercase().contains(section)
                || similarity(normalized, section) >= FUZZY_THRESHOLD
        });
        if !found {
            let capitalized = {
                let mut chars = section.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            };
            issues.push(Issue::warning(
                format!("Missing essential section: \"{section}\"."),
                format!("Add a clearly labeled \"{capitalized}\" section to your resume."),
            ));
        }
    }

    let deduction = 30.min(unrecognized * 5);
    let score = 100 - deduction;

    CheckResult::new(
        "Section Headers",
        score,
        unrecognized == 0,
        format!(
            "Detected {} recognized section headers. {unrecognized} unrecognized header(s).",
            detected.len()
        ),
        issues,
    )
}

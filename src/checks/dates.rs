use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{CheckResult, Issue, Severity};

static MMM_YYYY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+\d{4}").unwrap()
});
static MONTH_YYYY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{4}",
    )
    .unwrap()
});
static MM_SLASH_YYYY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}/\d{4}").unwrap());
static YYYY_MM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}-\d{2}").unwrap());
static MM_DASH_YYYY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}-\d{4}").unwrap());
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static PRESENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)present").unwrap());
static CURRENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)current").unwrap());

const BARE_YEAR: &str = "YYYY";

/// Counts occurrences per date format. A bare four-digit year has no
/// lookaround in the regex crate, so it is counted as digit runs of exactly
/// four digits, which matches the same strings.
fn formats_found(text: &str) -> Vec<(&'static str, usize)> {
    let named: [(&'static str, &Lazy<Regex>); 5] = [
        ("MMM YYYY", &MMM_YYYY),
        ("Month YYYY", &MONTH_YYYY),
        ("MM/YYYY", &MM_SLASH_YYYY),
        ("YYYY-MM", &YYYY_MM),
        ("MM-YYYY", &MM_DASH_YYYY),
    ];

    let mut found = Vec::new();
    for (name, regex) in named {
        let count = regex.find_iter(text).count();
        if count > 0 {
            found.push((name, count));
        }
    }

    let bare_years = DIGIT_RUN
        .find_iter(text)
        .filter(|m| m.as_str().len() == 4)
        .count();
    if bare_years > 0 {
        found.push((BARE_YEAR, bare_years));
    }

    found
}

/// Flags resumes mixing several date formats, and mixed "Present"/"Current"
/// end-date wording.
pub fn check(text: &str) -> CheckResult {
    let mut found = formats_found(text);

    // A bare year inside "Jan 2024" is a subset of the richer format, not a
    // separate formatting choice.
    if found.len() > 1 {
        found.retain(|(name, _)| *name != BARE_YEAR);
    }

    let format_count = found.len();
    let mut score: u32 = match format_count {
        0 | 1 => 100,
        2 => 70,
        _ => 40,
    };

    let mut issues = Vec::new();
    if format_count > 1 {
        let format_list = found
            .iter()
            .map(|(name, count)| format!("{name} ({count} occurrences)"))
            .collect::<Vec<_>>()
            .join(", ");
        issues.push(Issue {
            severity: if format_count > 2 {
                Severity::Critical
            } else {
                Severity::Warning
            },
            message: format!("Inconsistent date formats found: {format_list}"),
            suggestion: Some(
                "Pick one date format and use it throughout. Recommended: \
                 \"MMM YYYY\" (e.g., \"Jan 2024 - Present\")."
                    .to_string(),
            ),
        });
    }

    if PRESENT.is_match(text) && CURRENT.is_match(text) {
        score = score.saturating_sub(10);
        issues.push(Issue::warning(
            "Inconsistent end-date terminology: using both \"Present\" and \"Current\".",
            "Pick either \"Present\" or \"Current\" and use it consistently.",
        ));
    }

    let details = if format_count <= 1 {
        "Date formats are consistent throughout your resume.".to_string()
    } else {
        format!(
            "{format_count} different date formats detected. ATS systems parse dates \
             better when formatting is consistent."
        )
    };

    CheckResult::new("Date Consistency", score, format_count <= 1, details, issues)
}

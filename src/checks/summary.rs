use crate::types::{CheckResult, Issue, KeywordMatch, Severity};

/// Header synonyms that introduce a professional summary.
const SUMMARY_HEADERS: &[&str] = &[
    "professional summary",
    "summary",
    "profile",
    "objective",
    "career objective",
    "about me",
    "about",
];

/// How many top-ranked JD keywords the summary is compared against.
const TOP_KEYWORDS: usize = 10;

const NAME: &str = "Summary Alignment";

/// Collects the lines under a summary header until the next ALL-CAPS header
/// or the first blank line after content.
fn extract_summary_section(text: &str) -> Option<String> {
    let mut in_summary = false;
    let mut collected: Vec<&str> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if SUMMARY_HEADERS
            .iter()
            .any(|h| trimmed.to_lowercase() == *h || trimmed.to_lowercase().starts_with(h))
        {
            in_summary = true;
            continue;
        }

        if in_summary {
            let is_caps_header =
                trimmed == trimmed.to_uppercase() && trimmed.chars().count() > 2;
            if is_caps_header && !collected.is_empty() {
                break;
            }
            if !trimmed.is_empty() {
                collected.push(line);
            } else if !collected.is_empty() {
                break;
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected.join(" "))
    }
}

/// Compares the summary section against the top 10 JD keywords. A missing
/// summary is its own structural penalty, independent of keyword matching.
pub fn check(resume_text: &str, jd_keywords: &[KeywordMatch]) -> CheckResult {
    let Some(summary) = extract_summary_section(resume_text) else {
        return CheckResult::new(
            NAME,
            30,
            false,
            "No professional summary section detected.".to_string(),
            vec![Issue::warning(
                "Missing professional summary.",
                "Add a 2-3 sentence professional summary at the top of your resume \
                 that highlights your key qualifications.",
            )],
        );
    };

    let top: Vec<&KeywordMatch> = jd_keywords.iter().take(TOP_KEYWORDS).collect();
    let summary_lower = summary.to_lowercase();

    let matched = top
        .iter()
        .filter(|k| summary_lower.contains(&k.keyword.to_lowercase()))
        .count();
    let match_percent = if top.is_empty() {
        0.0
    } else {
        matched as f64 / top.len() as f64 * 100.0
    };

    let score = if match_percent >= 86.0 {
        95
    } else if match_percent >= 61.0 {
        80
    } else if match_percent >= 31.0 {
        60
    } else {
        30
    };

    let missing: Vec<String> = top
        .iter()
        .filter(|k| !summary_lower.contains(&k.keyword.to_lowercase()))
        .map(|k| format!("\"{}\"", k.keyword))
        .collect();

    let issues = if missing.is_empty() {
        Vec::new()
    } else {
        let severity = if match_percent < 31.0 {
            Severity::Critical
        } else {
            Severity::Warning
        };
        vec![Issue {
            severity,
            message: format!("Summary is missing key terms: {}", missing.join(", ")),
            suggestion: Some(
                "Revise your professional summary to include the most important \
                 keywords from the job description."
                    .to_string(),
            ),
        }]
    };

    CheckResult::new(
        NAME,
        score,
        match_percent >= 60.0,
        format!(
            "Your summary matches {matched} of {} top job description keywords ({}%).",
            top.len(),
            match_percent.round() as u32
        ),
        issues,
    )
}

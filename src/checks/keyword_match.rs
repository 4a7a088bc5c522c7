use crate::keywords::match_keywords;
use crate::types::{CheckResult, Importance, Issue, KeywordMatch};

pub struct KeywordMatchOutcome {
    pub result: CheckResult,
    pub keywords: Vec<KeywordMatch>,
}

/// Matches the JD keyword set against the resume. High-importance misses are
/// critical, medium misses warn, low misses stay silent (they still reach the
/// missing-keywords output, but are not actionable enough for an issue).
pub fn check(resume_text: &str, jd_keywords: &[KeywordMatch]) -> KeywordMatchOutcome {
    let matched = match_keywords(resume_text, jd_keywords);

    let total = matched.len();
    let found = matched.iter().filter(|k| k.found).count();
    let match_percent = if total > 0 {
        found as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let score = match_percent.round() as u32;

    let mut issues = Vec::new();
    for keyword in matched.iter().filter(|k| !k.found) {
        match keyword.importance {
            Importance::High => issues.push(Issue::critical(
                format!("Missing high-priority keyword: \"{}\"", keyword.keyword),
                format!(
                    "Add \"{}\" to your resume, ideally in your experience or skills section.",
                    keyword.keyword
                ),
            )),
            Importance::Medium => issues.push(Issue::warning(
                format!("Missing keyword: \"{}\"", keyword.keyword),
                format!(
                    "Consider adding \"{}\" if it's relevant to your experience.",
                    keyword.keyword
                ),
            )),
            Importance::Low => {}
        }
    }

    let result = CheckResult::new(
        "Keyword Matching",
        score,
        match_percent >= 70.0,
        format!(
            "{found} of {total} job description keywords found in resume ({}% match).",
            match_percent.round() as u32
        ),
        issues,
    );

    KeywordMatchOutcome {
        result,
        keywords: matched,
    }
}

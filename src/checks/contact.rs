use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{CheckResult, Issue};

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\s@]+@[^\s@]+\.[^\s@]+").unwrap());
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+?1[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}").unwrap());
static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[a-z0-9_-]+/?").unwrap());
static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[a-z0-9_-]+/?").unwrap());
static ANY_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?[a-z0-9_-]+\.[a-z]{2,}(?:/[^\s,)]*)?").unwrap()
});
static LOCATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z][a-z]+(?:\s[A-Z][a-z]+)?,\s*[A-Z]{2}").unwrap());

/// Domains that show up in extracted text but are never a personal site.
const NON_PORTFOLIO_HOSTS: &[&str] = &[
    "linkedin.com",
    "github.com",
    "clerk.",
    "googleapis.",
    "google.com",
];

const TOTAL_FIELDS: u32 = 5;
const MISSING_FIELD_PENALTY: u32 = 15;

/// Looks for five contact fields: email, phone, LinkedIn, portfolio/GitHub,
/// and a "City, ST" location. The first 20 lines cover the usual header
/// layouts; URL fields also search the full text since links often live in a
/// dedicated section further down.
pub fn check(text: &str) -> CheckResult {
    let top_lines = text.lines().take(20).collect::<Vec<_>>().join(" ");
    let mut issues = Vec::new();
    let mut fields_found: u32 = 0;

    if EMAIL.is_match(&top_lines) {
        fields_found += 1;
    } else {
        issues.push(Issue::critical(
            "No email address found in resume header.",
            "Add your professional email address near the top of your resume.",
        ));
    }

    if PHONE.is_match(&top_lines) {
        fields_found += 1;
    } else {
        issues.push(Issue::warning(
            "No phone number detected.",
            "Add your phone number in the contact section.",
        ));
    }

    if LINKEDIN.is_match(&top_lines) || LINKEDIN.is_match(text) {
        fields_found += 1;
    } else {
        issues.push(Issue::warning(
            "No LinkedIn profile URL found.",
            "Add your full LinkedIn URL (e.g., linkedin.com/in/yourname).",
        ));
    }

    let has_portfolio = ANY_URL.find_iter(text).any(|m| {
        let url = m.as_str().to_lowercase();
        url.len() > 5 && !NON_PORTFOLIO_HOSTS.iter().any(|host| url.contains(host))
    });
    let has_github = GITHUB.is_match(&top_lines) || GITHUB.is_match(text);

    if has_portfolio || has_github {
        fields_found += 1;
    } else {
        issues.push(Issue::info(
            "No portfolio/personal website found.",
            "Consider adding a GitHub, portfolio, or personal website link.",
        ));
    }

    if LOCATION.is_match(&top_lines) {
        fields_found += 1;
    } else {
        issues.push(Issue::info(
            "No location (City, State) detected.",
            "Add your city and state (e.g., San Francisco, CA).",
        ));
    }

    let score = 100u32.saturating_sub((TOTAL_FIELDS - fields_found) * MISSING_FIELD_PENALTY);

    CheckResult::new(
        "Contact Information",
        score,
        fields_found >= 3,
        format!(
            "Found {fields_found} of {TOTAL_FIELDS} contact fields \
             (email, phone, LinkedIn, portfolio/GitHub, location)."
        ),
        issues,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    const FULL_HEADER: &str = "Jane Doe\n\
        jane.doe@example.com | (415) 555-1234\n\
        San Francisco, CA\n\
        linkedin.com/in/janedoe | github.com/janedoe\n";

    #[test]
    fn complete_header_scores_full_marks() {
        let result = check(FULL_HEADER);
        assert_eq!(result.score, 100);
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn empty_text_misses_every_field() {
        let result = check("");
        assert_eq!(result.score, 25);
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 5);
        assert_eq!(result.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn missing_email_is_critical() {
        let result = check("Jane Doe\n(415) 555-1234\nSan Francisco, CA\nlinkedin.com/in/janedoe");
        assert!(result
            .issues
            .iter()
            .any(|i| i.severity == Severity::Critical && i.message.contains("email")));
    }

    #[test]
    fn linkedin_found_outside_the_header_window() {
        let mut text = String::from("Jane Doe\njane@example.com\n555-123-4567\nAustin, TX\n");
        text.push_str(&"filler line\n".repeat(25));
        text.push_str("Links\nhttps://www.linkedin.com/in/janedoe\n");
        let result = check(&text);
        assert!(!result
            .issues
            .iter()
            .any(|i| i.message.contains("LinkedIn")));
    }

    #[test]
    fn github_counts_as_portfolio() {
        let result = check("jane@example.com\n555-123-4567\ngithub.com/janedoe\nAustin, TX");
        assert!(!result
            .issues
            .iter()
            .any(|i| i.message.contains("portfolio")));
    }

    #[test]
    fn email_domain_satisfies_the_portfolio_heuristic() {
        // The URL pattern has no word boundary, so the domain inside an email
        // address reads as a website. Long-standing behavior, kept as-is.
        let result = check("jane@example.com");
        assert!(!result
            .issues
            .iter()
            .any(|i| i.message.contains("portfolio")));
    }

    #[test]
    fn three_of_five_fields_passes() {
        let result = check("(415) 555-1234\nSeattle, WA\nlinkedin.com/in/janedoe");
        assert_eq!(result.score, 70);
        assert!(result.passed);
    }
}

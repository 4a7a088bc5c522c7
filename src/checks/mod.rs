pub mod achievements;
pub mod contact;
pub mod dates;
pub mod density;
pub mod file_format;
pub mod headers;
pub mod invisible;
pub mod keyword_match;
pub mod special_chars;
pub mod summary;

use tracing::debug;

use crate::keywords::extract_keywords;
use crate::types::{AtsScoreResult, CheckResult, ScoringInput};

/// Runs the full scoring pipeline: one JD keyword extraction feeding the
/// keyword-dependent checks, then all ten checks in fixed presentation
/// order, then the aggregate mean, flattened issues, and missing keywords.
///
/// Pure and deterministic: identical inputs always produce an identical
/// result.
pub fn run_ats_scoring(input: ScoringInput<'_>) -> AtsScoreResult {
    let jd_keywords = extract_keywords(input.jd_text);
    debug!(
        keywords = jd_keywords.len(),
        mime = input.mime_type,
        file = input.file_name,
        "extracted job description keywords"
    );

    let keyword_outcome = keyword_match::check(input.resume_text, &jd_keywords);

    let checks: Vec<CheckResult> = vec![
        invisible::check(input.resume_text),
        contact::check(input.resume_text),
        headers::check(input.resume_text),
        keyword_outcome.result,
        density::check(input.resume_text, &jd_keywords),
        special_chars::check(input.resume_text),
        achievements::check(input.resume_text),
        summary::check(input.resume_text, &jd_keywords),
        file_format::check(input.file_buffer, input.file_name, input.mime_type),
        dates::check(input.resume_text),
    ];

    let total_score = (checks.iter().map(|c| f64::from(c.score)).sum::<f64>()
        / checks.len() as f64)
        .round() as u32;

    let formatting_issues = checks
        .iter()
        .flat_map(|c| c.issues.iter().cloned())
        .collect();

    let missing_keywords = keyword_outcome
        .keywords
        .into_iter()
        .filter(|k| !k.found)
        .collect();

    debug!(total_score, "scoring complete");

    AtsScoreResult {
        total_score,
        checks,
        missing_keywords,
        formatting_issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_RESUME: &str = "\
Jane Doe
jane.doe@example.com | (415) 555-1234 | San Francisco, CA
linkedin.com/in/janedoe | github.com/janedoe

SUMMARY
Software Engineer with 5 years experience building backend systems.

EXPERIENCE
Acme Corp, Jan 2020 - Present
Built APIs serving 10,000+ users, improved latency by 25%.

EDUCATION
State University, Jan 2014 - Jan 2018

SKILLS
Go and SQL and Linux
";

    const JD: &str = "\
We need Python and Python and Python plus distributed systems and \
distributed systems knowledge and Kubernetes and Kubernetes operations \
for our platform team and platform tooling.";

    fn input<'a>(resume: &'a str, jd: &'a str) -> ScoringInput<'a> {
        ScoringInput {
            resume_text: resume,
            jd_text: jd,
            file_buffer: b"%PDF-1.7 content",
            file_name: "resume.pdf",
            mime_type: "application/pdf",
        }
    }

    #[test]
    fn always_produces_ten_checks_in_fixed_order() {
        let result = run_ats_scoring(input(CLEAN_RESUME, JD));
        let names: Vec<&str> = result.checks.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Invisible Character Detection",
                "Contact Information",
                "Section Headers",
                "Keyword Matching",
                "Keyword Density",
                "Special Characters",
                "Quantified Achievements",
                "Summary Alignment",
                "File Format & Encoding",
                "Date Consistency",
            ]
        );
    }

    #[test]
    fn total_is_the_rounded_mean_of_check_scores() {
        let result = run_ats_scoring(input(CLEAN_RESUME, JD));
        let mean =
            result.checks.iter().map(|c| f64::from(c.score)).sum::<f64>() / 10.0;
        assert_eq!(result.total_score, mean.round() as u32);
        assert!(result.checks.iter().all(|c| c.score <= 100));
    }

    #[test]
    fn scoring_is_deterministic() {
        let first = run_ats_scoring(input(CLEAN_RESUME, JD));
        for _ in 0..5 {
            let again = run_ats_scoring(input(CLEAN_RESUME, JD));
            assert_eq!(
                serde_json::to_string(&again).unwrap(),
                serde_json::to_string(&first).unwrap()
            );
        }
    }

    #[test]
    fn missing_keywords_are_all_unfound_and_from_the_jd() {
        let result = run_ats_scoring(input(CLEAN_RESUME, JD));
        let extracted: Vec<String> = extract_keywords(JD)
            .into_iter()
            .map(|k| k.keyword)
            .collect();
        assert!(!result.missing_keywords.is_empty());
        for keyword in &result.missing_keywords {
            assert!(!keyword.found);
            assert_eq!(keyword.frequency, 0);
            assert!(extracted.contains(&keyword.keyword));
        }
    }

    #[test]
    fn formatting_issues_flatten_every_check() {
        let result = run_ats_scoring(input(CLEAN_RESUME, JD));
        let from_checks: usize = result.checks.iter().map(|c| c.issues.len()).sum();
        assert_eq!(result.formatting_issues.len(), from_checks);
    }

    #[test]
    fn mismatched_jd_scenario_lands_in_the_middle_band() {
        // A short, clean resume with real metrics but none of the JD's stack.
        let resume = "CAREER HIGHLIGHTS\n\
             Software Engineer with 5 years experience. Built APIs serving \
             10,000+ users, improved latency by 25%.\n";
        let jd = "We are seeking Python and Python and Python developers with \
             distributed systems and distributed systems and Kubernetes and \
             Kubernetes and Kubernetes expertise.";
        let result = run_ats_scoring(ScoringInput {
            resume_text: resume,
            jd_text: jd,
            file_buffer: b"plain text bytes",
            file_name: "resume.txt",
            mime_type: "text/plain",
        });

        let keyword_check = &result.checks[3];
        assert!(
            keyword_check.score < 30,
            "keyword score near zero, was {}",
            keyword_check.score
        );
        assert!(result.missing_keywords.len() >= 3);
        assert!(result.missing_keywords.iter().all(|k| !k.found));

        let achievements = &result.checks[6];
        assert!(achievements.score >= 60, "metrics should rate at least Good");

        assert!(
            result.total_score > 30 && result.total_score < 70,
            "total was {}",
            result.total_score
        );
    }

    #[test]
    fn empty_resume_degrades_without_panicking() {
        let result = run_ats_scoring(ScoringInput {
            resume_text: "",
            jd_text: JD,
            file_buffer: b"%PDF-1.7",
            file_name: "resume.pdf",
            mime_type: "application/pdf",
        });
        assert_eq!(result.checks.len(), 10);
        assert_eq!(result.checks[3].score, 0);
        assert_eq!(result.checks[6].score, 20);
    }
}

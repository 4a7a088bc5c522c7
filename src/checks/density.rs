use std::collections::HashMap;

use crate::types::{CheckResult, Issue, KeywordMatch};

/// Any single keyword above 3% of total words reads as stuffing.
const SPAM_THRESHOLD: f64 = 0.03;

const NAME: &str = "Keyword Density";

/// Flags JD keywords whose share of the resume's word count exceeds the spam
/// threshold. Word counting here splits on whitespace only; punctuation-glued
/// occurrences deliberately count as distinct surface forms.
pub fn check(resume_text: &str, jd_keywords: &[KeywordMatch]) -> CheckResult {
    let words: Vec<String> = resume_text
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let total_words = words.len();

    if total_words == 0 {
        return CheckResult::new(NAME, 100, true, "No text to analyze.".to_string(), vec![]);
    }

    let mut word_freq: HashMap<&str, u32> = HashMap::new();
    for word in &words {
        *word_freq.entry(word.as_str()).or_insert(0) += 1;
    }

    let mut issues = Vec::new();
    let mut spam_count: u32 = 0;

    for keyword in jd_keywords {
        let term = keyword.keyword.to_lowercase();
        let count = word_freq.get(term.as_str()).copied().unwrap_or(0);
        let density = f64::from(count) / total_words as f64;

        if density > SPAM_THRESHOLD {
            spam_count += 1;
            issues.push(Issue::warning(
                format!(
                    "\"{}\" appears {count} times ({:.1}% density) - exceeds 3% threshold.",
                    keyword.keyword,
                    density * 100.0
                ),
                format!(
                    "Reduce usage of \"{}\" to avoid ATS spam filters. \
                     Use synonyms or variations instead.",
                    keyword.keyword
                ),
            ));
        }
    }

    let deduction = 45.min(spam_count * 15);
    let details = if spam_count == 0 {
        "No keyword stuffing detected. Keyword density is within healthy ranges.".to_string()
    } else {
        format!(
            "{spam_count} keyword(s) exceed the 3% density threshold, \
             which may trigger spam filters."
        )
    };

    CheckResult::new(NAME, 100 - deduction, spam_count == 0, details, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Importance;

    fn keyword(term: &str) -> KeywordMatch {
        KeywordMatch {
            keyword: term.to_string(),
            found: false,
            frequency: 0,
            required_frequency: 1,
            importance: Importance::High,
        }
    }

    /// `hits` occurrences of `term` padded with unique filler to `total` words.
    fn synthetic_resume(term: &str, hits: usize, total: usize) -> String {
        let mut words: Vec<String> = (0..total - hits).map(|i| format!("w{i}")).collect();
        for _ in 0..hits {
            words.push(term.to_string());
        }
        words.join(" ")
    }

    #[test]
    fn empty_resume_passes_clean() {
        let result = check("", &[keyword("rust")]);
        assert_eq!(result.score, 100);
        assert!(result.passed);
    }

    #[test]
    fn healthy_density_passes() {
        let text = synthetic_resume("rust", 2, 200);
        let result = check(&text, &[keyword("rust")]);
        assert_eq!(result.score, 100);
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn exactly_three_percent_does_not_trigger() {
        // 6 / 200 = 3.0%; the threshold comparison is strictly greater-than.
        let text = synthetic_resume("rust", 6, 200);
        let result = check(&text, &[keyword("rust")]);
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn just_over_three_percent_triggers() {
        // 7 / 200 = 3.5%.
        let text = synthetic_resume("rust", 7, 200);
        let result = check(&text, &[keyword("rust")]);
        assert!(!result.passed);
        assert_eq!(result.score, 85);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].message.contains("3.5%"));
    }

    #[test]
    fn deduction_caps_at_forty_five() {
        let mut words = Vec::new();
        for term in ["alpha", "beta", "gamma", "delta"] {
            for _ in 0..10 {
                words.push(term);
            }
        }
        let text = words.join(" ");
        let result = check(
            &text,
            &[
                keyword("alpha"),
                keyword("beta"),
                keyword("gamma"),
                keyword("delta"),
            ],
        );
        assert_eq!(result.score, 55);
        assert_eq!(result.issues.len(), 4);
    }
}

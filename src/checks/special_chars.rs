use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{CheckResult, Issue};

struct SpecialCharPattern {
    name: &'static str,
    regex: Regex,
    replacement: &'static str,
}

/// Typographic characters that older ATS parsers mangle, paired with their
/// plain-ASCII substitutes.
static SPECIAL_CHAR_PATTERNS: Lazy<Vec<SpecialCharPattern>> = Lazy::new(|| {
    let pattern = |name, re: &str, replacement| SpecialCharPattern {
        name,
        regex: Regex::new(re).unwrap(),
        replacement,
    };
    vec![
        pattern("en-dash", "\u{2013}", "-"),
        pattern("em-dash", "\u{2014}", "-"),
        pattern("arrow (\u{2192})", "[\u{2192}\u{21d2}\u{2190}\u{21d0}\u{2191}\u{2193}]", "->"),
        pattern(
            "fancy bullet (\u{2022})",
            "[\u{2022}\u{25c6}\u{25c7}\u{25a0}\u{25a1}\u{25aa}\u{25ab}\u{25cf}\u{25cb}]",
            "-",
        ),
        pattern("curly quote", "[\u{201c}\u{201d}\u{2018}\u{2019}]", "\""),
        pattern("ellipsis (\u{2026})", "\u{2026}", "..."),
        pattern("non-breaking space", "\u{a0}", " "),
        pattern("trademark/copyright", "[\u{2122}\u{ae}\u{a9}]", ""),
    ]
});

pub fn check(text: &str) -> CheckResult {
    let mut issues = Vec::new();
    let mut total_instances: u32 = 0;

    for pattern in SPECIAL_CHAR_PATTERNS.iter() {
        let count = pattern.regex.find_iter(text).count() as u32;
        if count > 0 {
            total_instances += count;
            issues.push(Issue::warning(
                format!("Found {count} {} character(s).", pattern.name),
                format!(
                    "Replace {} with \"{}\" for better ATS compatibility.",
                    pattern.name, pattern.replacement
                ),
            ));
        }
    }

    let deduction = 30.min(total_instances * 2);
    let details = if total_instances == 0 {
        "No problematic special characters found.".to_string()
    } else {
        format!(
            "Found {total_instances} special character(s) that some ATS systems \
             cannot parse correctly."
        )
    };

    CheckResult::new(
        "Special Characters",
        100 - deduction,
        total_instances == 0,
        details,
        issues,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_text_is_clean() {
        let result = check("Plain resume text - no fancy typography.");
        assert_eq!(result.score, 100);
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn each_pattern_family_reports_one_issue() {
        let text = "2019\u{2013}2022 \u{2022} Shipped \u{201c}v2\u{201d} \u{2192} cut costs\u{2026}";
        let result = check(text);
        // en-dash, bullet, two curly quotes, arrow, ellipsis: 6 instances
        // across 5 pattern families.
        assert_eq!(result.issues.len(), 5);
        assert_eq!(result.score, 100 - 12);
        assert!(!result.passed);
    }

    #[test]
    fn deduction_caps_at_thirty() {
        let text: String = std::iter::repeat('\u{2022}').take(40).collect();
        let result = check(&text);
        assert_eq!(result.score, 70);
    }

    #[test]
    fn trademark_symbols_are_flagged() {
        let result = check("Java\u{2122} and Windows\u{ae}");
        assert!(result.issues[0].message.contains("trademark/copyright"));
        assert_eq!(result.score, 96);
    }
}

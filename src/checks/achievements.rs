use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{CheckResult, Issue};

/// Numeric-metric shapes that signal quantified impact.
static METRIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\d+%",                             // percentages: 25%, 150%
        r"(?i)\$[\d,]+(?:\.\d+)?(?:\s*[MBK])?", // dollar amounts: $50K, $1.2M
        r"\d+\+",                            // scale numbers: 100+, 500+
        r"(?i)\d+x",                         // multipliers: 3x, 10x
        r"\d{1,3}(?:,\d{3})+",               // grouped large numbers: 50,000
        r"(?i)\d+\s*(?:users|customers|clients|employees|team members|engineers)",
        r"(?i)\d+\s*(?:projects|applications|services|APIs|endpoints)",
        r"(?i)top\s+\d+%",                   // rank: top 5%
        r"(?i)\d+\s*(?:months?|years?|weeks?|days?)", // durations
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

pub fn check(text: &str) -> CheckResult {
    // Identical literal matches count once, even across pattern families.
    let mut matches: HashSet<&str> = HashSet::new();
    for pattern in METRIC_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            matches.insert(m.as_str());
        }
    }

    let count = matches.len();
    let (score, label) = match count {
        16.. => (95, "Excellent"),
        8..=15 => (85, "Strong"),
        4..=7 => (60, "Good"),
        _ => (20, "Weak"),
    };

    let issues = if count < 4 {
        vec![Issue::warning(
            format!(
                "Only {count} metrics found. Strong resumes typically have 8+ \
                 quantified achievements."
            ),
            "Add specific numbers to your bullets: percentages (improved by 30%), \
             dollar amounts ($500K revenue), team sizes (led team of 8), or scale \
             (served 10K+ users).",
        )]
    } else if count < 8 {
        vec![Issue::info(
            format!(
                "{count} metrics found. Consider adding more quantified results \
                 to strengthen your resume."
            ),
            "Try to include at least one metric per experience bullet point.",
        )]
    } else {
        Vec::new()
    };

    CheckResult::new(
        "Quantified Achievements",
        score,
        count >= 4,
        format!("Found {count} quantified achievement(s) - rated \"{label}\"."),
        issues,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn empty_text_rates_weak() {
        let result = check("");
        assert_eq!(result.score, 20);
        assert!(!result.passed);
        assert_eq!(result.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn unquantified_prose_rates_weak() {
        let result = check("Responsible for various improvements across several teams.");
        assert_eq!(result.score, 20);
        assert!(!result.passed);
    }

    #[test]
    fn four_distinct_metrics_rate_good() {
        let result = check(
            "Improved latency by 25%. Saved $50K annually. Served 10,000 requests. \
             Delivered in 6 months.",
        );
        assert_eq!(result.score, 60);
        assert!(result.passed);
        assert_eq!(result.issues[0].severity, Severity::Info);
    }

    #[test]
    fn eight_distinct_metrics_rate_strong_with_no_issue() {
        let result = check(
            "Cut costs 30%. Grew revenue $1.2M. Managed 15 engineers. Shipped 4 services. \
             Scaled to 500+ clients. Achieved 3x throughput. Ranked top 5% of sellers. \
             Reduced onboarding from 9 weeks.",
        );
        assert!(result.score >= 85);
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn repeated_literal_metric_counts_once() {
        // "25%" twice in different achievements still counts as one metric.
        let result = check("Improved uptime by 25%. Later improved adoption by 25%.");
        assert!(result.details.contains("Found 1 "));
    }

    #[test]
    fn overlapping_pattern_families_dedupe_by_literal_text() {
        // "top 5%" also produces a "5%" percentage match: two distinct
        // literals, one underlying achievement. Documented behavior.
        let result = check("Ranked top 5% nationally.");
        assert!(result.details.contains("Found 2 "));
    }
}

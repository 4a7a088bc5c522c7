use super::{BatchEntry, ScoreReport};
use crate::types::{Importance, Severity};

pub(crate) fn importance_tag(importance: Importance) -> &'static str {
    match importance {
        Importance::High => "high",
        Importance::Medium => "medium",
        Importance::Low => "low",
    }
}

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# ATS Compatibility Report\n\n");
    output.push_str(&format!(
        "File: {} ({} bytes, sha256 {})\n",
        report.file.name,
        report.file.size_bytes,
        &report.file.sha256[..report.file.sha256.len().min(12)]
    ));
    output.push_str(&format!(
        "Generated: {}\n\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "Overall score: {}/100\n\n",
        report.result.total_score
    ));

    output.push_str("## Checks\n\n");
    for check in &report.result.checks {
        output.push_str(&format!(
            "- [{}] {}: {}/100 - {}\n",
            if check.passed { "pass" } else { "fail" },
            check.name,
            check.score,
            check.details
        ));
    }
    output.push('\n');

    output.push_str("## Issues\n\n");
    if report.result.formatting_issues.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for issue in &report.result.formatting_issues {
            let tag = match issue.severity {
                Severity::Critical => "critical",
                Severity::Warning => "warning",
                Severity::Info => "info",
            };
            output.push_str(&format!("- [{tag}] {}\n", issue.message));
            if let Some(suggestion) = &issue.suggestion {
                output.push_str(&format!("  - {suggestion}\n"));
            }
        }
        output.push('\n');
    }

    output.push_str("## Missing Keywords\n\n");
    if report.result.missing_keywords.is_empty() {
        output.push_str("- none\n");
    } else {
        for keyword in &report.result.missing_keywords {
            output.push_str(&format!(
                "- {} ({} priority, suggested at least {} mention(s))\n",
                keyword.keyword,
                importance_tag(keyword.importance),
                keyword.required_frequency
            ));
        }
    }

    output
}

pub fn batch_to_markdown(entries: &[BatchEntry]) -> String {
    let mut output = String::new();
    output.push_str("# ATS Batch Report\n\n");
    output.push_str("| File | Score | Checks passed | Critical issues |\n");
    output.push_str("|---|---|---|---|\n");
    for entry in entries {
        output.push_str(&format!(
            "| {} | {}/100 | {}/10 | {} |\n",
            entry.file, entry.total_score, entry.checks_passed, entry.critical_issues
        ));
    }
    output
}

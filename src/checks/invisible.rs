use crate::types::{CheckResult, Issue};

/// Unicode characters that render as nothing but can corrupt ATS parsing:
/// zero-width characters, BOM, soft hyphen, line/paragraph separators, and
/// bidi/word-joiner control ranges.
pub fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200b}'..='\u{200f}'
            | '\u{feff}'
            | '\u{00ad}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
    )
}

/// Count above which the contamination is treated as deliberate or severe.
const CRITICAL_COUNT: usize = 50;

pub fn check(text: &str) -> CheckResult {
    let count = text.chars().filter(|&c| is_invisible(c)).count();

    // Deduction caps at 20: a handful of invisible chars is common
    // copy-paste residue and must not tank the score.
    let deduction = 20.min(count / 10 * 10) as u32;
    let score = 100 - deduction;

    let details = if count == 0 {
        "No invisible characters found. Your resume is clean.".to_string()
    } else {
        format!("Found {count} invisible character(s) that may corrupt ATS parsing.")
    };

    let issues = if count > CRITICAL_COUNT {
        vec![Issue::critical(
            format!(
                "CRITICAL: {count} invisible characters detected. \
                 These can prevent ATS from reading your resume."
            ),
            "Copy your resume text into a plain text editor, then paste it back \
             into your document to strip invisible characters.",
        )]
    } else if count > 0 {
        vec![Issue::warning(
            format!("{count} invisible character(s) found (zero-width spaces, soft hyphens, etc.)."),
            "Open your resume in a plain text editor to identify and remove hidden characters.",
        )]
    } else {
        Vec::new()
    };

    CheckResult::new(
        "Invisible Character Detection",
        score,
        count == 0,
        details,
        issues,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn clean_text_scores_full_marks() {
        let result = check("Software Engineer\nBuilt things.");
        assert_eq!(result.score, 100);
        assert!(result.passed);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn a_few_invisible_chars_warn_without_deduction() {
        let text = format!("Hello{}world{}", '\u{200b}', '\u{feff}');
        let result = check(&text);
        // Under ten characters floors to a zero deduction.
        assert_eq!(result.score, 100);
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn deduction_caps_at_twenty() {
        let text: String = std::iter::repeat('\u{200b}').take(40).collect();
        let result = check(&text);
        assert_eq!(result.score, 80);
    }

    #[test]
    fn heavy_contamination_is_critical() {
        let text: String = std::iter::repeat('\u{00ad}').take(60).collect();
        let result = check(&text);
        assert_eq!(result.score, 80);
        assert!(!result.passed);
        assert_eq!(result.issues[0].severity, Severity::Critical);
    }

    #[test]
    fn stripping_invisible_chars_restores_a_perfect_score() {
        let dirty = format!("Expe{}rience\u{202a} at\u{2060} Acme", '\u{200c}');
        let cleaned: String = dirty.chars().filter(|&c| !is_invisible(c)).collect();
        let result = check(&cleaned);
        assert_eq!(result.score, 100);
        assert!(result.passed);
    }
}

use serde::Serialize;

/// Severity of a single issue surfaced by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

/// One actionable finding produced by a check. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn critical(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn warning(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn info(message: impl Into<String>, suggestion: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

/// Result of one check: a 0-100 score plus pass flag, detail line, and issues.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub name: &'static str,
    pub score: u32,
    pub max_score: u32,
    pub passed: bool,
    pub details: String,
    pub issues: Vec<Issue>,
}

impl CheckResult {
    pub fn new(
        name: &'static str,
        score: u32,
        passed: bool,
        details: String,
        issues: Vec<Issue>,
    ) -> Self {
        Self {
            name,
            score: score.min(100),
            max_score: 100,
            passed,
            details,
            issues,
        }
    }
}

/// Importance tier of an extracted keyword, assigned by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

/// A job-description keyword and its match state against the resume.
///
/// Created by extraction with `found = false`; updated exactly once when the
/// resume is matched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatch {
    pub keyword: String,
    pub found: bool,
    pub frequency: u32,
    pub required_frequency: u32,
    pub importance: Importance,
}

/// The aggregated scoring report for one resume/JD pair.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsScoreResult {
    pub total_score: u32,
    pub checks: Vec<CheckResult>,
    pub missing_keywords: Vec<KeywordMatch>,
    pub formatting_issues: Vec<Issue>,
}

/// Everything the scoring pipeline consumes. Text fields are plain text
/// produced by an external extractor; `file_buffer` is the raw upload.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub resume_text: &'a str,
    pub jd_text: &'a str,
    pub file_buffer: &'a [u8],
    pub file_name: &'a str,
    pub mime_type: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_severity_serializes_as_lowercase_type_tag() {
        let issue = Issue::critical("missing email", "add an email");
        let json = serde_json::to_value(&issue).expect("issue should serialize");
        assert_eq!(json["type"], "critical");
        assert_eq!(json["message"], "missing email");
        assert_eq!(json["suggestion"], "add an email");
    }

    #[test]
    fn issue_without_suggestion_omits_the_field() {
        let issue = Issue {
            severity: Severity::Info,
            message: "note".to_string(),
            suggestion: None,
        };
        let json = serde_json::to_value(&issue).expect("issue should serialize");
        assert!(json.get("suggestion").is_none());
    }

    #[test]
    fn check_result_clamps_score_and_uses_camel_case() {
        let check = CheckResult::new("Sample", 250, true, "details".to_string(), vec![]);
        assert_eq!(check.score, 100);

        let json = serde_json::to_value(&check).expect("check should serialize");
        assert_eq!(json["maxScore"], 100);
        assert_eq!(json["passed"], true);
    }

    #[test]
    fn keyword_match_serializes_importance_lowercase() {
        let keyword = KeywordMatch {
            keyword: "kubernetes".to_string(),
            found: false,
            frequency: 0,
            required_frequency: 1,
            importance: Importance::High,
        };
        let json = serde_json::to_value(&keyword).expect("keyword should serialize");
        assert_eq!(json["importance"], "high");
        assert_eq!(json["requiredFrequency"], 1);
    }
}

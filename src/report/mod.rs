pub mod json;
pub mod md;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AtsError;
use crate::scan::FileMeta;
use crate::types::AtsScoreResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

/// A scoring result wrapped with run metadata for presentation. The inner
/// result stays pure; only the envelope carries the timestamp.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub generated_at: DateTime<Utc>,
    pub tool_version: &'static str,
    pub file: FileMeta,
    #[serde(flatten)]
    pub result: AtsScoreResult,
}

impl ScoreReport {
    pub fn new(result: AtsScoreResult, file: FileMeta) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION"),
            file,
            result,
        }
    }
}

/// One row of a batch run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub file: String,
    pub total_score: u32,
    pub checks_passed: usize,
    pub critical_issues: usize,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, AtsError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(AtsError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_batch(entries: &[BatchEntry], format: OutputFormat) -> Result<String, AtsError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(entries).map_err(AtsError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(entries)),
    }
}

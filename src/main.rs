mod checks;
mod cli;
mod config;
mod error;
mod keywords;
mod report;
mod scan;
mod text;
mod types;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AtsConfig;
use crate::error::AtsError;
use crate::types::{AtsScoreResult, ScoringInput, Severity};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const CRITICAL: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_format(
    flag: Option<&cli::ReportFormat>,
    config: Option<&AtsConfig>,
) -> report::OutputFormat {
    match flag {
        Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
        Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
        None => match config.and_then(|c| c.default_format()) {
            Some("json") => report::OutputFormat::Json,
            _ => report::OutputFormat::Md,
        },
    }
}

/// Exit status from the scoring outcome: criticals (or a total under the
/// configured floor) beat warnings, warnings beat success.
fn status_of(result: &AtsScoreResult, fail_below: u32) -> i32 {
    let has_critical = result
        .formatting_issues
        .iter()
        .any(|i| i.severity == Severity::Critical);
    let has_warning = result
        .formatting_issues
        .iter()
        .any(|i| i.severity == Severity::Warning);

    if has_critical || result.total_score < fail_below {
        exit_code::CRITICAL
    } else if has_warning {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, AtsError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = config::load_config(cmd.config.as_deref())?;
            let jd_text = scan::load_jd(&cmd.jd)?;
            let document = scan::load_resume(&cmd.resume, cmd.text.as_deref())?;
            let mime_type = cmd.mime.unwrap_or_else(|| document.mime_type.clone());

            let result = checks::run_ats_scoring(ScoringInput {
                resume_text: &document.text,
                jd_text: &jd_text,
                file_buffer: &document.bytes,
                file_name: &document.file_name,
                mime_type: &mime_type,
            });
            info!(total = result.total_score, file = %document.file_name, "scored resume");

            let file_meta = scan::FileMeta::of(&document);
            let fail_below = loaded.as_ref().map(AtsConfig::fail_below).unwrap_or(0);
            let status = status_of(&result, fail_below);

            let score_report = report::ScoreReport::new(result, file_meta);
            let format = resolve_format(cmd.format.as_ref(), loaded.as_ref());
            println!("{}", report::render(&score_report, format)?);

            Ok(status)
        }
        cli::Commands::Keywords(cmd) => {
            let jd_text = scan::load_jd(&cmd.jd)?;
            let extracted = keywords::extract_keywords(&jd_text);

            match cmd.format {
                cli::ReportFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&extracted)?);
                }
                cli::ReportFormat::Md => {
                    if extracted.is_empty() {
                        println!("keywords: none extracted");
                    } else {
                        println!("# Job Description Keywords\n");
                        for (rank, keyword) in extracted.iter().enumerate() {
                            println!(
                                "{}. {} ({} priority, suggested at least {} mention(s))",
                                rank + 1,
                                keyword.keyword,
                                report::md::importance_tag(keyword.importance),
                                keyword.required_frequency
                            );
                        }
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            let loaded = config::load_config(cmd.config.as_deref())?;
            let jd_text = scan::load_jd(&cmd.jd)?;
            let paths = scan::list_resumes(&cmd.dir)?;
            let fail_below = loaded.as_ref().map(AtsConfig::fail_below).unwrap_or(0);

            let mut entries = Vec::new();
            let mut worst = exit_code::SUCCESS;
            for path in &paths {
                let document = scan::load_resume(path, None)?;
                let result = checks::run_ats_scoring(ScoringInput {
                    resume_text: &document.text,
                    jd_text: &jd_text,
                    file_buffer: &document.bytes,
                    file_name: &document.file_name,
                    mime_type: &document.mime_type,
                });
                worst = worst.max(status_of(&result, fail_below));
                entries.push(report::BatchEntry {
                    file: document.file_name.clone(),
                    total_score: result.total_score,
                    checks_passed: result.checks.iter().filter(|c| c.passed).count(),
                    critical_issues: result
                        .formatting_issues
                        .iter()
                        .filter(|i| i.severity == Severity::Critical)
                        .count(),
                });
            }

            let format = resolve_format(cmd.format.as_ref(), loaded.as_ref());
            println!("{}", report::render_batch(&entries, format)?);
            Ok(worst)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

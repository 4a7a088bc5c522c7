use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "atscan",
    version,
    about = "ATS compatibility scoring for resumes against job descriptions"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score one resume against a job description
    Score(ScoreCommand),
    /// Show the ranked keywords extracted from a job description
    Keywords(KeywordsCommand),
    /// Score every .txt resume in a directory against one job description
    Batch(BatchCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Resume file (the original upload; .txt is read directly)
    pub resume: PathBuf,

    /// Job description text file
    #[arg(long)]
    pub jd: PathBuf,

    /// Extracted plain text for non-.txt resumes
    #[arg(long)]
    pub text: Option<PathBuf>,

    /// Declared MIME type; guessed from the extension when omitted
    #[arg(long)]
    pub mime: Option<String>,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct KeywordsCommand {
    /// Job description text file
    pub jd: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct BatchCommand {
    /// Directory containing .txt resumes
    pub dir: PathBuf,

    /// Job description text file
    #[arg(long)]
    pub jd: PathBuf,

    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    #[arg(long)]
    pub config: Option<PathBuf>,
}

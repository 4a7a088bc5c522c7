use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("resume is not plain text; pass extracted text with --text: {0}")]
    TextRequired(String),

    #[error("job description too short: {0} characters (minimum {1})")]
    JdTooShort(usize, usize),

    #[error("no .txt resumes found under: {0}")]
    EmptyBatch(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AtsError>;

use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{AtsError, Result};

/// Minimum JD length; shorter inputs cannot yield a meaningful keyword set.
pub const JD_MIN_CHARS: usize = 50;

/// A loaded resume: extracted plain text plus the raw upload bytes the
/// file-format check inspects.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

/// Upload identity recorded in the report envelope.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: usize,
    pub sha256: String,
}

impl FileMeta {
    pub fn of(document: &Document) -> Self {
        Self {
            name: document.file_name.clone(),
            size_bytes: document.bytes.len(),
            sha256: fingerprint(&document.bytes),
        }
    }
}

pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn guess_mime(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "txt" => "text/plain",
        "rtf" => "application/rtf",
        _ => "application/octet-stream",
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_lowercase()
}

/// Loads a resume file. Plain-text files carry their own text; any other
/// format needs `text_override` pointing at externally extracted text, since
/// byte-level PDF/DOCX extraction lives outside this tool.
pub fn load_resume(path: &Path, text_override: Option<&Path>) -> Result<Document> {
    if !path.exists() {
        return Err(AtsError::PathNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let extension = extension_of(path);

    let text = match text_override {
        Some(text_path) => {
            if !text_path.exists() {
                return Err(AtsError::PathNotFound(text_path.display().to_string()));
            }
            std::fs::read_to_string(text_path)?
        }
        None if extension == "txt" => String::from_utf8_lossy(&bytes).into_owned(),
        None => return Err(AtsError::TextRequired(path.display().to_string())),
    };

    debug!(file = %file_name, bytes = bytes.len(), "loaded resume");

    Ok(Document {
        text,
        bytes,
        file_name,
        mime_type: guess_mime(&extension).to_string(),
    })
}

/// Loads and validates the job description text.
pub fn load_jd(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(AtsError::PathNotFound(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    let len = text.trim().chars().count();
    if len < JD_MIN_CHARS {
        return Err(AtsError::JdTooShort(len, JD_MIN_CHARS));
    }
    Ok(text)
}

/// Finds every `.txt` resume under `dir`, sorted for stable batch output.
pub fn list_resumes(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(AtsError::PathNotFound(dir.display().to_string()));
    }
    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| extension_of(path) == "txt")
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(AtsError::EmptyBatch(dir.display().to_string()));
    }
    Ok(paths)
}

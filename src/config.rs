use std::path::Path;

use serde::Deserialize;

use crate::error::{AtsError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "atscan.toml";

/// Optional CLI policy. Scoring thresholds are deliberately not configurable;
/// the config only shapes presentation and exit behavior.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AtsConfig {
    pub report: Option<ReportConfig>,
    pub score: Option<ScoreConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportConfig {
    /// "json" or "md"; the --format flag wins over this.
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    /// Totals below this exit with the critical status code.
    #[serde(default)]
    pub fail_below: u32,
}

impl AtsConfig {
    pub fn default_format(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.format.as_deref())
    }

    pub fn fail_below(&self) -> u32 {
        self.score.as_ref().map(|s| s.fail_below).unwrap_or(0)
    }
}

/// Loads config from an explicit path, or from `atscan.toml` in the working
/// directory when present. No config is not an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Option<AtsConfig>> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AtsError::PathNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if !default.exists() {
                return Ok(None);
            }
            default.to_path_buf()
        }
    };

    let content = std::fs::read_to_string(&path)?;
    let config: AtsConfig = toml::from_str(&content)
        .map_err(|e| AtsError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

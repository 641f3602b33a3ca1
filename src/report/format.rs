//! Output formats for training summaries.

use super::info::{InfoMessage, Locale};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output format for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Report rendering errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render a single summary.
pub fn render(info: &InfoMessage, format: OutputFormat, locale: Locale) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(info.to_text(locale)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
    }
}

/// Render several summaries.
///
/// Text summaries are separated by a blank line; JSON output is an array.
pub fn render_all(infos: &[InfoMessage], format: OutputFormat, locale: Locale) -> Result<String, ReportError> {
    match format {
        OutputFormat::Text => Ok(infos
            .iter()
            .map(|info| info.to_text(locale))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(infos)?),
    }
}

//! Export payloads - the document rendered for download in a chosen format

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("no text to save")]
    EmptyText,
    #[error("failed to serialize export: {0}")]
    Serialize(String),
}

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[value(name = "txt")]
    Text,
    Json,
    #[value(name = "md")]
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown",
        }
    }
}

/// A ready-to-write export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

#[derive(Serialize)]
struct JsonExport<'a> {
    content: &'a str,
}

/// Render `text` for export. Blank text is rejected.
pub fn export(text: &str, format: ExportFormat) -> Result<ExportPayload, ExportError> {
    if text.trim().is_empty() {
        return Err(ExportError::EmptyText);
    }

    let contents = match format {
        ExportFormat::Text | ExportFormat::Markdown => text.to_string(),
        ExportFormat::Json => serde_json::to_string_pretty(&JsonExport { content: text })
            .map_err(|e| ExportError::Serialize(e.to_string()))?,
    };

    Ok(ExportPayload {
        file_name: format!("manipulated_text.{}", format.extension()),
        mime_type: format.mime_type(),
        contents,
    })
}

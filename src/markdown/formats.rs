//! Serialization of tagged text for tooling and tests.
//!
//! Two renderings are provided: a compact single-line "runs" string used in
//! assertions and CLI output, and a JSON array of run records that can be
//! fed back into the encoder.

use super::markup::Markdown;
use super::spans::TaggedText;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output format selector for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `[tag]"content"` item per run on a single line.
    Simple,
    /// JSON array of `{ "text": ..., "markdown": ... }` records.
    Json,
}

/// Error for unknown format names.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatError {
    name: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Format '{}' not found (expected 'simple' or 'json')",
            self.name
        )
    }
}

impl std::error::Error for FormatError {}

impl OutputFormat {
    /// Parses a format name like "simple" or "json".
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FormatError {
                name: name.to_string(),
            }),
        }
    }
}

/// A single run in serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub text: String,
    pub markdown: Markdown,
}

/// Renders runs as a compact single-line string.
///
/// Run contents are debug-escaped, so terminators show up as `\n`:
///
/// ```text
/// [header1]"Header" [plain]"\nNormal"
/// ```
pub fn to_run_string(tagged: &TaggedText) -> String {
    tagged
        .runs()
        .map(|(text, markdown)| format!("[{markdown}]{text:?}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Serializes runs as pretty-printed JSON.
pub fn to_json(tagged: &TaggedText) -> Result<String, serde_json::Error> {
    let records: Vec<RunRecord> = tagged
        .runs()
        .map(|(text, markdown)| RunRecord {
            text: text.to_string(),
            markdown,
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

/// Rebuilds tagged text from JSON produced by [`to_json`].
pub fn from_json(json: &str) -> Result<TaggedText, serde_json::Error> {
    let records: Vec<RunRecord> = serde_json::from_str(json)?;
    Ok(TaggedText::from_runs(
        records
            .iter()
            .map(|record| (record.text.as_str(), record.markdown)),
    ))
}

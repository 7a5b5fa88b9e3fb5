use crate::models::Recommendation;
use serde::Deserialize;
use std::fmt::Write as _;
use thiserror::Error;

pub const HEADER: &str = "Recommended Products:";

/// Errors that can occur while rendering results
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render recommendations for display
pub fn render(results: &[Recommendation], format: OutputFormat) -> Result<String, OutputError> {
    match format {
        OutputFormat::Text => Ok(render_text(results)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)? + "\n"),
    }
}

fn render_text(results: &[Recommendation]) -> String {
    let mut out = format!("\n{HEADER}\n");
    for rec in results {
        // Writing to a String cannot fail
        let _ = writeln!(out, "- {} ({} match(es))", rec.name, rec.matches);
    }
    out
}

//! Error types for cutting-list ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort an ingestion. No rows are produced when one occurs.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read the file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream is structurally unreadable.
    #[error("{}", parse_message(*line, message))]
    CsvParse { line: Option<u64>, message: String },
}

fn parse_message(line: Option<u64>, message: &str) -> String {
    match line {
        Some(line) => format!("line {line}: {message}"),
        None => message.to_string(),
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(csv::Position::line);
        let message = match err.kind() {
            csv::ErrorKind::Utf8 { err, .. } => {
                format!("invalid UTF-8 in field {}", err.field() + 1)
            }
            csv::ErrorKind::Io(io) => io.to_string(),
            _ => err.to_string(),
        };
        Self::CsvParse { line, message }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

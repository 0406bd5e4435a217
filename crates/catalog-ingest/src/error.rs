//! Error types for catalog table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading one table.
#[derive(Debug, Error)]
pub enum IngestError {
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File exists but could not be read or parsed as CSV.
    #[error("failed to read CSV {path}: {source}")]
    CsvRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record has more fields than the header.
    #[error("failed to read CSV {path}: line {line} has {found} fields, expected {expected}")]
    TooManyFields {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl IngestError {
    /// Underlying cause without the path prefix, as shown in the report.
    pub fn reason(&self) -> String {
        match self {
            Self::FileNotFound { path } => format!("not found: {}", path.display()),
            Self::CsvRead { source, .. } => source.to_string(),
            Self::TooManyFields {
                line,
                expected,
                found,
                ..
            } => format!(
                "Error tokenizing data. Expected {expected} fields in line {line}, saw {found}"
            ),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

//! Plain-text rendering of a [`ValidationReport`].
//!
//! The report is a fixed title, a blank line, then one line per finding:
//! table-level findings as `- <file>: ...`, detail findings indented as
//! `  • <file>: ...`. Lines are joined with `\n` and there is no trailing newline.

use std::fs;
use std::path::{Path, PathBuf};

use catalog_model::{Finding, ValidationReport};
use thiserror::Error;

/// First line of every report.
pub const REPORT_TITLE: &str = "Validation Report";

/// Artifact name, written in the current working directory.
pub const REPORT_FILE_NAME: &str = "validation_report.txt";

const TABLE_PREFIX: &str = "- ";
const DETAIL_PREFIX: &str = "  • ";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

pub fn render_line(finding: &Finding) -> String {
    let prefix = if finding.is_detail() {
        DETAIL_PREFIX
    } else {
        TABLE_PREFIX
    };
    format!("{prefix}{finding}")
}

pub fn render_report(report: &ValidationReport) -> String {
    let mut lines = vec![REPORT_TITLE.to_string(), String::new()];
    lines.extend(report.findings.iter().map(render_line));
    lines.join("\n")
}

/// Render `report` and write it to `path`, replacing any previous report.
pub fn write_report(report: &ValidationReport, path: &Path) -> Result<()> {
    let text = render_report(report);
    fs::write(path, text).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), lines = report.findings.len() + 2, "report written");
    Ok(())
}

//! Run orchestration: validate the input directory and write the report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog_model::ValidationReport;
use catalog_report::write_report;
use catalog_validate::validate_dir;

/// Input directory, relative to the current working directory.
pub const DATA_DIR: &str = "data";

#[derive(Debug)]
pub struct RunResult {
    pub report_path: PathBuf,
    pub report: ValidationReport,
}

/// Validate every table under `data_dir` and write the report to `report_path`.
///
/// Findings never fail the run; only a failed report write does.
pub fn run_validation(data_dir: &Path, report_path: &Path) -> Result<RunResult> {
    let validation = validate_dir(data_dir);
    write_report(&validation.report, report_path)
        .with_context(|| format!("write {}", report_path.display()))?;
    Ok(RunResult {
        report_path: report_path.to_path_buf(),
        report: validation.report,
    })
}

//! Venue catalog validation.
//!
//! Runs the schema check for every table that loaded, then the cross-table
//! detail checks, and collects every finding into one ordered
//! [`ValidationReport`]: the table-level finding for each table in
//! specification order, followed by the detail findings in check order.

pub mod checks;
mod util;

use std::path::Path;

use catalog_ingest::{IngestError, TableLoad, load_tables};
use catalog_model::{Finding, TableSet, ValidationReport};

/// Tables and findings produced by one validation run.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    pub tables: TableSet,
    pub report: ValidationReport,
}

/// Load every expected table from `dir` and validate it.
pub fn validate_dir(dir: &Path) -> Validation {
    let span = tracing::info_span!("validate", dir = %dir.display());
    let _guard = span.enter();
    let validation = validate_loads(load_tables(dir));
    tracing::info!(
        tables = validation.tables.len(),
        missing = validation.report.missing_count(),
        errors = validation.report.error_count(),
        mismatches = validation.report.mismatch_count(),
        details = validation.report.detail_count(),
        clean = validation.report.is_clean(),
        "validation complete"
    );
    validation
}

/// Validate the outcome of a load stage.
///
/// Load failures become findings and the table is left out of the table set.
pub fn validate_loads(loads: Vec<TableLoad>) -> Validation {
    let mut tables = TableSet::new();
    let mut report = ValidationReport::new();

    for TableLoad { table, result } in loads {
        match result {
            Ok(loaded) => {
                report.add(checks::schema::check(table.spec(), &loaded));
                tables.insert(loaded);
            }
            Err(IngestError::FileNotFound { .. }) => report.add(Finding::Missing { table }),
            Err(error) => report.add(Finding::ReadError {
                table,
                message: error.reason(),
            }),
        }
    }

    report.extend(check_tables(&tables));
    Validation { tables, report }
}

/// Detail checks over already-loaded tables.
pub fn check_tables(tables: &TableSet) -> Vec<Finding> {
    checks::run_all(tables)
}

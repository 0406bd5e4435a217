//! Column-set comparison against the expected schema.
//!
//! Purely structural: cell values are never inspected.

use catalog_model::{Finding, LoadedTable, SchemaStatus, TableSpec};

/// Expected columns absent from a header, and header columns not expected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDiff {
    /// In expected order.
    pub missing: Vec<String>,
    /// In file order.
    pub extra: Vec<String>,
}

impl ColumnDiff {
    pub fn is_match(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

pub fn compare_columns(expected: &[&str], actual: &[String]) -> ColumnDiff {
    let missing = expected
        .iter()
        .filter(|column| !actual.iter().any(|name| name == *column))
        .map(|column| (*column).to_string())
        .collect();
    let extra = actual
        .iter()
        .filter(|name| !expected.contains(&name.as_str()))
        .cloned()
        .collect();
    ColumnDiff { missing, extra }
}

/// One schema-status finding for a loaded table.
pub fn check(spec: &TableSpec, table: &LoadedTable) -> Finding {
    let diff = compare_columns(spec.columns, &table.columns);
    let status = if diff.is_match() {
        SchemaStatus::Ok
    } else {
        SchemaStatus::Mismatch
    };
    Finding::Schema {
        table: table.name,
        status,
        rows: table.row_count(),
        missing: diff.missing,
        extra: diff.extra,
    }
}

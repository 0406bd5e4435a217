//! CSV reading into loaded tables.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use catalog_model::{CellValue, LoadedTable, TableName};
use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Rename repeated header names to `name.1`, `name.2`, ... so every column is distinct.
///
/// A generated name that collides with an existing header is bumped further.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken: HashSet<String> = headers.iter().cloned().collect();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut columns = Vec::with_capacity(headers.len());
    for header in headers {
        let count = counts.entry(header.clone()).or_insert(0);
        if *count == 0 {
            *count = 1;
            columns.push(header);
            continue;
        }
        let mut renamed = format!("{header}.{count}");
        while taken.contains(&renamed) {
            *count += 1;
            renamed = format!("{header}.{count}");
        }
        *count += 1;
        taken.insert(renamed.clone());
        columns.push(renamed);
    }
    columns
}

/// Read the CSV file for `name` located in `dir`.
///
/// Records shorter than the header are padded with `Missing`; a record with
/// more fields than the header is an error. A zero-byte file yields a table
/// with no columns and no rows.
pub fn read_table(dir: &Path, name: TableName) -> Result<LoadedTable> {
    let path = dir.join(name.file_name());
    if !path.exists() {
        return Err(IngestError::FileNotFound { path });
    }
    read_table_from_path(&path, name)
}

pub(crate) fn read_table_from_path(path: &Path, name: TableName) -> Result<LoadedTable> {
    let csv_error = |source: csv::Error| IngestError::CsvRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    let mut table = LoadedTable::new(name, dedupe_headers(headers));
    let width = table.columns.len();

    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        if record.len() > width {
            return Err(IngestError::TooManyFields {
                path: path.to_path_buf(),
                line: record.position().map_or(0, csv::Position::line),
                expected: width,
                found: record.len(),
            });
        }
        let mut row: Vec<CellValue> = record.iter().map(CellValue::from_raw).collect();
        row.resize(width, CellValue::Missing);
        table.push_row(row);
    }

    tracing::debug!(
        table = %name,
        path = %path.display(),
        rows = table.row_count(),
        columns = width,
        "loaded table"
    );
    Ok(table)
}

//! Venue catalog ingestion.
//!
//! Locates each expected CSV table in the input directory and reads it into a
//! [`LoadedTable`]. Failures are per table: a missing or unreadable file never
//! stops the remaining tables from loading.

mod error;
mod reader;

use std::path::Path;

use catalog_model::{LoadedTable, TableName};

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::read_table;

/// Outcome of attempting to load one table.
#[derive(Debug)]
pub struct TableLoad {
    pub table: TableName,
    pub result: Result<LoadedTable>,
}

/// Attempt to load every expected table from `dir`, in report order.
pub fn load_tables(dir: &Path) -> Vec<TableLoad> {
    TableName::ALL
        .into_iter()
        .map(|table| {
            let result = read_table(dir, table);
            if let Err(error) = &result {
                tracing::warn!(table = %table, %error, "table not loaded");
            }
            TableLoad { table, result }
        })
        .collect()
}

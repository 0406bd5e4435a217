//! Key integrity of the Rooms `code` column.
//!
//! Blank and null codes are counted; among the remaining trimmed codes,
//! values seen more than once are reported as a sorted distinct list.

use std::collections::{BTreeSet, HashSet};

use catalog_model::{Finding, TableName, TableSet};

pub const KEY_TABLE: TableName = TableName::Rooms;
pub const KEY_COLUMN: &str = "code";

pub fn check(tables: &TableSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    let Some(rooms) = tables.get(KEY_TABLE) else {
        return findings;
    };
    let Some(codes) = rooms.column(KEY_COLUMN) else {
        return findings;
    };

    let mut empty_count = 0usize;
    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates: BTreeSet<&str> = BTreeSet::new();
    for cell in codes {
        match cell.trimmed() {
            None => empty_count += 1,
            Some(code) => {
                if !seen.insert(code) {
                    duplicates.insert(code);
                }
            }
        }
    }

    if empty_count > 0 {
        findings.push(Finding::EmptyKeys {
            table: KEY_TABLE,
            column: KEY_COLUMN.to_string(),
            count: empty_count,
        });
    }
    if !duplicates.is_empty() {
        findings.push(Finding::DuplicateKeys {
            table: KEY_TABLE,
            column: KEY_COLUMN.to_string(),
            values: duplicates.into_iter().map(str::to_string).collect(),
        });
    }

    findings
}

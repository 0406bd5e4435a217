//! Foreign-key integrity of RoomCatalogMap against Rooms and Catalog.

use catalog_model::{Finding, LoadedTable, TableName, TableSet};

use crate::util::KeySet;

/// A column referencing the `id` of another table.
#[derive(Debug, Clone, Copy)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references: TableName,
}

pub const MAP_TABLE: TableName = TableName::RoomCatalogMap;

/// Checked in this order; each yields its own finding.
pub const FOREIGN_KEYS: [ForeignKey; 2] = [
    ForeignKey {
        column: "roomId",
        references: TableName::Rooms,
    },
    ForeignKey {
        column: "catalogItemId",
        references: TableName::Catalog,
    },
];

pub const REFERENCED_KEY: &str = "id";

pub fn check(tables: &TableSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    let Some(map) = tables.get(MAP_TABLE) else {
        return findings;
    };
    let (Some(rooms), Some(catalog)) = (tables.get(TableName::Rooms), tables.get(TableName::Catalog))
    else {
        return findings;
    };
    if !FOREIGN_KEYS.iter().all(|key| map.has_column(key.column)) {
        return findings;
    }

    for key in FOREIGN_KEYS {
        let target = match key.references {
            TableName::Rooms => rooms,
            _ => catalog,
        };
        let unknown = count_unknown(map, key.column, target);
        if unknown > 0 {
            tracing::debug!(column = key.column, unknown, "unresolved foreign keys");
            findings.push(Finding::UnknownReference {
                table: MAP_TABLE,
                column: key.column.to_string(),
                count: unknown,
            });
        }
    }

    findings
}

/// Rows of `table.column` whose value is not an `id` of `target`.
///
/// A target without an `id` column resolves nothing.
fn count_unknown(table: &LoadedTable, column: &str, target: &LoadedTable) -> usize {
    let ids = KeySet::exact(target, REFERENCED_KEY);
    table
        .column(column)
        .map(|cells| {
            cells
                .filter(|cell| cell.as_text().is_none_or(|value| !ids.contains(value)))
                .count()
        })
        .unwrap_or(0)
}

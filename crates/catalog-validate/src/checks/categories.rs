//! Categorical cross-reference of Catalog `vatCategory` against VAT `name`.

use catalog_model::{CellValue, Finding, TableName, TableSet};

use crate::util::KeySet;

pub const CATEGORY_TABLE: TableName = TableName::Catalog;
pub const CATEGORY_COLUMN: &str = "vatCategory";
pub const NAME_TABLE: TableName = TableName::Vat;
pub const NAME_COLUMN: &str = "name";

pub fn check(tables: &TableSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    let (Some(catalog), Some(vat)) = (tables.get(CATEGORY_TABLE), tables.get(NAME_TABLE)) else {
        return findings;
    };
    // An empty VAT table defines no names; nothing to compare against.
    if vat.is_empty() || !vat.has_column(NAME_COLUMN) {
        return findings;
    }
    let Some(categories) = catalog.column(CATEGORY_COLUMN) else {
        return findings;
    };

    let names = KeySet::trimmed(vat, NAME_COLUMN);
    let invalid = categories
        .filter_map(CellValue::trimmed)
        .filter(|category| !names.contains(category))
        .count();

    if invalid > 0 {
        findings.push(Finding::UnknownCategory {
            table: CATEGORY_TABLE,
            referenced: NAME_TABLE,
            count: invalid,
        });
    }

    findings
}

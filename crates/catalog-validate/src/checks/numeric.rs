//! Numeric format validation.
//!
//! Checks that designated numeric columns hold only values that parse as numbers.

use catalog_model::{CellValue, Finding, LoadedTable, TABLE_SPECS, TableSet};

/// One finding per (table, column) with at least one non-numeric value.
pub fn check(tables: &TableSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    for spec in TABLE_SPECS {
        let Some(table) = tables.get(spec.table) else {
            continue;
        };
        for column in spec.numeric {
            if has_non_numeric(table, column) {
                findings.push(Finding::NonNumeric {
                    table: spec.table,
                    column: (*column).to_string(),
                });
            }
        }
    }

    findings
}

fn has_non_numeric(table: &LoadedTable, column: &str) -> bool {
    let Some(mut cells) = table.column(column) else {
        return false;
    };
    cells.any(|cell| !is_numeric(cell))
}

/// Nulls are not type errors.
pub fn is_numeric(cell: &CellValue) -> bool {
    match cell {
        CellValue::Missing => true,
        CellValue::Text(value) => value.trim().parse::<f64>().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(&CellValue::Missing));
        assert!(is_numeric(&text("12")));
        assert!(is_numeric(&text(" 12.50 ")));
        assert!(is_numeric(&text("-3e2")));
        assert!(is_numeric(&text("inf")));
        assert!(!is_numeric(&text("abc")));
        assert!(!is_numeric(&text("1,000")));
        assert!(!is_numeric(&text("£20")));
        assert!(!is_numeric(&text("  ")));
    }
}

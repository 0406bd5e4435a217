//! Utility types for validation.

use std::collections::HashSet;

use catalog_model::{CellValue, LoadedTable};

/// Distinct values of one column, used for reference lookups.
#[derive(Debug, Clone, Default)]
pub struct KeySet<'a> {
    inner: HashSet<&'a str>,
}

impl<'a> KeySet<'a> {
    /// Non-null cell text, unmodified.
    pub fn exact(table: &'a LoadedTable, column: &str) -> Self {
        Self::collect(table, column, Some)
    }

    /// Non-null cell text, trimmed.
    pub fn trimmed(table: &'a LoadedTable, column: &str) -> Self {
        Self::collect(table, column, |value| Some(value.trim()))
    }

    fn collect(
        table: &'a LoadedTable,
        column: &str,
        normalize: impl Fn(&'a str) -> Option<&'a str>,
    ) -> Self {
        let inner = table
            .column(column)
            .map(|cells| {
                cells
                    .filter_map(CellValue::as_text)
                    .filter_map(&normalize)
                    .collect()
            })
            .unwrap_or_default();
        Self { inner }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.inner.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::TableName;

    #[test]
    fn test_key_set_trimming() {
        let mut table = LoadedTable::new(TableName::Vat, vec!["name".to_string()]);
        table.push_row(vec![CellValue::Text(" Standard ".to_string())]);
        table.push_row(vec![CellValue::Missing]);

        let exact = KeySet::exact(&table, "name");
        assert!(exact.contains(" Standard "));
        assert!(!exact.contains("Standard"));

        let trimmed = KeySet::trimmed(&table, "name");
        assert!(trimmed.contains("Standard"));
        assert!(!trimmed.contains(" Standard "));

        assert!(!KeySet::exact(&table, "id").contains("Standard"));
    }
}

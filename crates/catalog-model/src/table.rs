use std::collections::BTreeMap;

use crate::spec::TableName;

/// Field values a dataframe reader treats as NA by default.
pub const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

static MISSING_CELL: CellValue = CellValue::Missing;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Classify a raw CSV field. Text is kept verbatim; only exact null tokens are `Missing`.
    pub fn from_raw(raw: &str) -> Self {
        if NULL_TOKENS.contains(&raw) {
            Self::Missing
        } else {
            Self::Text(raw.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    /// Trimmed text, or `None` when the cell is missing or blank.
    pub fn trimmed(&self) -> Option<&str> {
        self.as_text()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// One table as read from disk: header columns in file order plus aligned rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    pub name: TableName,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl LoadedTable {
    pub fn new(name: TableName, columns: Vec<String>) -> Self {
        Self {
            name,
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_index(column).is_some()
    }

    /// Cells of one column, top to bottom. `None` when the column is absent.
    ///
    /// Short rows read as `Missing` past their last cell.
    pub fn column<'a>(
        &'a self,
        column: &str,
    ) -> Option<impl Iterator<Item = &'a CellValue> + use<'a>> {
        let idx = self.column_index(column)?;
        Some(
            self.rows
                .iter()
                .map(move |row| row.get(idx).unwrap_or(&MISSING_CELL)),
        )
    }
}

/// Tables that loaded successfully during one run, keyed by name.
///
/// Missing or unreadable tables are simply absent; checks look their
/// dependencies up and skip when one is not here.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    tables: BTreeMap<TableName, LoadedTable>,
}

impl TableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: LoadedTable) {
        self.tables.insert(table.name, table);
    }

    pub fn get(&self, name: TableName) -> Option<&LoadedTable> {
        self.tables.get(&name)
    }

    pub fn contains(&self, name: TableName) -> bool {
        self.tables.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl FromIterator<LoadedTable> for TableSet {
    fn from_iter<I: IntoIterator<Item = LoadedTable>>(iter: I) -> Self {
        let mut set = Self::new();
        for table in iter {
            set.insert(table);
        }
        set
    }
}

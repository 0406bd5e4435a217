//! Validation findings.
//!
//! Each variant carries only the data its report line needs. Findings are
//! produced in a fixed order and never retracted.

use std::fmt;

use crate::spec::TableName;

/// Outcome of comparing a table's header to its expected columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    Ok,
    Mismatch,
}

impl SchemaStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Mismatch => "MISMATCH",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    // Table-level findings (one per expected table)
    /// Input file does not exist
    Missing { table: TableName },
    /// Input file exists but could not be read as CSV
    ReadError { table: TableName, message: String },
    /// Column set compared against the expected schema
    Schema {
        table: TableName,
        status: SchemaStatus,
        rows: usize,
        missing: Vec<String>,
        extra: Vec<String>,
    },

    // Detail findings
    /// Key column has null or blank values
    EmptyKeys {
        table: TableName,
        column: String,
        count: usize,
    },
    /// Key column has values appearing more than once
    DuplicateKeys {
        table: TableName,
        column: String,
        values: Vec<String>,
    },
    /// Foreign-key column references ids that do not exist
    UnknownReference {
        table: TableName,
        column: String,
        count: usize,
    },
    /// Category column references names not defined in another table
    UnknownCategory {
        table: TableName,
        referenced: TableName,
        count: usize,
    },
    /// Numeric column holds at least one value that is not a number
    NonNumeric { table: TableName, column: String },
}

impl Finding {
    pub fn table(&self) -> TableName {
        match self {
            Finding::Missing { table }
            | Finding::ReadError { table, .. }
            | Finding::Schema { table, .. }
            | Finding::EmptyKeys { table, .. }
            | Finding::DuplicateKeys { table, .. }
            | Finding::UnknownReference { table, .. }
            | Finding::UnknownCategory { table, .. }
            | Finding::NonNumeric { table, .. } => *table,
        }
    }

    /// Detail findings are reported indented under the table-level lines.
    pub fn is_detail(&self) -> bool {
        !matches!(
            self,
            Finding::Missing { .. } | Finding::ReadError { .. } | Finding::Schema { .. }
        )
    }

    /// Message text without the table prefix.
    pub fn message(&self) -> String {
        match self {
            Finding::Missing { .. } => "MISSING".to_string(),
            Finding::ReadError { message, .. } => format!("ERROR reading file: {message}"),
            Finding::Schema {
                status,
                rows,
                missing,
                extra,
                ..
            } => format!(
                "{} (rows={}, missing={}, extra={})",
                status.label(),
                rows,
                quoted_list(missing),
                quoted_list(extra)
            ),
            Finding::EmptyKeys { column, count, .. } => format!("{count} empty {column}(s)"),
            Finding::DuplicateKeys { column, values, .. } => {
                format!("duplicate {column}(s): {}", quoted_list(values))
            }
            Finding::UnknownReference { column, count, .. } => {
                format!("{count} unknown {column}(s)")
            }
            Finding::UnknownCategory {
                referenced, count, ..
            } => format!(
                "{count} item(s) reference {} names not in {}",
                referenced.stem(),
                referenced.file_name()
            ),
            Finding::NonNumeric { column, .. } => format!("non-numeric values in {column}"),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.table(), self.message())
    }
}

/// Render values as a bracketed list of quoted strings, e.g. `['a', 'b']`.
pub fn quoted_list<S: AsRef<str>>(values: &[S]) -> String {
    let items: Vec<String> = values.iter().map(|value| quote(value.as_ref())).collect();
    format!("[{}]", items.join(", "))
}

fn quote(value: &str) -> String {
    // Single quotes unless the value contains one and no double quote.
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delimiter);
    out
}

pub mod finding;
pub mod report;
pub mod spec;
pub mod table;

pub use finding::{Finding, SchemaStatus, quoted_list};
pub use report::ValidationReport;
pub use spec::{TABLE_SPECS, TableName, TableSpec};
pub use table::{CellValue, LoadedTable, NULL_TOKENS, TableSet};

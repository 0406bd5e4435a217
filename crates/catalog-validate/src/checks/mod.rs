//! Validation check modules.
//!
//! Each module performs one kind of check. Cross-table checks look their
//! dependencies up in the [`TableSet`] and return no findings when one is absent.

pub mod categories;
pub mod keys;
pub mod numeric;
pub mod references;
pub mod schema;

use catalog_model::{Finding, TableSet};

/// Run all detail checks in report order.
pub fn run_all(tables: &TableSet) -> Vec<Finding> {
    let mut findings = Vec::new();

    // 1. Key integrity (Rooms.code non-empty and unique)
    findings.extend(keys::check(tables));

    // 2. Foreign keys (RoomCatalogMap -> Rooms, Catalog)
    findings.extend(references::check(tables));

    // 3. Category cross-reference (Catalog.vatCategory -> VAT.name)
    findings.extend(categories::check(tables));

    // 4. Numeric format of designated columns
    findings.extend(numeric::check(tables));

    for finding in &findings {
        tracing::debug!(%finding, "detail finding");
    }
    findings
}

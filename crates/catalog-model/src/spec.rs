//! Static table specifications for the venue catalog.
//!
//! Each input file has a fixed expected column list (the order defines the
//! canonical schema order) and, for some tables, a list of columns that must
//! hold numeric values.

use std::fmt;

/// The five tables of a catalog export, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableName {
    Catalog,
    Rooms,
    RoomCatalogMap,
    Vat,
    Durations,
}

impl TableName {
    /// All tables in fixed specification order.
    pub const ALL: [TableName; 5] = [
        TableName::Catalog,
        TableName::Rooms,
        TableName::RoomCatalogMap,
        TableName::Vat,
        TableName::Durations,
    ];

    /// File stem, as it appears on disk and in report messages.
    pub fn stem(self) -> &'static str {
        match self {
            Self::Catalog => "Catalog",
            Self::Rooms => "Rooms",
            Self::RoomCatalogMap => "RoomCatalogMap",
            Self::Vat => "VAT",
            Self::Durations => "Durations",
        }
    }

    /// File name inside the input directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Catalog => "Catalog.csv",
            Self::Rooms => "Rooms.csv",
            Self::RoomCatalogMap => "RoomCatalogMap.csv",
            Self::Vat => "VAT.csv",
            Self::Durations => "Durations.csv",
        }
    }

    pub fn spec(self) -> &'static TableSpec {
        match self {
            Self::Catalog => &CATALOG,
            Self::Rooms => &ROOMS,
            Self::RoomCatalogMap => &ROOM_CATALOG_MAP,
            Self::Vat => &VAT,
            Self::Durations => &DURATIONS,
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Expected-column contract for one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub table: TableName,
    /// Expected columns in canonical order.
    pub columns: &'static [&'static str],
    /// Columns whose non-null values must parse as numbers.
    pub numeric: &'static [&'static str],
}

pub static CATALOG: TableSpec = TableSpec {
    table: TableName::Catalog,
    columns: &[
        "id",
        "name",
        "heading",
        "vatCategory",
        "ratePerHour",
        "rateHalfDay",
        "rateDay",
        "ratePerPerson",
        "ratePerBooking",
        "includedDefault",
        "includedCondition",
        "notes",
    ],
    numeric: &[
        "ratePerHour",
        "rateHalfDay",
        "rateDay",
        "ratePerPerson",
        "ratePerBooking",
    ],
};

pub static ROOMS: TableSpec = TableSpec {
    table: TableName::Rooms,
    columns: &[
        "id",
        "venueId",
        "name",
        "code",
        "description",
        "sizeSqm",
        "heightM",
        "accessible",
        "featuresJSON",
        "imagesJSON",
        "layoutsJSON",
        "baseRateHour",
        "baseRateHalfDay",
        "baseRateDay",
    ],
    numeric: &[
        "sizeSqm",
        "heightM",
        "baseRateHour",
        "baseRateHalfDay",
        "baseRateDay",
    ],
};

pub static ROOM_CATALOG_MAP: TableSpec = TableSpec {
    table: TableName::RoomCatalogMap,
    columns: &[
        "id",
        "roomId",
        "catalogItemId",
        "visibility",
        "basisOverride",
        "rateOverridesJSON",
        "minQty",
        "maxQty",
        "defaultQty",
        "autoSuggest",
    ],
    numeric: &[],
};

pub static VAT: TableSpec = TableSpec {
    table: TableName::Vat,
    columns: &["id", "name", "ratePercent", "appliesToJSON"],
    numeric: &["ratePercent"],
};

pub static DURATIONS: TableSpec = TableSpec {
    table: TableName::Durations,
    columns: &["code", "label", "hours"],
    numeric: &["hours"],
};

/// Every table specification in report order.
pub static TABLE_SPECS: [&TableSpec; 5] = [&CATALOG, &ROOMS, &ROOM_CATALOG_MAP, &VAT, &DURATIONS];

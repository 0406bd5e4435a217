//! Command surface for the catalog validator.

use clap::Parser;

/// The command takes no arguments: it reads `data/` and writes
/// `validation_report.txt` in the current directory.
#[derive(Parser)]
#[command(
    name = "catalog-validator",
    version,
    about = "Check venue catalog CSV exports against the expected schema",
    long_about = "Check venue catalog CSV exports against the expected schema.\n\n\
                  Reads Catalog.csv, Rooms.csv, RoomCatalogMap.csv, VAT.csv and\n\
                  Durations.csv from ./data and writes validation_report.txt to the\n\
                  current directory. Data is never modified."
)]
pub struct Cli {}

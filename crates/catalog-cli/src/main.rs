//! Venue catalog validator.

use std::path::Path;

use catalog_cli::commands::{DATA_DIR, run_validation};
use catalog_cli::logging::{LogConfig, init_logging};
use catalog_report::REPORT_FILE_NAME;
use clap::Parser;

mod cli;

use crate::cli::Cli;

fn main() {
    let _cli = Cli::parse();
    if let Err(error) = init_logging(&LogConfig::default()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    match run_validation(Path::new(DATA_DIR), Path::new(REPORT_FILE_NAME)) {
        Ok(result) => println!("{} written.", result.report_path.display()),
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    }
}

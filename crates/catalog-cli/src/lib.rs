//! CLI library components for the venue catalog validator.

pub mod commands;
pub mod logging;

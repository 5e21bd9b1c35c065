//! CLI argument parsing

mod commands;

pub use commands::{Cli, ReportFormat};

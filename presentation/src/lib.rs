//! Presentation layer for acumen
//!
//! Terminal-facing surfaces: CLI argument parsing, the interactive interview
//! REPL, and console/JSON report formatting.

pub mod chat;
pub mod cli;
pub mod output;

pub use chat::InterviewRepl;
pub use cli::{Cli, ReportFormat};
pub use output::ConsoleFormatter;

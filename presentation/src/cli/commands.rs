//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final assessment report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable colored report
    Text,
    /// JSON report
    Json,
}

/// CLI arguments for acumen
#[derive(Parser, Debug)]
#[command(name = "acumen")]
#[command(author, version, about = "Adaptive conversational skills assessment")]
#[command(long_about = r#"
Acumen conducts an adaptive skills interview in your terminal.

The interview has three phases:
1. Introduction: you describe your experience level
2. Assessment: up to 15 questions, difficulty adapting to your answers
3. Conclusion: a scored evaluation with strengths and recommendations

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./acumen.toml       Project-level config
3. ~/.config/acumen/config.toml   Global config

Example:
  acumen --name "Jane Doe"
  acumen --name "Jane Doe" --email jane@example.com --report json
  acumen --name "Sam" --questions ./sql_questions.toml
"#)]
pub struct Cli {
    /// Candidate name (required unless --show-config)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Candidate email
    #[arg(short, long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Path to a TOML question catalog (defaults to the built-in Excel set)
    #[arg(long, value_name = "PATH")]
    pub questions: Option<PathBuf>,

    /// Final report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub report: ReportFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::try_parse_from(["acumen", "--name", "Jane Doe"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Jane Doe"));
        assert!(cli.email.is_none());
        assert!(matches!(cli.report, ReportFormat::Text));
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_full_args() {
        let cli = Cli::try_parse_from([
            "acumen",
            "--name",
            "Jane Doe",
            "--email",
            "jane@example.com",
            "--report",
            "json",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.email.as_deref(), Some("jane@example.com"));
        assert!(matches!(cli.report, ReportFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_show_config_needs_no_name() {
        let cli = Cli::try_parse_from(["acumen", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.name.is_none());
    }
}

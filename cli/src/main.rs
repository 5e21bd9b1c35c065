//! CLI entrypoint for acumen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use acumen_application::{
    AssessmentParams, InterviewOrchestrator, NoTranscriptLogger, TranscriptLogger,
};
use acumen_domain::QuestionCatalog;
use acumen_infrastructure::{
    ConfigLoader, HttpScoringOracle, InMemorySessionStore, JsonlTranscriptLogger, OracleSettings,
    load_catalog,
};
use acumen_presentation::{Cli, InterviewRepl};
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting acumen");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(name) = cli.name.clone() else {
        bail!("Candidate name is required. Use --name \"Jane Doe\".");
    };

    // Load and validate configuration. Bad rubric weights or a missing API
    // key refuse to start rather than silently mis-score candidates.
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;
    let api_key = config.resolve_api_key()?;

    // === Dependency Injection ===
    let catalog = match &cli.questions {
        Some(path) => Arc::new(load_catalog(path).context("failed to load question catalog")?),
        None => match &config.questions.file {
            Some(path) => Arc::new(load_catalog(path).context("failed to load question catalog")?),
            None => Arc::new(QuestionCatalog::builtin_excel()),
        },
    };
    info!(questions = catalog.stats().total_questions, "catalog loaded");

    let oracle = Arc::new(HttpScoringOracle::new(OracleSettings {
        base_url: config.oracle.base_url.clone(),
        api_key,
        model: config.oracle.model.clone(),
        temperature: config.oracle.temperature,
        max_tokens: config.oracle.max_tokens,
    }));

    let transcript: Arc<dyn TranscriptLogger> = if config.logging.transcript {
        let filename = format!(
            "{}.interview.jsonl",
            chrono::Utc::now().format("%Y%m%d-%H%M%S")
        );
        let path = std::path::Path::new(&config.logging.transcript_dir).join(filename);
        match JsonlTranscriptLogger::new(&path) {
            Some(logger) => {
                info!(path = %logger.path().display(), "transcript logging enabled");
                Arc::new(logger)
            }
            None => {
                warn!("transcript logging disabled, could not open log file");
                Arc::new(NoTranscriptLogger)
            }
        }
    } else {
        Arc::new(NoTranscriptLogger)
    };

    let params = AssessmentParams::default()
        .with_max_questions(config.assessment.max_questions)
        .with_weights(config.assessment.weights())
        .with_oracle_timeout(Duration::from_secs(config.oracle.timeout_secs));
    params.validate().context("invalid assessment parameters")?;

    let orchestrator = Arc::new(InterviewOrchestrator::new(
        Arc::new(InMemorySessionStore::new()),
        oracle,
        catalog,
        transcript,
        params,
    ));

    let repl = InterviewRepl::new(orchestrator, name, cli.email.clone())
        .with_report_format(cli.report);
    repl.run().await?;

    Ok(())
}

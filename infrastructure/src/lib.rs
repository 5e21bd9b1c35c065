//! Infrastructure layer for acumen
//!
//! Adapters behind the application ports: the HTTP scoring oracle, the
//! in-memory session store, the JSONL transcript logger, plus configuration
//! loading and the TOML question catalog loader.

pub mod catalog_loader;
pub mod config;
pub mod logging;
pub mod oracle;
pub mod store;

pub use catalog_loader::{CatalogLoadError, load_catalog};
pub use config::{API_KEY_ENV, ConfigError, ConfigLoader, FileConfig};
pub use logging::JsonlTranscriptLogger;
pub use oracle::{HttpScoringOracle, OracleSettings};
pub use store::InMemorySessionStore;

//! Configuration loading and validation

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV, ConfigError, FileAssessmentConfig, FileConfig, FileLoggingConfig,
    FileOracleConfig, FileQuestionsConfig,
};
pub use loader::ConfigLoader;

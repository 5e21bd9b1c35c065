//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every field has a default so partial files merge cleanly.

use acumen_domain::RubricWeights;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("missing oracle API key: set [oracle] api_key or the {0} environment variable")]
    MissingApiKey(&'static str),
}

/// Environment variable consulted when `[oracle] api_key` is absent.
pub const API_KEY_ENV: &str = "ACUMEN_API_KEY";

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Oracle endpoint settings
    pub oracle: FileOracleConfig,
    /// Interview loop settings
    pub assessment: FileAssessmentConfig,
    /// Transcript logging settings
    pub logging: FileLoggingConfig,
    /// Question catalog settings
    pub questions: FileQuestionsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOracleConfig {
    pub base_url: String,
    /// API key; falls back to `ACUMEN_API_KEY` when empty.
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for FileOracleConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
            temperature: 0.3,
            max_tokens: 2048,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssessmentConfig {
    pub max_questions: usize,
    pub target_duration_minutes: u64,
    pub min_score_threshold: f64,
    pub technical_weight: f64,
    pub depth_weight: f64,
    pub problem_solving_weight: f64,
    pub communication_weight: f64,
}

impl Default for FileAssessmentConfig {
    fn default() -> Self {
        let weights = RubricWeights::default();
        Self {
            max_questions: 15,
            target_duration_minutes: 25,
            min_score_threshold: 40.0,
            technical_weight: weights.technical,
            depth_weight: weights.depth,
            problem_solving_weight: weights.problem_solving,
            communication_weight: weights.communication,
        }
    }
}

impl FileAssessmentConfig {
    pub fn weights(&self) -> RubricWeights {
        RubricWeights {
            technical: self.technical_weight,
            depth: self.depth_weight,
            problem_solving: self.problem_solving_weight,
            communication: self.communication_weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Whether to write a JSONL transcript of each interview.
    pub transcript: bool,
    /// Directory for transcript files.
    pub transcript_dir: String,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            transcript: true,
            transcript_dir: "transcripts".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// Path to a TOML question catalog. Empty means the built-in Excel set.
    pub file: Option<String>,
}

impl FileConfig {
    /// Resolve the oracle API key from the file or the environment.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = &self.oracle.api_key
            && !key.is_empty()
        {
            return Ok(key.clone());
        }
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey(API_KEY_ENV)),
        }
    }

    /// Validate the configuration. Bad rubric weights or an empty question
    /// budget are fatal: the system refuses to start rather than mis-score.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.assessment
            .weights()
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if self.assessment.max_questions == 0 {
            return Err(ConfigError::Invalid(
                "assessment.max_questions must be at least 1".to_string(),
            ));
        }
        if self.oracle.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "oracle.base_url must not be empty".to_string(),
            ));
        }
        if self.oracle.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "oracle.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.assessment.max_questions, 15);
        assert!((config.assessment.weights().technical - 0.40).abs() < 1e-9);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[oracle]
model = "mixtral-8x7b-32768"
temperature = 0.5

[assessment]
max_questions = 10
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.oracle.model, "mixtral-8x7b-32768");
        assert!((config.oracle.temperature - 0.5).abs() < 1e-9);
        assert_eq!(config.assessment.max_questions, 10);
        // Unset sections keep their defaults
        assert_eq!(config.assessment.target_duration_minutes, 25);
        assert!(config.logging.transcript);
    }

    #[test]
    fn test_bad_weights_fail_validation() {
        let toml_str = r#"
[assessment]
technical_weight = 0.9
depth_weight = 0.9
problem_solving_weight = 0.0
communication_weight = 0.0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_question_budget_fails_validation() {
        let toml_str = "[assessment]\nmax_questions = 0\n";
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_err());
    }
}

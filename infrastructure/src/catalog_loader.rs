//! TOML question catalog loader.
//!
//! Loads a custom question set from a TOML file as an alternative to the
//! built-in Excel catalog. The file holds a flat `[[questions]]` array; tier
//! grouping happens in the domain when the catalog is built.

use acumen_domain::{QuestionCatalog, QuestionRecord};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("could not read question file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse question file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("question file {0} contains no questions")]
    Empty(String),
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    questions: Vec<QuestionRecord>,
}

/// Load a question catalog from a TOML file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<QuestionCatalog, CatalogLoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: display.clone(),
        source,
    })?;
    let file: CatalogFile = toml::from_str(&content).map_err(|source| CatalogLoadError::Parse {
        path: display.clone(),
        source,
    })?;

    QuestionCatalog::from_records(file.questions).map_err(|_| CatalogLoadError::Empty(display))
}

#[cfg(test)]
mod tests {
    use super::*;
    use acumen_domain::DifficultyTier;
    use std::collections::HashSet;

    #[test]
    fn test_load_catalog_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.toml");
        std::fs::write(
            &path,
            r#"
[[questions]]
id = "sql_001"
category = "Joins"
difficulty = "basic"
prompt = "What is the difference between an INNER JOIN and a LEFT JOIN?"
expected_points = ["inner keeps matches only", "left keeps all left rows"]
evaluation_criteria = "Understanding of join semantics"

[[questions]]
id = "sql_002"
category = "Indexing"
difficulty = "advanced"
prompt = "When would a covering index hurt write performance?"
"#,
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        let stats = catalog.stats();
        assert_eq!(stats.total_questions, 2);

        let used = HashSet::new();
        let q = catalog.question(DifficultyTier::Basic, None, &used).unwrap();
        assert_eq!(q.id, "sql_001");
        assert_eq!(q.expected_points.len(), 2);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            load_catalog(&path),
            Err(CatalogLoadError::Empty(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            load_catalog("/nonexistent/questions.toml"),
            Err(CatalogLoadError::Io { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[[questions]]\nid = 42\n").unwrap();
        assert!(matches!(
            load_catalog(&path),
            Err(CatalogLoadError::Parse { .. })
        ));
    }
}

//! Quiz-data file resolution.
//!
//! Quizzes reference pre-built JSON files by logical name. The name may be
//! percent-encoded and maps to `<decoded-name>.json` inside a designated
//! quiz-data directory.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::ConvertError;

/// A source of quiz-data arrays, keyed by logical file name.
///
/// Each call is independent; implementations hold no state across calls.
/// Failures are returned to the caller, which decides whether to tolerate
/// them (the lesson parser substitutes an empty array per file).
pub trait QuizDataSource {
    /// Loads the JSON array behind `logical_name`.
    fn load(&self, logical_name: &str) -> Result<Vec<Value>, ConvertError>;
}

/// Filesystem-backed [`QuizDataSource`] reading `<dir>/<decoded-name>.json`.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    /// Creates a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl QuizDataSource for JsonDirSource {
    fn load(&self, logical_name: &str) -> Result<Vec<Value>, ConvertError> {
        let decoded =
            urlencoding::decode(logical_name).map_err(|source| ConvertError::Decode {
                source,
                name: logical_name.to_string(),
            })?;
        let path = self.dir.join(format!("{decoded}.json"));
        if !path.is_file() {
            return Err(ConvertError::ResourceNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&content).map_err(|e| {
            ConvertError::json_parse(e, format!("quiz data file '{}'", path.display()))
        })?;

        match value {
            Value::Array(items) => Ok(items),
            _ => Err(ConvertError::InvalidJsonStructure(format!(
                "quiz data file '{}' must hold a top-level array",
                path.display()
            ))),
        }
    }
}

//! Explicit pipeline configuration.
//!
//! Both pipelines take their directories as values rather than reading an
//! ambient "build directory", so callers (and tests) can point them anywhere.

use std::path::PathBuf;

/// Configuration for the word-timing pipeline.
#[derive(Debug, Clone)]
pub struct WordPipelineConfig {
    /// Directory holding word-timing text documents.
    pub input_dir: PathBuf,
    /// Directory receiving one `output_<stem>.json` per input document.
    pub output_dir: PathBuf,
}

impl WordPipelineConfig {
    /// Creates a configuration from the two directory paths.
    #[must_use]
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

/// Configuration for the lesson-hierarchy pipeline.
#[derive(Debug, Clone)]
pub struct LessonPipelineConfig {
    /// The lesson hierarchy YAML document.
    pub lessons_file: PathBuf,
    /// Directory holding the pre-built quiz-data JSON files.
    pub quiz_data_dir: PathBuf,
    /// Directory receiving the single `output_<stem>.json`.
    pub output_dir: PathBuf,
}

impl LessonPipelineConfig {
    /// Creates a configuration from the lessons file and the two directories.
    #[must_use]
    pub fn new(
        lessons_file: impl Into<PathBuf>,
        quiz_data_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            lessons_file: lessons_file.into(),
            quiz_data_dir: quiz_data_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

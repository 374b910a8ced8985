//! Batch orchestration for both pipelines.
//!
//! A run prepares the output directory, converts its inputs and reports a
//! [`PipelineSummary`]. Failures local to one document are recorded in the
//! summary and logged, and do not stop sibling documents; failures that make
//! the whole run meaningless (missing input directory or lessons file) are
//! returned as errors.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{LessonPipelineConfig, WordPipelineConfig};
use crate::error::ConvertError;
use crate::generators::json_generator::{generate_lesson_json, generate_word_json};
use crate::parsers::lesson_parser::parse_lessons;
use crate::parsers::timing_parser::parse_word_timings;
use crate::resolver::JsonDirSource;

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineSummary {
    /// Number of documents converted and written.
    pub converted: usize,
    /// Documents that failed and were skipped.
    pub failures: Vec<DocumentFailure>,
}

/// One skipped document and the reason it failed.
#[derive(Debug, Clone)]
pub struct DocumentFailure {
    /// Path of the failed input document.
    pub source: String,
    /// Rendered error.
    pub error: String,
}

/// Creates the output directory if absent, then removes stale regular files
/// in it. Subdirectories are left alone.
pub fn prepare_output_dir(dir: &Path) -> Result<(), ConvertError> {
    fs::create_dir_all(dir)?;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_text(path: &Path, content: &str) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Converts every word-timing document in the input directory.
///
/// One bad document is logged and recorded in the summary; the rest of the
/// batch is still converted.
pub fn run_word_pipeline(config: &WordPipelineConfig) -> Result<PipelineSummary, ConvertError> {
    if !config.input_dir.is_dir() {
        return Err(ConvertError::ResourceNotFound(
            config.input_dir.display().to_string(),
        ));
    }
    prepare_output_dir(&config.output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(&config.input_dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    // Directory order is not guaranteed; sort for stable logs. Ids are
    // assigned per document, so processing order never affects content.
    inputs.sort();

    let mut summary = PipelineSummary::default();
    for path in inputs {
        match convert_word_document(&path, &config.output_dir) {
            Ok(output) => {
                tracing::info!("converted '{}' -> '{}'", path.display(), output.display());
                summary.converted += 1;
            }
            Err(e) => {
                tracing::error!("skipping '{}': {e}", path.display());
                summary.failures.push(DocumentFailure {
                    source: path.display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }
    Ok(summary)
}

fn convert_word_document(path: &Path, output_dir: &Path) -> Result<PathBuf, ConvertError> {
    let content = fs::read_to_string(path)?;
    let document = parse_word_timings(&content)?;
    for warning in &document.warnings {
        tracing::warn!("'{}': {warning}", path.display());
    }

    let json = generate_word_json(&document.entries)?;
    let output_path = output_dir.join(output_file_name(path));
    write_text(&output_path, &json)?;
    Ok(output_path)
}

/// Converts the lesson hierarchy document into a single JSON file.
pub fn run_lesson_pipeline(config: &LessonPipelineConfig) -> Result<PipelineSummary, ConvertError> {
    if !config.lessons_file.is_file() {
        return Err(ConvertError::ResourceNotFound(
            config.lessons_file.display().to_string(),
        ));
    }
    prepare_output_dir(&config.output_dir)?;

    let content = fs::read_to_string(&config.lessons_file)?;
    let source = JsonDirSource::new(&config.quiz_data_dir);
    let parsed = parse_lessons(&content, &source)?;
    for warning in &parsed.warnings {
        tracing::warn!("'{}': {warning}", config.lessons_file.display());
    }

    let json = generate_lesson_json(&parsed.lessons)?;
    let output_path = config.output_dir.join(output_file_name(&config.lessons_file));
    write_text(&output_path, &json)?;
    tracing::info!(
        "converted '{}' -> '{}'",
        config.lessons_file.display(),
        output_path.display()
    );

    Ok(PipelineSummary {
        converted: 1,
        failures: Vec::new(),
    })
}

/// `output_<stem>.json`, whatever the input extension was.
fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .unwrap_or_else(|| input.as_os_str())
        .to_string_lossy();
    format!("output_{stem}.json")
}

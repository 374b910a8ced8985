//! JSON output generation for both pipelines.
//!
//! Key order inside each object is fixed by struct field order; pretty
//! printing is a presentation choice, not part of the contract.

use crate::error::ConvertError;
use crate::types::{Lesson, WordEntry};

/// Serializes word-timing records into the word-JSON array schema.
pub fn generate_word_json(entries: &[WordEntry]) -> Result<String, ConvertError> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| ConvertError::json_parse(e, "word entries".to_string()))
}

/// Serializes the lesson tree into the nested lesson-JSON array schema.
pub fn generate_lesson_json(lessons: &[Lesson]) -> Result<String, ConvertError> {
    serde_json::to_string_pretty(lessons)
        .map_err(|e| ConvertError::json_parse(e, "lesson hierarchy".to_string()))
}

//! Shared data types for both conversion pipelines.

use serde::Serialize;

/// One word-timing record, carrying the audio file it belongs to.
///
/// Serialized field order is the output schema's key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    /// 1-based position within the source document, stringified.
    pub id: String,
    /// The word being taught.
    pub word: String,
    /// Optional translation; empty string when the source line had none.
    pub translation: String,
    /// Audio file name from the document's first line, replicated onto every record.
    pub audio_file: String,
    /// Playback start, in seconds.
    pub play_from: f64,
    /// Playback end, in seconds.
    pub play_to: f64,
}

/// A parsed word-timing document.
#[derive(Debug, Clone, Default)]
pub struct ParsedWordDocument {
    /// Records in source line order.
    pub entries: Vec<WordEntry>,
    /// Non-fatal oddities found while parsing (e.g. reversed timings).
    pub warnings: Vec<String>,
}

/// A top-level grouping of quizzes in the lesson hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    /// 1-based position within the document, stringified.
    pub id: String,
    /// Lesson name (the YAML mapping key).
    pub name: String,
    /// Quizzes in document order. The key spelling is the established
    /// client schema and must not be corrected.
    pub quizes: Vec<Quiz>,
}

/// A named unit referencing pre-built quiz-data files.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// 1-based position within its lesson, stringified. Restarts at 1 per lesson.
    pub id: String,
    /// The owning lesson's id.
    pub parent_id: String,
    /// Quiz name (the YAML mapping key).
    pub name: String,
    /// Concatenated contents of all referenced quiz-data files, in listed order.
    pub data: Vec<serde_json::Value>,
}

/// A parsed lesson hierarchy document.
#[derive(Debug, Clone, Default)]
pub struct ParsedLessons {
    /// Lessons in document order.
    pub lessons: Vec<Lesson>,
    /// One warning per quiz-data file that failed to resolve and was
    /// substituted with an empty array.
    pub warnings: Vec<String>,
}

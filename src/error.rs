use std::io;

use thiserror::Error;

/// Errors that can occur while converting authoring-time content.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// File read/write or directory enumeration failure.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A required top-level input resource is missing.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),
    /// A word-timing document without even an audio file line.
    #[error("word-timing document is empty (missing audio file line)")]
    EmptyDocument,
    /// A data line that does not match the `word playFrom playTo [translation]` grammar.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based line number in the source document.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The lesson YAML document does not match the expected structure.
    #[error("malformed lesson hierarchy: {0}")]
    MalformedHierarchy(String),
    /// YAML syntax error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parsing error with location context.
    #[error("failed to parse JSON content of {context}: {source}")]
    JsonParse {
        /// Underlying `serde_json` error.
        #[source]
        source: serde_json::Error,
        /// Where the bad JSON came from.
        context: String,
    },
    /// JSON parsed but did not have the expected shape.
    #[error("invalid JSON structure: {0}")]
    InvalidJsonStructure(String),
    /// A percent-encoded logical file name that does not decode to UTF-8.
    #[error("failed to decode logical name '{name}': {source}")]
    Decode {
        /// Underlying decoding error.
        #[source]
        source: std::string::FromUtf8Error,
        /// The raw logical name as it appeared in the document.
        name: String,
    },
}

impl ConvertError {
    /// Creates a `JsonParse` error with context.
    #[must_use]
    pub fn json_parse(source: serde_json::Error, context: String) -> Self {
        Self::JsonParse { source, context }
    }
}

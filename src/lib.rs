//! # Lessonpack: Authoring-Format to JSON Converters for Lesson Content
//!
//! This crate turns the two authoring-time formats of a language-learning
//! content package into the normalized JSON the client application consumes:
//!
//! - **Word-timing documents**: a text file whose first line is an audio file
//!   name, followed by `word playFrom playTo [translation]` records. Parsed by
//!   [`parse_word_timings`] and serialized by [`generate_word_json`] into a
//!   flat JSON array.
//! - **Lesson hierarchy documents**: a nested YAML file mapping lesson names
//!   to quizzes, where each quiz references pre-built quiz-data JSON files.
//!   Parsed by [`parse_lessons`] (resolving references through a
//!   [`QuizDataSource`]) and serialized by [`generate_lesson_json`] into a
//!   nested JSON array.
//!
//! Batch conversion over directories, including output-directory preparation,
//! lives in the [`pipeline`] module and backs the two CLI binaries.
//!
//! ## Example
//!
//! ```rust
//! use lessonpack::{generate_word_json, parse_word_timings};
//!
//! fn main() -> Result<(), lessonpack::ConvertError> {
//!     let document = parse_word_timings("sound.mp3\ncat 1.0 2.5 кот\ndog 3.0 4.0")?;
//!     assert_eq!(document.entries.len(), 2);
//!     assert_eq!(document.entries[1].translation, "");
//!
//!     let json = generate_word_json(&document.entries)?;
//!     assert!(json.contains("\"audioFile\": \"sound.mp3\""));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod parsers;
pub mod pipeline;
pub mod resolver;
pub mod types;

pub use config::{LessonPipelineConfig, WordPipelineConfig};
pub use error::ConvertError;
pub use generators::json_generator::{generate_lesson_json, generate_word_json};
pub use parsers::lesson_parser::parse_lessons;
pub use parsers::timing_parser::parse_word_timings;
pub use resolver::{JsonDirSource, QuizDataSource};
pub use types::{Lesson, ParsedLessons, ParsedWordDocument, Quiz, WordEntry};

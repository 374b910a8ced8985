//! Parser for the lesson hierarchy YAML format.
//!
//! The document is a mapping from lesson name to a sequence of single-key
//! quiz mappings, each holding a `files` sequence of logical quiz-data file
//! names:
//!
//! ```yaml
//! Animals:
//!   - Basic words:
//!       files:
//!         - animals_basic
//!         - animals_extra
//! ```
//!
//! The structure is validated explicitly so that a misshapen document fails
//! with a located [`ConvertError::MalformedHierarchy`] instead of an opaque
//! type error.

use serde_yaml::Value;

use crate::error::ConvertError;
use crate::resolver::QuizDataSource;
use crate::types::{Lesson, ParsedLessons, Quiz};

/// Parses the lesson hierarchy document, resolving quiz-data references
/// through `source`.
///
/// Lesson ids are dense and 1-based in document order; quiz ids restart at 1
/// inside each lesson. A quiz-data file that fails to resolve is replaced by
/// an empty array and reported through the warnings channel; it never fails
/// the whole document.
pub fn parse_lessons(
    content: &str,
    source: &dyn QuizDataSource,
) -> Result<ParsedLessons, ConvertError> {
    let root: Value = serde_yaml::from_str(content)?;
    let mapping = root.as_mapping().ok_or_else(|| {
        ConvertError::MalformedHierarchy(
            "top level must be a mapping of lesson names".to_string(),
        )
    })?;

    let mut parsed = ParsedLessons::default();

    for (lesson_index, (key, value)) in mapping.iter().enumerate() {
        let lesson_id = (lesson_index + 1).to_string();
        let lesson_name = key.as_str().ok_or_else(|| {
            ConvertError::MalformedHierarchy(format!(
                "lesson name at position {} is not a string",
                lesson_index + 1
            ))
        })?;
        let quiz_entries = value.as_sequence().ok_or_else(|| {
            ConvertError::MalformedHierarchy(format!(
                "lesson '{lesson_name}' must hold a sequence of quizzes"
            ))
        })?;

        let mut quizes = Vec::with_capacity(quiz_entries.len());
        for (quiz_index, entry) in quiz_entries.iter().enumerate() {
            let (quiz_name, quiz_body) = single_entry(entry, quiz_index, lesson_name)?;
            let files = files_list(quiz_body, quiz_name, lesson_name)?;

            let mut data = Vec::new();
            for file_name in files {
                match source.load(file_name) {
                    Ok(items) => data.extend(items),
                    Err(e) => {
                        let warning = format!(
                            "quiz '{quiz_name}' in lesson '{lesson_name}': \
                             missing quiz data for '{file_name}', substituting an empty array ({e})"
                        );
                        tracing::warn!("{warning}");
                        parsed.warnings.push(warning);
                    }
                }
            }

            quizes.push(Quiz {
                id: (quiz_index + 1).to_string(),
                parent_id: lesson_id.clone(),
                name: quiz_name.to_string(),
                data,
            });
        }

        parsed.lessons.push(Lesson {
            id: lesson_id,
            name: lesson_name.to_string(),
            quizes,
        });
    }

    Ok(parsed)
}

/// Extracts the single `name: body` pair of a quiz entry.
fn single_entry<'a>(
    entry: &'a Value,
    quiz_index: usize,
    lesson_name: &str,
) -> Result<(&'a str, &'a Value), ConvertError> {
    let mapping = entry.as_mapping().ok_or_else(|| {
        ConvertError::MalformedHierarchy(format!(
            "quiz entry {} in lesson '{lesson_name}' is not a mapping",
            quiz_index + 1
        ))
    })?;
    let mut pairs = mapping.iter();
    let (key, body) = match (pairs.next(), pairs.next()) {
        (Some(pair), None) => pair,
        _ => {
            return Err(ConvertError::MalformedHierarchy(format!(
                "quiz entry {} in lesson '{lesson_name}' must have exactly one key, found {}",
                quiz_index + 1,
                mapping.len()
            )));
        }
    };
    let name = key.as_str().ok_or_else(|| {
        ConvertError::MalformedHierarchy(format!(
            "quiz name at entry {} in lesson '{lesson_name}' is not a string",
            quiz_index + 1
        ))
    })?;
    Ok((name, body))
}

/// Extracts the `files` sequence of a quiz body as string names.
fn files_list<'a>(
    body: &'a Value,
    quiz_name: &str,
    lesson_name: &str,
) -> Result<Vec<&'a str>, ConvertError> {
    let files = body
        .as_mapping()
        .and_then(|m| m.get("files"))
        .and_then(Value::as_sequence)
        .ok_or_else(|| {
            ConvertError::MalformedHierarchy(format!(
                "quiz '{quiz_name}' in lesson '{lesson_name}' is missing a 'files' sequence"
            ))
        })?;

    files
        .iter()
        .map(|item| {
            item.as_str().ok_or_else(|| {
                ConvertError::MalformedHierarchy(format!(
                    "quiz '{quiz_name}' in lesson '{lesson_name}' has a non-string file name"
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    /// In-memory quiz-data source for parser tests.
    struct FakeSource {
        files: HashMap<String, Vec<serde_json::Value>>,
    }

    impl FakeSource {
        fn new(files: &[(&str, Vec<serde_json::Value>)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(name, data)| ((*name).to_string(), data.clone()))
                    .collect(),
            }
        }
    }

    impl QuizDataSource for FakeSource {
        fn load(&self, logical_name: &str) -> Result<Vec<serde_json::Value>, ConvertError> {
            self.files
                .get(logical_name)
                .cloned()
                .ok_or_else(|| ConvertError::ResourceNotFound(logical_name.to_string()))
        }
    }

    const SINGLE_LESSON: &str = "\
L1:
  - Q1:
      files:
        - f1
        - f2
";

    #[test]
    fn test_single_lesson_concatenates_files_in_order() {
        let source = FakeSource::new(&[
            ("f1", vec![json!({"n": 1}), json!({"n": 2})]),
            ("f2", vec![json!({"n": 3})]),
        ]);
        let parsed = parse_lessons(SINGLE_LESSON, &source).unwrap();

        assert_eq!(parsed.lessons.len(), 1);
        let lesson = &parsed.lessons[0];
        assert_eq!(lesson.id, "1");
        assert_eq!(lesson.name, "L1");
        assert_eq!(lesson.quizes.len(), 1);

        let quiz = &lesson.quizes[0];
        assert_eq!(quiz.id, "1");
        assert_eq!(quiz.parent_id, "1");
        assert_eq!(quiz.name, "Q1");
        assert_eq!(
            quiz.data,
            vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]
        );
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn test_missing_file_substitutes_empty_array_and_warns() {
        let source = FakeSource::new(&[("f1", vec![json!("a")])]);
        let parsed = parse_lessons(SINGLE_LESSON, &source).unwrap();

        let quiz = &parsed.lessons[0].quizes[0];
        assert_eq!(quiz.data, vec![json!("a")]);
        assert_eq!(parsed.warnings.len(), 1);
        assert!(parsed.warnings[0].contains("f2"));
    }

    #[test]
    fn test_quiz_ids_restart_per_lesson() {
        let content = "\
First:
  - A:
      files: [f1]
  - B:
      files: [f1]
Second:
  - C:
      files: [f1]
";
        let source = FakeSource::new(&[("f1", vec![])]);
        let parsed = parse_lessons(content, &source).unwrap();

        assert_eq!(parsed.lessons[0].id, "1");
        assert_eq!(parsed.lessons[1].id, "2");
        assert_eq!(parsed.lessons[0].quizes[0].id, "1");
        assert_eq!(parsed.lessons[0].quizes[1].id, "2");
        assert_eq!(parsed.lessons[1].quizes[0].id, "1");
        assert_eq!(parsed.lessons[1].quizes[0].parent_id, "2");
    }

    #[test]
    fn test_document_order_is_preserved() {
        let content = "\
Zebra:
  - Z:
      files: [f1]
Apple:
  - A:
      files: [f1]
";
        let source = FakeSource::new(&[("f1", vec![])]);
        let parsed = parse_lessons(content, &source).unwrap();
        let names: Vec<&str> = parsed.lessons.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Apple"]);
    }

    #[test]
    fn test_lesson_body_must_be_a_sequence() {
        let source = FakeSource::new(&[]);
        let result = parse_lessons("L1: not-a-sequence", &source);
        assert!(matches!(
            result,
            Err(ConvertError::MalformedHierarchy(msg)) if msg.contains("L1")
        ));
    }

    #[test]
    fn test_quiz_entry_must_have_exactly_one_key() {
        let content = "\
L1:
  - Q1:
      files: [f1]
    Q2:
      files: [f1]
";
        let source = FakeSource::new(&[("f1", vec![])]);
        assert!(matches!(
            parse_lessons(content, &source),
            Err(ConvertError::MalformedHierarchy(_))
        ));
    }

    #[test]
    fn test_missing_files_key_is_malformed() {
        let content = "\
L1:
  - Q1:
      items: [f1]
";
        let source = FakeSource::new(&[]);
        assert!(matches!(
            parse_lessons(content, &source),
            Err(ConvertError::MalformedHierarchy(msg)) if msg.contains("files")
        ));
    }

    #[test]
    fn test_non_string_file_name_is_malformed() {
        let content = "\
L1:
  - Q1:
      files:
        - 42
";
        let source = FakeSource::new(&[]);
        assert!(matches!(
            parse_lessons(content, &source),
            Err(ConvertError::MalformedHierarchy(_))
        ));
    }
}

//! Parser for the word-timing text format.
//!
//! The first line of a document is the audio file name. Every following
//! non-blank line is one record of whitespace-separated fields:
//! `word playFrom playTo [translation]`. Blank lines are skipped and do
//! not consume an id.

use crate::error::ConvertError;
use crate::types::{ParsedWordDocument, WordEntry};

/// Parses one word-timing document into an ordered record sequence.
///
/// Ids are dense, 1-based and assigned in line order. Reversed or negative
/// timings are accepted but reported through the warnings channel.
pub fn parse_word_timings(content: &str) -> Result<ParsedWordDocument, ConvertError> {
    let mut lines = content.lines().enumerate();
    let (_, audio_line) = lines.next().ok_or(ConvertError::EmptyDocument)?;
    let audio_file = audio_line.trim();

    let mut document = ParsedWordDocument::default();

    for (line_index, raw_line) in lines {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let line_num = line_index + 1;
        let id = document.entries.len() + 1;
        let entry = parse_record_line(line, line_num, id, audio_file)?;

        if entry.play_from > entry.play_to {
            document.warnings.push(format!(
                "line {line_num}: playFrom ({}) is after playTo ({})",
                entry.play_from, entry.play_to
            ));
        }
        if entry.play_from < 0.0 || entry.play_to < 0.0 {
            document
                .warnings
                .push(format!("line {line_num}: negative timing"));
        }

        document.entries.push(entry);
    }

    Ok(document)
}

fn parse_record_line(
    line: &str,
    line_num: usize,
    id: usize,
    audio_file: &str,
) -> Result<WordEntry, ConvertError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(ConvertError::MalformedRecord {
            line: line_num,
            reason: format!("expected at least 3 fields, found {}", fields.len()),
        });
    }

    let play_from = parse_seconds(fields[1], line_num, "playFrom")?;
    let play_to = parse_seconds(fields[2], line_num, "playTo")?;

    Ok(WordEntry {
        id: id.to_string(),
        word: fields[0].to_string(),
        translation: fields.get(3).copied().unwrap_or_default().to_string(),
        audio_file: audio_file.to_string(),
        play_from,
        play_to,
    })
}

fn parse_seconds(field: &str, line_num: usize, what: &str) -> Result<f64, ConvertError> {
    field
        .parse::<f64>()
        .map_err(|_| ConvertError::MalformedRecord {
            line: line_num,
            reason: format!("{what} is not a decimal number: '{field}'"),
        })
}

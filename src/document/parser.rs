//! Line-oriented parser for the two-section document format.
//!
//! The grammar is permissive by design: blank lines and `#` comments are
//! skipped, and any line that matches neither a `key: value` pair nor a
//! `- item` list entry is silently ignored rather than rejected. Parsing is
//! a small state machine with two modes, scanning and in-list, rather than
//! a general-purpose YAML parser.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{Document, Section, Value};
use crate::error::{Error, Result};

static KEY_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+):\s*(.*)$").expect("Invalid regex pattern"));
static LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s*(.+)$").expect("Invalid regex pattern"));

/// Parse raw file text into a [`Document`].
///
/// The text is split on lines consisting solely of `---` (surrounding
/// whitespace allowed); empty segments are dropped and exactly two must
/// remain, config first and output second.
pub fn parse_document(text: &str) -> Result<Document> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim() == "---" {
            segments.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    segments.push(current);

    let segments: Vec<&str> = segments
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() != 2 {
        return Err(Error::MalformedDocument {
            found: segments.len(),
        });
    }

    Ok(Document {
        config: parse_section(segments[0]),
        output: parse_section(segments[1]),
    })
}

enum Mode {
    Scanning,
    InList(String),
}

/// Parse one delimited segment into an ordered [`Section`].
pub fn parse_section(segment: &str) -> Section {
    let mut section = Section::new();
    let mut mode = Mode::Scanning;

    for line in segment.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Mode::InList(key) = &mode {
            if let Some(caps) = LIST_ITEM.captures(line) {
                let item = strip_quotes(caps[1].trim());
                if let Some(Value::List(items)) = section.get_mut(key) {
                    items.push(item);
                }
                continue;
            }
        }

        if let Some(caps) = KEY_VALUE.captures(line) {
            let key = caps[1].to_string();
            let raw = caps[2].trim();
            if raw.is_empty() {
                // Provisionally a list; stays empty if no items follow.
                section.insert(key.clone(), Value::List(Vec::new()));
                mode = Mode::InList(key);
            } else {
                section.insert(key, parse_scalar(raw));
                mode = Mode::Scanning;
            }
        }
        // Anything else is skipped without leaving list mode.
    }

    section
}

fn parse_scalar(raw: &str) -> Value {
    let unquoted = strip_quotes(raw);
    if !unquoted.is_empty() && unquoted.chars().all(|c| c.is_ascii_digit()) {
        match unquoted.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Str(unquoted),
        }
    } else {
        Value::Str(unquoted)
    }
}

/// Strip one layer of matching double or single quotes.
fn strip_quotes(s: &str) -> String {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\'')))
    {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

//! Front matter extraction and reading-time estimation.
//!
//! Articles start with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: "Kafka in Pratica 1"
//! tags: ["kafka", "event-driven"]
//! description: First line of a long value
//!   continues here
//! ---
//! Body text...
//! ```
//!
//! ## Parsing rules
//!
//! - The block must open on the very first line and is closed by the next
//!   `---` line that is followed by a newline. No block means an empty
//!   [`FrontMatter`], never an error.
//! - A line shaped like `key: value` (key made of ASCII letters, digits and
//!   `_`) starts a field. Any other line is appended to the current field,
//!   newline-joined, which is how multi-line scalars work. Lines before the
//!   first key are ignored. Finished values are trimmed.
//! - A later duplicate key replaces the earlier one.
//! - A value that starts with `[` and ends with `]` is a list and must parse
//!   as a JSON array of strings. A malformed list is an error: silently
//!   keeping the raw text would hide broken tags from the category resolver.
//!
//! This is deliberately not a YAML parser. Nested mappings, block sequences
//! and anchors are out of scope; covers only need a handful of flat keys.

use std::collections::BTreeMap;
use thiserror::Error;

/// Words per minute used by [`estimate_reading_time`].
pub const WORDS_PER_MINUTE: usize = 200;

const FENCE: &str = "---";

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("malformed list in front matter key '{key}': {value}")]
    MalformedList {
        key: String,
        value: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single front matter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// The scalar text, or `None` for lists.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    /// The value as a sequence. A scalar counts as a one-item list, so
    /// `tags: kafka` behaves like `tags: ["kafka"]`.
    pub fn items(&self) -> Vec<&str> {
        match self {
            FieldValue::Text(text) if text.is_empty() => Vec::new(),
            FieldValue::Text(text) => vec![text.as_str()],
            FieldValue::List(items) => items.iter().map(String::as_str).collect(),
        }
    }
}

/// Parsed front matter: key → value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: BTreeMap<String, FieldValue>,
}

impl FrontMatter {
    /// Extract the front matter block from the start of `content`.
    pub fn parse(content: &str) -> Result<Self, FrontMatterError> {
        let Some(block) = find_block(content) else {
            return Ok(Self::default());
        };

        let mut raw: BTreeMap<String, String> = BTreeMap::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in block {
            if let Some((key, value)) = split_key_line(line) {
                if let Some((key, lines)) = current.take() {
                    raw.insert(key, lines.join("\n").trim().to_string());
                }
                current = Some((key.to_string(), vec![value]));
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line);
            }
        }
        if let Some((key, lines)) = current {
            raw.insert(key, lines.join("\n").trim().to_string());
        }

        let mut fields = BTreeMap::new();
        for (key, value) in raw {
            let parsed = if value.starts_with('[') && value.ends_with(']') {
                match serde_json::from_str::<Vec<String>>(&value) {
                    Ok(items) => FieldValue::List(items),
                    Err(source) => {
                        return Err(FrontMatterError::MalformedList { key, value, source });
                    }
                }
            } else {
                FieldValue::Text(value)
            };
            fields.insert(key, parsed);
        }

        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Scalar value for `key`. Lists return `None`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// Items of a list-valued key, in document order. Missing keys are empty.
    pub fn list(&self, key: &str) -> Vec<&str> {
        self.get(key).map(FieldValue::items).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl FromIterator<(String, FieldValue)> for FrontMatter {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Lines between the opening and closing fences, with `\r` stripped.
///
/// `None` when the content does not open with a fence or the fence is never
/// closed.
fn find_block(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.split_inclusive('\n');
    let opening = lines.next()?;
    if !is_fence(opening) || !opening.ends_with('\n') {
        return None;
    }

    let mut block = Vec::new();
    for line in lines {
        // The closing fence only counts when a newline follows it.
        if line.ends_with('\n') && is_fence(line) {
            return Some(block);
        }
        block.push(line.trim_end_matches('\n').trim_end_matches('\r'));
    }
    None
}

fn is_fence(line: &str) -> bool {
    line.strip_prefix(FENCE)
        .is_some_and(|rest| rest.trim().is_empty())
}

/// Split `key: value` into its parts when the line starts a new field.
fn split_key_line(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let is_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    is_key.then(|| (key, value.trim_start()))
}

/// Strip one surrounding quote character from each end of a title, then trim.
///
/// Front matter titles are often quoted (`title: "Foo: Bar"`) and the quotes
/// must not reach the cover.
pub fn clean_title(raw: &str) -> String {
    let is_quote = |c: char| c == '"' || c == '\'';
    let without_open = raw.strip_prefix(is_quote).unwrap_or(raw);
    let without_close = without_open.strip_suffix(is_quote).unwrap_or(without_open);
    without_close.trim().to_string()
}

/// Estimated reading time in whole minutes, rounded up, never below 1.
///
/// Counts whitespace-separated tokens of the full text, front matter
/// included.
pub fn estimate_reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

//! Free-text series tags.
//!
//! Leaders describe a series with single words or `"quoted strings"` so
//! prospects can find it. This module turns the raw input into a sorted,
//! de-duplicated list of tag names.

use std::collections::BTreeSet;

use crate::error::CoreError;

/// Maximum length of a single tag name.
pub const MAX_TAG_LENGTH: usize = 100;

/// Parse a tag string into individual tag names.
///
/// - Double-quoted groups become one tag each (`"push hands"`).
/// - Outside of quotes, if any comma appears the remaining text is split on
///   commas; otherwise it is split on whitespace.
/// - An unterminated quote is treated as running to the end of the input.
/// - Results are trimmed, empty entries dropped, de-duplicated and sorted.
///
/// ```
/// use taichi_core::tags::parse_tags;
///
/// assert_eq!(parse_tags("qigong beginner"), vec!["beginner", "qigong"]);
/// assert_eq!(parse_tags("\"push hands\" sword"), vec!["push hands", "sword"]);
/// assert_eq!(parse_tags("long form, fan"), vec!["fan", "long form"]);
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut words: BTreeSet<String> = BTreeSet::new();
    let mut loose: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut saw_loose_comma = false;
    let mut chars = input.chars();

    while let Some(c) = chars.next() {
        if c == '"' {
            if !buffer.is_empty() {
                loose.push(std::mem::take(&mut buffer));
            }
            let mut closed = false;
            for q in chars.by_ref() {
                if q == '"' {
                    closed = true;
                    break;
                }
                buffer.push(q);
            }
            if !closed && buffer.contains(',') {
                saw_loose_comma = true;
            }
            push_word(&mut words, &buffer);
            buffer.clear();
        } else {
            if c == ',' {
                saw_loose_comma = true;
            }
            buffer.push(c);
        }
    }
    if !buffer.is_empty() {
        loose.push(buffer);
    }

    for chunk in &loose {
        if saw_loose_comma {
            chunk.split(',').for_each(|piece| push_word(&mut words, piece));
        } else {
            chunk
                .split_whitespace()
                .for_each(|piece| push_word(&mut words, piece));
        }
    }

    words.into_iter().collect()
}

fn push_word(words: &mut BTreeSet<String>, raw: &str) {
    let word = raw.trim();
    if !word.is_empty() {
        words.insert(word.chars().take(MAX_TAG_LENGTH).collect());
    }
}

/// Normalize a tag name for case-insensitive uniqueness.
pub fn normalize_tag_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Render tag names back into an editable tag string, quoting any name that
/// contains a comma or whitespace.
///
/// ```
/// use taichi_core::tags::{edit_string, parse_tags};
///
/// let names = vec!["push hands".to_string(), "sword".to_string()];
/// assert_eq!(edit_string(&names), "\"push hands\", sword");
/// assert_eq!(parse_tags(&edit_string(&names)), names);
/// ```
pub fn edit_string(names: &[String]) -> String {
    names
        .iter()
        .map(|name| {
            if name.contains(',') || name.contains(char::is_whitespace) {
                format!("\"{name}\"")
            } else {
                name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reject tag names longer than [`MAX_TAG_LENGTH`] characters or containing
/// a NUL character, which Postgres text columns cannot store.
pub fn validate_tags(names: &[String]) -> Result<(), CoreError> {
    for name in names {
        if name.chars().count() > MAX_TAG_LENGTH {
            return Err(CoreError::Validation(format!(
                "Tag '{name}' exceeds {MAX_TAG_LENGTH} characters"
            )));
        }
        if name.contains('\0') {
            return Err(CoreError::Validation(format!(
                "Tag '{}' contains a NUL character",
                name.escape_debug()
            )));
        }
    }
    Ok(())
}

//! Slug derivation for titled entities (locations, resources, styles, series).
//!
//! Every titled entity stores a URL-safe `slug` next to its human-readable
//! `title`. The slug is derived from the title on insert, and refreshed on
//! update only when the title changed and the derived value differs from the
//! stored one. Collisions are left to the database unique constraint.

use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// Maximum title length for styles.
pub const STYLE_TITLE_MAX: usize = 90;

/// Maximum title length for series.
pub const SERIES_TITLE_MAX: usize = 90;

/// Maximum title length for resources.
pub const RESOURCE_TITLE_MAX: usize = 90;

/// Maximum title length for locations.
pub const LOCATION_TITLE_MAX: usize = 120;

/// Derive a URL-safe slug from a title.
///
/// The title is NFKD-decomposed and reduced to ASCII (so `"Café"` becomes
/// `"cafe"`), lowercased, stripped of everything except alphanumerics,
/// underscores, whitespace and hyphens, then runs of whitespace/hyphens are
/// collapsed into a single hyphen. Leading and trailing hyphens and
/// underscores are trimmed.
///
/// # Examples
///
/// ```
/// use taichi_core::slug::slugify;
///
/// assert_eq!(slugify("Yang Style"), "yang-style");
/// assert_eq!(slugify("Yang-Style!!"), "yang-style");
/// assert_eq!(slugify("  Chen   Style -- Lao Jia "), "chen-style-lao-jia");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.nfkd().filter(char::is_ascii) {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() || c == '_' {
            if pending_hyphen {
                slug.push('-');
                pending_hyphen = false;
            }
            slug.push(c);
        } else if c == '-' || is_separator_space(c) {
            pending_hyphen = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// ASCII whitespace including vertical tab and the `\x1c`..`\x1f`
/// information separators.
fn is_separator_space(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, '\x0b' | '\x1c'..='\x1f')
}

/// Decide whether a title change must rewrite the stored slug.
///
/// Returns `Some(new_slug)` when `new_title` differs from `current_title`
/// and its derived slug differs from `current_slug`. Returns `None` when the
/// slug column must be left untouched.
///
/// ```
/// use taichi_core::slug::refresh_slug;
///
/// assert_eq!(
///     refresh_slug("Yang Style", "yang-style", "Wu Style"),
///     Some("wu-style".to_string())
/// );
/// assert_eq!(refresh_slug("Yang Style", "yang-style", "Yang-Style!!"), None);
/// ```
pub fn refresh_slug(current_title: &str, current_slug: &str, new_title: &str) -> Option<String> {
    if current_title == new_title {
        return None;
    }
    let derived = slugify(new_title);
    (derived != current_slug).then_some(derived)
}

/// Validate a title: non-blank, at most `max_len` characters, and producing
/// a non-empty slug.
pub fn validate_title(title: &str, max_len: usize) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "Title must be at most {max_len} characters"
        )));
    }
    if slugify(title).is_empty() {
        return Err(CoreError::Validation(format!(
            "Title '{title}' does not produce a usable slug"
        )));
    }
    Ok(())
}

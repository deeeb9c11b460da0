//! Choice vocabularies stored as TEXT columns.
//!
//! Each vocabulary has string constants, a `VALID_*` list mirrored by a
//! CHECK constraint in the migrations, and a validator returning
//! [`CoreError::Validation`] for unknown values.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Visibility (resources and series)
// ---------------------------------------------------------------------------

/// Shown to guests.
pub const VISIBILITY_PUBLIC: &str = "public";
/// Hidden from guests (members only).
pub const VISIBILITY_PRIVATE: &str = "private";

pub const VALID_VISIBILITIES: &[&str] = &[VISIBILITY_PUBLIC, VISIBILITY_PRIVATE];

/// Default for new resources and series.
pub const DEFAULT_VISIBILITY: &str = VISIBILITY_PRIVATE;

// ---------------------------------------------------------------------------
// Membership policy (series)
// ---------------------------------------------------------------------------

/// Open to all.
pub const MEMBERSHIP_OPEN: &str = "open";
/// Leader must approve a request to join.
pub const MEMBERSHIP_INVITE: &str = "invite";
/// Leader must add members.
pub const MEMBERSHIP_CLOSED: &str = "closed";

pub const VALID_MEMBERSHIPS: &[&str] = &[MEMBERSHIP_OPEN, MEMBERSHIP_INVITE, MEMBERSHIP_CLOSED];

pub const DEFAULT_MEMBERSHIP: &str = MEMBERSHIP_CLOSED;

// ---------------------------------------------------------------------------
// Resource link types
// ---------------------------------------------------------------------------

pub const LINK_WEBSITE: &str = "website";
pub const LINK_BOOK: &str = "book";
pub const LINK_SLIDESHOW: &str = "slideshow";
pub const LINK_VIDEO: &str = "video";
pub const LINK_PHOTO: &str = "photo";
pub const LINK_STORE: &str = "store";
pub const LINK_TOURNAMENT: &str = "tournament";
/// Resource does not have a link.
pub const LINK_NONE: &str = "none";

pub const VALID_LINK_TYPES: &[&str] = &[
    LINK_WEBSITE,
    LINK_BOOK,
    LINK_SLIDESHOW,
    LINK_VIDEO,
    LINK_PHOTO,
    LINK_STORE,
    LINK_TOURNAMENT,
    LINK_NONE,
];

pub const DEFAULT_LINK_TYPE: &str = LINK_NONE;

// ---------------------------------------------------------------------------
// Location defaults
// ---------------------------------------------------------------------------

/// Default two-letter state code for new locations.
pub const DEFAULT_STATE: &str = "TX";

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_choice(field: &str, value: &str, valid: &[&str]) -> Result<(), CoreError> {
    if valid.contains(&value) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Invalid {field} '{value}'. Valid values: {}",
        valid.join(", ")
    )))
}

/// Validate a visibility value against the known set.
pub fn validate_visibility(value: &str) -> Result<(), CoreError> {
    validate_choice("visibility", value, VALID_VISIBILITIES)
}

/// Validate a membership policy against the known set.
pub fn validate_membership(value: &str) -> Result<(), CoreError> {
    validate_choice("membership", value, VALID_MEMBERSHIPS)
}

/// Validate a resource link type against the known set.
pub fn validate_link_type(value: &str) -> Result<(), CoreError> {
    validate_choice("link_type", value, VALID_LINK_TYPES)
}

/// Validate a two-letter state code (ASCII letters only).
pub fn validate_state(value: &str) -> Result<(), CoreError> {
    if value.len() == 2 && value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "State '{value}' must be a two-letter code"
    )))
}

/// Validate a zipcode: empty, or exactly five ASCII digits.
pub fn validate_zipcode(value: &str) -> Result<(), CoreError> {
    if value.is_empty() || (value.len() == 5 && value.chars().all(|c| c.is_ascii_digit())) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Zipcode '{value}' must be five digits"
    )))
}

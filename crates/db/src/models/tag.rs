//! Series tag models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taichi_core::types::{DbId, Timestamp};

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    /// Normalized (trimmed, lowercased) name; unique.
    pub name: String,
    /// Name as last typed by a user.
    pub display_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight tag info returned when listing tags for a series.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TagInfo {
    pub id: DbId,
    pub name: String,
    pub display_name: String,
}

/// DTO for replacing the tag set of a series.
#[derive(Debug, Clone, Deserialize)]
pub struct SetSeriesTags {
    /// Free-text tag string: single words or `"quoted strings"`.
    pub tags: String,
}

//! Resource entity model and DTOs, plus the style/series link rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taichi_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::deserialize_some;

/// A row from the `resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Resource {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub visibility: String,
    pub link_type: String,
    pub link: String,
    pub creator_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Admin list row. `creator` is the creator's name, `None` when unset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResourceSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub visibility: String,
    pub link_type: String,
    pub link: String,
    pub creator: Option<String>,
    /// `"{link_type}:{title}"`, filled in by the repository.
    #[sqlx(skip)]
    pub label: String,
}

/// DTO for creating a new resource. The slug is derived from `title`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResource {
    #[validate(length(min = 1, max = 90))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"private"` if omitted.
    pub visibility: Option<String>,
    /// Defaults to `"none"` if omitted.
    pub link_type: Option<String>,
    #[validate(url)]
    pub link: Option<String>,
    pub creator_id: Option<DbId>,
}

/// DTO for updating an existing resource. All fields are optional;
/// `creator_id: null` clears the creator.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateResource {
    #[validate(length(min = 1, max = 90))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub visibility: Option<String>,
    pub link_type: Option<String>,
    #[validate(url)]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub creator_id: Option<Option<DbId>>,
}

/// A row from the `style_resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StyleResource {
    pub id: DbId,
    pub style_id: DbId,
    pub resource_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `series_resources` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeriesResource {
    pub id: DbId,
    pub series_id: DbId,
    pub resource_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for linking an existing resource to a style or series.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkResource {
    pub resource_id: DbId,
}

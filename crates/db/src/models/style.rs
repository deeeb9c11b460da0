//! Style entity model, DTOs and the public detail projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taichi_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::deserialize_some;
use crate::models::member::MemberDetail;
use crate::models::resource::Resource;
use crate::models::series::Series;

/// A row from the `styles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Style {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    /// Reference page for the style.
    pub wikipedia: String,
    pub owner_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Admin list row: title and slug.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StyleSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
}

/// DTO for creating a new style. The slug is derived from `title`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStyle {
    #[validate(length(min = 1, max = 90))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub wikipedia: Option<String>,
    pub owner_id: Option<DbId>,
}

/// DTO for updating an existing style. All fields are optional;
/// `owner_id: null` clears the owner.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStyle {
    #[validate(length(min = 1, max = 90))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub wikipedia: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub owner_id: Option<Option<DbId>>,
}

/// A series of a style with its members and resources attached.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesWithRelations {
    #[serde(flatten)]
    pub series: Series,
    pub members: Vec<MemberDetail>,
    pub resources: Vec<Resource>,
}

/// Public style detail: the style, its linked resources, and each series
/// with that series' members and resources.
#[derive(Debug, Clone, Serialize)]
pub struct StyleDetail {
    #[serde(flatten)]
    pub style: Style,
    pub resources: Vec<Resource>,
    pub series: Vec<SeriesWithRelations>,
}

/// Admin style view: the style with its series inline.
#[derive(Debug, Clone, Serialize)]
pub struct StyleWithSeries {
    #[serde(flatten)]
    pub style: Style,
    pub series: Vec<Series>,
}

//! Series entity model, DTOs and the public detail projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taichi_core::roster::Roster;
use taichi_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::member::MemberDetail;
use crate::models::resource::Resource;
use crate::models::tag::TagInfo;

/// A row from the `series` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Series {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub style_id: DbId,
    pub description: String,
    pub visibility: String,
    pub membership: String,
    /// Whether the leader may take roll at meetings.
    pub take_roll: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Admin list row: owning style, title and slug.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeriesSummary {
    pub id: DbId,
    pub style_id: DbId,
    pub style: String,
    pub title: String,
    pub slug: String,
    pub visibility: String,
    /// `"{style}: {title}"`, filled in by the repository.
    #[sqlx(skip)]
    pub label: String,
}

/// DTO for creating a series under a style. The slug is derived from
/// `title`; `style_id` comes from the route.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSeries {
    #[validate(length(min = 1, max = 90))]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"private"` if omitted.
    pub visibility: Option<String>,
    /// Defaults to `"closed"` if omitted.
    pub membership: Option<String>,
    pub take_roll: Option<bool>,
    /// Free-text tag string (`word "quoted words"`), applied in the insert's
    /// transaction.
    pub tags: Option<String>,
}

/// DTO for updating an existing series. All fields are optional.
///
/// `style_id` moves the series to another style.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSeries {
    #[validate(length(min = 1, max = 90))]
    pub title: Option<String>,
    pub style_id: Option<DbId>,
    pub description: Option<String>,
    pub visibility: Option<String>,
    pub membership: Option<String>,
    pub take_roll: Option<bool>,
}

/// Query parameters for `GET /styles/series`.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesSearchParams {
    pub tag: String,
}

/// Public series detail: the series with its roster, resources and tags.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesDetail {
    #[serde(flatten)]
    pub series: Series,
    #[serde(flatten)]
    pub roster: Roster<MemberDetail>,
    pub resources: Vec<Resource>,
    pub tags: Vec<TagInfo>,
}

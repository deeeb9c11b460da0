//! Series tag editor under `/admin/series/{series_id}/tags`.
//!
//! Tags are read and written as one free-text string, the same form a leader
//! types: single words or `"quoted strings"`, optionally comma-separated.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use taichi_core::error::CoreError;
use taichi_core::tags::{edit_string, parse_tags, validate_tags};
use taichi_core::types::DbId;
use taichi_db::models::tag::{SetSeriesTags, TagInfo};
use taichi_db::repositories::{SeriesRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Tag set of a series: the editable string plus the tag rows.
#[derive(Debug, Serialize)]
pub struct SeriesTags {
    pub tags: String,
    pub items: Vec<TagInfo>,
}

impl SeriesTags {
    fn from_items(items: Vec<TagInfo>) -> Self {
        let names: Vec<String> = items.iter().map(|t| t.display_name.clone()).collect();
        Self {
            tags: edit_string(&names),
            items,
        }
    }
}

async fn ensure_series(state: &AppState, series_id: DbId) -> AppResult<()> {
    SeriesRepo::find_by_id(&state.pool, series_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: series_id,
        }))?;
    Ok(())
}

/// GET /api/v1/admin/series/{series_id}/tags
pub async fn get_series_tags(
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
) -> AppResult<Json<SeriesTags>> {
    ensure_series(&state, series_id).await?;
    let items = TagRepo::list_for_series(&state.pool, series_id).await?;
    Ok(Json(SeriesTags::from_items(items)))
}

/// PUT /api/v1/admin/series/{series_id}/tags
///
/// Replaces the whole tag set; an empty string clears it.
pub async fn set_series_tags(
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
    Json(input): Json<SetSeriesTags>,
) -> AppResult<Json<SeriesTags>> {
    ensure_series(&state, series_id).await?;
    let names = parse_tags(&input.tags);
    validate_tags(&names)?;

    let items = TagRepo::replace_for_series(&state.pool, series_id, &names).await?;
    tracing::info!(series_id, count = items.len(), "Series tags replaced");
    Ok(Json(SeriesTags::from_items(items)))
}

//! Handlers for the `/admin/series` resource.
//!
//! Members, resource links and tags of a series are managed under
//! `/admin/series/{series_id}/...`; see [`member`](super::member) and
//! [`tags`](super::tags).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taichi_core::choices::{validate_membership, validate_visibility};
use taichi_core::error::CoreError;
use taichi_core::slug::{validate_title, SERIES_TITLE_MAX};
use taichi_core::tags::{parse_tags, validate_tags};
use taichi_core::types::DbId;
use taichi_db::models::resource::{LinkResource, Resource, SeriesResource};
use taichi_db::models::series::{CreateSeries, Series, SeriesSummary, UpdateSeries};
use taichi_db::repositories::{ResourceRepo, SeriesRepo, SeriesResourceRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Series",
        id,
    })
}

fn check_fields(
    title: Option<&str>,
    visibility: Option<&str>,
    membership: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(title) = title {
        validate_title(title, SERIES_TITLE_MAX)?;
    }
    if let Some(visibility) = visibility {
        validate_visibility(visibility)?;
    }
    if let Some(membership) = membership {
        validate_membership(membership)?;
    }
    Ok(())
}

/// Validate and insert a series under `style_id` together with any tags
/// given in `input.tags`.
pub(crate) async fn create_in_style(
    state: &AppState,
    style_id: DbId,
    input: &CreateSeries,
) -> AppResult<Series> {
    input.validate()?;
    check_fields(
        Some(input.title.as_str()),
        input.visibility.as_deref(),
        input.membership.as_deref(),
    )?;
    let tags = input.tags.as_deref().map(parse_tags).unwrap_or_default();
    validate_tags(&tags)?;

    let series = SeriesRepo::create(&state.pool, style_id, input).await?;
    tracing::info!(series_id = series.id, style_id, slug = %series.slug, "Series created");
    Ok(series)
}

/// Request body for creating a series outside the style's inline editor.
#[derive(Debug, Deserialize)]
pub struct CreateSeriesRequest {
    pub style_id: DbId,
    #[serde(flatten)]
    pub series: CreateSeries,
}

/// POST /api/v1/admin/series
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSeriesRequest>,
) -> AppResult<(StatusCode, Json<Series>)> {
    let series = create_in_style(&state, input.style_id, &input.series).await?;
    Ok((StatusCode::CREATED, Json(series)))
}

/// GET /api/v1/admin/series
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SeriesSummary>>>> {
    let series = SeriesRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: series }))
}

/// GET /api/v1/admin/series/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Series>> {
    let series = SeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(series))
}

/// PUT /api/v1/admin/series/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSeries>,
) -> AppResult<Json<Series>> {
    input.validate()?;
    check_fields(
        input.title.as_deref(),
        input.visibility.as_deref(),
        input.membership.as_deref(),
    )?;

    let series = SeriesRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(series))
}

/// DELETE /api/v1/admin/series/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SeriesRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(series_id = id, "Series deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Resource links
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/series/{series_id}/resources
pub async fn list_resources(
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Resource>>>> {
    let resources = ResourceRepo::list_for_series(&state.pool, series_id).await?;
    Ok(Json(DataResponse { data: resources }))
}

/// POST /api/v1/admin/series/{series_id}/resources
pub async fn link_resource(
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
    Json(input): Json<LinkResource>,
) -> AppResult<(StatusCode, Json<SeriesResource>)> {
    let link = SeriesResourceRepo::link(&state.pool, series_id, input.resource_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// DELETE /api/v1/admin/series/{series_id}/resources/{resource_id}
pub async fn unlink_resource(
    State(state): State<AppState>,
    Path((series_id, resource_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = SeriesResourceRepo::unlink(&state.pool, series_id, resource_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "SeriesResource",
            id: resource_id,
        }))
    }
}

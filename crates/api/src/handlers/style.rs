//! Handlers for the `/admin/styles` resource.
//!
//! A style's series are edited inline under `/admin/styles/{style_id}/series`
//! and its resource links under `/admin/styles/{style_id}/resources`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taichi_core::error::CoreError;
use taichi_core::slug::{validate_title, STYLE_TITLE_MAX};
use taichi_core::types::DbId;
use taichi_db::models::resource::{LinkResource, Resource, StyleResource};
use taichi_db::models::series::{CreateSeries, Series};
use taichi_db::models::style::{CreateStyle, Style, StyleSummary, StyleWithSeries, UpdateStyle};
use taichi_db::repositories::{ResourceRepo, SeriesRepo, StyleRepo, StyleResourceRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::series::create_in_style;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Style", id })
}

/// POST /api/v1/admin/styles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStyle>,
) -> AppResult<(StatusCode, Json<Style>)> {
    input.validate()?;
    validate_title(&input.title, STYLE_TITLE_MAX)?;

    let style = StyleRepo::create(&state.pool, &input).await?;
    tracing::info!(style_id = style.id, slug = %style.slug, "Style created");
    Ok((StatusCode::CREATED, Json(style)))
}

/// GET /api/v1/admin/styles
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StyleSummary>>>> {
    let styles = StyleRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: styles }))
}

/// GET /api/v1/admin/styles/{id}
///
/// Returns the style together with its inline series.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<StyleWithSeries>> {
    let style = StyleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let series = SeriesRepo::list_by_style(&state.pool, id).await?;
    Ok(Json(StyleWithSeries { style, series }))
}

/// PUT /api/v1/admin/styles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStyle>,
) -> AppResult<Json<Style>> {
    input.validate()?;
    if let Some(title) = &input.title {
        validate_title(title, STYLE_TITLE_MAX)?;
    }

    let style = StyleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(style))
}

/// DELETE /api/v1/admin/styles/{id}
///
/// Removes every series of the style along with their members, meetings and
/// attendance.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = StyleRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(style_id = id, "Style deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Inline series
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/styles/{style_id}/series
pub async fn list_series(
    State(state): State<AppState>,
    Path(style_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Series>>>> {
    StyleRepo::find_by_id(&state.pool, style_id)
        .await?
        .ok_or_else(|| not_found(style_id))?;
    let series = SeriesRepo::list_by_style(&state.pool, style_id).await?;
    Ok(Json(DataResponse { data: series }))
}

/// POST /api/v1/admin/styles/{style_id}/series
pub async fn create_series(
    State(state): State<AppState>,
    Path(style_id): Path<DbId>,
    Json(input): Json<CreateSeries>,
) -> AppResult<(StatusCode, Json<Series>)> {
    StyleRepo::find_by_id(&state.pool, style_id)
        .await?
        .ok_or_else(|| not_found(style_id))?;
    let series = create_in_style(&state, style_id, &input).await?;
    Ok((StatusCode::CREATED, Json(series)))
}

// ---------------------------------------------------------------------------
// Resource links
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/styles/{style_id}/resources
pub async fn list_resources(
    State(state): State<AppState>,
    Path(style_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Resource>>>> {
    let resources = ResourceRepo::list_for_style(&state.pool, style_id).await?;
    Ok(Json(DataResponse { data: resources }))
}

/// POST /api/v1/admin/styles/{style_id}/resources
///
/// Linking the same resource twice yields 409.
pub async fn link_resource(
    State(state): State<AppState>,
    Path(style_id): Path<DbId>,
    Json(input): Json<LinkResource>,
) -> AppResult<(StatusCode, Json<StyleResource>)> {
    let link = StyleResourceRepo::link(&state.pool, style_id, input.resource_id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

/// DELETE /api/v1/admin/styles/{style_id}/resources/{resource_id}
pub async fn unlink_resource(
    State(state): State<AppState>,
    Path((style_id, resource_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let removed = StyleResourceRepo::unlink(&state.pool, style_id, resource_id).await?;
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "StyleResource",
            id: resource_id,
        }))
    }
}

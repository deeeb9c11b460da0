//! Handlers for the `/admin/resources` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taichi_core::choices::{validate_link_type, validate_visibility};
use taichi_core::error::CoreError;
use taichi_core::slug::{validate_title, RESOURCE_TITLE_MAX};
use taichi_core::types::DbId;
use taichi_db::models::resource::{CreateResource, Resource, ResourceSummary, UpdateResource};
use taichi_db::repositories::ResourceRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn check_fields(
    title: Option<&str>,
    visibility: Option<&str>,
    link_type: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(title) = title {
        validate_title(title, RESOURCE_TITLE_MAX)?;
    }
    if let Some(visibility) = visibility {
        validate_visibility(visibility)?;
    }
    if let Some(link_type) = link_type {
        validate_link_type(link_type)?;
    }
    Ok(())
}

/// POST /api/v1/admin/resources
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    input.validate()?;
    check_fields(
        Some(input.title.as_str()),
        input.visibility.as_deref(),
        input.link_type.as_deref(),
    )?;

    let resource = ResourceRepo::create(&state.pool, &input).await?;
    tracing::info!(resource_id = resource.id, slug = %resource.slug, "Resource created");
    Ok((StatusCode::CREATED, Json(resource)))
}

/// GET /api/v1/admin/resources
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ResourceSummary>>>> {
    let resources = ResourceRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: resources }))
}

/// GET /api/v1/admin/resources/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Resource>> {
    let resource = ResourceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(resource))
}

/// PUT /api/v1/admin/resources/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateResource>,
) -> AppResult<Json<Resource>> {
    input.validate()?;
    check_fields(
        input.title.as_deref(),
        input.visibility.as_deref(),
        input.link_type.as_deref(),
    )?;

    let resource = ResourceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))?;
    Ok(Json(resource))
}

/// DELETE /api/v1/admin/resources/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ResourceRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(resource_id = id, "Resource deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Resource",
            id,
        }))
    }
}

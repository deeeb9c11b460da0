//! Handlers for the `/admin/locations` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taichi_core::choices::{validate_state, validate_zipcode};
use taichi_core::error::CoreError;
use taichi_core::slug::{validate_title, LOCATION_TITLE_MAX};
use taichi_core::types::DbId;
use taichi_db::models::location::{CreateLocation, Location, LocationSummary, UpdateLocation};
use taichi_db::repositories::LocationRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Field checks the derive cannot express: title slug, state and zipcode.
fn check_fields(
    title: Option<&str>,
    state: Option<&str>,
    zipcode: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(title) = title {
        validate_title(title, LOCATION_TITLE_MAX)?;
    }
    if let Some(state) = state {
        validate_state(state)?;
    }
    if let Some(zipcode) = zipcode {
        validate_zipcode(zipcode)?;
    }
    Ok(())
}

/// POST /api/v1/admin/locations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLocation>,
) -> AppResult<(StatusCode, Json<Location>)> {
    input.validate()?;
    check_fields(
        Some(input.title.as_str()),
        input.state.as_deref(),
        input.zipcode.as_deref(),
    )?;

    let location = LocationRepo::create(&state.pool, &input).await?;
    tracing::info!(location_id = location.id, slug = %location.slug, "Location created");
    Ok((StatusCode::CREATED, Json(location)))
}

/// GET /api/v1/admin/locations
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<LocationSummary>>>> {
    let locations = LocationRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: locations }))
}

/// GET /api/v1/admin/locations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Location>> {
    let location = LocationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}

/// PUT /api/v1/admin/locations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLocation>,
) -> AppResult<Json<Location>> {
    input.validate()?;
    check_fields(
        input.title.as_deref(),
        input.state.as_deref(),
        input.zipcode.as_deref(),
    )?;

    let location = LocationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))?;
    Ok(Json(location))
}

/// DELETE /api/v1/admin/locations/{id}
///
/// Meetings held there become virtual.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = LocationRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(location_id = id, "Location deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Location",
            id,
        }))
    }
}

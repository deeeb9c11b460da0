//! Handlers for the `/admin/meetings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taichi_core::error::CoreError;
use taichi_core::types::DbId;
use taichi_db::models::meeting::{CreateMeeting, Meeting, MeetingSummary, UpdateMeeting};
use taichi_db::repositories::MeetingRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Meeting",
        id,
    })
}

/// POST /api/v1/admin/meetings
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMeeting>,
) -> AppResult<(StatusCode, Json<Meeting>)> {
    input.validate()?;
    let meeting = MeetingRepo::create(&state.pool, &input).await?;
    tracing::info!(
        meeting_id = meeting.id,
        series_id = meeting.series_id,
        day = %meeting.day,
        "Meeting scheduled"
    );
    Ok((StatusCode::CREATED, Json(meeting)))
}

/// GET /api/v1/admin/meetings
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<MeetingSummary>>>> {
    let meetings = MeetingRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: meetings }))
}

/// GET /api/v1/admin/meetings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Meeting>> {
    let meeting = MeetingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(meeting))
}

/// PUT /api/v1/admin/meetings/{id}
///
/// `location_id: null` makes the meeting virtual; `leader_id: null` clears
/// the leader.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMeeting>,
) -> AppResult<Json<Meeting>> {
    input.validate()?;
    let meeting = MeetingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(meeting))
}

/// DELETE /api/v1/admin/meetings/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MeetingRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(meeting_id = id, "Meeting deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

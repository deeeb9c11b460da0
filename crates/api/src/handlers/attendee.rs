//! Attendance roll under `/admin/meetings/{meeting_id}/attendees`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taichi_core::error::CoreError;
use taichi_core::types::DbId;
use taichi_db::models::meeting::{AttendeeDetail, CreateAttendee, MeetingAttendee, UpdateAttendee};
use taichi_db::repositories::{AttendeeRepo, MeetingRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "MeetingAttendee",
        id,
    })
}

/// GET /api/v1/admin/meetings/{meeting_id}/attendees
pub async fn list_by_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<AttendeeDetail>>>> {
    MeetingRepo::find_by_id(&state.pool, meeting_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id: meeting_id,
        }))?;
    let roll = AttendeeRepo::list_by_meeting(&state.pool, meeting_id).await?;
    Ok(Json(DataResponse { data: roll }))
}

/// POST /api/v1/admin/meetings/{meeting_id}/attendees
///
/// Recording the same member twice yields 409.
pub async fn create(
    State(state): State<AppState>,
    Path(meeting_id): Path<DbId>,
    Json(input): Json<CreateAttendee>,
) -> AppResult<(StatusCode, Json<MeetingAttendee>)> {
    let record = AttendeeRepo::create(&state.pool, meeting_id, &input).await?;
    tracing::debug!(meeting_id, attendee_id = record.attendee_id, "Attendance recorded");
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/v1/admin/meetings/{meeting_id}/attendees/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((meeting_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateAttendee>,
) -> AppResult<Json<MeetingAttendee>> {
    let record = AttendeeRepo::update(&state.pool, meeting_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

/// DELETE /api/v1/admin/meetings/{meeting_id}/attendees/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((meeting_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if AttendeeRepo::delete(&state.pool, meeting_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

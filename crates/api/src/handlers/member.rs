//! Inline member editor under `/admin/series/{series_id}/members`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use taichi_core::error::CoreError;
use taichi_core::types::DbId;
use taichi_db::models::member::{CreateMember, Member, MemberDetail, UpdateMember};
use taichi_db::repositories::{MemberRepo, SeriesRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Member",
        id,
    })
}

/// GET /api/v1/admin/series/{series_id}/members
pub async fn list_by_series(
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MemberDetail>>>> {
    SeriesRepo::find_by_id(&state.pool, series_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: series_id,
        }))?;
    let members = MemberRepo::list_by_series(&state.pool, series_id).await?;
    Ok(Json(DataResponse { data: members }))
}

/// POST /api/v1/admin/series/{series_id}/members
///
/// Enrolling the same user twice yields 409.
pub async fn create(
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
    Json(input): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let member = MemberRepo::create(&state.pool, series_id, &input).await?;
    tracing::info!(
        member_id = member.id,
        series_id,
        user_id = member.member_id,
        leader = member.leader,
        "Member enrolled"
    );
    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /api/v1/admin/series/{series_id}/members/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((series_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateMember>,
) -> AppResult<Json<Member>> {
    let member = MemberRepo::update(&state.pool, series_id, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(member))
}

/// DELETE /api/v1/admin/series/{series_id}/members/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((series_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let deleted = MemberRepo::delete(&state.pool, series_id, id).await?;
    if deleted {
        tracing::info!(member_id = id, series_id, "Member removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

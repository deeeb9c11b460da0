//! Public, read-only views of styles, series and meetings.
//!
//! Detail views are assembled from several repository calls: the entity,
//! then its related resources, rosters, tags and attendance.

use axum::extract::{Path, Query, State};
use axum::Json;
use taichi_core::error::CoreError;
use taichi_core::roster::partition_roster;
use taichi_core::types::DbId;
use taichi_db::models::meeting::MeetingDetail;
use taichi_db::models::series::{Series, SeriesDetail, SeriesSearchParams};
use taichi_db::models::style::{SeriesWithRelations, Style, StyleDetail};
use taichi_db::repositories::{
    AttendeeRepo, LocationRepo, MeetingRepo, MemberRepo, ResourceRepo, SeriesRepo, StyleRepo,
    TagRepo,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/styles
pub async fn list_styles(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Style>>>> {
    let styles = StyleRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: styles }))
}

/// GET /api/v1/styles/{slug}
///
/// The style with its linked resources and every series of the style, each
/// carrying its members and resources.
pub async fn style_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<StyleDetail>> {
    let style = StyleRepo::find_by_slug(&state.pool, &slug).await?;
    let style = style.ok_or(AppError::Core(CoreError::SlugNotFound {
        entity: "Style",
        slug,
    }))?;

    let resources = ResourceRepo::list_for_style(&state.pool, style.id).await?;

    let mut series = Vec::new();
    for s in SeriesRepo::list_by_style(&state.pool, style.id).await? {
        let members = MemberRepo::list_by_series(&state.pool, s.id).await?;
        let resources = ResourceRepo::list_for_series(&state.pool, s.id).await?;
        series.push(SeriesWithRelations {
            series: s,
            members,
            resources,
        });
    }

    Ok(Json(StyleDetail {
        style,
        resources,
        series,
    }))
}

/// GET /api/v1/styles/series/{slug}
pub async fn series_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<SeriesDetail>> {
    let series = SeriesRepo::find_by_slug(&state.pool, &slug).await?;
    let series = series.ok_or(AppError::Core(CoreError::SlugNotFound {
        entity: "Series",
        slug,
    }))?;

    let members = MemberRepo::list_by_series(&state.pool, series.id).await?;
    let resources = ResourceRepo::list_for_series(&state.pool, series.id).await?;
    let tags = TagRepo::list_for_series(&state.pool, series.id).await?;

    Ok(Json(SeriesDetail {
        series,
        roster: partition_roster(members),
        resources,
        tags,
    }))
}

/// GET /api/v1/styles/meeting/{id}
///
/// Location and leader are `null` when the meeting has none.
pub async fn meeting_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MeetingDetail>> {
    let meeting = MeetingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Meeting",
            id,
        }))?;

    let series = SeriesRepo::find_by_id(&state.pool, meeting.series_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Meeting {id} references missing series {}",
                meeting.series_id
            )))
        })?;

    let location = match meeting.location_id {
        Some(location_id) => LocationRepo::find_by_id(&state.pool, location_id).await?,
        None => None,
    };
    let leader = match meeting.leader_id {
        Some(leader_id) => MemberRepo::find_detail_by_id(&state.pool, leader_id).await?,
        None => None,
    };

    let members = MemberRepo::list_by_series(&state.pool, series.id).await?;
    let roll = AttendeeRepo::list_by_meeting(&state.pool, meeting.id).await?;

    Ok(Json(MeetingDetail {
        meeting,
        series,
        location,
        leader,
        roster: partition_roster(members),
        roll,
    }))
}

/// GET /api/v1/styles/series?tag=...
///
/// Public series carrying the tag; matching ignores case.
pub async fn search_series(
    State(state): State<AppState>,
    Query(params): Query<SeriesSearchParams>,
) -> AppResult<Json<DataResponse<Vec<Series>>>> {
    let series = SeriesRepo::list_public_by_tag(&state.pool, &params.tag).await?;
    Ok(Json(DataResponse { data: series }))
}

pub mod admin;
pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /styles                                          public catalog (read-only)
/// /styles/{slug}                                   style detail
/// /styles/series?tag=                              tag search
/// /styles/series/{slug}                            series detail
/// /styles/meeting/{id}                             meeting detail
///
/// /admin/locations[/{id}]                          CRUD
/// /admin/resources[/{id}]                          CRUD
/// /admin/styles[/{id}]                             CRUD
/// /admin/styles/{style_id}/series                  inline series
/// /admin/styles/{style_id}/resources[/{rid}]       resource links
/// /admin/series[/{id}]                             CRUD
/// /admin/series/{series_id}/members[/{id}]         inline members
/// /admin/series/{series_id}/resources[/{rid}]      resource links
/// /admin/series/{series_id}/tags                   tag editor
/// /admin/meetings[/{id}]                           CRUD
/// /admin/meetings/{meeting_id}/attendees[/{id}]    attendance roll
/// /admin/users[/{id}]                              identity records
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/styles", catalog::router())
        .nest("/admin", admin::router())
}

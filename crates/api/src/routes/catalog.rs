//! Route definitions for the public catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/styles`.
///
/// ```text
/// GET /                    -> list_styles
/// GET /series?tag=         -> search_series
/// GET /series/{slug}       -> series_detail
/// GET /meeting/{id}        -> meeting_detail
/// GET /{slug}              -> style_detail
/// ```
///
/// The static `series` and `meeting` segments take precedence over `{slug}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_styles))
        .route("/series", get(catalog::search_series))
        .route("/series/{slug}", get(catalog::series_detail))
        .route("/meeting/{id}", get(catalog::meeting_detail))
        .route("/{slug}", get(catalog::style_detail))
}

//! Route definitions for the administrative CRUD surface.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{
    attendee, location, meeting, member, resource, series, style, tags, user,
};
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/locations", location_routes())
        .nest("/resources", resource_routes())
        .nest("/styles", style_routes())
        .nest("/series", series_routes())
        .nest("/meetings", meeting_routes())
        .nest("/users", user_routes())
}

/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(location::list).post(location::create))
        .route(
            "/{id}",
            get(location::get_by_id)
                .put(location::update)
                .delete(location::delete),
        )
}

fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(resource::list).post(resource::create))
        .route(
            "/{id}",
            get(resource::get_by_id)
                .put(resource::update)
                .delete(resource::delete),
        )
}

/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id (with inline series)
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
///
/// GET    /{id}/series                         -> list_series
/// POST   /{id}/series                         -> create_series
///
/// GET    /{id}/resources                      -> list_resources
/// POST   /{id}/resources                      -> link_resource
/// DELETE /{id}/resources/{resource_id}        -> unlink_resource
/// ```
fn style_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(style::list).post(style::create))
        .route(
            "/{id}",
            get(style::get_by_id).put(style::update).delete(style::delete),
        )
        .route(
            "/{id}/series",
            get(style::list_series).post(style::create_series),
        )
        .route(
            "/{id}/resources",
            get(style::list_resources).post(style::link_resource),
        )
        .route(
            "/{id}/resources/{resource_id}",
            delete(style::unlink_resource),
        )
}

/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
///
/// GET    /{id}/members                        -> member::list_by_series
/// POST   /{id}/members                        -> member::create
/// PUT    /{id}/members/{member_id}            -> member::update
/// DELETE /{id}/members/{member_id}            -> member::delete
///
/// GET    /{id}/resources                      -> list_resources
/// POST   /{id}/resources                      -> link_resource
/// DELETE /{id}/resources/{resource_id}        -> unlink_resource
///
/// GET    /{id}/tags                           -> tags::get_series_tags
/// PUT    /{id}/tags                           -> tags::set_series_tags
/// ```
fn series_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(series::list).post(series::create))
        .route(
            "/{id}",
            get(series::get_by_id)
                .put(series::update)
                .delete(series::delete),
        )
        .route(
            "/{id}/members",
            get(member::list_by_series).post(member::create),
        )
        .route(
            "/{id}/members/{member_id}",
            put(member::update).delete(member::delete),
        )
        .route(
            "/{id}/resources",
            get(series::list_resources).post(series::link_resource),
        )
        .route(
            "/{id}/resources/{resource_id}",
            delete(series::unlink_resource),
        )
        .route(
            "/{id}/tags",
            get(tags::get_series_tags).put(tags::set_series_tags),
        )
}

/// ```text
/// GET    /                                    -> list
/// POST   /                                    -> create
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
///
/// GET    /{id}/attendees                      -> attendee::list_by_meeting
/// POST   /{id}/attendees                      -> attendee::create
/// PUT    /{id}/attendees/{attendee_id}        -> attendee::update
/// DELETE /{id}/attendees/{attendee_id}        -> attendee::delete
/// ```
fn meeting_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(meeting::list).post(meeting::create))
        .route(
            "/{id}",
            get(meeting::get_by_id)
                .put(meeting::update)
                .delete(meeting::delete),
        )
        .route(
            "/{id}/attendees",
            get(attendee::list_by_meeting).post(attendee::create),
        )
        .route(
            "/{id}/attendees/{attendee_id}",
            put(attendee::update).delete(attendee::delete),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::create))
        .route("/{id}", get(user::get_by_id).delete(user::delete))
}

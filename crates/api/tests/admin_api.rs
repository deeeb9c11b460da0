//! HTTP-level tests for the administrative CRUD surface under `/api/v1/admin`.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn create_style(pool: &PgPool, title: &str) -> i64 {
    create(pool, "/api/v1/admin/styles", json!({"title": title})).await
}

async fn create_user(pool: &PgPool, name: &str) -> i64 {
    create(
        pool,
        "/api/v1/admin/users",
        json!({"name": name, "email": format!("{}@example.com", name.to_lowercase())}),
    )
    .await
}

/// Style "Yang Style" with series "Sunday Form", one member and one meeting
/// with that member on the roll. Returns (style, series, member, meeting).
async fn seed_hierarchy(pool: &PgPool) -> (i64, i64, i64, i64) {
    let style_id = create_style(pool, "Yang Style").await;
    let series_id = create(
        pool,
        &format!("/api/v1/admin/styles/{style_id}/series"),
        json!({"title": "Sunday Form"}),
    )
    .await;
    let user_id = create_user(pool, "Ann").await;
    let member_id = create(
        pool,
        &format!("/api/v1/admin/series/{series_id}/members"),
        json!({"member_id": user_id, "leader": true}),
    )
    .await;
    let meeting_id = create(
        pool,
        "/api/v1/admin/meetings",
        json!({
            "series_id": series_id,
            "day": "2026-03-09",
            "start": "09:00:00",
            "length": 60,
            "leader_id": member_id
        }),
    )
    .await;
    create(
        pool,
        &format!("/api/v1/admin/meetings/{meeting_id}/attendees"),
        json!({"attendee_id": member_id}),
    )
    .await;
    (style_id, series_id, member_id, meeting_id)
}

// ---------------------------------------------------------------------------
// Slugs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_style_derives_slug(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/admin/styles",
        json!({"title": "Yang Style"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["slug"], "yang-style");
    assert_eq!(json["owner_id"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_refreshes_slug_only_when_it_changes(pool: PgPool) {
    let id = create_style(&pool, "Yang Style").await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/styles/{id}"),
        json!({"title": "Yang-Style!!"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Yang-Style!!");
    assert_eq!(json["slug"], "yang-style");

    let response = put_json(
        build_test_app(pool),
        &format!("/api/v1/admin/styles/{id}"),
        json!({"title": "Chen Style"}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["slug"], "chen-style");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slug_collision_returns_409(pool: PgPool) {
    create_style(&pool, "Yang Style").await;

    // Different title, same slug.
    let response = post_json(
        build_test_app(pool),
        "/api/v1/admin/styles",
        json!({"title": "Yang-Style"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_fields_return_400(pool: PgPool) {
    let style_id = create_style(&pool, "Wu Style").await;

    let cases = [
        ("/api/v1/admin/styles".to_string(), json!({"title": "   "})),
        ("/api/v1/admin/styles".to_string(), json!({"title": "!!!"})),
        (
            "/api/v1/admin/styles".to_string(),
            json!({"title": "Linked", "wikipedia": "not a url"}),
        ),
        (
            format!("/api/v1/admin/styles/{style_id}/series"),
            json!({"title": "Hidden", "visibility": "secret"}),
        ),
        (
            "/api/v1/admin/resources".to_string(),
            json!({"title": "Clip", "link_type": "podcast"}),
        ),
        (
            "/api/v1/admin/locations".to_string(),
            json!({"title": "Park", "contact_email": "nobody"}),
        ),
        (
            "/api/v1/admin/locations".to_string(),
            json!({"title": "Park", "zipcode": "7870"}),
        ),
        (
            "/api/v1/admin/locations".to_string(),
            json!({"title": "Park", "state": "Texas"}),
        ),
        ("/api/v1/admin/users".to_string(), json!({"name": "Al", "email": "al"})),
    ];

    for (uri, body) in cases {
        let response = post_json(build_test_app(pool.clone()), &uri, body.clone()).await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "POST {uri} {body} should be rejected"
        );
        let json = body_json(response).await;
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_meeting_length_rejected(pool: PgPool) {
    let (_, series_id, _, _) = seed_hierarchy(&pool).await;

    let response = post_json(
        build_test_app(pool),
        "/api/v1/admin/meetings",
        json!({"series_id": series_id, "day": "2026-03-10", "start": "09:00:00", "length": -5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_reference_returns_400(pool: PgPool) {
    let style_id = create_style(&pool, "Hao Style").await;
    let series_id = create(
        &pool,
        &format!("/api/v1/admin/styles/{style_id}/series"),
        json!({"title": "Hao Basics"}),
    )
    .await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/admin/series/{series_id}/members"),
        json!({"member_id": 999_999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Uniqueness of join rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_pairs_return_409(pool: PgPool) {
    let (style_id, series_id, member_id, meeting_id) = seed_hierarchy(&pool).await;
    let resource_id = create(&pool, "/api/v1/admin/resources", json!({"title": "Notes"})).await;

    let style_link = format!("/api/v1/admin/styles/{style_id}/resources");
    create(&pool, &style_link, json!({"resource_id": resource_id})).await;
    let response = post_json(
        build_test_app(pool.clone()),
        &style_link,
        json!({"resource_id": resource_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The seeded user is already a member of the series.
    let members = get(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/series/{series_id}/members"),
    )
    .await;
    let user_id = body_json(members).await["data"][0]["member_id"]
        .as_i64()
        .unwrap();
    let response = post_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/series/{series_id}/members"),
        json!({"member_id": user_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = post_json(
        build_test_app(pool),
        &format!("/api/v1/admin/meetings/{meeting_id}/attendees"),
        json!({"attendee_id": member_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// ---------------------------------------------------------------------------
// Delete behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_style_cascades_to_meetings_and_roll(pool: PgPool) {
    let (style_id, series_id, member_id, meeting_id) = seed_hierarchy(&pool).await;

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/styles/{style_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    for uri in [
        format!("/api/v1/admin/series/{series_id}"),
        format!("/api/v1/admin/meetings/{meeting_id}"),
        format!("/api/v1/admin/series/{series_id}/members"),
        format!("/api/v1/admin/meetings/{meeting_id}/attendees"),
    ] {
        let response = get(build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "GET {uri}");
    }

    let (remaining,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM meeting_attendees WHERE attendee_id = $1")
            .bind(member_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_location_keeps_meeting_as_virtual(pool: PgPool) {
    let (_, _, _, meeting_id) = seed_hierarchy(&pool).await;
    let location_id = create(
        &pool,
        "/api/v1/admin/locations",
        json!({"title": "Zilker Park", "city": "Austin"}),
    )
    .await;
    put_json(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/meetings/{meeting_id}"),
        json!({"location_id": location_id}),
    )
    .await;

    let response = delete(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/locations/{location_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/admin/meetings/{meeting_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["location_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_returns_404(pool: PgPool) {
    for uri in [
        "/api/v1/admin/locations/999999",
        "/api/v1/admin/resources/999999",
        "/api/v1/admin/styles/999999",
        "/api/v1/admin/series/999999",
        "/api/v1/admin/meetings/999999",
    ] {
        let response = delete(build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "DELETE {uri}");
    }
}

// ---------------------------------------------------------------------------
// Updates, summaries and tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_meeting_update_null_clears_leader(pool: PgPool) {
    let (_, _, member_id, meeting_id) = seed_hierarchy(&pool).await;
    let uri = format!("/api/v1/admin/meetings/{meeting_id}");

    // An absent field leaves the leader alone.
    let response = put_json(build_test_app(pool.clone()), &uri, json!({"room": "Hall B"})).await;
    let json = body_json(response).await;
    assert_eq!(json["leader_id"], member_id);
    assert_eq!(json["room"], "Hall B");

    let response = put_json(build_test_app(pool), &uri, json!({"leader_id": null})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["leader_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_summaries_include_labels(pool: PgPool) {
    seed_hierarchy(&pool).await;
    create(
        &pool,
        "/api/v1/admin/locations",
        json!({"title": "Fair Park", "city": "Dallas"}),
    )
    .await;
    create(
        &pool,
        "/api/v1/admin/resources",
        json!({"title": "Tao Te Ching", "link_type": "book"}),
    )
    .await;

    let cases = [
        ("/api/v1/admin/locations", "Fair Park in Dallas"),
        ("/api/v1/admin/resources", "book:Tao Te Ching"),
        ("/api/v1/admin/series", "Yang Style: Sunday Form"),
        ("/api/v1/admin/meetings", "Sunday Form on 03/09/2026 leader:Ann"),
    ];
    for (uri, label) in cases {
        let response = get(build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"][0]["label"], label, "GET {uri}");
    }

    let response = get(build_test_app(pool), "/api/v1/admin/styles").await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["slug"], "yang-style");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_series_tags_round_trip_through_edit_string(pool: PgPool) {
    let (_, series_id, _, _) = seed_hierarchy(&pool).await;
    let uri = format!("/api/v1/admin/series/{series_id}/tags");

    let response = put_json(
        build_test_app(pool.clone()),
        &uri,
        json!({"tags": "\"push hands\", sword"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 2);

    let response = get(build_test_app(pool.clone()), &uri).await;
    let json = body_json(response).await;
    assert_eq!(json["tags"], "\"push hands\", sword");

    let response = put_json(build_test_app(pool), &uri, json!({"tags": ""})).await;
    let json = body_json(response).await;
    assert!(json["items"].as_array().unwrap().is_empty());
    assert_eq!(json["tags"], "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_series_with_unstorable_tag_is_not_created(pool: PgPool) {
    let style_id = create_style(&pool, "Chen Style").await;
    let uri = format!("/api/v1/admin/styles/{style_id}/series");
    let body = json!({"title": "Morning Class", "tags": "fan a\u{0}b"});

    let response = post_json(build_test_app(pool.clone()), &uri, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM series")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let body = json!({"title": "Morning Class", "tags": "fan \"push hands\""});
    let response = post_json(build_test_app(pool), &uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_style_get_includes_inline_series(pool: PgPool) {
    let (style_id, _, _, _) = seed_hierarchy(&pool).await;

    let response = get(
        build_test_app(pool),
        &format!("/api/v1/admin/styles/{style_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Yang Style");
    assert_eq!(json["series"][0]["title"], "Sunday Form");
}

//! Integration tests for members, meetings, attendance and series tags.

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use taichi_db::models::location::CreateLocation;
use taichi_db::models::meeting::{CreateAttendee, CreateMeeting, UpdateMeeting};
use taichi_db::models::member::{CreateMember, UpdateMember};
use taichi_db::models::series::CreateSeries;
use taichi_db::models::style::CreateStyle;
use taichi_db::models::user::CreateUser;
use taichi_db::repositories::{
    AttendeeRepo, LocationRepo, MeetingRepo, MemberRepo, SeriesRepo, StyleRepo, TagRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a style with one series and return the series id.
async fn seed_series(pool: &PgPool, title: &str) -> i64 {
    let style = StyleRepo::create(
        pool,
        &CreateStyle {
            title: format!("{title} Style"),
            description: None,
            wikipedia: None,
            owner_id: None,
        },
    )
    .await
    .unwrap();
    let series = SeriesRepo::create(
        pool,
        style.id,
        &CreateSeries {
            title: title.to_string(),
            description: None,
            visibility: Some("public".to_string()),
            membership: None,
            take_roll: Some(true),
            tags: None,
        },
    )
    .await
    .unwrap();
    series.id
}

async fn seed_user(pool: &PgPool, name: &str) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_member(member_id: i64, leader: bool) -> CreateMember {
    CreateMember {
        member_id,
        leader: Some(leader),
        is_primary: None,
        active: None,
        since: None,
        last_meeting: None,
        paid_through: None,
    }
}

fn new_meeting(series_id: i64, day: NaiveDate) -> CreateMeeting {
    CreateMeeting {
        series_id,
        location_id: None,
        room: None,
        day,
        start_time: NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        length: 60,
        message: None,
        leader_id: None,
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

// ---------------------------------------------------------------------------
// Test: Members
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_defaults(pool: PgPool) {
    let series_id = seed_series(&pool, "Morning Form").await;
    let user_id = seed_user(&pool, "Ann").await;

    let member = MemberRepo::create(&pool, series_id, &new_member(user_id, false))
        .await
        .unwrap();
    assert!(member.active);
    assert!(!member.leader);
    assert!(!member.is_primary);
    assert_eq!(member.last_meeting, None);

    let listed = MemberRepo::list_by_series(&pool, series_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].member_name, "Ann");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_member_rejected(pool: PgPool) {
    let series_id = seed_series(&pool, "Evening Form").await;
    let user_id = seed_user(&pool, "Bo").await;

    MemberRepo::create(&pool, series_id, &new_member(user_id, false))
        .await
        .unwrap();
    let err = MemberRepo::create(&pool, series_id, &new_member(user_id, true))
        .await
        .unwrap_err();
    let constraint = err
        .as_database_error()
        .and_then(|e| e.constraint())
        .map(str::to_string);
    assert_eq!(constraint.as_deref(), Some("uq_members_series_member"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_member_update_clears_dates(pool: PgPool) {
    let series_id = seed_series(&pool, "Sword Form").await;
    let user_id = seed_user(&pool, "Cy").await;
    let mut input = new_member(user_id, false);
    input.paid_through = Some(day(31));
    let member = MemberRepo::create(&pool, series_id, &input).await.unwrap();

    let updated = MemberRepo::update(
        &pool,
        series_id,
        member.id,
        &UpdateMember {
            active: Some(false),
            paid_through: Some(None),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!updated.active);
    assert_eq!(updated.paid_through, None);

    // Scoped to the owning series.
    let other = seed_series(&pool, "Fan Form").await;
    let missing = MemberRepo::update(&pool, other, member.id, &UpdateMember::default())
        .await
        .unwrap();
    assert!(missing.is_none());
}

// ---------------------------------------------------------------------------
// Test: Meetings and attendance
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_location_makes_meeting_virtual(pool: PgPool) {
    let series_id = seed_series(&pool, "Park Class").await;
    let location = LocationRepo::create(
        &pool,
        &CreateLocation {
            title: "Pease Park".to_string(),
            address: None,
            geolocation: None,
            address1: None,
            address2: None,
            city: None,
            state: None,
            zipcode: None,
            contact: None,
            contact_email: None,
            contact_phone: None,
        },
    )
    .await
    .unwrap();

    let mut input = new_meeting(series_id, day(2));
    input.location_id = Some(location.id);
    let meeting = MeetingRepo::create(&pool, &input).await.unwrap();
    assert_eq!(meeting.location_id, Some(location.id));

    assert!(LocationRepo::delete(&pool, location.id).await.unwrap());
    let meeting = MeetingRepo::find_by_id(&pool, meeting.id).await.unwrap().unwrap();
    assert_eq!(meeting.location_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_meeting_leader_and_summaries(pool: PgPool) {
    let series_id = seed_series(&pool, "Push Hands").await;
    let user_id = seed_user(&pool, "Dee").await;
    let leader = MemberRepo::create(&pool, series_id, &new_member(user_id, true))
        .await
        .unwrap();

    let mut input = new_meeting(series_id, day(9));
    input.leader_id = Some(leader.id);
    let meeting = MeetingRepo::create(&pool, &input).await.unwrap();
    MeetingRepo::create(&pool, &new_meeting(series_id, day(2))).await.unwrap();

    let rows = MeetingRepo::list_summaries(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, meeting.id, "Most recent day first");
    assert_eq!(rows[0].label, "Push Hands on 03/09/2026 leader:Dee");
    assert_eq!(rows[1].label, "Push Hands on 03/02/2026");

    let cleared = MeetingRepo::update(
        &pool,
        meeting.id,
        &UpdateMeeting {
            leader_id: Some(None),
            length: Some(90),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(cleared.leader_id, None);
    assert_eq!(cleared.length, 90);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_attendee_rejected(pool: PgPool) {
    let series_id = seed_series(&pool, "Qigong").await;
    let user_id = seed_user(&pool, "Eve").await;
    let member = MemberRepo::create(&pool, series_id, &new_member(user_id, false))
        .await
        .unwrap();
    let meeting = MeetingRepo::create(&pool, &new_meeting(series_id, day(5)))
        .await
        .unwrap();

    let attend = CreateAttendee {
        attendee_id: member.id,
        present: None,
        notes: None,
    };
    let record = AttendeeRepo::create(&pool, meeting.id, &attend).await.unwrap();
    assert!(record.present);
    assert!(AttendeeRepo::create(&pool, meeting.id, &attend).await.is_err());

    let roll = AttendeeRepo::list_by_meeting(&pool, meeting.id).await.unwrap();
    assert_eq!(roll.len(), 1);
    assert_eq!(roll[0].attendee_name, "Eve");

    // Deleting the meeting removes its roll.
    assert!(MeetingRepo::delete(&pool, meeting.id).await.unwrap());
    assert!(AttendeeRepo::list_by_meeting(&pool, meeting.id)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Test: Tags
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_set_series_tags_replaces_set(pool: PgPool) {
    let series_id = seed_series(&pool, "Weekend Form").await;

    let tags = TagRepo::replace_for_series(
        &pool,
        series_id,
        &["Beginner".to_string(), "outdoor".to_string()],
    )
    .await
    .unwrap();
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["beginner", "outdoor"]);
    assert_eq!(tags[0].display_name, "Beginner");

    let found = SeriesRepo::list_public_by_tag(&pool, "BEGINNER").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, series_id);

    let tags = TagRepo::replace_for_series(&pool, series_id, &["indoor".to_string()])
        .await
        .unwrap();
    assert_eq!(tags.len(), 1);
    assert!(SeriesRepo::list_public_by_tag(&pool, "beginner")
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_series_create_rolls_back_when_tags_fail(pool: PgPool) {
    let style = StyleRepo::create(
        &pool,
        &CreateStyle {
            title: "Sun Style".to_string(),
            description: None,
            wikipedia: None,
            owner_id: None,
        },
    )
    .await
    .unwrap();

    let input = CreateSeries {
        title: "Morning Class".to_string(),
        description: None,
        visibility: None,
        membership: None,
        take_roll: None,
        tags: Some("fan a\0b".to_string()),
    };
    assert!(SeriesRepo::create(&pool, style.id, &input).await.is_err());

    let (series,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM series")
        .fetch_one(&pool)
        .await
        .unwrap();
    let (tags,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tags")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!((series, tags), (0, 0));

    let input = CreateSeries {
        tags: Some("fan sword".to_string()),
        ..input
    };
    let created = SeriesRepo::create(&pool, style.id, &input).await.unwrap();
    let names: Vec<_> = TagRepo::list_for_series(&pool, created.id)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["fan", "sword"]);
}

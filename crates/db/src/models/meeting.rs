//! Meeting and attendance models, DTOs and the public detail projection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taichi_core::roster::Roster;
use taichi_core::types::{Date, DbId, Time, Timestamp};
use validator::Validate;

use crate::models::deserialize_some;
use crate::models::location::Location;
use crate::models::member::MemberDetail;
use crate::models::series::Series;

/// A row from the `meetings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meeting {
    pub id: DbId,
    pub series_id: DbId,
    /// `None` for virtual meetings or after the location was deleted.
    pub location_id: Option<DbId>,
    /// Directions to the room, or the virtual meeting link.
    pub room: String,
    pub day: Date,
    #[serde(rename = "start")]
    pub start_time: Time,
    /// Duration in minutes.
    pub length: i32,
    /// Notes included in reminders.
    pub message: String,
    pub leader_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Admin list row: series and day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeetingSummary {
    pub id: DbId,
    pub series_id: DbId,
    pub series: String,
    pub day: Date,
    pub leader_name: Option<String>,
    /// `"{series} on MM/DD/YYYY leader:{name}"`, filled in by the repository.
    #[sqlx(skip)]
    pub label: String,
}

/// DTO for scheduling a meeting.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMeeting {
    pub series_id: DbId,
    pub location_id: Option<DbId>,
    pub room: Option<String>,
    pub day: Date,
    #[serde(rename = "start")]
    pub start_time: Time,
    #[validate(range(min = 0))]
    pub length: i32,
    pub message: Option<String>,
    pub leader_id: Option<DbId>,
}

/// DTO for updating a meeting. All fields are optional; `location_id: null`
/// makes the meeting virtual and `leader_id: null` clears the leader.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMeeting {
    #[serde(default, deserialize_with = "deserialize_some")]
    pub location_id: Option<Option<DbId>>,
    pub room: Option<String>,
    pub day: Option<Date>,
    #[serde(rename = "start")]
    pub start_time: Option<Time>,
    #[validate(range(min = 0))]
    pub length: Option<i32>,
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub leader_id: Option<Option<DbId>>,
}

/// A row from the `meeting_attendees` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MeetingAttendee {
    pub id: DbId,
    pub attendee_id: DbId,
    pub meeting_id: DbId,
    pub present: bool,
    pub notes: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An attendance record joined with the attendee's name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendeeDetail {
    pub id: DbId,
    pub attendee_id: DbId,
    pub attendee_name: String,
    pub meeting_id: DbId,
    pub present: bool,
    pub notes: String,
}

/// DTO for recording attendance. `meeting_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttendee {
    /// The `members` row (not the user) being recorded.
    pub attendee_id: DbId,
    /// Defaults to `true` if omitted.
    pub present: Option<bool>,
    pub notes: Option<String>,
}

/// DTO for updating an attendance record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAttendee {
    pub present: Option<bool>,
    pub notes: Option<String>,
}

/// Public meeting detail: the meeting with its series roster, optional
/// location and leader, and the attendance roll.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingDetail {
    #[serde(flatten)]
    pub meeting: Meeting,
    pub series: Series,
    pub location: Option<Location>,
    pub leader: Option<MemberDetail>,
    #[serde(flatten)]
    pub roster: Roster<MemberDetail>,
    pub roll: Vec<AttendeeDetail>,
}

//! Repository for the `meeting_attendees` table.

use sqlx::PgPool;
use taichi_core::types::DbId;

use crate::models::meeting::{AttendeeDetail, CreateAttendee, MeetingAttendee, UpdateAttendee};

const COLUMNS: &str = "id, attendee_id, meeting_id, present, notes, created_at, updated_at";

/// Provides attendance-roll operations for meetings.
pub struct AttendeeRepo;

impl AttendeeRepo {
    /// Record a member's attendance at a meeting.
    ///
    /// Fails with a unique violation (`uq_meeting_attendees_attendee_meeting`)
    /// if the member is already on the roll.
    pub async fn create(
        pool: &PgPool,
        meeting_id: DbId,
        input: &CreateAttendee,
    ) -> Result<MeetingAttendee, sqlx::Error> {
        let query = format!(
            "INSERT INTO meeting_attendees (attendee_id, meeting_id, present, notes)
             VALUES ($1, $2, COALESCE($3, true), COALESCE($4, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingAttendee>(&query)
            .bind(input.attendee_id)
            .bind(meeting_id)
            .bind(input.present)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// The attendance roll of a meeting, ordered by attendee name.
    pub async fn list_by_meeting(
        pool: &PgPool,
        meeting_id: DbId,
    ) -> Result<Vec<AttendeeDetail>, sqlx::Error> {
        sqlx::query_as::<_, AttendeeDetail>(
            "SELECT a.id, a.attendee_id, u.name AS attendee_name, a.meeting_id, a.present, a.notes
             FROM meeting_attendees a
             JOIN members m ON m.id = a.attendee_id
             JOIN users u ON u.id = m.member_id
             WHERE a.meeting_id = $1
             ORDER BY u.name, a.id",
        )
        .bind(meeting_id)
        .fetch_all(pool)
        .await
    }

    /// Update an attendance record scoped to its meeting.
    ///
    /// Returns `None` if no such record exists for the meeting.
    pub async fn update(
        pool: &PgPool,
        meeting_id: DbId,
        id: DbId,
        input: &UpdateAttendee,
    ) -> Result<Option<MeetingAttendee>, sqlx::Error> {
        let query = format!(
            "UPDATE meeting_attendees SET
                present = COALESCE($3, present),
                notes = COALESCE($4, notes)
             WHERE id = $1 AND meeting_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MeetingAttendee>(&query)
            .bind(id)
            .bind(meeting_id)
            .bind(input.present)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Remove an attendance record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, meeting_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meeting_attendees WHERE id = $1 AND meeting_id = $2")
            .bind(id)
            .bind(meeting_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `meetings` table.

use sqlx::PgPool;
use taichi_core::labels::meeting_label;
use taichi_core::types::DbId;

use crate::models::meeting::{CreateMeeting, Meeting, MeetingSummary, UpdateMeeting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, series_id, location_id, room, day, start_time, length, message, \
    leader_id, created_at, updated_at";

/// Provides CRUD operations for meetings.
pub struct MeetingRepo;

impl MeetingRepo {
    /// Schedule a new meeting.
    pub async fn create(pool: &PgPool, input: &CreateMeeting) -> Result<Meeting, sqlx::Error> {
        let query = format!(
            "INSERT INTO meetings
                (series_id, location_id, room, day, start_time, length, message, leader_id)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, $6, COALESCE($7, ''), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(input.series_id)
            .bind(input.location_id)
            .bind(&input.room)
            .bind(input.day)
            .bind(input.start_time)
            .bind(input.length)
            .bind(&input.message)
            .bind(input.leader_id)
            .fetch_one(pool)
            .await
    }

    /// Find a meeting by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE id = $1");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Admin list rows: series title and day, most recent first.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<MeetingSummary>, sqlx::Error> {
        let mut rows = sqlx::query_as::<_, MeetingSummary>(
            "SELECT mt.id, mt.series_id, s.title AS series, mt.day, u.name AS leader_name
             FROM meetings mt
             JOIN series s ON s.id = mt.series_id
             LEFT JOIN members m ON m.id = mt.leader_id
             LEFT JOIN users u ON u.id = m.member_id
             ORDER BY mt.day DESC, mt.id DESC",
        )
        .fetch_all(pool)
        .await?;
        for row in &mut rows {
            row.label = meeting_label(&row.series, row.day, row.leader_name.as_deref());
        }
        Ok(rows)
    }

    /// Update a meeting. Only non-`None` fields in `input` are applied;
    /// `Some(None)` clears the location or leader.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMeeting,
    ) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!(
            "UPDATE meetings SET
                location_id = CASE WHEN $2 THEN $3 ELSE location_id END,
                room = COALESCE($4, room),
                day = COALESCE($5, day),
                start_time = COALESCE($6, start_time),
                length = COALESCE($7, length),
                message = COALESCE($8, message),
                leader_id = CASE WHEN $9 THEN $10 ELSE leader_id END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .bind(input.location_id.is_some())
            .bind(input.location_id.flatten())
            .bind(&input.room)
            .bind(input.day)
            .bind(input.start_time)
            .bind(input.length)
            .bind(&input.message)
            .bind(input.leader_id.is_some())
            .bind(input.leader_id.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a meeting. Returns `true` if a row was removed.
    ///
    /// The attendance roll is removed with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meetings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `members` table.

use sqlx::PgPool;
use taichi_core::types::DbId;

use crate::models::member::{CreateMember, Member, MemberDetail, UpdateMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, member_id, series_id, leader, is_primary, active, since, \
    last_meeting, paid_through, created_at, updated_at";

/// Columns for [`MemberDetail`], joined against `users` as `u`.
const DETAIL_COLUMNS: &str = "m.id, m.member_id, u.name AS member_name, m.series_id, m.leader, \
    m.is_primary, m.active, m.since, m.last_meeting, m.paid_through";

/// Provides CRUD operations for series memberships.
pub struct MemberRepo;

impl MemberRepo {
    /// Enroll a user in a series.
    ///
    /// Fails with a unique violation (`uq_members_series_member`) if the
    /// user is already a member of the series.
    pub async fn create(
        pool: &PgPool,
        series_id: DbId,
        input: &CreateMember,
    ) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members
                (member_id, series_id, leader, is_primary, active, since,
                 last_meeting, paid_through)
             VALUES ($1, $2, COALESCE($3, false), COALESCE($4, false), COALESCE($5, true),
                     COALESCE($6, CURRENT_DATE), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(input.member_id)
            .bind(series_id)
            .bind(input.leader)
            .bind(input.is_primary)
            .bind(input.active)
            .bind(input.since)
            .bind(input.last_meeting)
            .bind(input.paid_through)
            .fetch_one(pool)
            .await
    }

    /// Find a membership by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a membership with the member's name.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MemberDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM members m
             JOIN users u ON u.id = m.member_id
             WHERE m.id = $1"
        );
        sqlx::query_as::<_, MemberDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the members of a series with names, non-primary first.
    pub async fn list_by_series(
        pool: &PgPool,
        series_id: DbId,
    ) -> Result<Vec<MemberDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS}
             FROM members m
             JOIN users u ON u.id = m.member_id
             WHERE m.series_id = $1
             ORDER BY m.is_primary, u.name, m.id"
        );
        sqlx::query_as::<_, MemberDetail>(&query)
            .bind(series_id)
            .fetch_all(pool)
            .await
    }

    /// Update a membership scoped to its series. Only non-`None` fields are
    /// applied; `Some(None)` clears a nullable date.
    ///
    /// Returns `None` if no such membership exists in the series.
    pub async fn update(
        pool: &PgPool,
        series_id: DbId,
        id: DbId,
        input: &UpdateMember,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET
                leader = COALESCE($3, leader),
                is_primary = COALESCE($4, is_primary),
                active = COALESCE($5, active),
                last_meeting = CASE WHEN $6 THEN $7 ELSE last_meeting END,
                paid_through = CASE WHEN $8 THEN $9 ELSE paid_through END
             WHERE id = $1 AND series_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(series_id)
            .bind(input.leader)
            .bind(input.is_primary)
            .bind(input.active)
            .bind(input.last_meeting.is_some())
            .bind(input.last_meeting.flatten())
            .bind(input.paid_through.is_some())
            .bind(input.paid_through.flatten())
            .fetch_optional(pool)
            .await
    }

    /// Remove a membership from its series. Returns `true` if a row was
    /// removed.
    ///
    /// Attendance records cascade; meetings it led keep their rows with
    /// `leader_id` cleared.
    pub async fn delete(pool: &PgPool, series_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1 AND series_id = $2")
            .bind(id)
            .bind(series_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `tags` and `series_tags` tables.

use sqlx::{PgConnection, PgPool};
use taichi_core::tags::normalize_tag_name;
use taichi_core::types::DbId;

use crate::models::tag::{Tag, TagInfo};

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, display_name, created_at, updated_at";

/// Provides tag creation and series-tag associations.
pub struct TagRepo;

impl TagRepo {
    /// Create a tag or return the existing one if the normalized name already exists.
    ///
    /// The `display_name` is updated on conflict so the most recent casing is
    /// preserved.
    pub async fn create_or_get(
        conn: &mut PgConnection,
        display_name: &str,
    ) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (name, display_name)
             VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET display_name = EXCLUDED.display_name
             RETURNING {TAG_COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(normalize_tag_name(display_name))
            .bind(display_name.trim())
            .fetch_one(conn)
            .await
    }

    /// Tags applied to a series, ordered by name.
    pub async fn list_for_series(
        pool: &PgPool,
        series_id: DbId,
    ) -> Result<Vec<TagInfo>, sqlx::Error> {
        sqlx::query_as::<_, TagInfo>(
            "SELECT t.id, t.name, t.display_name
             FROM tags t
             JOIN series_tags st ON st.tag_id = t.id
             WHERE st.series_id = $1
             ORDER BY t.name",
        )
        .bind(series_id)
        .fetch_all(pool)
        .await
    }

    /// Replace the tag set of a series with `names` in one transaction.
    ///
    /// New tags are created on first use. Returns the resulting tag set.
    pub async fn replace_for_series(
        pool: &PgPool,
        series_id: DbId,
        names: &[String],
    ) -> Result<Vec<TagInfo>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        Self::set_for_series(&mut *tx, series_id, names).await?;
        tx.commit().await?;
        Self::list_for_series(pool, series_id).await
    }

    /// Replace the tag set of a series within an existing transaction.
    pub async fn set_for_series(
        conn: &mut PgConnection,
        series_id: DbId,
        names: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM series_tags WHERE series_id = $1")
            .bind(series_id)
            .execute(&mut *conn)
            .await?;

        for name in names {
            let tag = Self::create_or_get(&mut *conn, name).await?;
            sqlx::query(
                "INSERT INTO series_tags (series_id, tag_id)
                 VALUES ($1, $2)
                 ON CONFLICT (series_id, tag_id) DO NOTHING",
            )
            .bind(series_id)
            .bind(tag.id)
            .execute(&mut *conn)
            .await?;
        }

        tracing::debug!(series_id, count = names.len(), "Replaced series tags");
        Ok(())
    }
}

//! Repository for the `series` table.

use sqlx::PgPool;
use taichi_core::choices::{DEFAULT_MEMBERSHIP, DEFAULT_VISIBILITY, VISIBILITY_PUBLIC};
use taichi_core::labels::series_label;
use taichi_core::slug::slugify;
use taichi_core::tags::{normalize_tag_name, parse_tags};
use taichi_core::types::DbId;

use crate::models::series::{CreateSeries, Series, SeriesSummary, UpdateSeries};
use crate::repositories::slug_hook::{self, SlugChange};
use crate::repositories::TagRepo;

const TABLE: &str = "series";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, style_id, description, visibility, membership, \
    take_roll, created_at, updated_at";

/// Same columns qualified with the `s` alias for joins.
const S_COLUMNS: &str = "s.id, s.title, s.slug, s.style_id, s.description, s.visibility, \
    s.membership, s.take_roll, s.created_at, s.updated_at";

/// Provides CRUD operations for series.
pub struct SeriesRepo;

impl SeriesRepo {
    /// Insert a new series under `style_id`, deriving its slug from the title.
    ///
    /// Tags in `input.tags` are applied in the same transaction, so a failed
    /// tag write leaves no series behind.
    pub async fn create(
        pool: &PgPool,
        style_id: DbId,
        input: &CreateSeries,
    ) -> Result<Series, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO series
                (title, slug, style_id, description, visibility, membership, take_roll)
             VALUES ($1, $2, $3, COALESCE($4, ''), COALESCE($5, $8), COALESCE($6, $9),
                     COALESCE($7, false))
             RETURNING {COLUMNS}"
        );
        let series = sqlx::query_as::<_, Series>(&query)
            .bind(&input.title)
            .bind(slugify(&input.title))
            .bind(style_id)
            .bind(&input.description)
            .bind(&input.visibility)
            .bind(&input.membership)
            .bind(input.take_roll)
            .bind(DEFAULT_VISIBILITY)
            .bind(DEFAULT_MEMBERSHIP)
            .fetch_one(&mut *tx)
            .await?;

        let tags = input.tags.as_deref().map(parse_tags).unwrap_or_default();
        if !tags.is_empty() {
            TagRepo::set_for_series(&mut *tx, series.id, &tags).await?;
        }

        tx.commit().await?;
        Ok(series)
    }

    /// Find a series by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE id = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a series by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Series>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM series WHERE slug = $1");
        sqlx::query_as::<_, Series>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List the series of a style, public before private, then by title.
    pub async fn list_by_style(pool: &PgPool, style_id: DbId) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM series
             WHERE style_id = $1
             ORDER BY visibility DESC, title"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(style_id)
            .fetch_all(pool)
            .await
    }

    /// Admin list rows with the owning style's title.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<SeriesSummary>, sqlx::Error> {
        let mut rows = sqlx::query_as::<_, SeriesSummary>(
            "SELECT s.id, s.style_id, st.title AS style, s.title, s.slug, s.visibility
             FROM series s
             JOIN styles st ON st.id = s.style_id
             ORDER BY s.visibility DESC, st.title, s.title",
        )
        .fetch_all(pool)
        .await?;
        for row in &mut rows {
            row.label = series_label(&row.style, &row.title);
        }
        Ok(rows)
    }

    /// Public series carrying the given tag (matched on the normalized name).
    pub async fn list_public_by_tag(pool: &PgPool, tag: &str) -> Result<Vec<Series>, sqlx::Error> {
        let query = format!(
            "SELECT {S_COLUMNS}
             FROM series s
             JOIN series_tags stg ON stg.series_id = s.id
             JOIN tags t ON t.id = stg.tag_id
             WHERE t.name = $1 AND s.visibility = $2
             ORDER BY s.title"
        );
        sqlx::query_as::<_, Series>(&query)
            .bind(normalize_tag_name(tag))
            .bind(VISIBILITY_PUBLIC)
            .fetch_all(pool)
            .await
    }

    /// Update a series. Only non-`None` fields in `input` are applied.
    ///
    /// A changed title refreshes the slug in the same transaction.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSeries,
    ) -> Result<Option<Series>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let slug = match slug_hook::prepare(&mut *tx, TABLE, id, input.title.as_deref()).await? {
            SlugChange::Missing => return Ok(None),
            SlugChange::Ready(slug) => slug,
        };

        let query = format!(
            "UPDATE series SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                style_id = COALESCE($4, style_id),
                description = COALESCE($5, description),
                visibility = COALESCE($6, visibility),
                membership = COALESCE($7, membership),
                take_roll = COALESCE($8, take_roll)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let series = sqlx::query_as::<_, Series>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&slug)
            .bind(input.style_id)
            .bind(&input.description)
            .bind(&input.visibility)
            .bind(&input.membership)
            .bind(input.take_roll)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(series)
    }

    /// Permanently delete a series. Returns `true` if a row was removed.
    ///
    /// Cascades to members, meetings, attendance records, resource links and
    /// tag assignments.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM series WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `styles` table.

use sqlx::PgPool;
use taichi_core::slug::slugify;
use taichi_core::types::DbId;

use crate::models::style::{CreateStyle, Style, StyleSummary, UpdateStyle};
use crate::repositories::slug_hook::{self, SlugChange};

const TABLE: &str = "styles";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, slug, description, wikipedia, owner_id, created_at, updated_at";

/// Provides CRUD operations for styles.
pub struct StyleRepo;

impl StyleRepo {
    /// Insert a new style, deriving its slug from the title.
    pub async fn create(pool: &PgPool, input: &CreateStyle) -> Result<Style, sqlx::Error> {
        let query = format!(
            "INSERT INTO styles (title, slug, description, wikipedia, owner_id)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Style>(&query)
            .bind(&input.title)
            .bind(slugify(&input.title))
            .bind(&input.description)
            .bind(&input.wikipedia)
            .bind(input.owner_id)
            .fetch_one(pool)
            .await
    }

    /// Find a style by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Style>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM styles WHERE id = $1");
        sqlx::query_as::<_, Style>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a style by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Style>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM styles WHERE slug = $1");
        sqlx::query_as::<_, Style>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all styles in title order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Style>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM styles ORDER BY title");
        sqlx::query_as::<_, Style>(&query).fetch_all(pool).await
    }

    /// Admin list rows (title, slug) in title order.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<StyleSummary>, sqlx::Error> {
        sqlx::query_as::<_, StyleSummary>("SELECT id, title, slug FROM styles ORDER BY title")
            .fetch_all(pool)
            .await
    }

    /// Update a style. Only non-`None` fields in `input` are applied;
    /// `owner_id: Some(None)` clears the owner.
    ///
    /// A changed title refreshes the slug in the same transaction.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStyle,
    ) -> Result<Option<Style>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let slug = match slug_hook::prepare(&mut *tx, TABLE, id, input.title.as_deref()).await? {
            SlugChange::Missing => return Ok(None),
            SlugChange::Ready(slug) => slug,
        };

        let query = format!(
            "UPDATE styles SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                wikipedia = COALESCE($5, wikipedia),
                owner_id = CASE WHEN $6 THEN $7 ELSE owner_id END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let style = sqlx::query_as::<_, Style>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.wikipedia)
            .bind(input.owner_id.is_some())
            .bind(input.owner_id.flatten())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(style)
    }

    /// Permanently delete a style. Returns `true` if a row was removed.
    ///
    /// Cascades to its series and, through them, to members, meetings and
    /// attendance records.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM styles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

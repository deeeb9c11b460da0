//! Repository for the `resources` table.

use sqlx::PgPool;
use taichi_core::choices::{DEFAULT_LINK_TYPE, DEFAULT_VISIBILITY};
use taichi_core::labels::resource_label;
use taichi_core::slug::slugify;
use taichi_core::types::DbId;

use crate::models::resource::{CreateResource, Resource, ResourceSummary, UpdateResource};
use crate::repositories::slug_hook::{self, SlugChange};

const TABLE: &str = "resources";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, description, visibility, link_type, link, creator_id, \
    created_at, updated_at";

/// Same columns qualified with the `r` alias for joins.
const R_COLUMNS: &str = "r.id, r.title, r.slug, r.description, r.visibility, r.link_type, \
    r.link, r.creator_id, r.created_at, r.updated_at";

/// Provides CRUD operations for resources.
pub struct ResourceRepo;

impl ResourceRepo {
    /// Insert a new resource, deriving its slug from the title.
    pub async fn create(pool: &PgPool, input: &CreateResource) -> Result<Resource, sqlx::Error> {
        let query = format!(
            "INSERT INTO resources
                (title, slug, description, visibility, link_type, link, creator_id)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, $8), COALESCE($5, $9),
                     COALESCE($6, ''), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(&input.title)
            .bind(slugify(&input.title))
            .bind(&input.description)
            .bind(&input.visibility)
            .bind(&input.link_type)
            .bind(&input.link)
            .bind(input.creator_id)
            .bind(DEFAULT_VISIBILITY)
            .bind(DEFAULT_LINK_TYPE)
            .fetch_one(pool)
            .await
    }

    /// Find a resource by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE id = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a resource by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Resource>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM resources WHERE slug = $1");
        sqlx::query_as::<_, Resource>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Admin list rows ordered by title, with the creator's name.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ResourceSummary>, sqlx::Error> {
        let mut rows = sqlx::query_as::<_, ResourceSummary>(
            "SELECT r.id, r.title, r.slug, r.description, r.visibility, r.link_type, r.link,
                    u.name AS creator
             FROM resources r
             LEFT JOIN users u ON u.id = r.creator_id
             ORDER BY r.title",
        )
        .fetch_all(pool)
        .await?;
        for row in &mut rows {
            row.label = resource_label(&row.link_type, &row.title);
        }
        Ok(rows)
    }

    /// Resources linked to a style, ordered by title.
    pub async fn list_for_style(pool: &PgPool, style_id: DbId) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {R_COLUMNS}
             FROM resources r
             JOIN style_resources sr ON sr.resource_id = r.id
             WHERE sr.style_id = $1
             ORDER BY r.title"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(style_id)
            .fetch_all(pool)
            .await
    }

    /// Resources linked to a series, ordered by title.
    pub async fn list_for_series(
        pool: &PgPool,
        series_id: DbId,
    ) -> Result<Vec<Resource>, sqlx::Error> {
        let query = format!(
            "SELECT {R_COLUMNS}
             FROM resources r
             JOIN series_resources sr ON sr.resource_id = r.id
             WHERE sr.series_id = $1
             ORDER BY r.title"
        );
        sqlx::query_as::<_, Resource>(&query)
            .bind(series_id)
            .fetch_all(pool)
            .await
    }

    /// Update a resource. Only non-`None` fields in `input` are applied;
    /// `creator_id: Some(None)` clears the creator.
    ///
    /// A changed title refreshes the slug in the same transaction.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateResource,
    ) -> Result<Option<Resource>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let slug = match slug_hook::prepare(&mut *tx, TABLE, id, input.title.as_deref()).await? {
            SlugChange::Missing => return Ok(None),
            SlugChange::Ready(slug) => slug,
        };

        let query = format!(
            "UPDATE resources SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                description = COALESCE($4, description),
                visibility = COALESCE($5, visibility),
                link_type = COALESCE($6, link_type),
                link = COALESCE($7, link),
                creator_id = CASE WHEN $8 THEN $9 ELSE creator_id END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let resource = sqlx::query_as::<_, Resource>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.visibility)
            .bind(&input.link_type)
            .bind(&input.link)
            .bind(input.creator_id.is_some())
            .bind(input.creator_id.flatten())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(resource)
    }

    /// Permanently delete a resource. Returns `true` if a row was removed.
    ///
    /// Style and series links to the resource are removed with it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

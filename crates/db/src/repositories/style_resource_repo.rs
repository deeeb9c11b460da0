//! Repository for the `style_resources` link table.

use sqlx::PgPool;
use taichi_core::types::DbId;

use crate::models::resource::StyleResource;

const COLUMNS: &str = "id, style_id, resource_id, created_at, updated_at";

/// Links resources to styles. A (style, resource) pair may exist once.
pub struct StyleResourceRepo;

impl StyleResourceRepo {
    /// Link a resource to a style.
    ///
    /// Fails with a unique violation (`uq_style_resources_style_resource`)
    /// if the pair is already linked.
    pub async fn link(
        pool: &PgPool,
        style_id: DbId,
        resource_id: DbId,
    ) -> Result<StyleResource, sqlx::Error> {
        let query = format!(
            "INSERT INTO style_resources (style_id, resource_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StyleResource>(&query)
            .bind(style_id)
            .bind(resource_id)
            .fetch_one(pool)
            .await
    }

    /// Remove the link between a style and a resource. Returns `true` if a
    /// row was removed.
    pub async fn unlink(
        pool: &PgPool,
        style_id: DbId,
        resource_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM style_resources WHERE style_id = $1 AND resource_id = $2")
                .bind(style_id)
                .bind(resource_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

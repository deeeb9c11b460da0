//! Repository for the `series_resources` link table.

use sqlx::PgPool;
use taichi_core::types::DbId;

use crate::models::resource::SeriesResource;

const COLUMNS: &str = "id, series_id, resource_id, created_at, updated_at";

/// Links resources to series. A (series, resource) pair may exist once.
pub struct SeriesResourceRepo;

impl SeriesResourceRepo {
    /// Link a resource to a series.
    ///
    /// Fails with a unique violation (`uq_series_resources_series_resource`)
    /// if the pair is already linked.
    pub async fn link(
        pool: &PgPool,
        series_id: DbId,
        resource_id: DbId,
    ) -> Result<SeriesResource, sqlx::Error> {
        let query = format!(
            "INSERT INTO series_resources (series_id, resource_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeriesResource>(&query)
            .bind(series_id)
            .bind(resource_id)
            .fetch_one(pool)
            .await
    }

    /// Remove the link between a series and a resource. Returns `true` if a
    /// row was removed.
    pub async fn unlink(
        pool: &PgPool,
        series_id: DbId,
        resource_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM series_resources WHERE series_id = $1 AND resource_id = $2")
                .bind(series_id)
                .bind(resource_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

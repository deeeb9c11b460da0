//! Repository for the `locations` table.

use sqlx::PgPool;
use taichi_core::choices::DEFAULT_STATE;
use taichi_core::labels::location_label;
use taichi_core::slug::slugify;
use taichi_core::types::DbId;

use crate::models::location::{CreateLocation, Location, LocationSummary, UpdateLocation};
use crate::repositories::slug_hook::{self, SlugChange};

const TABLE: &str = "locations";

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, address, geolocation, address1, address2, city, \
    state, zipcode, contact, contact_email, contact_phone, created_at, updated_at";

/// Provides CRUD operations for locations.
pub struct LocationRepo;

impl LocationRepo {
    /// Insert a new location, deriving its slug from the title.
    pub async fn create(pool: &PgPool, input: &CreateLocation) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations
                (title, slug, address, geolocation, address1, address2, city, state,
                 zipcode, contact, contact_email, contact_phone)
             VALUES ($1, $2, COALESCE($3, ''), COALESCE($4, ''), COALESCE($5, ''),
                     COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, $13),
                     COALESCE($9, ''), COALESCE($10, ''), COALESCE($11, ''), COALESCE($12, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.title)
            .bind(slugify(&input.title))
            .bind(&input.address)
            .bind(&input.geolocation)
            .bind(&input.address1)
            .bind(&input.address2)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zipcode)
            .bind(&input.contact)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(DEFAULT_STATE)
            .fetch_one(pool)
            .await
    }

    /// Find a location by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a location by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE slug = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Admin list rows ordered by title.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<LocationSummary>, sqlx::Error> {
        let mut rows = sqlx::query_as::<_, LocationSummary>(
            "SELECT id, title, slug, city, contact, contact_email, contact_phone
             FROM locations
             ORDER BY title",
        )
        .fetch_all(pool)
        .await?;
        for row in &mut rows {
            row.label = location_label(&row.title, &row.city);
        }
        Ok(rows)
    }

    /// Update a location. Only non-`None` fields in `input` are applied.
    ///
    /// A changed title refreshes the slug in the same transaction.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLocation,
    ) -> Result<Option<Location>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let slug = match slug_hook::prepare(&mut *tx, TABLE, id, input.title.as_deref()).await? {
            SlugChange::Missing => return Ok(None),
            SlugChange::Ready(slug) => slug,
        };

        let query = format!(
            "UPDATE locations SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                address = COALESCE($4, address),
                geolocation = COALESCE($5, geolocation),
                address1 = COALESCE($6, address1),
                address2 = COALESCE($7, address2),
                city = COALESCE($8, city),
                state = COALESCE($9, state),
                zipcode = COALESCE($10, zipcode),
                contact = COALESCE($11, contact),
                contact_email = COALESCE($12, contact_email),
                contact_phone = COALESCE($13, contact_phone)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let location = sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.address)
            .bind(&input.geolocation)
            .bind(&input.address1)
            .bind(&input.address2)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zipcode)
            .bind(&input.contact)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(location)
    }

    /// Permanently delete a location. Returns `true` if a row was removed.
    ///
    /// Meetings held there keep their rows with `location_id` cleared.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Before-save slug refresh shared by the titled tables.
//!
//! Updates lock the row, compare the incoming title against the stored
//! title/slug pair, and only then decide whether the slug column changes.

use sqlx::{FromRow, PgConnection};
use taichi_core::slug::refresh_slug;
use taichi_core::types::DbId;

/// The title/slug pair of a titled row.
#[derive(Debug, FromRow)]
struct TitledRow {
    title: String,
    slug: String,
}

/// Outcome of locking a titled row ahead of an update.
#[derive(Debug)]
pub(crate) enum SlugChange {
    /// No row with the given id.
    Missing,
    /// Row exists; `Some(slug)` must be written, `None` leaves it untouched.
    Ready(Option<String>),
}

/// Lock `id` in `table` with `FOR UPDATE` and compute the slug to write for
/// `new_title`.
///
/// `table` is always one of the repository's own table constants.
pub(crate) async fn prepare(
    conn: &mut PgConnection,
    table: &'static str,
    id: DbId,
    new_title: Option<&str>,
) -> Result<SlugChange, sqlx::Error> {
    let query = format!("SELECT title, slug FROM {table} WHERE id = $1 FOR UPDATE");
    let Some(current) = sqlx::query_as::<_, TitledRow>(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(SlugChange::Missing);
    };

    let slug = new_title.and_then(|title| refresh_slug(&current.title, &current.slug, title));
    if let Some(ref slug) = slug {
        tracing::debug!(table, id, old_slug = %current.slug, new_slug = %slug, "Refreshing slug");
    }
    Ok(SlugChange::Ready(slug))
}

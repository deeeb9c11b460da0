//! Location entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taichi_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `locations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    /// Geocodable single-line address.
    pub address: String,
    /// `"lat,lng"` as entered on the map widget.
    pub geolocation: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub contact: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Admin list row: title, city and the primary contact.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LocationSummary {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub city: String,
    pub contact: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// `"{title} in {city}"`, filled in by the repository.
    #[sqlx(skip)]
    pub label: String,
}

/// DTO for creating a new location. The slug is derived from `title`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLocation {
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(max = 200))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub geolocation: Option<String>,
    #[validate(length(max = 120))]
    pub address1: Option<String>,
    #[validate(length(max = 120))]
    pub address2: Option<String>,
    #[validate(length(max = 50))]
    pub city: Option<String>,
    /// Defaults to `"TX"` if omitted.
    pub state: Option<String>,
    pub zipcode: Option<String>,
    #[validate(length(max = 100))]
    pub contact: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(length(max = 31))]
    pub contact_phone: Option<String>,
}

/// DTO for updating an existing location. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateLocation {
    #[validate(length(min = 1, max = 120))]
    pub title: Option<String>,
    #[validate(length(max = 200))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub geolocation: Option<String>,
    #[validate(length(max = 120))]
    pub address1: Option<String>,
    #[validate(length(max = 120))]
    pub address2: Option<String>,
    #[validate(length(max = 50))]
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    #[validate(length(max = 100))]
    pub contact: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    #[validate(length(max = 31))]
    pub contact_phone: Option<String>,
}

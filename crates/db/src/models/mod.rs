//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//! - Summary/detail projections used by the admin and public views

use serde::{Deserialize, Deserializer};

pub mod location;
pub mod meeting;
pub mod member;
pub mod resource;
pub mod series;
pub mod style;
pub mod tag;
pub mod user;

/// Deserialize a present field as `Some`, so `Option<Option<T>>` can tell
/// "absent" (`None`) from "explicit null" (`Some(None)`).
///
/// Use together with `#[serde(default)]` on nullable foreign keys and dates
/// that an update must be able to clear.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

//! User identity model and DTOs.
//!
//! Users are owned by the authentication subsystem; this service only keeps
//! enough of the record to reference it from styles, resources and members.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taichi_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a user record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: String,
}

//! Series membership model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taichi_core::roster::RosterEntry;
use taichi_core::types::{Date, DbId, Timestamp};

use crate::models::deserialize_some;

/// A row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    /// The enrolled user.
    pub member_id: DbId,
    pub series_id: DbId,
    pub leader: bool,
    #[serde(rename = "primary")]
    pub is_primary: bool,
    pub active: bool,
    pub since: Date,
    pub last_meeting: Option<Date>,
    pub paid_through: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A membership joined with the member's name, used by rosters.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MemberDetail {
    pub id: DbId,
    pub member_id: DbId,
    pub member_name: String,
    pub series_id: DbId,
    pub leader: bool,
    #[serde(rename = "primary")]
    pub is_primary: bool,
    pub active: bool,
    pub since: Date,
    pub last_meeting: Option<Date>,
    pub paid_through: Option<Date>,
}

impl RosterEntry for MemberDetail {
    fn is_leader(&self) -> bool {
        self.leader
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// DTO for adding a user to a series. `series_id` comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMember {
    pub member_id: DbId,
    pub leader: Option<bool>,
    #[serde(rename = "primary")]
    pub is_primary: Option<bool>,
    /// Defaults to `true` if omitted.
    pub active: Option<bool>,
    /// Defaults to today if omitted.
    pub since: Option<Date>,
    pub last_meeting: Option<Date>,
    pub paid_through: Option<Date>,
}

/// DTO for updating a membership. All fields are optional; the nullable
/// dates are cleared by an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMember {
    pub leader: Option<bool>,
    #[serde(rename = "primary")]
    pub is_primary: Option<bool>,
    pub active: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub last_meeting: Option<Option<Date>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub paid_through: Option<Option<Date>>,
}

//! Member model.

use carpool_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `members` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Member {
    pub id: DbId,
    pub event_id: DbId,
    pub name: String,
    pub contact: Option<String>,
    /// Assigned car, if any. Always a car of the same event.
    pub car_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl Member {
    /// Whether the member has no assigned car.
    pub fn is_unassigned(&self) -> bool {
        self.car_id.is_none()
    }
}

/// DTO for adding a member to an event.
#[derive(Debug, Deserialize)]
pub struct CreateMember {
    pub name: String,
    pub contact: Option<String>,
    pub car_id: Option<DbId>,
}

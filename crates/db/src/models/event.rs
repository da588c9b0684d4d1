//! Event model.

use carpool_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
///
/// The slug is generated once at creation and never changes; it is the
/// event's public address.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub slug: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new event.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}

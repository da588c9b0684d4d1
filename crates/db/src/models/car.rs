//! Car model.

use carpool_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cars` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Car {
    pub id: DbId,
    pub event_id: DbId,
    pub driver_name: String,
    pub car_name: Option<String>,
    /// Declared seat count. Absent means unlimited; never enforced at
    /// assignment time.
    pub capacity: Option<i32>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl Car {
    /// Human-readable label: `{driver}'s car (name)`.
    pub fn label(&self) -> String {
        carpool_core::cars::car_label(&self.driver_name, self.car_name.as_deref())
    }
}

/// DTO for adding a car to an event.
#[derive(Debug, Deserialize)]
pub struct CreateCar {
    pub driver_name: String,
    pub car_name: Option<String>,
    pub capacity: Option<i32>,
    pub notes: Option<String>,
}

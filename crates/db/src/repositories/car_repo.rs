//! Repository for the `cars` table. All lookups are scoped to an event.

use sqlx::PgPool;

use carpool_core::types::DbId;

use crate::models::car::{Car, CreateCar};

/// Column list for cars queries.
const COLUMNS: &str = "id, event_id, driver_name, car_name, capacity, notes, created_at";

/// Provides CRUD operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Add a car to an event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        input: &CreateCar,
    ) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (event_id, driver_name, car_name, capacity, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(event_id)
            .bind(&input.driver_name)
            .bind(&input.car_name)
            .bind(input.capacity)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find a car by id within an event. A car belonging to a different
    /// event resolves to `None`.
    pub async fn find_in_event(
        pool: &PgPool,
        event_id: DbId,
        id: DbId,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1 AND event_id = $2");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// List an event's cars in creation order.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars WHERE event_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a car within an event. Its members are unassigned (not
    /// deleted) by the `ON DELETE SET NULL (car_id)` rule.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_in_event(
        pool: &PgPool,
        event_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1 AND event_id = $2")
            .bind(id)
            .bind(event_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

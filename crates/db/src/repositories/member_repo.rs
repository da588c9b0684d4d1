//! Repository for the `members` table. All lookups are scoped to an event.
//!
//! Two constraints surface here as distinguishable write-time failures:
//! `uq_members_event_name` (duplicate name within an event) and
//! `fk_members_car_same_event` (car from another event).

use sqlx::PgPool;

use carpool_core::types::DbId;

use crate::models::member::{CreateMember, Member};

/// Column list for members queries.
const COLUMNS: &str = "id, event_id, name, contact, car_id, created_at";

/// Provides CRUD operations for members.
pub struct MemberRepo;

impl MemberRepo {
    /// Add a member to an event, returning the created row.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        input: &CreateMember,
    ) -> Result<Member, sqlx::Error> {
        let query = format!(
            "INSERT INTO members (event_id, name, contact, car_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(event_id)
            .bind(&input.name)
            .bind(&input.contact)
            .bind(input.car_id)
            .fetch_one(pool)
            .await
    }

    /// Find a member by id within an event. A member belonging to a
    /// different event resolves to `None`.
    pub async fn find_in_event(
        pool: &PgPool,
        event_id: DbId,
        id: DbId,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM members WHERE id = $1 AND event_id = $2");
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// List an event's members in creation order.
    pub async fn list_by_event(pool: &PgPool, event_id: DbId) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM members WHERE event_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List an event's members with no assigned car, in creation order.
    pub async fn list_unassigned(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Member>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM members
             WHERE event_id = $1 AND car_id IS NULL
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// Reassign a member's car (or unassign with `None`), returning the
    /// updated row.
    pub async fn update_car(
        pool: &PgPool,
        event_id: DbId,
        id: DbId,
        car_id: Option<DbId>,
    ) -> Result<Option<Member>, sqlx::Error> {
        let query = format!(
            "UPDATE members SET car_id = $3
             WHERE id = $1 AND event_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Member>(&query)
            .bind(id)
            .bind(event_id)
            .bind(car_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a member within an event.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete_in_event(
        pool: &PgPool,
        event_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM members WHERE id = $1 AND event_id = $2")
            .bind(id)
            .bind(event_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

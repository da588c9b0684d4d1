//! Repository for the `events` table.

use sqlx::PgPool;

use carpool_core::slug::generate_slug;
use carpool_core::types::DbId;

use crate::is_unique_violation;
use crate::models::event::{CreateEvent, Event};

/// Column list for events queries.
const COLUMNS: &str = "id, name, date, location, slug, created_at";

/// How many slug regenerations to attempt before surfacing the conflict.
const MAX_SLUG_ATTEMPTS: u32 = 3;

/// Provides CRUD operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Create a new event with a freshly generated slug.
    ///
    /// The 16^8 suffix space makes slug collisions negligible, but a
    /// write-time `uq_events_slug` violation is still retried with a new
    /// suffix a bounded number of times before the error is returned.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let slug = generate_slug(&input.name);
            match Self::insert(pool, input, &slug).await {
                Ok(event) => return Ok(event),
                Err(err)
                    if attempt < MAX_SLUG_ATTEMPTS
                        && is_unique_violation(&err, "uq_events_slug") =>
                {
                    tracing::warn!(attempt, slug = %slug, "Slug collision, regenerating");
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn insert(pool: &PgPool, input: &CreateEvent, slug: &str) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (name, date, location, slug)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(input.date)
            .bind(&input.location)
            .bind(slug)
            .fetch_one(pool)
            .await
    }

    /// Resolve an event by its public slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE slug = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event. Cascades to its cars and members.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

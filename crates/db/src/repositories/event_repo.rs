//! Repository for the `events` table.

use sqlx::{PgConnection, PgPool};

use seatwise_core::item::ItemType;
use seatwise_core::types::DbId;

use crate::models::event::{CreateEvent, Event, EventWithAvailability, UpdateEvent};
use crate::models::status::EventStatus;

use super::availability::ItemSnapshot;
use super::{BookingRepo, SeatLockRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, venue, max_attendees, status_id, \
                       starts_at, ends_at, deleted_at, created_at, updated_at";

/// Column list for availability queries.
const AVAILABILITY_COLUMNS: &str = "id, title, description, venue, max_attendees, \
                                    status_id, starts_at, ends_at, created_at, updated_at";

/// Default page size for event listing.
const DEFAULT_LIMIT: i64 = 50;

/// Maximum page size for event listing.
const MAX_LIMIT: i64 = 100;

/// Provides CRUD and availability operations for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to 1 (Draft).
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events \
                 (title, description, venue, max_attendees, status_id, starts_at, ends_at) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 1), $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.venue)
            .bind(input.max_attendees)
            .bind(input.status_id)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List published events with their live availability figures.
    pub async fn list_bookable(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<EventWithAvailability>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        let offset = offset.unwrap_or(0);

        let reserved = Self::reserved_sql("events.id");
        let query = format!(
            "SELECT {AVAILABILITY_COLUMNS}, \
                    {reserved} AS reserved, \
                    GREATEST(max_attendees - {reserved}, 0) AS spots_left \
             FROM events \
             WHERE deleted_at IS NULL AND status_id = {published} \
             ORDER BY created_at DESC \
             LIMIT $1 OFFSET $2",
            published = EventStatus::Published.id(),
        );
        sqlx::query_as::<_, EventWithAvailability>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Fetch one published event with its availability figures.
    ///
    /// Returns `None` for missing, soft-deleted, or unpublished events.
    pub async fn find_bookable_with_availability(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EventWithAvailability>, sqlx::Error> {
        let reserved = Self::reserved_sql("events.id");
        let query = format!(
            "SELECT {AVAILABILITY_COLUMNS}, \
                    {reserved} AS reserved, \
                    GREATEST(max_attendees - {reserved}, 0) AS spots_left \
             FROM events \
             WHERE id = $1 AND deleted_at IS NULL AND status_id = {published}",
            published = EventStatus::Published.id(),
        );
        sqlx::query_as::<_, EventWithAvailability>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Lock an event row for the duration of an acquisition transaction.
    ///
    /// `FOR UPDATE` serializes concurrent acquisitions against the same
    /// event. Only `Published` events are bookable.
    pub async fn lock_for_booking(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<ItemSnapshot>, sqlx::Error> {
        #[derive(sqlx::FromRow)]
        struct GateRow {
            max_attendees: i32,
            status_id: i16,
        }

        let row: Option<GateRow> = sqlx::query_as(
            "SELECT max_attendees, status_id \
             FROM events WHERE id = $1 AND deleted_at IS NULL \
             FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;

        Ok(row.map(|r| ItemSnapshot {
            capacity: r.max_attendees,
            bookable: r.status_id == EventStatus::Published.id(),
        }))
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                venue = COALESCE($4, venue), \
                max_attendees = COALESCE($5, max_attendees), \
                status_id = COALESCE($6, status_id), \
                starts_at = COALESCE($7, starts_at), \
                ends_at = COALESCE($8, ends_at) \
             WHERE id = $1 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.venue)
            .bind(input.max_attendees)
            .bind(input.status_id)
            .bind(input.starts_at)
            .bind(input.ends_at)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an event by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE events SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The combined reservation tally expression for an event row.
    fn reserved_sql(event_id_expr: &str) -> String {
        format!(
            "({} + {})",
            BookingRepo::counted_bookings_sql("event_id", event_id_expr),
            SeatLockRepo::held_seats_sql(&ItemType::Event.id().to_string(), event_id_expr),
        )
    }
}

//! Repository for the `bookings` table.
//!
//! The booking workflow is a thin collaborator of the seat-lock mechanism:
//! it creates Pending rows, flips them through their lifecycle, and leaves
//! capacity enforcement to lock acquisition. Only Confirmed and Completed
//! rows count toward an item's occupancy.

use sqlx::PgPool;

use seatwise_core::item::ItemType;
use seatwise_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking};
use crate::models::status::BookingStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, class_id, event_id, user_id, status_id, \
                       confirmed_at, cancelled_at, created_at, updated_at";

/// Provides lifecycle operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// SQL expression: number of counted bookings for an item.
    ///
    /// `item_col` is `class_id` or `event_id`; `item_id_expr` is spliced
    /// verbatim (a bind placeholder or an outer-query column reference).
    pub fn counted_bookings_sql(item_col: &str, item_id_expr: &str) -> String {
        format!(
            "(SELECT COUNT(*) FROM bookings b \
              WHERE b.{item_col} = {item_id_expr} \
                AND b.status_id IN ({confirmed}, {completed}))",
            confirmed = BookingStatus::Confirmed.id(),
            completed = BookingStatus::Completed.id(),
        )
    }

    /// Count the confirmed and completed bookings for one item.
    pub async fn count_counted_for_item(
        executor: impl sqlx::PgExecutor<'_>,
        item_type: ItemType,
        item_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let item_col = match item_type {
            ItemType::Class => "class_id",
            ItemType::Event => "event_id",
        };
        let query = format!("SELECT {}", Self::counted_bookings_sql(item_col, "$1"));
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(item_id)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Insert a new pending booking, returning the created row.
    ///
    /// Does NOT consult capacity: enforcement belongs to lock acquisition,
    /// and a booking is expected to follow a successful lock.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (class_id, event_id, user_id, status_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(input.class_id)
            .bind(input.event_id)
            .bind(input.user_id)
            .bind(BookingStatus::Pending.id())
            .fetch_one(pool)
            .await
    }

    /// Find a booking by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Confirm a pending booking (payment captured or admin override).
    ///
    /// Returns `false` if the booking was not in `Pending`. A duplicate
    /// counted booking for the same (user, item) pair trips the partial
    /// unique index and surfaces as a database error.
    pub async fn confirm(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bookings SET status_id = $2, confirmed_at = NOW() \
             WHERE id = $1 AND status_id = $3",
        )
        .bind(id)
        .bind(BookingStatus::Confirmed.id())
        .bind(BookingStatus::Pending.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Cancel a booking from any non-terminal state.
    ///
    /// Returns `false` if it was already cancelled or completed.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bookings SET status_id = $2, cancelled_at = NOW() \
             WHERE id = $1 AND status_id IN ($3, $4)",
        )
        .bind(id)
        .bind(BookingStatus::Cancelled.id())
        .bind(BookingStatus::Pending.id())
        .bind(BookingStatus::Confirmed.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a confirmed booking completed once the item's scheduled time
    /// has passed (driven by an external process).
    ///
    /// Returns `false` if the booking was not in `Confirmed`.
    pub async fn complete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bookings SET status_id = $2 WHERE id = $1 AND status_id = $3",
        )
        .bind(id)
        .bind(BookingStatus::Completed.id())
        .bind(BookingStatus::Confirmed.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `seat_locks` table — the admission-control core.
//!
//! A lock holds capacity only while `status = Active` AND `expires_at` is
//! in the future. Expiry is a query-time predicate, not a state transition:
//! nothing has to flip a row for it to stop counting. Every counting query
//! goes through [`SeatLockRepo::held_seats_sql`] so the two conditions can
//! never drift apart.

use sqlx::PgPool;

use seatwise_core::item::ItemType;
use seatwise_core::types::{DbId, Timestamp};

use crate::models::seat_lock::{AcquireSeatLock, SeatLock};
use crate::models::status::LockStatus;

use super::availability;
use super::{ClassRepo, EventRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, item_type_id, item_id, user_id, quantity, status_id, \
                       expires_at, released_at, created_at, updated_at";

/// Result of an acquisition attempt. Domain failures are data, not errors:
/// the transaction is rolled back and nothing is written.
#[derive(Debug)]
pub enum AcquireOutcome {
    /// Capacity admitted the request; the lock row was committed.
    Acquired(SeatLock),
    /// The item is missing, soft-deleted, or fails its activation gate.
    ItemUnavailable,
    /// Admitting the requested quantity would exceed capacity.
    CapacityExceeded { spots_left: i64 },
}

/// Result of a release attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// An active lock was released and its seats freed.
    Released,
    /// The lock exists but was already released, expired, or consumed.
    /// Releasing it again is a no-op reported as success.
    AlreadyInactive,
    /// No lock with that id exists.
    NotFound,
}

/// Provides acquisition, release, and lifecycle operations for seat locks.
pub struct SeatLockRepo;

impl SeatLockRepo {
    /// SQL expression: seats held by live locks for an item.
    ///
    /// `item_type_expr` and `item_id_expr` are spliced verbatim (a bind
    /// placeholder or an outer-query column reference). This is the single
    /// definition of "a lock counts" — status Active AND unexpired.
    pub fn held_seats_sql(item_type_expr: &str, item_id_expr: &str) -> String {
        format!(
            "COALESCE((SELECT SUM(l.quantity) FROM seat_locks l \
              WHERE l.item_type_id = {item_type_expr} AND l.item_id = {item_id_expr} \
                AND l.status_id = {active} AND l.expires_at > NOW()), 0)",
            active = LockStatus::Active.id(),
        )
    }

    /// Sum the seats held by active, unexpired locks for one item.
    pub async fn sum_active_for_item(
        executor: impl sqlx::PgExecutor<'_>,
        item_type: ItemType,
        item_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT {}", Self::held_seats_sql("$1", "$2"));
        let (held,): (i64,) = sqlx::query_as(&query)
            .bind(item_type.id())
            .bind(item_id)
            .fetch_one(executor)
            .await?;
        Ok(held)
    }

    /// Attempt to acquire a seat lock, admitting it only if capacity allows.
    ///
    /// The whole check-then-insert sequence runs in one transaction with
    /// the item row locked `FOR UPDATE`, so two concurrent requests for the
    /// last seat cannot both observe it free and both insert. Early returns
    /// drop the transaction, rolling it back without a row written.
    pub async fn acquire(
        pool: &PgPool,
        input: &AcquireSeatLock,
    ) -> Result<AcquireOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let snapshot = match input.item_type {
            ItemType::Class => ClassRepo::lock_for_booking(&mut *tx, input.item_id).await?,
            ItemType::Event => EventRepo::lock_for_booking(&mut *tx, input.item_id).await?,
        };
        let Some(snapshot) = snapshot else {
            return Ok(AcquireOutcome::ItemUnavailable);
        };
        if !snapshot.bookable {
            return Ok(AcquireOutcome::ItemUnavailable);
        }

        let availability = availability::tally(
            &mut *tx,
            input.item_type,
            input.item_id,
            snapshot.capacity,
        )
        .await?;
        if !availability.admits(input.quantity) {
            return Ok(AcquireOutcome::CapacityExceeded {
                spots_left: availability.spots_left,
            });
        }

        let query = format!(
            "INSERT INTO seat_locks \
                 (item_type_id, item_id, user_id, quantity, status_id, expires_at) \
             VALUES ($1, $2, $3, $4, $5, NOW() + make_interval(mins => $6)) \
             RETURNING {COLUMNS}"
        );
        let lock = sqlx::query_as::<_, SeatLock>(&query)
            .bind(input.item_type.id())
            .bind(input.item_id)
            .bind(input.user_id)
            .bind(input.quantity)
            .bind(LockStatus::Active.id())
            .bind(input.ttl_minutes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(AcquireOutcome::Acquired(lock))
    }

    /// Find a seat lock by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SeatLock>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seat_locks WHERE id = $1");
        sqlx::query_as::<_, SeatLock>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Release a lock, freeing its seats early.
    ///
    /// Idempotent: a lock that already lapsed (released, expired, consumed,
    /// or active but past its expiry) yields `AlreadyInactive` without
    /// modification. Release never needs a capacity check.
    pub async fn release(pool: &PgPool, id: DbId) -> Result<ReleaseOutcome, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE seat_locks SET status_id = $2, released_at = NOW() \
             WHERE id = $1 AND status_id = $3 AND expires_at > NOW()",
        )
        .bind(id)
        .bind(LockStatus::Released.id())
        .bind(LockStatus::Active.id())
        .execute(pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(ReleaseOutcome::Released);
        }

        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM seat_locks WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(if exists {
            ReleaseOutcome::AlreadyInactive
        } else {
            ReleaseOutcome::NotFound
        })
    }

    /// Mark a lock consumed by a confirmed booking.
    ///
    /// Optional bookkeeping: a lock superseded by its booking would stop
    /// mattering at expiry anyway, since the booking now occupies the
    /// seats. Returns `false` if the lock was not active.
    pub async fn consume(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE seat_locks SET status_id = $2 WHERE id = $1 AND status_id = $3",
        )
        .bind(id)
        .bind(LockStatus::Consumed.id())
        .bind(LockStatus::Active.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Label lapsed Active rows as Expired. Returns the count flipped.
    ///
    /// Row hygiene only — counting queries already exclude these rows via
    /// the expiry predicate, whether or not this ever runs.
    pub async fn sweep_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE seat_locks SET status_id = $1 \
             WHERE status_id = $2 AND expires_at <= NOW()",
        )
        .bind(LockStatus::Expired.id())
        .bind(LockStatus::Active.id())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete terminal lock rows created before `cutoff`. Returns the count
    /// of deleted rows.
    pub async fn purge_terminal_older_than(
        pool: &PgPool,
        cutoff: Timestamp,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM seat_locks \
             WHERE status_id IN ($1, $2, $3) AND created_at < $4",
        )
        .bind(LockStatus::Released.id())
        .bind(LockStatus::Expired.id())
        .bind(LockStatus::Consumed.id())
        .bind(cutoff)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}

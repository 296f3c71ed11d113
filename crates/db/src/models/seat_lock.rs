//! Seat lock model and DTOs.
//!
//! A seat lock is a time-boxed hold against an item's capacity, created
//! during checkout and counted only while `status = Active` and
//! `expires_at` lies in the future.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seatwise_core::item::ItemType;
use seatwise_core::types::{DbId, Timestamp};

use super::status::StatusId;

/// A row from the `seat_locks` table.
///
/// `item_type_id`/`item_id` form a loose reference (no foreign key); the
/// item's existence is verified when the lock is acquired. `user_id` is
/// optional — anonymous holds are permitted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeatLock {
    pub id: DbId,
    pub item_type_id: i16,
    pub item_id: DbId,
    pub user_id: Option<DbId>,
    pub quantity: i32,
    pub status_id: StatusId,
    pub expires_at: Timestamp,
    pub released_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Body for `POST /locks`.
#[derive(Debug, Deserialize)]
pub struct AcquireLockRequest {
    pub item_type: ItemType,
    pub item_id: DbId,
    pub user_id: Option<DbId>,
    /// Seats to hold. Defaults to 1; must be at least 1.
    pub quantity: Option<i32>,
    /// Hold duration. Defaults to 15 minutes; clamped to [1, 1440].
    pub ttl_minutes: Option<i32>,
}

/// Validated acquisition input handed to `SeatLockRepo::acquire`.
#[derive(Debug, Clone, Copy)]
pub struct AcquireSeatLock {
    pub item_type: ItemType,
    pub item_id: DbId,
    pub user_id: Option<DbId>,
    pub quantity: i32,
    pub ttl_minutes: i32,
}

//! Booking model and DTOs.
//!
//! A booking references exactly one bookable item (class XOR event) and a
//! requesting user. Only `Confirmed` and `Completed` rows occupy capacity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use seatwise_core::types::{DbId, Timestamp};

use super::status::StatusId;

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub class_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub user_id: DbId,
    pub status_id: StatusId,
    pub confirmed_at: Option<Timestamp>,
    pub cancelled_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pending booking.
///
/// Exactly one of `class_id` / `event_id` must be set; the handler rejects
/// the rest and a CHECK constraint backs it up.
#[derive(Debug, Deserialize)]
pub struct CreateBooking {
    pub class_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub user_id: DbId,
}

/// Body for `POST /bookings/{id}/confirm`.
///
/// `lock_id` optionally names the seat lock this purchase was holding, so
/// it can be marked consumed instead of lingering until expiry.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmBooking {
    pub lock_id: Option<DbId>,
}

//! The availability calculator's database entry points.
//!
//! `reserved` for an item is its counted bookings plus the seats held by
//! live locks; `spots_left` is the clamped remainder. The arithmetic lives
//! in [`seatwise_core::availability::Availability`]; this module runs the
//! two counting queries and feeds it.
//!
//! The same counting helpers back both the public read path (the
//! `*_with_availability` queries reuse their SQL fragments) and the lock
//! acquisition transaction, so the status + expiry predicate cannot drift
//! between the two.

use sqlx::PgConnection;

use seatwise_core::availability::Availability;
use seatwise_core::item::ItemType;
use seatwise_core::types::DbId;

use super::{BookingRepo, SeatLockRepo};

/// Capacity and gate verdict for one item row, read by the acquisition
/// transaction under `FOR UPDATE`.
#[derive(Debug, Clone, Copy)]
pub struct ItemSnapshot {
    /// `max_students` / `max_attendees` of the locked row.
    pub capacity: i32,
    /// Whether the item currently passes its activation gate.
    pub bookable: bool,
}

/// Count an item's reservations on the given connection.
///
/// Runs inside the acquisition transaction (after the item row is locked)
/// so the tally it returns cannot be invalidated by a concurrent acquire
/// on the same item.
pub async fn tally(
    conn: &mut PgConnection,
    item_type: ItemType,
    item_id: DbId,
    capacity: i32,
) -> Result<Availability, sqlx::Error> {
    let confirmed = BookingRepo::count_counted_for_item(&mut *conn, item_type, item_id).await?;
    let held = SeatLockRepo::sum_active_for_item(&mut *conn, item_type, item_id).await?;
    Ok(Availability::compute(capacity, confirmed, held))
}

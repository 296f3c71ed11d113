//! Availability arithmetic.
//!
//! The single source of truth for how capacity, confirmed bookings, and
//! live seat locks combine into a "spots left" figure. Both the public read
//! path and the lock acquisition transaction go through [`Availability`],
//! so the two can never disagree on the arithmetic.

use serde::Serialize;

/// Snapshot of an item's seat accounting at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Availability {
    /// The item's fixed maximum capacity.
    pub capacity: i32,
    /// Seats occupied: counted bookings plus seats held by live locks.
    pub reserved: i64,
    /// `max(0, capacity - reserved)`. Clamped: an over-subscribed item
    /// reads zero, never negative.
    pub spots_left: i64,
}

impl Availability {
    /// Combine an item's capacity with its confirmed-booking count and the
    /// seats held by active, unexpired locks.
    pub fn compute(capacity: i32, confirmed: i64, held: i64) -> Self {
        let reserved = confirmed + held;
        Self {
            capacity,
            reserved,
            spots_left: (i64::from(capacity) - reserved).max(0),
        }
    }

    /// Whether `quantity` additional seats fit within the remaining capacity.
    pub fn admits(&self, quantity: i32) -> bool {
        i64::from(quantity) <= self.spots_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_item_has_full_capacity() {
        let a = Availability::compute(10, 0, 0);
        assert_eq!(a.reserved, 0);
        assert_eq!(a.spots_left, 10);
    }

    #[test]
    fn bookings_and_locks_both_reserve() {
        let a = Availability::compute(10, 4, 3);
        assert_eq!(a.reserved, 7);
        assert_eq!(a.spots_left, 3);
    }

    #[test]
    fn exactly_full_reads_zero() {
        let a = Availability::compute(5, 3, 2);
        assert_eq!(a.spots_left, 0);
    }

    #[test]
    fn oversubscribed_clamps_to_zero() {
        // Confirmed bookings alone exceed capacity; spots_left must not go
        // negative.
        let a = Availability::compute(5, 7, 1);
        assert_eq!(a.reserved, 8);
        assert_eq!(a.spots_left, 0);
    }

    #[test]
    fn zero_capacity_admits_nothing() {
        let a = Availability::compute(0, 0, 0);
        assert_eq!(a.spots_left, 0);
        assert!(!a.admits(1));
    }

    #[test]
    fn admits_exact_remainder() {
        let a = Availability::compute(4, 1, 1);
        assert!(a.admits(2));
        assert!(!a.admits(3));
    }
}

//! Bookable item references.
//!
//! Seat locks point at their item through a tagged (type, id) pair rather
//! than a foreign key, so a single lock table covers both classes and
//! events. [`ItemType`] is that tag; the activation-gate predicates decide
//! whether an item may accept new locks at all.

use serde::{Deserialize, Serialize};

use crate::types::Day;

/// The kind of bookable item a seat lock or booking refers to.
///
/// Discriminants match the 1-based seed order of the `item_types` lookup
/// table. Serializes as `"CLASS"` / `"EVENT"` on the wire.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    Class = 1,
    Event = 2,
}

impl ItemType {
    /// Return the database lookup-table ID.
    pub fn id(self) -> i16 {
        self as i16
    }

    /// Resolve a lookup-table ID back to the variant.
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::Class),
            2 => Some(Self::Event),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Class => f.write_str("CLASS"),
            Self::Event => f.write_str("EVENT"),
        }
    }
}

/// Whether a class is currently open for booking.
///
/// A class accepts new locks and bookings only while it is active and today
/// falls inside its optional offering window. A class past `ends_on` is
/// expired; one before `starts_on` has not opened yet.
pub fn class_is_open(
    is_active: bool,
    starts_on: Option<Day>,
    ends_on: Option<Day>,
    today: Day,
) -> bool {
    if !is_active {
        return false;
    }
    if let Some(start) = starts_on {
        if today < start {
            return false;
        }
    }
    if let Some(end) = ends_on {
        if today > end {
            return false;
        }
    }
    true
}

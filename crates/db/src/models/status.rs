//! Status helper enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Event lifecycle status. Only `Published` events accept bookings
    /// and seat locks.
    EventStatus {
        Draft = 1,
        Published = 2,
        Cancelled = 3,
        Completed = 4,
    }
}

define_status_enum! {
    /// Booking lifecycle status. `Confirmed` and `Completed` occupy
    /// capacity; the other states do not.
    BookingStatus {
        Pending = 1,
        Confirmed = 2,
        Cancelled = 3,
        Completed = 4,
    }
}

define_status_enum! {
    /// Seat-lock lifecycle status.
    ///
    /// Only `Active` rows with a future `expires_at` hold capacity. The
    /// `Expired` label is applied by the hygiene sweeper after the fact;
    /// capacity accounting never depends on it.
    LockStatus {
        Active = 1,
        Released = 2,
        Expired = 3,
        Consumed = 4,
    }
}

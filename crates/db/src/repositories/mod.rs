//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Methods that must run on the
//! caller's connection (inside the lock-acquisition transaction) take
//! `&mut PgConnection` or a `PgExecutor` instead.

pub mod availability;
pub mod booking_repo;
pub mod class_repo;
pub mod event_repo;
pub mod seat_lock_repo;
pub mod user_repo;

pub use booking_repo::BookingRepo;
pub use class_repo::ClassRepo;
pub use event_repo::EventRepo;
pub use seat_lock_repo::SeatLockRepo;
pub use user_repo::UserRepo;

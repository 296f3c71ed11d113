//! Pure domain logic for the Seatwise booking platform.
//!
//! No I/O lives here: activation-gate predicates, availability arithmetic,
//! seat-lock TTL handling, and the shared error type. The `seatwise-db` and
//! `seatwise-api` crates build on these primitives.

pub mod availability;
pub mod error;
pub mod item;
pub mod lock;
pub mod types;

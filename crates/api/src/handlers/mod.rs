//! HTTP request handlers, one module per resource.

pub mod bookings;
pub mod classes;
pub mod events;
pub mod locks;
pub mod users;

pub mod bookings;
pub mod classes;
pub mod events;
pub mod health;
pub mod locks;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /classes                      list (with availability), create
/// /classes/{id}                 get (with availability), update, delete
///
/// /events                       list (with availability), create
/// /events/{id}                  get (with availability), update, delete
///
/// /users                        create
/// /users/{id}                   get
///
/// /bookings                     create (pending)
/// /bookings/{id}                get
/// /bookings/{id}/confirm        confirm (POST)
/// /bookings/{id}/cancel         cancel (POST)
/// /bookings/{id}/complete       complete (POST)
///
/// /locks                        acquire (POST)
/// /locks/{id}                   get, release (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Bookable items and their availability figures.
        .nest("/classes", classes::router())
        .nest("/events", events::router())
        // User records (booking FK targets only).
        .nest("/users", users::router())
        // Booking workflow (thin collaborator of the lock mechanism).
        .nest("/bookings", bookings::router())
        // Seat locks: the capacity admission-control boundary.
        .nest("/locks", locks::router())
}

//! Route definitions for the `/bookings` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::bookings;
use crate::state::AppState;

/// Routes mounted at `/bookings`.
///
/// ```text
/// POST   /                -> create_booking
/// GET    /{id}            -> get_booking
/// POST   /{id}/confirm    -> confirm_booking
/// POST   /{id}/cancel     -> cancel_booking
/// POST   /{id}/complete   -> complete_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(bookings::create_booking))
        .route("/{id}", get(bookings::get_booking))
        .route("/{id}/confirm", post(bookings::confirm_booking))
        .route("/{id}/cancel", post(bookings::cancel_booking))
        .route("/{id}/complete", post(bookings::complete_booking))
}
